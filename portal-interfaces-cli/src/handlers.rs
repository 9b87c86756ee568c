pub mod admin_handlers;
pub mod auth_handlers;
pub mod event_handlers;
pub mod registration_handlers;

pub use admin_handlers::*;
pub use auth_handlers::*;
pub use event_handlers::*;
pub use registration_handlers::*;
