// Domain entities
pub mod config;
pub mod event;
pub mod registration;
pub mod session;
pub mod user;

pub use config::*;
pub use event::*;
pub use registration::*;
pub use session::*;
pub use user::*;
