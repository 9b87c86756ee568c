// Domain value objects
pub mod event_status;
pub mod identifiers;
pub mod registration_status;
pub mod user_role;

pub use event_status::*;
pub use identifiers::*;
pub use registration_status::*;
pub use user_role::*;
