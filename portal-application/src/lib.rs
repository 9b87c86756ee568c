// Portal Application Layer

pub mod commands;
pub mod error;
pub mod filters;
pub mod forms;
pub mod queries;
pub mod screens;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::AppError;
pub use session::Session;
pub use state::AppState;
