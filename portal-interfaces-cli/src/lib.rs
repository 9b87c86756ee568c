pub mod error;
pub mod handlers;
pub mod prompt;
pub mod render;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::*;
pub use handlers::*;
pub use prompt::*;
pub use render::*;
pub use routes::*;
