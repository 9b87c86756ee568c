// HTTP adapters for the portal backend
pub mod api_client;
pub mod auth_gateway;
pub mod event_gateway;
pub mod registration_gateway;

pub use api_client::*;
pub use auth_gateway::*;
pub use event_gateway::*;
pub use registration_gateway::*;
