pub mod config;
pub mod gateways;
pub mod repositories;
pub mod utils;

pub use config::*;
pub use gateways::*;
pub use repositories::*;
pub use utils::*;
