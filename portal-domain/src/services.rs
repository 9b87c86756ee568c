pub mod headcount;
pub mod status_resolution;

pub use headcount::*;
pub use status_resolution::*;
