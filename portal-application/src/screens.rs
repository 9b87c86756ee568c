// View-state slices for the two registration surfaces
pub mod admin_panel;
pub mod registration_screen;

pub use admin_panel::*;
pub use registration_screen::*;
