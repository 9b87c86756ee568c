pub mod admin_registration_commands;
pub mod auth_commands;
pub mod registration_commands;
