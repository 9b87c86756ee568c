pub mod admin_registration_queries;
pub mod event_queries;
pub mod registration_queries;
