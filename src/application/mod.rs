/// Service interfaces and traits
pub mod interfaces;
/// Response models for the API
pub mod models;
/// Service implementations
pub mod services;
