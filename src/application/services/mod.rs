/// Module containing the position service implementation
pub mod position_service;
/// Module containing the token service implementation
pub mod token_service;
/// Module containing the user service implementation
pub mod user_service;

pub use position_service::*;
pub use token_service::*;
pub use user_service::*;
