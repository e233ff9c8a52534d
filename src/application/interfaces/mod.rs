/// Position service interface
pub mod position;
/// Token service interface
pub mod token;
/// User service interface
pub mod user;
