/// Position listing response models
pub mod position;
/// Registration token response models
pub mod token;
/// User listing response models
pub mod user;

pub use position::*;
pub use token::*;
pub use user::*;
