/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/11/25
******************************************************************************/

//! # abz-client
//!
//! Typed client for the abz.agency frontend test assignment REST API.
//!
//! The API exposes three read-only resources: registered users (paginated),
//! the positions a user can be registered with, and a registration token.
//! This crate covers exactly that surface:
//! - Build an absolute URL from the configured base origin, an endpoint path
//!   and a list of query parameters
//! - Issue the GET request
//! - Reject on any non-2xx status
//! - Decode the JSON envelope into a typed response
//!
//! There is no retry, pagination traversal, caching or token storage: every
//! call is a single independent request/response cycle.
//!
//! # Example
//! ```ignore
//! use abz_client::prelude::*;
//!
//! let config = Arc::new(Config::new());
//! let transport = Arc::new(AbzHttpClientImpl::new(config)?);
//! let users = UserServiceImpl::new(transport);
//!
//! let params = vec![
//!     ("page".to_string(), "1".to_string()),
//!     ("count".to_string(), "6".to_string()),
//! ];
//! let page = users.get_all_users(USERS_PATH, &params).await?;
//! info!("{} users on page 1 of {}", page.count, page.total_pages);
//! ```

/// Application layer: service interfaces, implementations and response models
pub mod application;
/// Configuration for the API client
pub mod config;
/// Global constants used across the crate
pub mod constants;
/// Error types for the library
pub mod error;
/// Commonly used types and traits re-exported in one place
pub mod prelude;
/// HTTP transport layer
pub mod transport;
/// Utility helpers for environment variables and logging
pub mod utils;

/// Library version taken from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the library
pub fn version() -> &'static str {
    VERSION
}
