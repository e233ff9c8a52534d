/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

//! # abz-client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library. Importing the prelude gives access to
//! everything needed to talk to the assignment API.
//!
//! ## Usage
//!
//! ```rust
//! use abz_client::prelude::*;
//!
//! let config = Arc::new(Config::new());
//! let transport = Arc::new(AbzHttpClientImpl::new(config).expect("Failed to create HTTP client"));
//! let _users = UserServiceImpl::new(transport.clone());
//! let _positions = PositionServiceImpl::new(transport.clone());
//! let _token = TokenServiceImpl::new(transport);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the abz.agency API client
pub use crate::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait
pub use crate::transport::http_client::AbzHttpClient;

/// HTTP client implementation
pub use crate::transport::http_client::AbzHttpClientImpl;

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Position service trait for the positions listing
pub use crate::application::interfaces::position::PositionService;

/// Token service trait for obtaining registration tokens
pub use crate::application::interfaces::token::TokenService;

/// User service trait for the paginated users listing
pub use crate::application::interfaces::user::UserService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Position service implementation
pub use crate::application::services::position_service::PositionServiceImpl;

/// Token service implementation
pub use crate::application::services::token_service::TokenServiceImpl;

/// User service implementation
pub use crate::application::services::user_service::UserServiceImpl;

// ============================================================================
// RESPONSE MODELS
// ============================================================================

/// Response envelopes and their payload records
pub use crate::application::models::{
    PageLinks, Position, PositionsResponse, TokenResponse, UsersResponse,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Environment variable helper
pub use crate::utils::config::get_env_or_default;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types for custom transport implementations
pub use reqwest::Method;
