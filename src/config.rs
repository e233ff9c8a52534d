/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/11/25
******************************************************************************/

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the abz.agency API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL all request paths are resolved against
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// The `.env` file is loaded first when present. `ABZ_REST_BASE_URL` and
    /// `ABZ_REST_TIMEOUT` override the defaults; when absent the client
    /// points at the production assignment API.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("ABZ_REST_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("ABZ_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration pointing at an explicit base URL
    ///
    /// Mostly useful in tests, where the base URL is a mock server.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The origin to resolve all request paths against
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }
}
