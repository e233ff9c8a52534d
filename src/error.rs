/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/11/25
******************************************************************************/

use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Main error type for the library
///
/// Nothing is handled locally anywhere in the crate: every failure is
/// propagated to the caller as one of these variants.
#[derive(Debug)]
pub enum AppError {
    /// The server answered with a non-success HTTP status
    Unexpected(StatusCode),
    /// Network-level failure reported by the underlying transport
    Network(reqwest::Error),
    /// The response body was not valid JSON for the expected shape
    Json(serde_json::Error),
    /// The request URL could not be constructed
    InvalidUrl(url::ParseError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidUrl(e) => write!(f, "invalid url: {e}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::InvalidUrl(e) => Some(e),
            AppError::Unexpected(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<url::ParseError> for AppError {
    fn from(error: url::ParseError) -> Self {
        AppError::InvalidUrl(error)
    }
}
