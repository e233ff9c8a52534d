/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

//! HTTP transport for the abz.agency assignment API
//!
//! This module holds the request gateway every typed call goes through:
//! URL construction against the configured base origin, the network call
//! itself, status validation and JSON decoding. Services never touch
//! `reqwest` directly, they go through the [`AbzHttpClient`] trait.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Interface for the HTTP client used to reach the abz.agency REST API
///
/// The trait is the seam between the service layer and the wire: service
/// implementations are generic over it, so tests can substitute their own
/// transport.
#[async_trait]
pub trait AbzHttpClient: Send + Sync {
    /// Performs a request against the API and decodes the JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method (only GET is exercised by this crate)
    /// * `path` - Endpoint path, relative to the configured base URL
    /// * `params` - Query parameters, applied in order with set semantics
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response body
    /// * `Err(AppError)` - Status, transport or decode failure
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, AppError>;

    /// Makes a GET request
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, params).await
    }
}

/// HTTP client implementation backed by `reqwest`
///
/// Holds the shared configuration and a pooled `reqwest::Client`. Each call
/// performs exactly one network request: there is no retry and no
/// cross-request state.
pub struct AbzHttpClientImpl {
    config: Arc<Config>,
    http_client: Client,
}

impl AbzHttpClientImpl {
    /// Creates a new client from the given configuration
    ///
    /// # Arguments
    /// * `config` - Configuration with the base URL and request timeout
    ///
    /// # Returns
    /// * `Ok(AbzHttpClientImpl)` - Client ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Builds the absolute request URL for a path and query parameters
    ///
    /// The path gets a leading slash prepended when it is missing one; a path
    /// that already starts with `/` is used as is. Query pairs are applied in
    /// order with set semantics: a later pair replaces the value of an
    /// earlier pair with the same key, and the key keeps its original
    /// position in the query string.
    fn build_url(&self, path: &str, params: &[(String, String)]) -> Result<Url, AppError> {
        let base_url = &self.config.rest_api.base_url;
        let absolute = if path.starts_with('/') {
            format!("{base_url}{path}")
        } else {
            format!("{base_url}/{path}")
        };

        let mut url = Url::parse(&absolute)?;
        for (key, value) in params {
            set_query_param(&mut url, key, value);
        }

        Ok(url)
    }
}

#[async_trait]
impl AbzHttpClient for AbzHttpClientImpl {
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, AppError> {
        let url = self.build_url(path, params)?;
        debug!("{} {}", method, url);

        let response = self.http_client.request(method, url).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            // Failure bodies are never read
            error!("Request failed with status {}", status);
            return Err(AppError::Unexpected(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Sets a single query parameter on the URL
///
/// An existing pair with the same key has its value replaced in place;
/// otherwise the pair is appended at the end.
fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    match pairs.iter_mut().find(|(k, _)| k == key) {
        Some(pair) => pair.1 = value.to_string(),
        None => pairs.push((key.to_string(), value.to_string())),
    }

    let mut serializer = url.query_pairs_mut();
    serializer.clear();
    for (k, v) in &pairs {
        serializer.append_pair(k, v);
    }
}
