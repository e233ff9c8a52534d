/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

use crate::application::interfaces::token::TokenService;
use crate::application::models::TokenResponse;
use crate::error::AppError;
use crate::transport::http_client::AbzHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Implementation of the token service
pub struct TokenServiceImpl<T: AbzHttpClient> {
    client: Arc<T>,
}

impl<T: AbzHttpClient> TokenServiceImpl<T> {
    /// Creates a new instance of the token service
    ///
    /// # Arguments
    /// * `client` - The HTTP client used to reach the API
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: AbzHttpClient + 'static> TokenService for TokenServiceImpl<T> {
    async fn get_token(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<TokenResponse, AppError> {
        info!("Requesting registration token from {}", path);
        self.client.get::<TokenResponse>(path, params).await
    }
}
