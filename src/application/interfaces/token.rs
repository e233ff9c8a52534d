use crate::application::models::TokenResponse;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the token service
#[async_trait]
pub trait TokenService: Send + Sync {
    /// Obtains a registration token
    ///
    /// The token is returned to the caller as is; the client keeps no token
    /// state between requests.
    ///
    /// # Arguments
    /// * `path` - Endpoint path of the token resource
    /// * `params` - Query parameters, may be empty
    ///
    /// # Returns
    /// * The token envelope
    async fn get_token(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<TokenResponse, AppError>;
}
