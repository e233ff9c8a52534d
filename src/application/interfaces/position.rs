use crate::application::models::PositionsResponse;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the position service
#[async_trait]
pub trait PositionService: Send + Sync {
    /// Gets the positions a user can be registered with
    ///
    /// # Arguments
    /// * `path` - Endpoint path of the positions listing
    /// * `params` - Query parameters, may be empty
    ///
    /// # Returns
    /// * The positions envelope
    async fn get_all_positions(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<PositionsResponse, AppError>;
}
