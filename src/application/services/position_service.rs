/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

use crate::application::interfaces::position::PositionService;
use crate::application::models::PositionsResponse;
use crate::error::AppError;
use crate::transport::http_client::AbzHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Implementation of the position service
pub struct PositionServiceImpl<T: AbzHttpClient> {
    client: Arc<T>,
}

impl<T: AbzHttpClient> PositionServiceImpl<T> {
    /// Creates a new instance of the position service
    ///
    /// # Arguments
    /// * `client` - The HTTP client used to reach the API
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: AbzHttpClient + 'static> PositionService for PositionServiceImpl<T> {
    async fn get_all_positions(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<PositionsResponse, AppError> {
        info!("Fetching positions from {}", path);
        self.client.get::<PositionsResponse>(path, params).await
    }
}
