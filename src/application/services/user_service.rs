/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

use crate::application::interfaces::user::UserService;
use crate::application::models::UsersResponse;
use crate::error::AppError;
use crate::transport::http_client::AbzHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Implementation of the user service
pub struct UserServiceImpl<T: AbzHttpClient> {
    client: Arc<T>,
}

impl<T: AbzHttpClient> UserServiceImpl<T> {
    /// Creates a new instance of the user service
    ///
    /// # Arguments
    /// * `client` - The HTTP client used to reach the API
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: AbzHttpClient + 'static> UserService for UserServiceImpl<T> {
    async fn get_all_users(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<UsersResponse, AppError> {
        info!("Fetching users page from {}", path);
        self.client.get::<UsersResponse>(path, params).await
    }
}
