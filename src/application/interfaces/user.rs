use crate::application::models::UsersResponse;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the user service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets a page of registered users
    ///
    /// The path and query parameters are handed to the request gateway
    /// unchanged; pagination is driven entirely by the caller through the
    /// `page` and `count` parameters.
    ///
    /// # Arguments
    /// * `path` - Endpoint path of the users listing
    /// * `params` - Query parameters, may be empty
    ///
    /// # Returns
    /// * The users envelope with pagination metadata
    async fn get_all_users(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<UsersResponse, AppError>;
}
