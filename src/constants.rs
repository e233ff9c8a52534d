/// Base origin all API requests are resolved against unless overridden
pub const DEFAULT_BASE_URL: &str = "https://frontend-test-assignment-api.abz.agency/api/v1";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the API
pub const USER_AGENT: &str = "abz-client/0.1.2";
/// Endpoint path for the paginated users listing
pub const USERS_PATH: &str = "/users";
/// Endpoint path for the positions listing
pub const POSITIONS_PATH: &str = "/positions";
/// Endpoint path for obtaining a registration token
pub const TOKEN_PATH: &str = "/token";
