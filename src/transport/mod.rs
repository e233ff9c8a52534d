/// Module containing the HTTP client used to reach the REST API
pub mod http_client;

pub use http_client::*;
