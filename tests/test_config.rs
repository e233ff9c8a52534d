use abz_client::config::{Config, RestApiConfig};
use abz_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use abz_client::utils::config::get_env_or_default;

#[test]
fn test_with_base_url_overrides_origin() {
    let config = Config::with_base_url("http://127.0.0.1:8080");
    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_config_literal_construction() {
    let config = Config {
        rest_api: RestApiConfig {
            base_url: "https://example.com/api/v1".to_string(),
            timeout: 5,
        },
    };

    assert_eq!(config.rest_api.base_url, "https://example.com/api/v1");
    assert_eq!(config.rest_api.timeout, 5);
}

#[test]
fn test_default_points_at_production_origin() {
    // ABZ_REST_BASE_URL is not set in the test environment
    let config = Config::default();
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_get_env_or_default_falls_back() {
    let value: u64 = get_env_or_default("ABZ_CLIENT_UNSET_TEST_VAR", 42);
    assert_eq!(value, 42);
}

#[test]
fn test_config_clones_independently() {
    let config = Config::with_base_url("https://example.com/api/v1");
    let cloned = config.clone();
    assert_eq!(cloned.rest_api.base_url, config.rest_api.base_url);
}
