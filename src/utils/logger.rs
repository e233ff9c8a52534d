/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/11/25
******************************************************************************/
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber
///
/// The filter is taken from `RUST_LOG` when set and defaults to `info`.
/// Calling it more than once is allowed: later calls leave the already
/// installed subscriber in place.
pub fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
