pub mod client;
pub mod config;
pub mod models;
pub mod render;
pub mod session;
pub mod triage;

use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr, leaving stdout for results. Call once, at startup.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "triage_client=debug,triage=debug,info" } else { config::default_log_filter() };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
