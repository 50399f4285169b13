use tracing_subscriber::EnvFilter;

use crate::error::AppResult;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `fallback_filter`.
pub fn install(fallback_filter: &str) -> AppResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()?;

    Ok(())
}
