use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the flag-derived level unless `quiet` is set.
pub fn init_logging(verbose: bool, quiet: bool) -> Result<()> {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "flight_delay_sim=debug,info"
    } else {
        "info"
    };

    let filter = if quiet {
        EnvFilter::new(default_filter)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
