use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup logging to standard error.
///
/// Stdout is reserved for the report listings the CI log scrapes, so all
/// diagnostics go to stderr. `RUST_LOG` overrides the default level.
///
/// # Arguments
/// * `debug_mode` - If true, use debug level; otherwise use info level
pub fn setup_logging(debug_mode: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug_mode {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    tracing::debug!("Logging initialized: debug={}", debug_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_fails() {
        // First call wins the global subscriber; the second must report an
        // error instead of panicking.
        let first = setup_logging(false);
        let second = setup_logging(true);

        assert!(first.is_ok() || second.is_err());
    }
}
