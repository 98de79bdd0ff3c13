//! Logging setup.
//!
//! Logs go to stderr so stdout only ever carries match results.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Initialize tracing. `RUST_LOG` wins over `default_filter` when set.
pub fn init(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(default_filter)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| Error::Config(format!("logging already initialized: {}", e)))
}

fn build_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| Error::Config(format!("invalid log filter '{}': {}", directives, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        assert!(build_filter("warn").is_ok());
        assert!(build_filter("namematch_core=trace").is_ok());
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        let err = build_filter("namematch_core=loud").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("namematch_core=loud"));
    }
}
