//! Optional log output for hosts that embed `specview`.
//!
//! Zoom, history and scale events are emitted as `tracing` events under the
//! `specview` target. A viewer that already configures `tracing` gets them
//! for free; small tools can install a console subscriber from here when the
//! `telemetry` feature is on.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "specview=info";

/// Installs a compact console subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_LOG_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_LOG_FILTER)
}

/// Like [`init_default_tracing`] with caller-chosen fallback directives,
/// e.g. `"specview=trace"` while debugging zoom history.
#[must_use]
pub fn init_tracing_with_fallback(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn without_the_feature_no_subscriber_is_installed() {
        assert!(!super::init_default_tracing());
        assert!(!super::init_tracing_with_fallback("specview=trace"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_install_reports_failure() {
        let _ = super::init_tracing_with_fallback("specview=trace");
        assert!(!super::init_default_tracing());
    }
}
