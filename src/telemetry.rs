//! Telemetry helpers for applications embedding `chartable`.
//!
//! Tracing setup stays explicit and opt-in. Hosts either call one of the
//! helpers below or install their own `tracing` subscriber.

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Initializes a default `tracing` subscriber filtered at [`DEFAULT_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// application already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with(DEFAULT_DIRECTIVE)
}

/// Initializes a compact `fmt` subscriber.
///
/// `RUST_LOG` wins over `fallback_directive` when both are present, so a
/// host can ship `"chartable=debug"` and still let operators override it.
#[must_use]
pub fn init_tracing_with(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
