//! Opt-in tracing setup for hosts embedding `easycharts`.
//!
//! Chart extraction reports its failures through `tracing` events rather
//! than panics, so a host that wants to see them needs a subscriber. Hosts
//! with their own telemetry wiring should ignore this module and install
//! their own subscriber/filters.

/// Installs a compact `fmt` subscriber honoring `RUST_LOG`, at `info` level
/// by default. Only active with the `telemetry` feature.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
