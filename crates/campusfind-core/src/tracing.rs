use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured JSON logging to stdout for one service.
/// `RUST_LOG` overrides the `info` default.
///
/// Safe to call multiple times; only the first call installs a subscriber,
/// so tests may call it freely.
pub fn init_tracing(service: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(service, "tracing initialized");
    }
}
