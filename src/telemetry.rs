use tracing_subscriber::fmt::layer;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// JSON logs on stdout so aggregators like logstash can ingest them directly.
/// `RUST_LOG` overrides the default `debug` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    Registry::default()
        .with(filter)
        .with(layer().json())
        .init();
}
