//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// The pipeline is:
/// 1. An `EnvFilter` from `RUST_LOG`, else `config.trace_level`, else `info`
/// 2. A human-readable `fmt` layer on stderr (stdout carries the page)
/// 3. When `config.trace_file` is set, an OpenTelemetry layer exporting OTLP
///    JSON to that file through a rotating writer
///
/// Never fails: an unusable trace directory only disables the file export,
/// and calling this twice leaves the first subscriber in place.
///
/// # Example
///
/// ```rust
/// use rosterview::observability::init_tracing;
/// use rosterview::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let otel_layer = config.trace_path().and_then(|trace_file| {
        if let Some(parent) = trace_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("rosterview: trace export disabled, cannot create {}: {e}", parent.display());
                return None;
            }
        }

        let resource = Resource::new(vec![
            opentelemetry::KeyValue::new("service.name", "rosterview"),
            opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ]);
        let provider = tracer::create_tracer_provider(trace_file, resource);
        Some(OpenTelemetryLayer::new(provider.tracer(tracer::SCOPE_NAME)))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init();
}
