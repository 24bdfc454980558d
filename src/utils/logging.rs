use tracing::Subscriber;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer};

/// Builds the subscriber used by the binary.
///
/// Log lines are written to stderr through the `IndicatifLayer`, which suspends progress
/// bars while a line is printed. `level` only filters log lines, progress spans always
/// reach the indicatif layer.
pub fn logging_subscriber(level: &str) -> impl Subscriber + Send + Sync {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_filter(filter)
        )
        .with(indicatif_layer)
}
