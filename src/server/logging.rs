use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use super::config::LogFormat;

/// Library targets that are chatty at debug level.
const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "rustls", "handlebars"];

fn build_filter(log_level: &str) -> EnvFilter {
    // RUST_LOG wins when set.
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = String::from(log_level);
    for module in NOISY_MODULES {
        directives.push(',');
        directives.push_str(module);
        directives.push_str("=warn");
    }
    EnvFilter::new(directives)
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(log_level: &str, log_format: LogFormat) {
    let subscriber = tracing_subscriber::registry().with(build_filter(log_level));

    match log_format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true);
            let _ = subscriber.with(fmt_layer).try_init();
        }
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_target(true);
            let _ = subscriber.with(fmt_layer).try_init();
        }
    }

    tracing::debug!(log_level, ?log_format, "logging initialized");
}
