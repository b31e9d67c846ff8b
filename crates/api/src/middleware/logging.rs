//! Logging initialization and configuration.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Output format of the logging subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Resolve the configured format token. Unrecognized tokens fall back
    /// to pretty output rather than failing startup.
    fn resolve(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            other => {
                if !other.is_empty() {
                    eprintln!("Unknown log format '{}', using pretty output", other);
                }
                LogFormat::Pretty
            }
        }
    }
}

/// Base filter directives derived from the configured level.
///
/// sqlx logs every executed statement at info; the dashboard fan-out would
/// emit several per request, so statement logging is capped at warn unless
/// RUST_LOG asks for it explicitly.
fn default_directives(level: &str) -> String {
    format!("{},sqlx::query=warn", level)
}

/// Initializes the logging subsystem based on configuration.
///
/// RUST_LOG, when set, overrides the configured level and directives.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match LogFormat::resolve(&config.format) {
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_target(true);
            subscriber.with(json_layer).init();
        }
        LogFormat::Pretty => {
            let pretty_layer = fmt::layer()
                .pretty()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true);
            subscriber.with(pretty_layer).init();
        }
    }
}
