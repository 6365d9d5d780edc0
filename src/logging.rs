use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{Result, TempoError};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise events from `component` at INFO
/// and above are shown. Output goes to stderr so stdout stays free for
/// encoded documents.
pub fn init_logger(component: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", component, Level::INFO)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TempoError::Internal(format!("Failed to initialize logger: {}", e)))
}
