use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::GeoError;

/// Output format of the fmt subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    /// "json" or "pretty"; anything else is the compact line format
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

/// Build a dispatcher for `settings` without installing it
///
/// `RUST_LOG` wins over `settings.level` when set.
pub fn dispatch(settings: &LoggingSettings) -> Result<Dispatch, GeoError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| GeoError::Logging(e.to_string()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let dispatch = match LogFormat::from_name(&settings.format) {
        LogFormat::Json => Dispatch::new(subscriber.json().finish()),
        LogFormat::Pretty => Dispatch::new(subscriber.pretty().finish()),
        LogFormat::Compact => Dispatch::new(subscriber.compact().finish()),
    };

    Ok(dispatch)
}

/// Install a global `tracing` subscriber
pub fn init(settings: &LoggingSettings) -> Result<(), GeoError> {
    tracing::dispatcher::set_global_default(dispatch(settings)?)
        .map_err(|e| GeoError::Logging(e.to_string()))
}
