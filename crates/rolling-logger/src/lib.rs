//! Rolling Logger
//!
//! Keeps the most recent log records in a fixed-size circular buffer and
//! mirrors them to the platform sink: the browser console on `wasm32`,
//! stderr formatting elsewhere. `log` records are bridged into the same
//! pipeline.

mod buffer;
#[cfg(target_arch = "wasm32")]
mod console;
mod layer;

use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use buffer::{LogRecord, RollingBuffer};
pub use layer::RollingLayer;

static BUFFER: OnceLock<RollingBuffer> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    /// Another global subscriber is already installed
    AlreadyInitialized,
    /// A helper was called before [`init_logger`]
    NotInitialized,
    Install(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
            LoggerError::Install(msg) => write!(f, "Failed to install logger: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Install the global subscriber. Returns the buffer handle that receives
/// every record at `level` or above.
pub fn init_logger(capacity: usize, level: Level) -> Result<RollingBuffer, LoggerError> {
    if BUFFER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let buffer = RollingBuffer::new(capacity);

    let registry = tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(RollingLayer::new(buffer.clone()));

    #[cfg(target_arch = "wasm32")]
    let registry = registry.with(console::ConsoleLayer);

    #[cfg(not(target_arch = "wasm32"))]
    let registry = registry.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    registry
        .try_init()
        .map_err(|e| LoggerError::Install(e.to_string()))?;

    BUFFER
        .set(buffer.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    Ok(buffer)
}

/// Log an error line through the `log` facade
pub fn error(msg: &str) -> Result<(), LoggerError> {
    BUFFER.get().ok_or(LoggerError::NotInitialized)?;
    log::error!("{}", msg);
    Ok(())
}
