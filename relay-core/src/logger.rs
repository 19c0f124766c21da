//! Tracing initialization: human-readable console output plus an
//! append-only log file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Installs the global tracing subscriber and emits an initial event.
///
/// The console layer stays compact; the file layer (created at
/// `log_file_path`, parent directories included) additionally records span
/// close events and thread ids, without ANSI codes. The level comes from
/// `RUST_LOG` (default `info`); load `.env` (e.g. `dotenvy::dotenv()`)
/// before calling or `RUST_LOG` from the file is not picked up.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    if let Some(dir) = Path::new(log_file_path).parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_thread_ids(true);

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    tracing::info!(log_file = %log_file_path, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_creates_log_dir_and_file() {
        let dir = std::env::temp_dir().join("relay-core-logger-test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("bot.log");
        let path_str = path.to_str().unwrap();

        init_tracing(path_str).unwrap();
        assert!(path.exists());

        // The global subscriber can only be installed once per process.
        assert!(init_tracing(path_str).is_err());
    }
}
