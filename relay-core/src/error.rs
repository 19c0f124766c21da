use thiserror::Error;

/// Failures surfaced through the relay's own seams. Inference and startup
/// IO failures travel as `anyhow` errors instead.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, RelayError>;
