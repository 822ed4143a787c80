use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtisError {
    #[error("Upstream request failed: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status}")]
    UpstreamUnavailable { status: u16 },

    #[error("Invalid {field} value: {value}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Pattern compilation failed: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Invalid configuration for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AtisError>;
