use thiserror::Error;

/// Failures the converter can surface, split along the exit-code
/// boundary the CLI promises: usage problems exit with 3, everything
/// else with 1.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("invalid URI: {0}")]
    InvalidUri(String),

    #[error("URI kind mismatch: expected {expected}, got {found} in '{uri}'")]
    KindMismatch {
        expected: String,
        found: String,
        uri: String,
    },

    #[error("unrecognized local URI format: {0}")]
    LocalFormat(String),

    /// API-reported error; carries the raw response body so it can be
    /// echoed verbatim for diagnosis.
    #[error("Spotify API error: {0}")]
    Api(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Usage(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
