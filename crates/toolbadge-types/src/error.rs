use std::fmt;

/// Result type for toolbadge-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding invocation records
#[derive(Debug)]
pub enum Error {
    /// JSON parsing failed
    Json(serde_json::Error),

    /// Input was valid JSON but not a record or list of records
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Parse(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
