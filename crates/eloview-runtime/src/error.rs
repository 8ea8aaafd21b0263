use std::fmt;

/// Result type for eloview-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Capture log or match detail could not be read
    Provider(eloview_providers::Error),

    /// Conversion rejected the match
    Engine(eloview_engine::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// JSON encoding or decoding failed
    Json(serde_json::Error),

    /// Configuration error
    Config(String),

    /// Job request is missing required fields
    InvalidRequest(String),

    /// File store collaborator failed
    Storage(String),

    /// Message queue collaborator failed
    Queue(String),

    /// Job lease ran out; nothing after `phase` was done
    LeaseExpired { phase: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Provider(err) => write!(f, "Provider error: {}", err),
            Error::Engine(err) => write!(f, "Engine error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            Error::Storage(msg) => write!(f, "Storage error: {}", msg),
            Error::Queue(msg) => write!(f, "Queue error: {}", msg),
            Error::LeaseExpired { phase } => write!(f, "Lease expired after {}", phase),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Provider(err) => Some(err),
            Error::Engine(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Config(_)
            | Error::InvalidRequest(_)
            | Error::Storage(_)
            | Error::Queue(_)
            | Error::LeaseExpired { .. } => None,
        }
    }
}

impl From<eloview_providers::Error> for Error {
    fn from(err: eloview_providers::Error) -> Self {
        Error::Provider(err)
    }
}

impl From<eloview_engine::Error> for Error {
    fn from(err: eloview_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
