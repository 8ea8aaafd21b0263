use std::fmt;

/// Result type for eloview-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// Input is not valid UTF-8
    Utf8(std::str::Utf8Error),

    /// Capture log record is malformed or unrecognized
    Parse(ParseError),
}

/// A malformed capture log record, located by its 1-based line number
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Key/value fields do not pair up
    FieldCount { found: usize },

    /// Value looked numeric or positional but could not be parsed
    InvalidValue { value: String },

    /// Event name is neither known nor on the ignore list
    UnknownEvent { name: String },

    /// A present field has the wrong type for the event
    Decode { event: String, message: String },
}

impl ParseErrorKind {
    pub fn at_line(self, line: usize) -> ParseError {
        ParseError { line, kind: self }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::FieldCount { found } => {
                write!(f, "expected odd number of elements, found {}", found)
            }
            ParseErrorKind::InvalidValue { value } => write!(f, "invalid value: {:?}", value),
            ParseErrorKind::UnknownEvent { name } => {
                write!(f, "unexpected event type ({}) for event", name)
            }
            ParseErrorKind::Decode { event, message } => {
                write!(f, "cannot decode {}: {}", event, message)
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error parsing event from line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Utf8(err) => write!(f, "Encoding error: {}", err),
            Error::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Utf8(err) => Some(err),
            Error::Parse(err) => Some(err),
        }
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

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Utf8(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}
