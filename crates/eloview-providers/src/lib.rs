// Error types
pub mod error;

// Capture log adapter (tokenizer + classifier)
pub mod elo;

// Match API adapter
pub mod match_api;

// Log reading
pub use elo::{
    FieldValue, LogRecord, RecordIter, classify, parse_log, parse_log_bytes, parse_log_file, tokenize,
};

// Match detail reading
pub use match_api::{parse_match_detail, read_match_detail_file};

// Error types
pub use error::{Error, ParseError, ParseErrorKind, Result};
