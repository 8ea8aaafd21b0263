pub mod io;
pub mod parser;
pub mod tokenizer;

pub use self::io::{RecordIter, parse_log, parse_log_bytes, parse_log_file};
pub use self::parser::{IGNORED_EVENTS, classify};
pub use self::tokenizer::{FieldValue, LogRecord, tokenize};
