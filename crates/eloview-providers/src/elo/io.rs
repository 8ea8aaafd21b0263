use crate::Result;
use crate::error::ParseError;
use eloview_types::EloEvent;
use std::iter::Enumerate;
use std::path::Path;
use std::str::Lines;

use super::parser::classify;
use super::tokenizer::{LogRecord, tokenize};

/// Iterates the non-blank lines of a capture log, yielding each tokenized
/// record with its 1-based line number.
pub struct RecordIter<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> RecordIter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
        }
    }
}

impl Iterator for RecordIter<'_> {
    type Item = std::result::Result<(usize, LogRecord), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }
            let line_num = index + 1;
            return Some(
                tokenize(line)
                    .map(|record| (line_num, record))
                    .map_err(|kind| kind.at_line(line_num)),
            );
        }
        None
    }
}

/// Parse a whole capture log into classified events, in log order.
pub fn parse_log(text: &str) -> Result<Vec<EloEvent>> {
    let mut events = Vec::new();
    let mut ignored = 0usize;

    for item in RecordIter::new(text) {
        let (line_num, record) = item?;
        match classify(&record).map_err(|kind| kind.at_line(line_num))? {
            Some(event) => events.push(event),
            None => ignored += 1,
        }
    }

    tracing::debug!(events = events.len(), ignored, "parsed capture log");
    Ok(events)
}

/// Parse a capture log held as raw bytes (must be UTF-8).
pub fn parse_log_bytes(bytes: &[u8]) -> Result<Vec<EloEvent>> {
    parse_log(std::str::from_utf8(bytes)?)
}

/// Parse a capture log file.
pub fn parse_log_file(path: &Path) -> Result<Vec<EloEvent>> {
    let text = std::fs::read_to_string(path)?;
    parse_log(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::error::ParseErrorKind;

    #[test]
    fn test_parse_log_skips_blank_and_ignored() {
        let text = "ID_HERO\ttime\t0.5\tname\tFaker\tnetwork_id\t101\n\
                    \n\
                    GAME_STALL\ttime\t1.0\n\
                    DIE\ttime\t10.5\tnetwork_id\t101\n";

        let events = parse_log(text).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind(), "network_id_mapping");
        assert_eq!(events[1].time, 10.5);
    }

    #[test]
    fn test_parse_log_reports_line() {
        let text = "DIE\ttime\t10.5\tnetwork_id\t101\n\nDIE\ttime\n";

        match parse_log(text) {
            Err(Error::Parse(err)) => {
                assert_eq!(err.line, 3);
                assert_eq!(err.kind, ParseErrorKind::FieldCount { found: 2 });
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_log_bytes_rejects_invalid_utf8() {
        assert!(matches!(
            parse_log_bytes(&[0x44, 0xff, 0x45]),
            Err(Error::Utf8(_))
        ));
    }
}
