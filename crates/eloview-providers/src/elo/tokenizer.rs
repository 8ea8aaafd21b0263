use crate::error::ParseErrorKind;
use eloview_types::Position;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

// Value grammar, tried in this order. A quoted numeral therefore stays a
// string, and the float pattern also accepts "" and "-" (which then fail to
// parse and reject the record).
static INT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").unwrap());
static FLOAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*(\.[0-9]+)?$").unwrap());
static POSITION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^X:(.+) Y:(.+) Z:(.+)$").unwrap());

/// Typed value of one record field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Position(Position),
    Text(String),
}

impl FieldValue {
    /// Classify a raw field value.
    pub fn parse(raw: &str) -> Result<Self, ParseErrorKind> {
        let invalid = || ParseErrorKind::InvalidValue {
            value: raw.to_string(),
        };

        if INT_REGEX.is_match(raw) {
            return raw.parse().map(FieldValue::Int).map_err(|_| invalid());
        }

        if FLOAT_REGEX.is_match(raw) {
            return raw.parse().map(FieldValue::Float).map_err(|_| invalid());
        }

        if raw.eq_ignore_ascii_case("true") {
            return Ok(FieldValue::Bool(true));
        }
        if raw.eq_ignore_ascii_case("false") {
            return Ok(FieldValue::Bool(false));
        }

        if let Some(caps) = POSITION_REGEX.captures(raw) {
            let coord = |i: usize| caps[i].parse::<f64>().map_err(|_| invalid());
            return Ok(FieldValue::Position(Position::new(
                coord(1)?,
                coord(2)?,
                coord(3)?,
            )));
        }

        Ok(FieldValue::Text(remove_quotes(raw).to_string()))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Int(v) => Value::from(*v),
            FieldValue::Float(v) => Value::from(*v),
            FieldValue::Bool(v) => Value::Bool(*v),
            FieldValue::Position(p) => serde_json::json!({"x": p.x, "y": p.y, "z": p.z}),
            FieldValue::Text(s) => Value::String(s.clone()),
        }
    }
}

/// Writes the value back in log grammar. Text is always quoted and floats
/// always carry a decimal point, so the output re-parses to the same variant
/// (for finite, non-exponent floats and text without quotes or tabs).
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{:?}", v),
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Position(p) => write!(f, "X:{:?} Y:{:?} Z:{:?}", p.x, p.y, p.z),
            FieldValue::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// One tokenized log line: the event name plus its typed fields
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub event: String,
    pub fields: BTreeMap<String, FieldValue>,
}

impl LogRecord {
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Local timestamp of the record; absent means 0.
    ///
    /// A present `time` that is not numeric rejects the record.
    pub fn time(&self) -> Result<f64, ParseErrorKind> {
        match self.get("time") {
            None => Ok(0.0),
            Some(value) => value.as_f64().ok_or_else(|| ParseErrorKind::Decode {
                event: self.event.clone(),
                message: format!("time must be a number, found {}", value),
            }),
        }
    }

    /// Fields as a JSON object, for decoding into a typed payload.
    pub fn to_json_map(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }
}

/// Split one tab-delimited line into an event name and key/value fields.
pub fn tokenize(line: &str) -> Result<LogRecord, ParseErrorKind> {
    let parts: Vec<&str> = line.trim().split('\t').collect();

    if parts.len() % 2 != 1 {
        return Err(ParseErrorKind::FieldCount { found: parts.len() });
    }

    let mut fields = BTreeMap::new();
    for pair in parts[1..].chunks(2) {
        let key = remove_quotes(pair[0]).to_string();
        let value = FieldValue::parse(pair[1])?;
        fields.insert(key, value);
    }

    Ok(LogRecord {
        event: parts[0].to_string(),
        fields,
    })
}

fn remove_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_classification() {
        let cases = [
            ("1.2", FieldValue::Float(1.2)),
            ("12", FieldValue::Int(12)),
            ("\"12\"", FieldValue::Text("12".to_string())),
            ("-1.004", FieldValue::Float(-1.004)),
            ("1 2 3", FieldValue::Text("1 2 3".to_string())),
            ("-12", FieldValue::Int(-12)),
            ("one two", FieldValue::Text("one two".to_string())),
            ("true", FieldValue::Bool(true)),
            ("False", FieldValue::Bool(false)),
            ("False Prophet", FieldValue::Text("False Prophet".to_string())),
            (
                "\"False Prophet\"",
                FieldValue::Text("False Prophet".to_string()),
            ),
            (
                "X:1 Y:2.1 Z:-3.4",
                FieldValue::Position(Position::new(1.0, 2.1, -3.4)),
            ),
        ];

        for (i, (input, expected)) in cases.iter().enumerate() {
            let actual = FieldValue::parse(input).unwrap();
            assert_eq!(&actual, expected, "case {}: {:?}", i + 1, input);
        }
    }

    #[test]
    fn test_invalid_values() {
        for input in ["", "-", "99999999999999999999", "X:a Y:1 Z:2"] {
            assert!(
                matches!(
                    FieldValue::parse(input),
                    Err(ParseErrorKind::InvalidValue { .. })
                ),
                "expected invalid value for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_display_reparses() {
        let values = [
            FieldValue::Int(-42),
            FieldValue::Int(0),
            FieldValue::Float(1.0),
            FieldValue::Float(-0.25),
            FieldValue::Float(1234.5678),
            FieldValue::Bool(true),
            FieldValue::Bool(false),
            FieldValue::Position(Position::new(3900.0, -5200.5, 0.125)),
            FieldValue::Text("12".to_string()),
            FieldValue::Text("true".to_string()),
            FieldValue::Text("SRU_Baron12.1.1".to_string()),
        ];

        for value in values {
            let text = value.to_string();
            assert_eq!(FieldValue::parse(&text).unwrap(), value, "via {:?}", text);
        }
    }

    #[test]
    fn test_tokenize() {
        let record =
            tokenize("DAMAGE\ttime\t12.5\tnetwork_id\t1073741857\t\"target\"\t\"Ahri\"\n").unwrap();

        assert_eq!(record.event, "DAMAGE");
        assert_eq!(record.time(), Ok(12.5));
        assert_eq!(record.get("network_id"), Some(&FieldValue::Int(1073741857)));
        assert_eq!(
            record.get("target"),
            Some(&FieldValue::Text("Ahri".to_string()))
        );
    }

    #[test]
    fn test_tokenize_field_count() {
        assert_eq!(
            tokenize("DAMAGE\ttime\t12.5\tnetwork_id"),
            Err(ParseErrorKind::FieldCount { found: 4 })
        );
        assert!(tokenize("GAME_END").unwrap().fields.is_empty());
    }
}
