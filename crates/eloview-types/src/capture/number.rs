use serde::Deserializer;
use serde::de::{self, Unexpected, Visitor};
use std::fmt;

/// Decode an integer field that the capture tool may have written as a float.
///
/// Fractional values are truncated toward zero. Non-numeric values are still
/// rejected.
pub(crate) fn truncating_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TruncatingI64)
}

struct TruncatingI64;

impl Visitor<'_> for TruncatingI64 {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        if v.is_finite() && v.abs() < i64::MAX as f64 {
            Ok(v.trunc() as i64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}
