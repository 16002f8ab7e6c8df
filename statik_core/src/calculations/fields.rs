//! Flat field export for result records.
//!
//! Explanation and persistence layers read results as a flat key → value
//! mapping. Each record builds its map by hand in `to_field_map()`, listing
//! exactly its declared fields; nothing is discovered by reflection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A flat, key-ordered mapping of field name to value
pub type FieldMap = BTreeMap<&'static str, FieldValue>;

/// A single exported field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Computed or input quantity
    Number(f64),
    /// Index or count
    Integer(usize),
    /// Ordered list of quantities (e.g. span lengths)
    Numbers(Vec<f64>),
    /// Type tag or label
    Text(String),
    /// Field that does not apply to this variant (serialized as `null`)
    Empty,
}

impl FieldValue {
    /// Numeric value, if this field holds a single number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            FieldValue::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// False for a number (or any number in a list) that is NaN or infinite
    pub fn is_finite(&self) -> bool {
        match self {
            FieldValue::Number(v) => v.is_finite(),
            FieldValue::Numbers(values) => values.iter().all(|v| v.is_finite()),
            FieldValue::Integer(_) | FieldValue::Text(_) | FieldValue::Empty => true,
        }
    }

    /// Text value, if this field holds a tag or label
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Reject a result record with any non-finite field.
///
/// JSON has no representation for NaN or infinity, so such a record could be
/// exported but never read back.
pub(crate) fn ensure_finite(calculation: &str, fields: &FieldMap) -> CalcResult<()> {
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(CalcError::calculation_failed(
            calculation,
            format!("{} is not a finite number ({:?})", name, value),
        )),
        None => Ok(()),
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(FieldValue::Empty, FieldValue::Number)
    }
}

impl From<usize> for FieldValue {
    fn from(v: usize) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<&[f64]> for FieldValue {
    fn from(v: &[f64]) -> Self {
        FieldValue::Numbers(v.to_vec())
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(FieldValue::from(2.5).as_f64(), Some(2.5));
        assert_eq!(FieldValue::from(1usize).as_f64(), Some(1.0));
        assert_eq!(FieldValue::from(None::<f64>), FieldValue::Empty);
        assert_eq!(FieldValue::from("simple").as_str(), Some("simple"));
    }

    #[test]
    fn test_ensure_finite() {
        let mut map = FieldMap::new();
        map.insert("length_m", FieldValue::from(6.0));
        map.insert("limit_l200_mm", FieldValue::Empty);
        assert!(ensure_finite("simple beam", &map).is_ok());

        map.insert("spans_m", FieldValue::from(&[4.0, f64::INFINITY][..]));
        let err = ensure_finite("continuous beam", &map).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert!(err.to_string().contains("spans_m"));
    }

    #[test]
    fn test_json_shape() {
        let mut map = FieldMap::new();
        map.insert("a", FieldValue::from(1.5));
        map.insert("b", FieldValue::Empty);
        map.insert("c", FieldValue::from(&[4.0, 5.0][..]));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"a":1.5,"b":null,"c":[4.0,5.0]}"#);
    }
}
