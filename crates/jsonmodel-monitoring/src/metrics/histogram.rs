//! Histogram bucket boundaries reported by distribution queries.

use jsonmodel::{DecodeError, FieldValue, ObjectReader, Parsed, WireModel};
use serde_json::{Map, Value};

/// One bucket of a histogram: all three boundaries are required.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBucket {
    /// The bucket interval in seconds.
    pub interval: i64,
    /// The upper bound of the bucket.
    pub max: f64,
    /// The lower bound of the bucket.
    pub min: f64,
    pub additional_properties: Map<String, Value>,
}

impl HistogramBucket {
    pub fn new(interval: i64, max: f64, min: f64) -> Self {
        Self {
            interval,
            max,
            min,
            additional_properties: Map::new(),
        }
    }
}

impl WireModel for HistogramBucket {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let interval: i64 = r.required("interval")?;
        let max: f64 = r.required("max")?;
        let min: f64 = r.required("min")?;
        Ok(Parsed::Typed(HistogramBucket {
            interval,
            max,
            min,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("interval".into(), self.interval.to_field());
        obj.insert("max".into(), self.max.to_field());
        obj.insert("min".into(), self.min.to_field());
        for (k, v) in &self.additional_properties {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    fn has_spillover(&self) -> bool {
        !self.additional_properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_required_fields_decode() {
        let parsed =
            HistogramBucket::from_value(&json!({"interval": 10, "max": 100, "min": 0})).unwrap();
        let bucket = parsed.typed().unwrap();
        assert_eq!(bucket.interval, 10);
        assert_eq!(bucket.max, 100.0);
        assert_eq!(bucket.min, 0.0);
        assert!(bucket.additional_properties.is_empty());
    }

    #[test]
    fn missing_required_field_is_a_hard_error() {
        let err = HistogramBucket::from_value(&json!({"interval": 10, "max": 100})).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("min"));
    }

    #[test]
    fn mistyped_required_field_is_a_hard_error() {
        let err =
            HistogramBucket::from_value(&json!({"interval": "x", "max": 1.0, "min": 0.0}))
                .unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidField {
                field: "interval",
                expected: "an integer",
            }
        );
    }
}
