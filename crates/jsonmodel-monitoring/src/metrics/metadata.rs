//! Metadata attached to a submitted metric.

use jsonmodel::{DecodeError, FieldValue, ObjectReader, Parsed, WireModel};
use serde_json::{Map, Value};

/// Metadata for a metric series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricMetadata {
    pub origin: Option<MetricOrigin>,
    /// Unknown wire keys, preserved verbatim.
    pub additional_properties: Map<String, Value>,
}

impl WireModel for MetricMetadata {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let origin = r.optional_model::<MetricOrigin>("origin");
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(MetricMetadata {
            origin,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(origin) = &self.origin {
            obj.insert("origin".into(), origin.to_value());
        }
        for (k, v) in &self.additional_properties {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    fn has_spillover(&self) -> bool {
        !self.additional_properties.is_empty()
            || self.origin.as_ref().is_some_and(|o| o.has_spillover())
    }
}

/// Where a metric originated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricOrigin {
    pub metric_type: Option<i64>,
    pub product: Option<i64>,
    pub service: Option<i64>,
    pub additional_properties: Map<String, Value>,
}

impl WireModel for MetricOrigin {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let metric_type = r.optional::<i64>("metric_type");
        let product = r.optional::<i64>("product");
        let service = r.optional::<i64>("service");
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(MetricOrigin {
            metric_type,
            product,
            service,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(v) = self.metric_type {
            obj.insert("metric_type".into(), v.to_field());
        }
        if let Some(v) = self.product {
            obj.insert("product".into(), v.to_field());
        }
        if let Some(v) = self.service {
            obj.insert("service".into(), v.to_field());
        }
        for (k, v) in &self.additional_properties {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    fn has_spillover(&self) -> bool {
        !self.additional_properties.is_empty()
    }
}
