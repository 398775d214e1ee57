//! Metric series submitted to the intake endpoint.

use jsonmodel::{DecodeError, FieldValue, ObjectReader, Parsed, WireEnum, WireModel};
use serde_json::{Map, Value};

use super::{MetricIntakeType, MetricMetadata};

/// A metric to submit: a named series of points with optional intake
/// metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    /// The name of the timeseries.
    pub metric: String,
    /// Points relating to the metric.
    pub points: Vec<MetricPoint>,
    /// If the type is rate or count, define the corresponding interval
    /// in seconds.
    pub interval: Option<i64>,
    pub metadata: Option<MetricMetadata>,
    /// Resources relating to the metric.
    pub resources: Option<Vec<MetricResource>>,
    /// The source type name.
    pub source_type_name: Option<String>,
    /// A list of tags associated with the metric.
    pub tags: Option<Vec<String>>,
    /// The type of the metric.
    pub type_: Option<MetricIntakeType>,
    /// The unit of point values.
    pub unit: Option<String>,
    /// Unknown wire keys, preserved verbatim.
    pub additional_properties: Map<String, Value>,
}

impl MetricSeries {
    /// A series with the required fields set and everything else absent.
    pub fn new(metric: String, points: Vec<MetricPoint>) -> Self {
        Self {
            metric,
            points,
            interval: None,
            metadata: None,
            resources: None,
            source_type_name: None,
            tags: None,
            type_: None,
            unit: None,
            additional_properties: Map::new(),
        }
    }
}

impl WireModel for MetricSeries {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let metric: String = r.required("metric")?;
        let points = r.required_model_list::<MetricPoint>("points")?;
        let interval = r.optional::<i64>("interval");
        let metadata = r.optional_model::<MetricMetadata>("metadata");
        let resources = r.optional_model_list::<MetricResource>("resources");
        let source_type_name = r.optional::<String>("source_type_name");
        let tags = r.optional::<Vec<String>>("tags");
        let type_ = r.optional_enum::<MetricIntakeType>("type");
        let unit = r.optional::<String>("unit");
        if matches!(&type_, Some(t) if !t.is_valid()) {
            return Ok(Parsed::raw(value));
        }
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(MetricSeries {
            metric,
            points,
            interval,
            metadata,
            resources,
            source_type_name,
            tags,
            type_,
            unit,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("metric".into(), self.metric.to_field());
        obj.insert(
            "points".into(),
            Value::Array(self.points.iter().map(WireModel::to_value).collect()),
        );
        if let Some(v) = self.interval {
            obj.insert("interval".into(), v.to_field());
        }
        if let Some(metadata) = &self.metadata {
            obj.insert("metadata".into(), metadata.to_value());
        }
        if let Some(resources) = &self.resources {
            obj.insert(
                "resources".into(),
                Value::Array(resources.iter().map(WireModel::to_value).collect()),
            );
        }
        if let Some(v) = &self.source_type_name {
            obj.insert("source_type_name".into(), v.to_field());
        }
        if let Some(v) = &self.tags {
            obj.insert("tags".into(), v.to_field());
        }
        if let Some(t) = &self.type_ {
            obj.insert("type".into(), t.to_wire().to_field());
        }
        if let Some(v) = &self.unit {
            obj.insert("unit".into(), v.to_field());
        }
        for (k, v) in &self.additional_properties {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    fn has_spillover(&self) -> bool {
        !self.additional_properties.is_empty()
            || self.points.iter().any(|p| p.has_spillover())
            || self.metadata.as_ref().is_some_and(|m| m.has_spillover())
            || self
                .resources
                .as_ref()
                .is_some_and(|rs| rs.iter().any(|r| r.has_spillover()))
    }
}

/// A single data point of a series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricPoint {
    /// POSIX timestamp of the point, in seconds.
    pub timestamp: Option<i64>,
    /// The numeric value of the point.
    pub value: Option<f64>,
    pub additional_properties: Map<String, Value>,
}

impl WireModel for MetricPoint {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let timestamp = r.optional::<i64>("timestamp");
        let point = r.optional::<f64>("value");
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(MetricPoint {
            timestamp,
            value: point,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(v) = self.timestamp {
            obj.insert("timestamp".into(), v.to_field());
        }
        if let Some(v) = self.value {
            obj.insert("value".into(), v.to_field());
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

/// A resource a metric relates to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricResource {
    /// The name of the resource.
    pub name: Option<String>,
    /// The type of the resource.
    pub type_: Option<String>,
    pub additional_properties: Map<String, Value>,
}

impl WireModel for MetricResource {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let name = r.optional::<String>("name");
        let type_ = r.optional::<String>("type");
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(MetricResource {
            name,
            type_,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(v) = &self.name {
            obj.insert("name".into(), v.to_field());
        }
        if let Some(v) = &self.type_ {
            obj.insert("type".into(), v.to_field());
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
