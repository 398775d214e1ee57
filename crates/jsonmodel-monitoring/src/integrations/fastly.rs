//! Fastly service objects of the CDN integration.

use jsonmodel::{DecodeError, FieldValue, ObjectReader, Parsed, WireEnum, WireModel};
use serde_json::{Map, Value};

/// The JSON:API type of a Fastly service, with a single valid value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FastlyServiceType {
    FastlyServices,
    Unrecognized(String),
}

impl WireEnum for FastlyServiceType {
    type Wire = String;

    fn from_wire(value: String) -> Self {
        match value.as_str() {
            "fastly-services" => Self::FastlyServices,
            _ => Self::Unrecognized(value),
        }
    }

    fn to_wire(&self) -> String {
        match self {
            Self::FastlyServices => "fastly-services".to_string(),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    fn is_valid(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

/// A Fastly service registered with the integration.
#[derive(Debug, Clone, PartialEq)]
pub struct FastlyService {
    /// The ID of the Fastly service.
    pub id: String,
    pub type_: FastlyServiceType,
    pub attributes: Option<FastlyServiceAttributes>,
    pub additional_properties: Map<String, Value>,
}

impl FastlyService {
    /// A service with the given ID and the default type.
    pub fn new(id: String) -> Self {
        Self {
            id,
            type_: FastlyServiceType::FastlyServices,
            attributes: None,
            additional_properties: Map::new(),
        }
    }
}

impl WireModel for FastlyService {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let id: String = r.required("id")?;
        let type_ = r.required_enum::<FastlyServiceType>("type")?;
        let attributes = r.optional_model::<FastlyServiceAttributes>("attributes");
        if !type_.is_valid() {
            return Ok(Parsed::raw(value));
        }
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(FastlyService {
            id,
            type_,
            attributes,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(attributes) = &self.attributes {
            obj.insert("attributes".into(), attributes.to_value());
        }
        obj.insert("id".into(), self.id.to_field());
        obj.insert("type".into(), self.type_.to_wire().to_field());
        for (k, v) in &self.additional_properties {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    fn has_spillover(&self) -> bool {
        !self.additional_properties.is_empty()
            || self.attributes.as_ref().is_some_and(|a| a.has_spillover())
    }
}

/// Attributes of a Fastly service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FastlyServiceAttributes {
    /// Tags to apply to the service's metrics.
    pub tags: Option<Vec<String>>,
    pub additional_properties: Map<String, Value>,
}

impl WireModel for FastlyServiceAttributes {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let tags = r.optional::<Vec<String>>("tags");
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(FastlyServiceAttributes {
            tags,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(v) = &self.tags {
            obj.insert("tags".into(), v.to_field());
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_service_decodes_without_attributes() {
        let parsed =
            FastlyService::from_value(&json!({"id": "svc1", "type": "fastly-services"})).unwrap();
        let service = parsed.typed().unwrap();
        assert_eq!(service.id, "svc1");
        assert_eq!(service.type_, FastlyServiceType::FastlyServices);
        assert_eq!(service.attributes, None);
    }

    #[test]
    fn unrecognized_type_demotes_the_record() {
        let payload = json!({"id": "svc1", "type": "wrong-type"});
        let parsed = FastlyService::from_value(&payload).unwrap();
        assert_eq!(parsed, Parsed::Raw(payload.clone()));
        // the payload it could not vouch for is replayed untouched
        assert_eq!(parsed.to_value(), payload);
    }

    #[test]
    fn missing_id_is_a_hard_error() {
        let err = FastlyService::from_value(&json!({"type": "fastly-services"})).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("id"));
    }
}
