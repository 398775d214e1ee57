//! The generic error envelope returned on non-2xx responses.

use jsonmodel::{DecodeError, FieldValue, ObjectReader, Parsed, WireModel};
use serde_json::{Map, Value};

/// An API error response body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorResponse {
    /// The error messages.
    pub errors: Vec<String>,
    pub additional_properties: Map<String, Value>,
}

impl ApiErrorResponse {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            errors,
            additional_properties: Map::new(),
        }
    }
}

impl WireModel for ApiErrorResponse {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let errors: Vec<String> = r.required("errors")?;
        Ok(Parsed::Typed(ApiErrorResponse {
            errors,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("errors".into(), self.errors.to_field());
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
    fn errors_list_is_required() {
        let err = ApiErrorResponse::from_value(&json!({})).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("errors"));
    }

    #[test]
    fn extra_keys_survive_a_roundtrip() {
        let payload = json!({"errors": ["Forbidden"], "code": 403});
        let parsed = ApiErrorResponse::from_value(&payload).unwrap();
        let response = parsed.typed().unwrap();
        assert_eq!(response.errors, ["Forbidden"]);
        assert_eq!(response.additional_properties["code"], json!(403));
        assert_eq!(response.to_value(), payload);
    }
}
