//! [`ObjectReader`] — strict field extraction for plain-model decoding.

use serde_json::{Map, Value};

use crate::{DecodeError, FieldValue, Nullable, Parsed, WireEnum, WireModel};

/// Walks a decoded JSON object the way the plain-model decode contract
/// requires: required fields fail hard, optional fields flag the whole
/// record for demotion on structural mismatch, and every consumed key is
/// tracked so the leftover keys can be collected as additional properties.
///
/// After the optional sweep the caller must check [`ObjectReader::demoted`]
/// before constructing the typed record; once the flag is set, values
/// returned by the accessors are placeholders to be discarded.
pub struct ObjectReader<'a> {
    obj: &'a Map<String, Value>,
    seen: Vec<&'static str>,
    demoted: bool,
}

impl<'a> ObjectReader<'a> {
    pub fn new(obj: &'a Map<String, Value>) -> Self {
        Self {
            obj,
            seen: Vec::new(),
            demoted: false,
        }
    }

    /// Borrow the payload's object map, or reject a non-object payload.
    pub fn from_value(value: &'a Value) -> Result<Self, DecodeError> {
        match value.as_object() {
            Some(obj) => Ok(Self::new(obj)),
            None => Err(DecodeError::ExpectedObject),
        }
    }

    /// Look up a key, treating JSON null the same as absence. Nullable
    /// fields bypass this and inspect the entry directly.
    fn take(&mut self, key: &'static str) -> Option<&'a Value> {
        self.seen.push(key);
        match self.obj.get(key) {
            None | Some(Value::Null) => None,
            Some(v) => Some(v),
        }
    }

    /// Whether any optional read has flagged the record for demotion.
    pub fn demoted(&self) -> bool {
        self.demoted
    }

    fn demote<T>(&mut self) -> Option<T> {
        self.demoted = true;
        None
    }

    // ---------------------------------------------------------- required

    /// A required scalar or list field: absent is a hard missing-field
    /// error, a structural mismatch is a hard invalid-field error.
    pub fn required<T: FieldValue>(&mut self, key: &'static str) -> Result<T, DecodeError> {
        match self.take(key) {
            None => Err(DecodeError::MissingField(key)),
            Some(v) => T::from_field(v).ok_or(DecodeError::InvalidField {
                field: key,
                expected: T::KIND,
            }),
        }
    }

    /// A required enum field. Unrecognized members decode fine here; the
    /// caller checks validity and demotes.
    pub fn required_enum<E: WireEnum>(&mut self, key: &'static str) -> Result<E, DecodeError> {
        let wire: E::Wire = self.required(key)?;
        Ok(E::from_wire(wire))
    }

    /// A required nested model. Absence is a hard error; a nested value
    /// that is not even an object propagates its hard error; a nested
    /// model that decoded to its raw form flags demotion and yields
    /// `None`.
    pub fn required_model<T: WireModel>(
        &mut self,
        key: &'static str,
    ) -> Result<Option<T>, DecodeError> {
        match self.take(key) {
            None => Err(DecodeError::MissingField(key)),
            Some(v) => match T::from_value(v)? {
                Parsed::Typed(m) => Ok(Some(m)),
                Parsed::Raw(_) => Ok(self.demote()),
            },
        }
    }

    /// A required list of nested models. A demoted element flags the whole
    /// record and the returned list is a placeholder.
    pub fn required_model_list<T: WireModel>(
        &mut self,
        key: &'static str,
    ) -> Result<Vec<T>, DecodeError> {
        match self.take(key) {
            None => Err(DecodeError::MissingField(key)),
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match T::from_value(item)? {
                        Parsed::Typed(m) => out.push(m),
                        Parsed::Raw(_) => {
                            self.demoted = true;
                            return Ok(Vec::new());
                        }
                    }
                }
                Ok(out)
            }
            Some(_) => Err(DecodeError::InvalidField {
                field: key,
                expected: "an array",
            }),
        }
    }

    // ---------------------------------------------------------- optional

    /// An optional scalar or list field; a structural mismatch flags
    /// demotion.
    pub fn optional<T: FieldValue>(&mut self, key: &'static str) -> Option<T> {
        match self.take(key) {
            None => None,
            Some(v) => match T::from_field(v) {
                Some(t) => Some(t),
                None => self.demote(),
            },
        }
    }

    /// An optional enum field; the wrong wire type flags demotion, an
    /// unrecognized member does not (the caller checks validity).
    pub fn optional_enum<E: WireEnum>(&mut self, key: &'static str) -> Option<E> {
        match self.take(key) {
            None => None,
            Some(v) => match E::Wire::from_field(v) {
                Some(wire) => Some(E::from_wire(wire)),
                None => self.demote(),
            },
        }
    }

    /// An optional nested model; any nested hard error or raw fallback
    /// flags demotion.
    pub fn optional_model<T: WireModel>(&mut self, key: &'static str) -> Option<T> {
        match self.take(key) {
            None => None,
            Some(v) => match T::from_value(v) {
                Ok(Parsed::Typed(m)) => Some(m),
                Ok(Parsed::Raw(_)) | Err(_) => self.demote(),
            },
        }
    }

    /// An optional list of nested models; a non-array value or any bad
    /// element flags demotion.
    pub fn optional_model_list<T: WireModel>(&mut self, key: &'static str) -> Option<Vec<T>> {
        match self.take(key) {
            None => None,
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match T::from_value(item) {
                        Ok(Parsed::Typed(m)) => out.push(m),
                        Ok(Parsed::Raw(_)) | Err(_) => return self.demote(),
                    }
                }
                Some(out)
            }
            Some(_) => self.demote(),
        }
    }

    // ---------------------------------------------------------- nullable

    /// An optional nullable scalar: absent, explicit null, or a value.
    pub fn optional_nullable<T: FieldValue>(&mut self, key: &'static str) -> Option<Nullable<T>> {
        self.seen.push(key);
        match self.obj.get(key) {
            None => None,
            Some(Value::Null) => Some(Nullable::Null),
            Some(v) => match T::from_field(v) {
                Some(t) => Some(Nullable::Value(t)),
                None => self.demote(),
            },
        }
    }

    /// An optional nullable nested model.
    pub fn optional_nullable_model<T: WireModel>(
        &mut self,
        key: &'static str,
    ) -> Option<Nullable<T>> {
        self.seen.push(key);
        match self.obj.get(key) {
            None => None,
            Some(Value::Null) => Some(Nullable::Null),
            Some(v) => match T::from_value(v) {
                Ok(Parsed::Typed(m)) => Some(Nullable::Value(m)),
                Ok(Parsed::Raw(_)) | Err(_) => self.demote(),
            },
        }
    }

    // ------------------------------------------------------------ extras

    /// Keys not consumed by any accessor, verbatim and in wire order.
    pub fn additional_properties(&self) -> Map<String, Value> {
        let mut extra = Map::new();
        for (k, v) in self.obj {
            if !self.seen.iter().any(|s| *s == k.as_str()) {
                extra.insert(k.clone(), v.clone());
            }
        }
        extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_scalar_paths() {
        let payload = json!({"metric": "cpu", "count": 3});
        let mut r = ObjectReader::from_value(&payload).unwrap();
        let metric: String = r.required("metric").unwrap();
        assert_eq!(metric, "cpu");
        assert_eq!(
            r.required::<String>("count"),
            Err(DecodeError::InvalidField {
                field: "count",
                expected: "a string",
            })
        );
        assert_eq!(
            r.required::<i64>("absent"),
            Err(DecodeError::MissingField("absent"))
        );
    }

    #[test]
    fn required_null_counts_as_missing() {
        let payload = json!({"metric": null});
        let mut r = ObjectReader::from_value(&payload).unwrap();
        assert_eq!(
            r.required::<String>("metric"),
            Err(DecodeError::MissingField("metric"))
        );
    }

    #[test]
    fn optional_mismatch_flags_demotion() {
        let payload = json!({"interval": "ten"});
        let mut r = ObjectReader::from_value(&payload).unwrap();
        assert_eq!(r.optional::<i64>("interval"), None);
        assert!(r.demoted());
    }

    #[test]
    fn optional_null_is_absent() {
        let payload = json!({"interval": null});
        let mut r = ObjectReader::from_value(&payload).unwrap();
        assert_eq!(r.optional::<i64>("interval"), None);
        assert!(!r.demoted());
    }

    #[test]
    fn nullable_distinguishes_null_from_absent() {
        let payload = json!({"sli": null, "target": 99.9});
        let mut r = ObjectReader::from_value(&payload).unwrap();
        assert_eq!(r.optional_nullable::<f64>("sli"), Some(Nullable::Null));
        assert_eq!(
            r.optional_nullable::<f64>("target"),
            Some(Nullable::Value(99.9))
        );
        assert_eq!(r.optional_nullable::<f64>("absent"), None);
        assert!(!r.demoted());
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(matches!(
            ObjectReader::from_value(&json!([1, 2])),
            Err(DecodeError::ExpectedObject)
        ));
        assert!(matches!(
            ObjectReader::from_value(&json!("text")),
            Err(DecodeError::ExpectedObject)
        ));
    }

    #[test]
    fn additional_properties_keep_wire_order() {
        let payload = json!({"z_extra": 1, "metric": "cpu", "a_extra": {"k": true}});
        let mut r = ObjectReader::from_value(&payload).unwrap();
        let _: String = r.required("metric").unwrap();
        let extra = r.additional_properties();
        let keys: Vec<&String> = extra.keys().collect();
        assert_eq!(keys, ["z_extra", "a_extra"]);
        assert_eq!(extra["a_extra"], json!({"k": true}));
    }
}
