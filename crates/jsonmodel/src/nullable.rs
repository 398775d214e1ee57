//! [`Nullable`] — the explicit set-to-null wire state.

use serde_json::Value;

use crate::{FieldValue, WireModel};

/// A field value that the wire distinguishes from mere absence.
///
/// Used as `Option<Nullable<T>>` so a field has three states: absent
/// (`None`, omitted on encode), explicitly null (`Some(Null)`, encoded as
/// JSON null), and present (`Some(Value(v))`).
#[derive(Debug, Clone, PartialEq)]
pub enum Nullable<T> {
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Null => None,
            Nullable::Value(v) => Some(v),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Nullable::Null => None,
            Nullable::Value(v) => Some(v),
        }
    }
}

impl<T: FieldValue> Nullable<T> {
    /// Wire encoding: JSON null or the wrapped scalar.
    pub fn to_field(&self) -> Value {
        match self {
            Nullable::Null => Value::Null,
            Nullable::Value(v) => v.to_field(),
        }
    }
}

impl<T: WireModel> Nullable<T> {
    /// Wire encoding: JSON null or the wrapped model object.
    pub fn to_object(&self) -> Value {
        match self {
            Nullable::Null => Value::Null,
            Nullable::Value(v) => v.to_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_value_states() {
        let null: Nullable<f64> = Nullable::Null;
        assert!(null.is_null());
        assert_eq!(null.value(), None);
        assert_eq!(null.to_field(), Value::Null);

        let set = Nullable::Value(99.5);
        assert!(!set.is_null());
        assert_eq!(set.value(), Some(&99.5));
        assert_eq!(set.to_field(), json!(99.5));
        assert_eq!(set.into_value(), Some(99.5));
    }
}
