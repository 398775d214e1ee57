//! [`Parsed`] — the typed-or-raw boundary value.

use serde_json::Value;

use crate::WireModel;

/// Outcome of decoding a wire payload: a fully understood typed value, or
/// the original payload retained verbatim.
///
/// The raw arm is the universal escape hatch. Whenever a payload cannot be
/// represented faithfully by its typed shape (an ambiguous oneOf, an
/// unrecognized enum member, a structural mismatch below the required
/// fields), the decoder stores the whole payload here and re-encoding
/// replays it unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Typed(T),
    Raw(Value),
}

impl<T> Parsed<T> {
    /// Retain a payload verbatim.
    pub fn raw(value: &Value) -> Self {
        Parsed::Raw(value.clone())
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, Parsed::Typed(_))
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Parsed::Raw(_))
    }

    /// The typed value, if decoding produced one.
    pub fn typed(self) -> Option<T> {
        match self {
            Parsed::Typed(v) => Some(v),
            Parsed::Raw(_) => None,
        }
    }

    pub fn as_typed(&self) -> Option<&T> {
        match self {
            Parsed::Typed(v) => Some(v),
            Parsed::Raw(_) => None,
        }
    }

    /// The retained payload, if decoding fell back to it.
    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            Parsed::Typed(_) => None,
            Parsed::Raw(raw) => Some(raw),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        match self {
            Parsed::Typed(v) => Parsed::Typed(f(v)),
            Parsed::Raw(raw) => Parsed::Raw(raw),
        }
    }
}

impl<T: WireModel> Parsed<T> {
    /// Re-encode: the typed value's JSON, or the retained payload verbatim.
    pub fn to_value(&self) -> Value {
        match self {
            Parsed::Typed(v) => v.to_value(),
            Parsed::Raw(raw) => raw.clone(),
        }
    }

    /// Re-encode to a compact JSON string.
    pub fn to_json_string(&self) -> String {
        self.to_value().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typed_and_raw_accessors() {
        let typed: Parsed<i64> = Parsed::Typed(7);
        assert!(typed.is_typed());
        assert_eq!(typed.as_typed(), Some(&7));
        assert_eq!(typed.as_raw(), None);
        assert_eq!(typed.typed(), Some(7));

        let raw: Parsed<i64> = Parsed::raw(&json!({"a": 1}));
        assert!(raw.is_raw());
        assert_eq!(raw.as_typed(), None);
        assert_eq!(raw.as_raw(), Some(&json!({"a": 1})));
        assert_eq!(raw.typed(), None);
    }

    #[test]
    fn map_preserves_raw() {
        let raw: Parsed<i64> = Parsed::raw(&json!([1, 2]));
        let mapped = raw.map(|n| n.to_string());
        assert_eq!(mapped, Parsed::Raw(json!([1, 2])));
    }
}
