//! Strict structural conversion for scalar and list field values.

use serde_json::Value;

/// A field value with a single strict JSON representation.
///
/// `from_field` is a structural check, not a coercion: a JSON string never
/// becomes a number, a float never becomes an integer. `None` means the
/// field does not have this shape, which the enclosing record treats as a
/// hard error for required fields and as demotion for optional ones.
pub trait FieldValue: Sized {
    /// Human-readable shape name used in required-field error messages.
    const KIND: &'static str;

    fn from_field(value: &Value) -> Option<Self>;

    fn to_field(&self) -> Value;
}

impl FieldValue for bool {
    const KIND: &'static str = "a boolean";

    fn from_field(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn to_field(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldValue for i64 {
    const KIND: &'static str = "an integer";

    fn from_field(value: &Value) -> Option<Self> {
        value.as_i64()
    }

    fn to_field(&self) -> Value {
        Value::from(*self)
    }
}

impl FieldValue for f64 {
    const KIND: &'static str = "a number";

    fn from_field(value: &Value) -> Option<Self> {
        value.as_f64()
    }

    fn to_field(&self) -> Value {
        Value::from(*self)
    }
}

impl FieldValue for String {
    const KIND: &'static str = "a string";

    fn from_field(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn to_field(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    const KIND: &'static str = "an array";

    fn from_field(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_field).collect()
    }

    fn to_field(&self) -> Value {
        Value::Array(self.iter().map(T::to_field).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_are_strict() {
        assert_eq!(i64::from_field(&json!(42)), Some(42));
        assert_eq!(i64::from_field(&json!(1.5)), None);
        assert_eq!(i64::from_field(&json!("42")), None);
        assert_eq!(f64::from_field(&json!(0)), Some(0.0));
        assert_eq!(f64::from_field(&json!(2.5)), Some(2.5));
        assert_eq!(f64::from_field(&json!(true)), None);
        assert_eq!(String::from_field(&json!("x")), Some("x".to_string()));
        assert_eq!(String::from_field(&json!(7)), None);
        assert_eq!(bool::from_field(&json!(false)), Some(false));
        assert_eq!(bool::from_field(&json!(0)), None);
    }

    #[test]
    fn lists_fail_on_any_bad_element() {
        assert_eq!(
            Vec::<String>::from_field(&json!(["a", "b"])),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(Vec::<String>::from_field(&json!(["a", 1])), None);
        assert_eq!(Vec::<String>::from_field(&json!("a")), None);
        // nested lists compose
        assert_eq!(
            Vec::<Vec<String>>::from_field(&json!([["a"], ["b", "c"]])),
            Some(vec![vec!["a".to_string()], vec!["b".to_string(), "c".to_string()]])
        );
    }

    #[test]
    fn roundtrip_to_field() {
        assert_eq!(42i64.to_field(), json!(42));
        assert_eq!(2.5f64.to_field(), json!(2.5));
        assert_eq!("x".to_string().to_field(), json!("x"));
        assert_eq!(vec![1i64, 2].to_field(), json!([1, 2]));
    }
}
