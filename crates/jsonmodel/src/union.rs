//! oneOf resolution: ordered trial decode with ambiguity detection.

use serde_json::Value;

use crate::{Parsed, WireModel};

/// A candidate decoder for one member of a oneOf union: a strict decode
/// into that member's shape wrapped into the union type, or `None` when
/// the payload does not match it.
pub type OneOfCandidate<U> = fn(&Value) -> Option<U>;

/// Whether a re-encoded candidate is the empty object literal.
///
/// An empty re-encoding means the candidate accepted the payload without
/// understanding any of it, so it does not count as a match.
pub fn is_empty_object(value: &Value) -> bool {
    matches!(value, Value::Object(obj) if obj.is_empty())
}

/// Resolve a oneOf payload against its candidates in declared order.
///
/// A candidate counts as a match only when its strict decode succeeds (a
/// decode that fell back to its raw form is already `None`), it collected
/// no unknown-key spillover at any nested level, and re-encoding it yields
/// something other than `{}`. Unless exactly one candidate matches, the
/// payload is retained verbatim: ambiguity is a valid terminal state, not
/// an error, so no branch is ever guessed and a round trip cannot corrupt
/// the payload.
pub fn resolve_one_of<U: WireModel>(value: &Value, candidates: &[OneOfCandidate<U>]) -> Parsed<U> {
    let mut matched = None;
    let mut count = 0usize;
    for candidate in candidates {
        if let Some(decoded) = candidate(value) {
            if !decoded.has_spillover() && !is_empty_object(&decoded.to_value()) {
                matched = Some(decoded);
                count += 1;
            }
        }
    }
    match (count, matched) {
        (1, Some(decoded)) => Parsed::Typed(decoded),
        _ => Parsed::Raw(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeError, FieldValue, ObjectReader};
    use serde_json::{json, Map};

    // Minimal two-member union: one shape keyed by an integer `count`,
    // the other by a string `label`. Both fields optional, so `{}` is
    // deliberately ambiguous.
    #[derive(Debug, Clone, PartialEq)]
    struct Counted {
        count: Option<i64>,
        additional_properties: Map<String, Value>,
    }

    impl WireModel for Counted {
        fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
            let mut r = ObjectReader::from_value(value)?;
            let count = r.optional::<i64>("count");
            if r.demoted() {
                return Ok(Parsed::raw(value));
            }
            Ok(Parsed::Typed(Counted {
                count,
                additional_properties: r.additional_properties(),
            }))
        }

        fn to_value(&self) -> Value {
            let mut obj = Map::new();
            if let Some(count) = self.count {
                obj.insert("count".into(), count.to_field());
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

    #[derive(Debug, Clone, PartialEq)]
    struct Labeled {
        label: Option<String>,
        additional_properties: Map<String, Value>,
    }

    impl WireModel for Labeled {
        fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
            let mut r = ObjectReader::from_value(value)?;
            let label = r.optional::<String>("label");
            if r.demoted() {
                return Ok(Parsed::raw(value));
            }
            Ok(Parsed::Typed(Labeled {
                label,
                additional_properties: r.additional_properties(),
            }))
        }

        fn to_value(&self) -> Value {
            let mut obj = Map::new();
            if let Some(label) = &self.label {
                obj.insert("label".into(), label.to_field());
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

    #[derive(Debug, Clone, PartialEq)]
    enum Either {
        Counted(Counted),
        Labeled(Labeled),
    }

    impl WireModel for Either {
        fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
            Ok(resolve_one_of(
                value,
                &[
                    |v| {
                        Counted::from_value(v)
                            .ok()
                            .and_then(Parsed::typed)
                            .map(Either::Counted)
                    },
                    |v| {
                        Labeled::from_value(v)
                            .ok()
                            .and_then(Parsed::typed)
                            .map(Either::Labeled)
                    },
                ],
            ))
        }

        fn to_value(&self) -> Value {
            match self {
                Either::Counted(c) => c.to_value(),
                Either::Labeled(l) => l.to_value(),
            }
        }

        fn has_spillover(&self) -> bool {
            match self {
                Either::Counted(c) => c.has_spillover(),
                Either::Labeled(l) => l.has_spillover(),
            }
        }
    }

    #[test]
    fn unique_match_selects_single_candidate() {
        // `count` is unknown to Labeled, so its spillover disqualifies it
        // and only Counted remains.
        let parsed = Either::from_value(&json!({"count": 3})).unwrap();
        assert_eq!(
            parsed.as_typed(),
            Some(&Either::Counted(Counted {
                count: Some(3),
                additional_properties: Map::new(),
            }))
        );
    }

    #[test]
    fn empty_object_is_ambiguous() {
        // Both candidates decode `{}` cleanly but re-encode to `{}`, so
        // neither counts and the payload is retained.
        let parsed = Either::from_value(&json!({})).unwrap();
        assert_eq!(parsed, Parsed::Raw(json!({})));
    }

    #[test]
    fn mixed_keys_leave_no_clean_candidate() {
        // Each candidate must stash the other shape's key, so both are
        // disqualified by spillover and the payload is retained.
        let payload = json!({"count": 1, "label": "x"});
        let parsed = Either::from_value(&payload).unwrap();
        assert_eq!(parsed, Parsed::Raw(payload));
    }

    #[test]
    fn non_object_payload_is_retained_not_errored() {
        let parsed = Either::from_value(&json!("scalar")).unwrap();
        assert_eq!(parsed, Parsed::Raw(json!("scalar")));
    }

    #[test]
    fn retained_payload_reencodes_verbatim() {
        let payload = json!({"z": 1, "a": 2});
        let parsed = Either::from_value(&payload).unwrap();
        assert_eq!(parsed.to_value(), payload);
        assert_eq!(parsed.to_json_string(), r#"{"z":1,"a":2}"#);
    }
}
