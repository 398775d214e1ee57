//! Decode error taxonomy.

/// Hard decode failures.
///
/// Only contract violations surface as errors: a required field that is
/// absent or malformed, a plain-model payload that is not an object, or
/// input that is not JSON at all. Every other unparseable condition (an
/// unrecognized enum member, an ambiguous oneOf payload, a mismatched
/// optional field) is absorbed into the raw arm of [`crate::Parsed`] and
/// never propagates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A schema-required key is absent (or null) in the payload.
    #[error("required field `{0}` missing")]
    MissingField(&'static str),
    /// A schema-required key is present but structurally wrong.
    #[error("required field `{field}` is not {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    /// The payload for a plain model is not a JSON object.
    #[error("expected a JSON object payload")]
    ExpectedObject,
    /// The input could not be parsed as JSON.
    #[error("invalid JSON: {0}")]
    Json(String),
}
