//! [`WireModel`] — the codec seam implemented by every wire type.

use serde_json::Value;

use crate::{DecodeError, Parsed};

/// A type that can be decoded from and re-encoded to its JSON wire shape.
///
/// `from_value` errors only on hard contract violations (a missing or
/// malformed required field, a non-object payload for a plain record);
/// every other mismatch yields [`Parsed::Raw`] so the payload survives a
/// round trip verbatim. oneOf unions never error at all.
pub trait WireModel: Sized {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError>;

    fn to_value(&self) -> Value;

    /// Whether this value, or any model nested inside it, collected
    /// unknown wire keys into its additional properties.
    ///
    /// The oneOf resolver disqualifies candidates with spillover: a
    /// candidate that only accepted a payload by stashing keys it does
    /// not declare has not really understood it.
    fn has_spillover(&self) -> bool;

    /// Decode from raw JSON bytes.
    fn from_json_slice(bytes: &[u8]) -> Result<Parsed<Self>, DecodeError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| DecodeError::Json(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Decode from a JSON string.
    fn from_json_str(text: &str) -> Result<Parsed<Self>, DecodeError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DecodeError::Json(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Encode to a compact JSON string.
    fn to_json_string(&self) -> String {
        self.to_value().to_string()
    }

    /// Encode to raw JSON bytes.
    fn to_json_vec(&self) -> Vec<u8> {
        self.to_value().to_string().into_bytes()
    }
}
