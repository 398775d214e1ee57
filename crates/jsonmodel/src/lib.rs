//! jsonmodel - forward-compatible JSON wire-model codec.
//!
//! Decodes JSON API payloads into typed records, and keeps any payload it
//! cannot represent faithfully as a verbatim raw value instead of guessing,
//! so that re-encoding never corrupts data the client does not fully
//! understand.
//!
//! The three codec contracts:
//!
//! - plain records ([`WireModel`] + [`ObjectReader`]): required fields fail
//!   hard, every other mismatch demotes the whole record to its raw form;
//! - oneOf unions ([`resolve_one_of`]): ordered trial decode, a unique
//!   unambiguous match or the verbatim payload, never an error;
//! - closed enums ([`WireEnum`]): total decode with an `Unrecognized`
//!   escape variant checked by the enclosing record.

mod enums;
mod error;
mod field;
mod model;
mod nullable;
mod parsed;
mod reader;
mod union;

pub use enums::WireEnum;
pub use error::DecodeError;
pub use field::FieldValue;
pub use model::WireModel;
pub use nullable::Nullable;
pub use parsed::Parsed;
pub use reader::ObjectReader;
pub use union::{is_empty_object, resolve_one_of, OneOfCandidate};
