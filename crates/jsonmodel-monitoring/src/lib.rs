//! Wire models for a monitoring service's JSON API.
//!
//! Every type here follows the same decode contract (see [`jsonmodel`]):
//! required fields fail hard, and anything the payload cannot faithfully
//! express in its typed shape demotes the whole record to its raw form,
//! so re-encoding never loses or corrupts data.

pub mod api_error;
pub mod incidents;
pub mod integrations;
pub mod metrics;
pub mod slo;

pub use api_error::ApiErrorResponse;
