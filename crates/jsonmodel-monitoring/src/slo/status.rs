//! Status of an SLO's primary timeframe.
//!
//! Several of these fields are reported as explicit null while an SLO has
//! no data yet, which the wire distinguishes from the field being absent;
//! they are modeled with [`Nullable`].

use jsonmodel::{DecodeError, FieldValue, Nullable, ObjectReader, Parsed, WireEnum, WireModel};
use serde_json::{Map, Value};

use super::SloState;

/// Status of an SLO.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SloStatus {
    /// Error message if the status or error budget could not be
    /// calculated.
    pub calculation_error: Option<Nullable<String>>,
    /// Remaining error budget, in percent.
    pub error_budget_remaining: Option<Nullable<f64>>,
    /// POSIX timestamp of when the status was calculated.
    pub indexed_at: Option<i64>,
    pub raw_error_budget_remaining: Option<Nullable<SloRawErrorBudgetRemaining>>,
    /// The current service level indicator, a percentage from 0 to 100.
    pub sli: Option<Nullable<f64>>,
    /// The number of decimal places the SLI is accurate to.
    pub span_precision: Option<Nullable<i64>>,
    pub state: Option<SloState>,
    pub additional_properties: Map<String, Value>,
}

impl WireModel for SloStatus {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let calculation_error = r.optional_nullable::<String>("calculation_error");
        let error_budget_remaining = r.optional_nullable::<f64>("error_budget_remaining");
        let indexed_at = r.optional::<i64>("indexed_at");
        let raw_error_budget_remaining =
            r.optional_nullable_model::<SloRawErrorBudgetRemaining>("raw_error_budget_remaining");
        let sli = r.optional_nullable::<f64>("sli");
        let span_precision = r.optional_nullable::<i64>("span_precision");
        let state = r.optional_enum::<SloState>("state");
        if matches!(&state, Some(s) if !s.is_valid()) {
            return Ok(Parsed::raw(value));
        }
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(SloStatus {
            calculation_error,
            error_budget_remaining,
            indexed_at,
            raw_error_budget_remaining,
            sli,
            span_precision,
            state,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(v) = &self.calculation_error {
            obj.insert("calculation_error".into(), v.to_field());
        }
        if let Some(v) = &self.error_budget_remaining {
            obj.insert("error_budget_remaining".into(), v.to_field());
        }
        if let Some(v) = self.indexed_at {
            obj.insert("indexed_at".into(), v.to_field());
        }
        if let Some(v) = &self.raw_error_budget_remaining {
            obj.insert("raw_error_budget_remaining".into(), v.to_object());
        }
        if let Some(v) = &self.sli {
            obj.insert("sli".into(), v.to_field());
        }
        if let Some(v) = &self.span_precision {
            obj.insert("span_precision".into(), v.to_field());
        }
        if let Some(s) = &self.state {
            obj.insert("state".into(), s.to_wire().to_field());
        }
        for (k, v) in &self.additional_properties {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    fn has_spillover(&self) -> bool {
        !self.additional_properties.is_empty()
            || self
                .raw_error_budget_remaining
                .as_ref()
                .and_then(Nullable::value)
                .is_some_and(|m| m.has_spillover())
    }
}

/// Error budget remaining expressed in the SLO's own unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SloRawErrorBudgetRemaining {
    pub unit: Option<String>,
    pub value: Option<f64>,
    pub additional_properties: Map<String, Value>,
}

impl WireModel for SloRawErrorBudgetRemaining {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let unit = r.optional::<String>("unit");
        let remaining = r.optional::<f64>("value");
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(SloRawErrorBudgetRemaining {
            unit,
            value: remaining,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(v) = &self.unit {
            obj.insert("unit".into(), v.to_field());
        }
        if let Some(v) = self.value {
            obj.insert("value".into(), v.to_field());
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
