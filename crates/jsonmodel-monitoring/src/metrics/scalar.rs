//! Scalar query response columns.
//!
//! A column is either a group column (string tag tuples) or a data column
//! (numeric values). The wire schema is a oneOf; the two shapes share
//! their key names and are told apart by the type of `values` and by the
//! single-valued `type` field.

use jsonmodel::{
    resolve_one_of, DecodeError, FieldValue, ObjectReader, Parsed, WireEnum, WireModel,
};
use serde_json::{Map, Value};

/// A column of a scalar query response.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarColumn {
    Group(GroupColumn),
    Data(DataColumn),
}

impl WireModel for ScalarColumn {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        Ok(resolve_one_of(
            value,
            &[
                |v| {
                    GroupColumn::from_value(v)
                        .ok()
                        .and_then(Parsed::typed)
                        .map(ScalarColumn::Group)
                },
                |v| {
                    DataColumn::from_value(v)
                        .ok()
                        .and_then(Parsed::typed)
                        .map(ScalarColumn::Data)
                },
            ],
        ))
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Group(c) => c.to_value(),
            Self::Data(c) => c.to_value(),
        }
    }

    fn has_spillover(&self) -> bool {
        match self {
            Self::Group(c) => c.has_spillover(),
            Self::Data(c) => c.has_spillover(),
        }
    }
}

/// The single valid `type` value of a group column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupColumnType {
    Group,
    Unrecognized(String),
}

impl WireEnum for GroupColumnType {
    type Wire = String;

    fn from_wire(value: String) -> Self {
        match value.as_str() {
            "group" => Self::Group,
            _ => Self::Unrecognized(value),
        }
    }

    fn to_wire(&self) -> String {
        match self {
            Self::Group => "group".to_string(),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    fn is_valid(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

/// The single valid `type` value of a data column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataColumnType {
    Number,
    Unrecognized(String),
}

impl WireEnum for DataColumnType {
    type Wire = String;

    fn from_wire(value: String) -> Self {
        match value.as_str() {
            "number" => Self::Number,
            _ => Self::Unrecognized(value),
        }
    }

    fn to_wire(&self) -> String {
        match self {
            Self::Number => "number".to_string(),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    fn is_valid(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

/// A grouping column: one tuple of tag values per row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupColumn {
    /// The facet the column groups by.
    pub name: Option<String>,
    pub type_: Option<GroupColumnType>,
    /// One tag tuple per row.
    pub values: Option<Vec<Vec<String>>>,
    pub additional_properties: Map<String, Value>,
}

impl WireModel for GroupColumn {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let name = r.optional::<String>("name");
        let type_ = r.optional_enum::<GroupColumnType>("type");
        let values = r.optional::<Vec<Vec<String>>>("values");
        if matches!(&type_, Some(t) if !t.is_valid()) {
            return Ok(Parsed::raw(value));
        }
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(GroupColumn {
            name,
            type_,
            values,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(v) = &self.name {
            obj.insert("name".into(), v.to_field());
        }
        if let Some(t) = &self.type_ {
            obj.insert("type".into(), t.to_wire().to_field());
        }
        if let Some(v) = &self.values {
            obj.insert("values".into(), v.to_field());
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

/// A data column: one numeric value per row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataColumn {
    /// The metric expression the column carries values for.
    pub name: Option<String>,
    pub type_: Option<DataColumnType>,
    /// One value per row.
    pub values: Option<Vec<f64>>,
    pub additional_properties: Map<String, Value>,
}

impl WireModel for DataColumn {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let name = r.optional::<String>("name");
        let type_ = r.optional_enum::<DataColumnType>("type");
        let values = r.optional::<Vec<f64>>("values");
        if matches!(&type_, Some(t) if !t.is_valid()) {
            return Ok(Parsed::raw(value));
        }
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(DataColumn {
            name,
            type_,
            values,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(v) = &self.name {
            obj.insert("name".into(), v.to_field());
        }
        if let Some(t) = &self.type_ {
            obj.insert("type".into(), t.to_wire().to_field());
        }
        if let Some(v) = &self.values {
            obj.insert("values".into(), v.to_field());
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
