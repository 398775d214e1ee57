//! Incident attachment attributes.
//!
//! The attributes of an attachment are a oneOf: either a postmortem
//! attachment or a link attachment. The two shapes are structurally
//! near-identical and are discriminated by their single-valued
//! `attachment_type` field: the candidate holding the wrong literal
//! demotes itself on the validity check and drops out of trial matching.

use jsonmodel::{
    resolve_one_of, DecodeError, FieldValue, ObjectReader, Parsed, WireEnum, WireModel,
};
use serde_json::{Map, Value};

/// The attributes object of an incident attachment.
#[derive(Debug, Clone, PartialEq)]
pub enum IncidentAttachmentAttributes {
    Postmortem(PostmortemAttachmentAttributes),
    Link(LinkAttachmentAttributes),
}

impl WireModel for IncidentAttachmentAttributes {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        Ok(resolve_one_of(
            value,
            &[
                |v| {
                    PostmortemAttachmentAttributes::from_value(v)
                        .ok()
                        .and_then(Parsed::typed)
                        .map(IncidentAttachmentAttributes::Postmortem)
                },
                |v| {
                    LinkAttachmentAttributes::from_value(v)
                        .ok()
                        .and_then(Parsed::typed)
                        .map(IncidentAttachmentAttributes::Link)
                },
            ],
        ))
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Postmortem(a) => a.to_value(),
            Self::Link(a) => a.to_value(),
        }
    }

    fn has_spillover(&self) -> bool {
        match self {
            Self::Postmortem(a) => a.has_spillover(),
            Self::Link(a) => a.has_spillover(),
        }
    }
}

/// The single valid `attachment_type` of a postmortem attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostmortemAttachmentType {
    Postmortem,
    Unrecognized(String),
}

impl WireEnum for PostmortemAttachmentType {
    type Wire = String;

    fn from_wire(value: String) -> Self {
        match value.as_str() {
            "postmortem" => Self::Postmortem,
            _ => Self::Unrecognized(value),
        }
    }

    fn to_wire(&self) -> String {
        match self {
            Self::Postmortem => "postmortem".to_string(),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    fn is_valid(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

/// The single valid `attachment_type` of a link attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAttachmentType {
    Link,
    Unrecognized(String),
}

impl WireEnum for LinkAttachmentType {
    type Wire = String;

    fn from_wire(value: String) -> Self {
        match value.as_str() {
            "link" => Self::Link,
            _ => Self::Unrecognized(value),
        }
    }

    fn to_wire(&self) -> String {
        match self {
            Self::Link => "link".to_string(),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    fn is_valid(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

/// The postmortem variant of attachment attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct PostmortemAttachmentAttributes {
    pub attachment: PostmortemAttachmentObject,
    pub attachment_type: PostmortemAttachmentType,
    pub additional_properties: Map<String, Value>,
}

impl PostmortemAttachmentAttributes {
    pub fn new(attachment: PostmortemAttachmentObject) -> Self {
        Self {
            attachment,
            attachment_type: PostmortemAttachmentType::Postmortem,
            additional_properties: Map::new(),
        }
    }
}

impl WireModel for PostmortemAttachmentAttributes {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let attachment = r.required_model::<PostmortemAttachmentObject>("attachment")?;
        let attachment_type = r.required_enum::<PostmortemAttachmentType>("attachment_type")?;
        if !attachment_type.is_valid() {
            return Ok(Parsed::raw(value));
        }
        let Some(attachment) = attachment else {
            return Ok(Parsed::raw(value));
        };
        Ok(Parsed::Typed(PostmortemAttachmentAttributes {
            attachment,
            attachment_type,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("attachment".into(), self.attachment.to_value());
        obj.insert(
            "attachment_type".into(),
            self.attachment_type.to_wire().to_field(),
        );
        for (k, v) in &self.additional_properties {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    fn has_spillover(&self) -> bool {
        !self.additional_properties.is_empty() || self.attachment.has_spillover()
    }
}

/// The postmortem document reference.
#[derive(Debug, Clone, PartialEq)]
pub struct PostmortemAttachmentObject {
    /// The URL of the postmortem document.
    pub document_url: String,
    pub additional_properties: Map<String, Value>,
}

impl PostmortemAttachmentObject {
    pub fn new(document_url: String) -> Self {
        Self {
            document_url,
            additional_properties: Map::new(),
        }
    }
}

impl WireModel for PostmortemAttachmentObject {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let document_url: String = r.required("document_url")?;
        Ok(Parsed::Typed(PostmortemAttachmentObject {
            document_url,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("document_url".into(), self.document_url.to_field());
        for (k, v) in &self.additional_properties {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    fn has_spillover(&self) -> bool {
        !self.additional_properties.is_empty()
    }
}

/// The link variant of attachment attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAttachmentAttributes {
    pub attachment: LinkAttachmentObject,
    pub attachment_type: LinkAttachmentType,
    pub additional_properties: Map<String, Value>,
}

impl LinkAttachmentAttributes {
    pub fn new(attachment: LinkAttachmentObject) -> Self {
        Self {
            attachment,
            attachment_type: LinkAttachmentType::Link,
            additional_properties: Map::new(),
        }
    }
}

impl WireModel for LinkAttachmentAttributes {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let attachment = r.required_model::<LinkAttachmentObject>("attachment")?;
        let attachment_type = r.required_enum::<LinkAttachmentType>("attachment_type")?;
        if !attachment_type.is_valid() {
            return Ok(Parsed::raw(value));
        }
        let Some(attachment) = attachment else {
            return Ok(Parsed::raw(value));
        };
        Ok(Parsed::Typed(LinkAttachmentAttributes {
            attachment,
            attachment_type,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("attachment".into(), self.attachment.to_value());
        obj.insert(
            "attachment_type".into(),
            self.attachment_type.to_wire().to_field(),
        );
        for (k, v) in &self.additional_properties {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    fn has_spillover(&self) -> bool {
        !self.additional_properties.is_empty() || self.attachment.has_spillover()
    }
}

/// The linked document reference.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAttachmentObject {
    /// The URL of the linked document.
    pub document_url: String,
    /// Display title of the link.
    pub title: Option<String>,
    pub additional_properties: Map<String, Value>,
}

impl LinkAttachmentObject {
    pub fn new(document_url: String) -> Self {
        Self {
            document_url,
            title: None,
            additional_properties: Map::new(),
        }
    }
}

impl WireModel for LinkAttachmentObject {
    fn from_value(value: &Value) -> Result<Parsed<Self>, DecodeError> {
        let mut r = ObjectReader::from_value(value)?;
        let document_url: String = r.required("document_url")?;
        let title = r.optional::<String>("title");
        if r.demoted() {
            return Ok(Parsed::raw(value));
        }
        Ok(Parsed::Typed(LinkAttachmentObject {
            document_url,
            title,
            additional_properties: r.additional_properties(),
        }))
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("document_url".into(), self.document_url.to_field());
        if let Some(v) = &self.title {
            obj.insert("title".into(), v.to_field());
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
