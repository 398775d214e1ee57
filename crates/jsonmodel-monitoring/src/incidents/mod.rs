//! Incident attachment models.

mod attachment;

pub use attachment::{
    IncidentAttachmentAttributes, LinkAttachmentAttributes, LinkAttachmentObject,
    LinkAttachmentType, PostmortemAttachmentAttributes, PostmortemAttachmentObject,
    PostmortemAttachmentType,
};
