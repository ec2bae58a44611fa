//! Attachments and their Resend normalization.

use base64::Engine;
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::Read;

use crate::error::MailError;

/// Content of an attachment as supplied by the caller.
pub enum AttachmentContent {
    /// Text, sent as its UTF-8 bytes
    Text(String),
    /// Raw bytes, sent unchanged
    Bytes(Vec<u8>),
    /// Readable stream. Resend cannot take these; normalization rejects them.
    Stream(Box<dyn Read + Send + Sync>),
}

impl AttachmentContent {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl fmt::Debug for AttachmentContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<&str> for AttachmentContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AttachmentContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for AttachmentContent {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for AttachmentContent {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

/// An email attachment.
///
/// Both fields are optional here so that incomplete attachments can be
/// represented; [`to_resend_attachments`] rejects them.
///
/// # Examples
///
/// ```
/// use resend_transport::Attachment;
///
/// let report = Attachment::new("report.csv", "id,total\n1,42\n");
/// let logo = Attachment::new("logo.png", vec![0x89u8, 0x50, 0x4E, 0x47]);
/// ```
#[derive(Debug, Default)]
pub struct Attachment {
    /// Filename shown to the recipient
    pub filename: Option<String>,
    /// Attachment content
    pub content: Option<AttachmentContent>,
}

impl Attachment {
    /// Create an attachment with a filename and content.
    pub fn new(filename: impl Into<String>, content: impl Into<AttachmentContent>) -> Self {
        Self {
            filename: Some(filename.into()),
            content: Some(content.into()),
        }
    }

    /// Create an attachment whose content is read from a stream.
    pub fn from_reader(
        filename: impl Into<String>,
        reader: impl Read + Send + Sync + 'static,
    ) -> Self {
        Self {
            filename: Some(filename.into()),
            content: Some(AttachmentContent::Stream(Box::new(reader))),
        }
    }

    /// Set the filename.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the content.
    pub fn content(mut self, content: impl Into<AttachmentContent>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Attachment in the shape the Resend API accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResendAttachment {
    pub filename: String,
    /// Raw bytes; base64-encoded on the wire
    #[serde(serialize_with = "serialize_base64")]
    pub content: Vec<u8>,
}

fn serialize_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// Normalize attachments for the Resend API.
///
/// Every attachment needs a non-empty filename and content, checked before
/// the content type. The first bad attachment fails the whole batch.
///
/// # Errors
///
/// - `InvalidAttachment` - filename or content missing
/// - `UnsupportedAttachmentContent` - content is a stream
pub fn to_resend_attachments(
    attachments: Option<&[Attachment]>,
) -> Result<Vec<ResendAttachment>, MailError> {
    let Some(attachments) = attachments else {
        return Ok(Vec::new());
    };

    attachments
        .iter()
        .map(|attachment| -> Result<ResendAttachment, MailError> {
            let filename = attachment
                .filename
                .as_deref()
                .filter(|filename| !filename.is_empty())
                .ok_or(MailError::InvalidAttachment)?;
            let content = attachment
                .content
                .as_ref()
                .filter(|content| !content.is_blank())
                .ok_or(MailError::InvalidAttachment)?;

            let content = match content {
                AttachmentContent::Text(text) => text.as_bytes().to_vec(),
                AttachmentContent::Bytes(bytes) => bytes.clone(),
                AttachmentContent::Stream(_) => {
                    return Err(MailError::UnsupportedAttachmentContent)
                }
            };

            Ok(ResendAttachment {
                filename: filename.to_string(),
                content,
            })
        })
        .collect()
}
