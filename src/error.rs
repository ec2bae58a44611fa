//! Error types for resend-transport.

use thiserror::Error;

/// Status codes for the error names the Resend API reports.
///
/// Names missing from this table map to 500.
pub const RESEND_ERROR_CODES_BY_KEY: &[(&str, u16)] = &[
    ("missing_required_field", 422),
    ("invalid_access", 422),
    ("invalid_parameter", 422),
    ("invalid_region", 422),
    ("rate_limit_exceeded", 429),
    ("missing_api_key", 401),
    ("invalid_api_key", 403),
    ("invalid_from_address", 403),
    ("validation_error", 403),
    ("not_found", 404),
    ("method_not_allowed", 405),
    ("application_error", 500),
    ("internal_server_error", 500),
];

/// Look up the status code for a Resend error name.
pub fn status_code_for(name: &str) -> u16 {
    RESEND_ERROR_CODES_BY_KEY
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, status)| *status)
        .unwrap_or(500)
}

/// Errors that can occur when sending emails.
#[derive(Debug, Clone, Error)]
pub enum MailError {
    /// The message has no `to` or no `from`.
    #[error("Missing required fields \"to\" or \"from\"")]
    MissingRequiredField,

    /// An attachment lacks a filename or content.
    #[error("Attachment is missing filename or content")]
    InvalidAttachment,

    /// Attachment content is neither a string nor a byte buffer.
    #[error("Attachment content must be a string or a buffer")]
    UnsupportedAttachmentContent,

    /// The Resend API answered with an embedded error object.
    #[error("[{status}]: {name} {message}")]
    RemoteApi {
        /// Status code derived from [`RESEND_ERROR_CODES_BY_KEY`]
        status: u16,
        name: String,
        message: String,
    },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// `send` was called outside a tokio runtime.
    #[error("No async runtime available to dispatch the email")]
    NoRuntime,
}

impl MailError {
    /// Build the error for an embedded API error, resolving its status code.
    pub fn remote_api(name: impl Into<String>, message: impl Into<String>) -> Self {
        let name = name.into();
        Self::RemoteApi {
            status: status_code_for(&name),
            name,
            message: message.into(),
        }
    }

    /// Numeric status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteApi { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable name of the error kind.
    pub fn name(&self) -> &str {
        match self {
            Self::MissingRequiredField => "MissingRequiredField",
            Self::InvalidAttachment => "InvalidAttachment",
            Self::UnsupportedAttachmentContent => "UnsupportedAttachmentContent",
            Self::RemoteApi { name, .. } => name.as_str(),
            Self::Http(_) => "TransportFailure",
            Self::Json(_) => "TransportFailure",
            Self::NoRuntime => "NoRuntime",
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for MailError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for MailError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
