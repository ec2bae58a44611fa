//! # resend-transport
//!
//! A mail transport that delivers messages through the Resend HTTP API
//! instead of SMTP.
//!
//! The transport translates a generic [`MailMessage`] into the request body
//! Resend expects, sends it, and reports the outcome through an error-first
//! style callback ([`Transport::send`]) or a future ([`Transport::deliver`]).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use resend_transport::{MailMessage, Transport};
//! use resend_transport::providers::{ResendTransport, ResendTransportOptions};
//!
//! let transport = ResendTransport::new(ResendTransportOptions::from_env());
//!
//! let message = MailMessage::new()
//!     .from(("My App", "noreply@example.com"))
//!     .to("user@example.com")
//!     .subject("Welcome!")
//!     .text("Hello");
//!
//! let info = transport.deliver(&message).await?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `RESEND_API_KEY` | Resend API key (empty when unset) |
//! | `RESEND_BASE_URL` | Override the API base URL (optional) |
//!
//! ## Errors
//!
//! Messages without `to` or `from` and malformed attachments are rejected
//! before any request is made. When the API answers with an error object,
//! the error carries a status code looked up in [`RESEND_ERROR_CODES_BY_KEY`].
//! Through [`Transport::send`] every failure reaches the callback.
//!
//! ## Feature Flags
//!
//! - `http` (default) - [`ResendClient`], the reqwest-backed API client

/// The version of the resend-transport crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod address;
mod attachment;
mod client;
mod error;
mod message;
mod transport;

pub mod providers;

// Re-exports
pub use address::{to_resend_addresses, to_resend_from_address, Address, AddressList};
pub use attachment::{to_resend_attachments, Attachment, AttachmentContent, ResendAttachment};
#[cfg(feature = "http")]
pub use client::ResendClient;
pub use client::{EmailClient, ResendApiError, SendEmailRequest, SendEmailResponse};
pub use error::{status_code_for, MailError, RESEND_ERROR_CODES_BY_KEY};
pub use message::MailMessage;
pub use transport::{SendCallback, SentMessageInfo, Transport};
