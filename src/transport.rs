//! Transport trait: the inbound contract a mail library drives.

use async_trait::async_trait;

use crate::error::MailError;
use crate::message::MailMessage;

/// Opaque success payload returned by the remote client.
pub type SentMessageInfo = serde_json::Value;

/// Completion callback for [`Transport::send`].
///
/// Called exactly once, with either the remote payload or the error.
pub type SendCallback = Box<dyn FnOnce(Result<SentMessageInfo, MailError>) + Send + 'static>;

/// A pluggable delivery mechanism for composed messages.
///
/// # Example
///
/// ```ignore
/// use resend_transport::{MailMessage, Transport};
/// use resend_transport::providers::{ResendTransport, ResendTransportOptions};
///
/// let transport = ResendTransport::new(ResendTransportOptions::new("re_xxxxx"));
///
/// let message = MailMessage::new()
///     .from("sender@example.com")
///     .to("recipient@example.com")
///     .subject("Hello")
///     .text("World");
///
/// transport.send(&message, Box::new(|result| match result {
///     Ok(info) => println!("sent: {info}"),
///     Err(err) => eprintln!("failed: {err}"),
/// }));
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Dispatch a message and report the outcome through `callback`.
    ///
    /// Never blocks on the network. Failures that are known before the
    /// remote call invoke the callback before `send` returns.
    fn send(&self, message: &MailMessage, callback: SendCallback);

    /// Dispatch a message and await the outcome.
    async fn deliver(&self, message: &MailMessage) -> Result<SentMessageInfo, MailError>;

    /// Transport name (for logging/debugging).
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// Transport version.
    fn version(&self) -> &'static str {
        crate::VERSION
    }
}
