//! Generic mail message with builder pattern.

use crate::address::{Address, AddressList};
use crate::attachment::Attachment;

/// A mail message as handed to a [`Transport`](crate::Transport).
///
/// Every field is optional; the transport decides what it requires.
///
/// ```
/// use resend_transport::MailMessage;
///
/// let message = MailMessage::new()
///     .from(("Acme", "noreply@acme.test"))
///     .to("user@example.com")
///     .to("other@example.com")
///     .subject("Hello!")
///     .text("Plain text content")
///     .html("<h1>HTML content</h1>");
/// ```
#[derive(Debug, Default)]
pub struct MailMessage {
    /// Sender address
    pub from: Option<Address>,
    /// Primary recipients
    pub to: Option<AddressList>,
    /// Carbon copy recipients
    pub cc: Option<AddressList>,
    /// Blind carbon copy recipients
    pub bcc: Option<AddressList>,
    /// Subject line
    pub subject: Option<String>,
    /// HTML body
    pub html: Option<String>,
    /// Plain text body
    pub text: Option<String>,
    /// File attachments
    pub attachments: Option<Vec<Attachment>>,
}

// First address becomes `One`, later ones turn it into `Many`.
fn push_address(list: &mut Option<AddressList>, address: Address) {
    *list = Some(match list.take() {
        None => AddressList::One(address),
        Some(AddressList::One(first)) => AddressList::Many(vec![first, address]),
        Some(AddressList::Many(mut addresses)) => {
            addresses.push(address);
            AddressList::Many(addresses)
        }
    });
}

impl MailMessage {
    /// Create a new empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address.
    pub fn from(mut self, addr: impl Into<Address>) -> Self {
        self.from = Some(addr.into());
        self
    }

    /// Add a recipient.
    pub fn to(mut self, addr: impl Into<Address>) -> Self {
        push_address(&mut self.to, addr.into());
        self
    }

    /// Replace all recipients.
    pub fn put_to(mut self, addrs: impl Into<AddressList>) -> Self {
        self.to = Some(addrs.into());
        self
    }

    /// Add a CC recipient.
    pub fn cc(mut self, addr: impl Into<Address>) -> Self {
        push_address(&mut self.cc, addr.into());
        self
    }

    /// Replace all CC recipients.
    pub fn put_cc(mut self, addrs: impl Into<AddressList>) -> Self {
        self.cc = Some(addrs.into());
        self
    }

    /// Add a BCC recipient.
    pub fn bcc(mut self, addr: impl Into<Address>) -> Self {
        push_address(&mut self.bcc, addr.into());
        self
    }

    /// Replace all BCC recipients.
    pub fn put_bcc(mut self, addrs: impl Into<AddressList>) -> Self {
        self.bcc = Some(addrs.into());
        self
    }

    /// Set the subject line.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html = Some(body.into());
        self
    }

    /// Set the plain text body.
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.text = Some(body.into());
        self
    }

    /// Add an attachment.
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.get_or_insert_with(Vec::new).push(attachment);
        self
    }

    /// True when both `to` and `from` carry a value.
    pub fn has_required_fields(&self) -> bool {
        let has_to = self.to.as_ref().is_some_and(|to| !to.is_blank());
        let has_from = self.from.as_ref().is_some_and(|from| !from.is_blank());
        has_to && has_from
    }
}
