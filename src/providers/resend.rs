//! Resend transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use resend_transport::providers::{ResendTransport, ResendTransportOptions};
//!
//! let transport = ResendTransport::new(ResendTransportOptions::new("re_xxxxx"));
//! ```
//!
//! ## Translation
//!
//! | Message field | Resend field |
//! |---------------|--------------|
//! | `from` | `from`, as `Name <address>` when a name is set |
//! | `to`, `cc`, `bcc` | address strings, names dropped |
//! | `subject`, `html`, `text` | as is, `""` when absent |
//! | `attachments` | `{filename, content}` with base64 content |
//!
//! Embedded API errors are reported as [`MailError::RemoteApi`] with the
//! status from [`RESEND_ERROR_CODES_BY_KEY`](crate::RESEND_ERROR_CODES_BY_KEY).

use async_trait::async_trait;
use serde::Deserialize;
use std::env;
use std::sync::Arc;

use crate::address::{to_resend_addresses, to_resend_from_address};
use crate::attachment::to_resend_attachments;
use crate::client::{EmailClient, SendEmailRequest, SendEmailResponse};
use crate::error::MailError;
use crate::message::MailMessage;
use crate::transport::{SendCallback, SentMessageInfo, Transport};

/// Configuration for [`ResendTransport`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResendTransportOptions {
    /// Resend API key; an empty key is rejected by the API itself
    pub api_key: String,
    /// Override for the API base URL
    pub base_url: Option<String>,
}

impl ResendTransportOptions {
    /// Options with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Set a custom base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Read `RESEND_API_KEY` and `RESEND_BASE_URL` from the environment.
    ///
    /// A missing key becomes `""`.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("RESEND_API_KEY").unwrap_or_default(),
            base_url: env::var("RESEND_BASE_URL").ok(),
        }
    }
}

/// Transport delivering messages through the Resend API.
///
/// Holds nothing but the client, so one instance can serve any number of
/// concurrent sends.
#[derive(Clone)]
pub struct ResendTransport {
    client: Arc<dyn EmailClient>,
}

impl ResendTransport {
    /// Create a transport backed by [`ResendClient`](crate::ResendClient).
    #[cfg(feature = "http")]
    pub fn new(options: ResendTransportOptions) -> Self {
        let mut client = crate::client::ResendClient::new(options.api_key);
        if let Some(base_url) = options.base_url {
            client = client.base_url(base_url);
        }
        Self::with_client(client)
    }

    /// Factory form of [`ResendTransport::new`].
    #[cfg(feature = "http")]
    pub fn make_transport(options: ResendTransportOptions) -> Self {
        Self::new(options)
    }

    /// Create a transport on top of any [`EmailClient`].
    pub fn with_client(client: impl EmailClient + 'static) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Create a transport sharing an existing client.
    pub fn with_shared_client(client: Arc<dyn EmailClient>) -> Self {
        Self { client }
    }

    /// Translate a message into the Resend request body.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` - no `to` or no `from`
    /// - `InvalidAttachment`, `UnsupportedAttachmentContent` - see
    ///   [`to_resend_attachments`]
    pub fn build_request(&self, message: &MailMessage) -> Result<SendEmailRequest, MailError> {
        if !message.has_required_fields() {
            return Err(MailError::MissingRequiredField);
        }

        Ok(SendEmailRequest {
            subject: message.subject.clone().unwrap_or_default(),
            from: to_resend_from_address(message.from.as_ref()),
            to: to_resend_addresses(message.to.as_ref()),
            cc: to_resend_addresses(message.cc.as_ref()),
            bcc: to_resend_addresses(message.bcc.as_ref()),
            html: message.html.clone().unwrap_or_default(),
            text: message.text.clone().unwrap_or_default(),
            attachments: to_resend_attachments(message.attachments.as_deref())?,
        })
    }
}

async fn dispatch(
    client: &dyn EmailClient,
    request: &SendEmailRequest,
) -> Result<SentMessageInfo, MailError> {
    tracing::debug!(
        to = request.to.len(),
        cc = request.cc.len(),
        bcc = request.bcc.len(),
        attachments = request.attachments.len(),
        "Dispatching email to Resend"
    );

    match client.send_email(request).await {
        Ok(response) => into_result(response),
        Err(err) => {
            tracing::error!(error = %err, "Resend request failed");
            Err(err)
        }
    }
}

fn into_result(response: SendEmailResponse) -> Result<SentMessageInfo, MailError> {
    if let Some(error) = response.error {
        let err = MailError::remote_api(error.name, error.message);
        tracing::warn!(
            status = ?err.status(),
            error_name = err.name(),
            "Resend rejected email"
        );
        return Err(err);
    }

    Ok(response.data.unwrap_or_default())
}

#[async_trait]
impl Transport for ResendTransport {
    fn send(&self, message: &MailMessage, callback: SendCallback) {
        let request = match self.build_request(message) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(error = %err, "Email rejected before dispatch");
                return callback(Err(err));
            }
        };

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => return callback(Err(MailError::NoRuntime)),
        };

        let client = Arc::clone(&self.client);
        handle.spawn(async move {
            callback(dispatch(client.as_ref(), &request).await);
        });
    }

    async fn deliver(&self, message: &MailMessage) -> Result<SentMessageInfo, MailError> {
        let request = self.build_request(message)?;
        dispatch(self.client.as_ref(), &request).await
    }

    fn name(&self) -> &'static str {
        "ResendMailTransport"
    }
}
