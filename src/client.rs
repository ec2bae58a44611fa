//! Remote email client: the outbound side of the transport.
//!
//! [`EmailClient`] is the seam between the transport and the network. The
//! transport only ever talks to an `Arc<dyn EmailClient>`, so `#[async_trait]`
//! is used instead of native async traits to keep the trait object-safe.
//!
//! [`ResendClient`] (feature `http`) is the reqwest-backed implementation
//! talking to the Resend API. Any other implementation, such as an in-memory
//! stub in tests, can be plugged in with
//! [`ResendTransport::with_client`](crate::providers::ResendTransport::with_client).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attachment::ResendAttachment;
use crate::error::MailError;

/// Request body of the Resend "send email" operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendEmailRequest {
    pub subject: String,
    pub from: String,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub html: String,
    pub text: String,
    pub attachments: Vec<ResendAttachment>,
}

/// Error object embedded in an otherwise delivered response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendApiError {
    pub name: String,
    pub message: String,
}

/// Outcome of a call that reached the API: exactly one of `data`/`error` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<ResendApiError>,
}

impl SendEmailResponse {
    /// A successful response carrying `data`.
    pub fn data(data: Value) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// A response carrying an embedded API error.
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(ResendApiError {
                name: name.into(),
                message: message.into(),
            }),
        }
    }
}

/// Client able to perform the "send email" operation.
#[async_trait]
pub trait EmailClient: Send + Sync {
    /// Send one email.
    ///
    /// API-level failures come back as `Ok` with `error` set. `Err` is
    /// reserved for failures where no API answer was obtained.
    async fn send_email(&self, request: &SendEmailRequest) -> Result<SendEmailResponse, MailError>;
}

#[cfg(feature = "http")]
pub use self::http::ResendClient;

#[cfg(feature = "http")]
mod http {
    use async_trait::async_trait;
    use reqwest::Client;

    use super::{EmailClient, ResendApiError, SendEmailRequest, SendEmailResponse};
    use crate::error::MailError;

    const RESEND_API_URL: &str = "https://api.resend.com";

    /// Resend API client.
    ///
    /// ```rust,ignore
    /// use resend_transport::ResendClient;
    ///
    /// let client = ResendClient::new("re_xxxxx");
    /// ```
    pub struct ResendClient {
        api_key: String,
        client: Client,
        base_url: String,
    }

    impl ResendClient {
        /// Create a new client with the given API key.
        pub fn new(api_key: impl Into<String>) -> Self {
            Self::with_client(api_key, Client::new())
        }

        /// Create with a custom reqwest client.
        pub fn with_client(api_key: impl Into<String>, client: Client) -> Self {
            Self {
                api_key: api_key.into(),
                client,
                base_url: RESEND_API_URL.to_string(),
            }
        }

        /// Set a custom base URL (for testing).
        pub fn base_url(mut self, url: impl Into<String>) -> Self {
            self.base_url = url.into();
            self
        }
    }

    #[async_trait]
    impl EmailClient for ResendClient {
        async fn send_email(
            &self,
            request: &SendEmailRequest,
        ) -> Result<SendEmailResponse, MailError> {
            let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
            let mut req = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .header("User-Agent", format!("resend-transport/{}", crate::VERSION));

            // Without a key the API itself answers `missing_api_key`.
            if !self.api_key.is_empty() {
                req = req.header("Authorization", format!("Bearer {}", self.api_key));
            }

            let response = req.json(request).send().await?;
            let status = response.status();

            if status.is_success() {
                let data = response.json().await?;
                return Ok(SendEmailResponse::data(data));
            }

            let body = response.text().await?;
            let error = serde_json::from_str::<ResendApiError>(&body).unwrap_or_else(|_| {
                ResendApiError {
                    name: "application_error".to_string(),
                    message: format!(
                        "Unexpected response from Resend API (status {})",
                        status.as_u16()
                    ),
                }
            });
            Ok(SendEmailResponse {
                data: None,
                error: Some(error),
            })
        }
    }
}
