//! Transport implementations.
//!
//! Each provider implements the [`Transport`](crate::Transport) trait.
//!
//! ## Available Providers
//!
//! | Provider | Client | Description |
//! |----------|--------|-------------|
//! | [`ResendTransport`] | any [`EmailClient`](crate::EmailClient), [`ResendClient`](crate::ResendClient) with feature `http` | Resend API |

mod resend;
pub use resend::{ResendTransport, ResendTransportOptions};
