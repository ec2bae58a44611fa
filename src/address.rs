//! Address types and their Resend normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An email address, either bare or with a display name.
///
/// # Examples
///
/// ```
/// use resend_transport::Address;
///
/// // From email string
/// let addr: Address = "user@example.com".into();
/// assert_eq!(addr.address(), "user@example.com");
/// assert_eq!(addr.name(), None);
///
/// // From tuple (name, email)
/// let addr: Address = ("Alice", "alice@example.com").into();
/// assert_eq!(addr.address(), "alice@example.com");
/// assert_eq!(addr.name(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Address {
    /// Bare email address (e.g., "alice@example.com")
    Email(String),
    /// Address with display name
    Mailbox { name: String, address: String },
}

impl Address {
    /// Create a bare address.
    pub fn new(address: impl Into<String>) -> Self {
        Self::Email(address.into())
    }

    /// Create an address with a display name.
    pub fn with_name(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::Mailbox {
            name: name.into(),
            address: address.into(),
        }
    }

    /// The email address part.
    pub fn address(&self) -> &str {
        match self {
            Self::Email(address) => address,
            Self::Mailbox { address, .. } => address,
        }
    }

    /// The display name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Email(_) => None,
            Self::Mailbox { name, .. } => Some(name),
        }
    }

    /// Format as "Name <email>" or just "email" for bare addresses.
    ///
    /// The name is not quoted or escaped.
    pub fn formatted(&self) -> String {
        match self {
            Self::Email(address) => address.clone(),
            Self::Mailbox { name, address } => format!("{} <{}>", name, address),
        }
    }

    // A bare empty string counts as no address at all.
    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, Self::Email(address) if address.is_empty())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Address {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

// (name, email)
impl<N: Into<String>, E: Into<String>> From<(N, E)> for Address {
    fn from((name, address): (N, E)) -> Self {
        Self::with_name(name, address)
    }
}

/// One address or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddressList {
    One(Address),
    Many(Vec<Address>),
}

impl AddressList {
    pub(crate) fn is_blank(&self) -> bool {
        match self {
            Self::One(address) => address.is_blank(),
            Self::Many(_) => false,
        }
    }
}

impl From<Address> for AddressList {
    fn from(address: Address) -> Self {
        Self::One(address)
    }
}

impl From<&str> for AddressList {
    fn from(address: &str) -> Self {
        Self::One(address.into())
    }
}

impl From<String> for AddressList {
    fn from(address: String) -> Self {
        Self::One(address.into())
    }
}

impl From<(&str, &str)> for AddressList {
    fn from(mailbox: (&str, &str)) -> Self {
        Self::One(mailbox.into())
    }
}

impl From<Vec<Address>> for AddressList {
    fn from(addresses: Vec<Address>) -> Self {
        Self::Many(addresses)
    }
}

impl<A: Into<Address>> FromIterator<A> for AddressList {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::Many(iter.into_iter().map(Into::into).collect())
    }
}

/// Normalize a recipient field to the plain address strings Resend expects.
///
/// Display names are dropped and input order is preserved.
///
/// ```
/// use resend_transport::{to_resend_addresses, Address, AddressList};
///
/// let list = AddressList::Many(vec![
///     "a@x.com".into(),
///     Address::with_name("n", "b@x.com"),
/// ]);
/// assert_eq!(to_resend_addresses(Some(&list)), vec!["a@x.com", "b@x.com"]);
/// assert!(to_resend_addresses(None).is_empty());
/// ```
pub fn to_resend_addresses(addresses: Option<&AddressList>) -> Vec<String> {
    match addresses {
        None => Vec::new(),
        Some(list) if list.is_blank() => Vec::new(),
        Some(AddressList::One(address)) => vec![address.address().to_string()],
        Some(AddressList::Many(addresses)) => addresses
            .iter()
            .map(|address| address.address().to_string())
            .collect(),
    }
}

/// Normalize the sender field, keeping the display name as `Name <address>`.
pub fn to_resend_from_address(address: Option<&Address>) -> String {
    address.map(Address::formatted).unwrap_or_default()
}
