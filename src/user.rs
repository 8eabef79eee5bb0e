//! The user identity record carried in event sender/target slots.

use chrono::{DateTime, Utc};

/// One IRC user (or server) identity.
///
/// Senders always have either a `nickname` or a dotted `address`; targets may
/// be entirely default when the event has no subject.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Nickname, empty for pure server senders.
    pub nickname: String,
    /// Display alias, distinct from the nickname (Twitch `display-name`).
    pub alias: String,
    /// Ident/username portion of `nick!ident@host`.
    pub ident: String,
    /// Host portion of the prefix, or the bare server address.
    pub address: String,
    /// Services account the user is logged in as.
    pub account: String,
    /// Badge metadata (Twitch), raw.
    pub badge: String,
    /// Preferred colour (Twitch), hex without `#`.
    pub colour: String,
    /// Set when the identity matches a known network service.
    pub special: bool,
    /// When this user was last WHOISed, if ever.
    pub last_whois: Option<DateTime<Utc>>,
    /// Reference count for consumers that share one record across channels.
    /// The parser itself never touches it.
    pub refcount: usize,
}

impl User {
    /// A user known only by nickname.
    pub fn from_nickname(nickname: &str) -> User {
        User {
            nickname: nickname.to_string(),
            ..User::default()
        }
    }

    /// True when this identity is a server rather than a client: no nickname,
    /// dotted address.
    pub fn is_server(&self) -> bool {
        self.nickname.is_empty() && self.address.contains('.')
    }

    /// True when every identifying field is empty.
    pub fn is_empty(&self) -> bool {
        self.nickname.is_empty() && self.address.is_empty() && self.ident.is_empty()
    }
}

/// Known network services, matched against ident/host pairs.
///
/// Kept as data so a network can be added without touching parser control
/// flow.
const KNOWN_SERVICES: &[(&str, &str)] = &[
    ("service", "rizon.net"),
    ("services", "services.dal.net"),
    ("service", "swiftirc.net"),
];

/// Host suffixes whose every user is a service.
const SERVICE_HOST_SUFFIXES: &[&str] = &[".quakenet.org"];

/// Host prefixes that mark the whole host as a services box.
const SERVICE_HOST_PREFIXES: &[&str] = &["services."];

/// Whether an ident/host pair belongs to a known network service.
pub fn is_known_service(ident: &str, address: &str) -> bool {
    if KNOWN_SERVICES
        .iter()
        .any(|&(i, a)| ident == i && address.ends_with(a))
    {
        return true;
    }
    if SERVICE_HOST_SUFFIXES.iter().any(|s| address.ends_with(s)) {
        return true;
    }
    SERVICE_HOST_PREFIXES.iter().any(|p| address.starts_with(p))
}
