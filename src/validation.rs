//! Channel and nickname validation, mode-sign stripping, network guessing.
//!
//! Channel and nickname rules are server-aware: length caps and the
//! channel-type prefix set come from the [`ServerState`] handle, which
//! ISUPPORT updates mid-connection. Before any ISUPPORT the RFC-ish defaults
//! in [`crate::state`] apply.

use crate::state::ServerState;

/// Characters never valid inside a channel name: space, comma, BEL.
const INVALID_CHANNEL_CHARS: &[char] = &[' ', ',', '\x07'];

/// Whether `s` names a channel on this server.
///
/// First char must be in the server's chantypes; total length 2 up to the
/// server's channel cap; none of the invalid characters anywhere; and no
/// further chantype char from the third position on (a doubled prefix like
/// `##linux` is fine, an embedded one is not).
pub fn is_valid_channel(s: &str, server: &ServerState) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if server.is_chantype(c) => {}
        _ => return false,
    }

    let len = s.chars().count();
    if len < 2 || len > server.max_channel_length {
        return false;
    }

    for (i, c) in chars.enumerate() {
        if INVALID_CHANNEL_CHARS.contains(&c) {
            return false;
        }
        // i counts from the second char of s.
        if i >= 1 && server.is_chantype(c) {
            return false;
        }
    }

    true
}

/// Whether `c` may appear in a nickname.
///
/// Letters, digits, and the RFC special set `[]\`_^{|}-` plus underscore.
#[inline]
pub fn is_nickname_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '\\' | '[' | ']' | '{' | '}' | '^' | '`' | '|' | '-'
        )
}

/// Whether `s` is a plausible nickname under this server's NICKLEN.
pub fn is_valid_nickname(s: &str, server: &ServerState) -> bool {
    let len = s.chars().count();
    if len == 0 || len > server.max_nick_length {
        return false;
    }
    s.chars().all(is_nickname_char)
}

/// Drop a single leading channel-status sign (`@`, `+`, `~`, `%`), if any.
pub fn strip_mode_sign(s: &str) -> &str {
    match s.as_bytes().first() {
        Some(b'@') | Some(b'+') | Some(b'~') | Some(b'%') => &s[1..],
        _ => s,
    }
}

/// Known network address suffixes. Data, not control flow, so a network is
/// one line to add.
const NETWORK_SUFFIXES: &[(&str, &str)] = &[
    (".freenode.net", "freenode"),
    (".rizon.net", "rizon"),
    (".quakenet.org", "quakenet"),
    (".undernet.org", "undernet"),
    (".gamesurge.net", "gamesurge"),
    (".twitch.tv", "twitch"),
    (".efnet.org", "efnet"),
    (".ircnet.net", "ircnet"),
    (".dal.net", "dalnet"),
    (".oftc.net", "oftc"),
    (".swiftirc.net", "swiftirc"),
    (".irchighway.net", "irchighway"),
];

/// Guess the network name from a server address by suffix.
///
/// Returns `"unknown"` when no suffix matches; ISUPPORT `NETWORK` overrides
/// the guess whenever the server announces one.
pub fn network_of_address(address: &str) -> &'static str {
    for &(suffix, network) in NETWORK_SUFFIXES {
        if address.ends_with(suffix) {
            return network;
        }
    }
    "unknown"
}

/// Whether a NETWORK value names a network we have heard of.
pub fn is_known_network(name: &str) -> bool {
    NETWORK_SUFFIXES
        .iter()
        .any(|&(_, network)| name.eq_ignore_ascii_case(network))
}
