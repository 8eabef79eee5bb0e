//! CTCP payload detection and dispatch.
//!
//! CTCP tunnels commands inside PRIVMSG/NOTICE bodies between `\x01` bytes.
//! Dispatch is a static name table; the source-language trick of iterating
//! an enum at compile time reduces to an ordinary lookup here.

use crate::event::EventKind;

/// The CTCP delimiter byte.
pub const DELIMITER: char = '\x01';

/// Split a CTCP-wrapped body into command token and arguments.
///
/// Returns `None` when `content` is not wrapped in `\x01` on both ends.
/// The arguments are empty for bare commands like `\x01VERSION\x01`.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let inner = content
        .strip_prefix(DELIMITER)?
        .strip_suffix(DELIMITER)?;
    match inner.find(' ') {
        Some(pos) => Some((&inner[..pos], &inner[pos + 1..])),
        None => Some((inner, "")),
    }
}

/// CTCP command name to event kind.
///
/// `ACTION` is absent on purpose; the PRIVMSG branch turns it into `EMOTE`
/// before ever consulting this table. Unknown commands return `None` and the
/// caller logs.
pub fn kind_of(token: &str) -> Option<EventKind> {
    use EventKind::*;
    let kind = match token {
        "VERSION" => CTCP_VERSION,
        "TIME" => CTCP_TIME,
        "PING" => CTCP_PING,
        "CLIENTINFO" => CTCP_CLIENTINFO,
        "DCC" => CTCP_DCC,
        "SOURCE" => CTCP_SOURCE,
        "USERINFO" => CTCP_USERINFO,
        "FINGER" => CTCP_FINGER,
        "LAG" => CTCP_LAG,
        "AVATAR" => CTCP_AVATAR,
        "SLOTS" => CTCP_SLOTS,
        _ => return None,
    };
    Some(kind)
}
