//! Stage 2: the `:`-prefix, in its three shapes.

use crate::event::Event;
use crate::scan::{advance, advance_byte, take_rest};
use crate::user;

/// Split the sender prefix off `cursor` and fill in `event.sender`.
///
/// The cursor must point just past the leading `:`. Three shapes:
/// `nick!ident@host`, a bare dotted server address, or a bare nickname.
pub(super) fn parse(event: &mut Event, cursor: &mut &str) {
    let mut prefix = advance(cursor, " ");
    if prefix.is_empty() {
        // A prefix with nothing after it; classification will fail softly
        // downstream.
        prefix = take_rest(cursor);
    }

    if prefix.contains('!') {
        let nickname = advance_byte(&mut prefix, b'!');
        let ident = advance_byte(&mut prefix, b'@');
        event.sender.nickname = nickname.to_string();
        event.sender.ident = ident.to_string();
        event.sender.address = prefix.to_string();
        event.sender.special = user::is_known_service(ident, prefix);
    } else if prefix.contains('.') {
        event.sender.address = prefix.to_string();
        event.sender.special = user::is_known_service("", prefix);
    } else {
        event.sender.nickname = prefix.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_prefix(s: &str) -> Event {
        let mut event = Event::new(s);
        let mut cursor = s;
        parse(&mut event, &mut cursor);
        event
    }

    #[test]
    fn test_full_prefix() {
        let event = parse_prefix("zorael!~NaN@some.address.org PRIVMSG x");
        assert_eq!(event.sender.nickname, "zorael");
        assert_eq!(event.sender.ident, "~NaN");
        assert_eq!(event.sender.address, "some.address.org");
        assert!(!event.sender.special);
    }

    #[test]
    fn test_server_prefix() {
        let event = parse_prefix("tepper.freenode.net 433 * nick :text");
        assert!(event.sender.nickname.is_empty());
        assert_eq!(event.sender.address, "tepper.freenode.net");
        assert!(event.sender.is_server());
    }

    #[test]
    fn test_bare_nickname() {
        let event = parse_prefix("zorael NICK kameloso");
        assert_eq!(event.sender.nickname, "zorael");
        assert!(event.sender.address.is_empty());
    }

    #[test]
    fn test_service_detection() {
        let event = parse_prefix("Q!TheQBot@CServe.quakenet.org NOTICE x :y");
        assert!(event.sender.special);

        let event = parse_prefix("NickServ!service@rizon.net NOTICE x :y");
        assert!(event.sender.special);
    }
}
