//! The staged parsing pipeline.
//!
//! ```text
//! raw line ─┬─ '@'… ── cut tags ── recurse ── twitch tag merge ──┐
//!           ├─ sender-less ── basic ─────────────────────────────┤
//!           └─ ':'… ── prefix ── typestring ── specialcases ──┬──┴── event
//!                                                             └ sanity
//! ```
//!
//! The pipeline is total: it never fails, never loops and never panics.
//! Malformed input degrades to an `UNSET` event with the raw line preserved
//! and a diagnostic logged.

mod basic;
mod prefix;
mod sanity;
mod special;

use tracing::warn;

use crate::error::FrameError;
use crate::event::{Event, EventKind};
use crate::numerics;
use crate::scan::{advance, take_rest};
use crate::state::{BotState, ServerState};
use crate::twitch;

/// Parse one raw IRC line into an event.
///
/// `raw` should have its CRLF already stripped, though a stray trailing
/// CR/LF is tolerated. The handles are read for context (own nickname,
/// daemon dialect, chantypes) and written when the line reveals server
/// facts; see the crate docs for the full list of side effects.
///
/// # Examples
///
/// ```
/// use slirc_events::parse;
/// use slirc_events::event::EventKind;
/// use slirc_events::state::{BotState, ServerState};
///
/// let mut server = ServerState::default();
/// let mut bot = BotState::with_nickname("kameloso");
///
/// let event = parse::line(
///     ":zorael!~NaN@address.tld PRIVMSG #flerrp :hello there",
///     &mut server,
///     &mut bot,
/// );
/// assert_eq!(event.kind, EventKind::CHAN);
/// assert_eq!(event.channel, "#flerrp");
/// assert_eq!(event.content, "hello there");
/// ```
pub fn line(raw: &str, server: &mut ServerState, bot: &mut BotState) -> Event {
    match classify(raw, server, bot) {
        Ok(event) => event,
        Err(err) => {
            warn!(%err, raw = %raw, "line did not classify");
            Event::new(raw)
        }
    }
}

/// The fallible inner pipeline; the public wrapper degrades its errors into
/// an `UNSET` event plus a diagnostic.
fn classify(
    raw: &str,
    server: &mut ServerState,
    bot: &mut BotState,
) -> Result<Event, FrameError> {
    let mut event = Event::new(raw);
    let trimmed = raw.trim_end_matches(['\r', '\n']);

    if trimmed.is_empty() {
        return Err(FrameError::EmptyLine);
    }

    // IRCv3 tag fast path: cut the tag block, parse the remainder as an
    // ordinary line, re-attach, then let the tag decoder refine the result.
    // The recursion is bounded by one level since the remainder cannot open
    // with another '@' block.
    if let Some(tagged) = trimmed.strip_prefix('@') {
        let mut cursor = tagged;
        let tags = advance(&mut cursor, " ");
        if tags.is_empty() || cursor.is_empty() {
            return Err(FrameError::MissingCommand);
        }
        let mut inner = line(cursor, server, bot);
        inner.raw = raw.to_string();
        inner.tags = tags.to_string();
        twitch::decode_tags(&mut inner);
        return Ok(inner);
    }

    match trimmed.strip_prefix(':') {
        Some(after) => {
            let mut cursor = after;
            prefix::parse(&mut event, &mut cursor);
            typestring(&mut event, &mut cursor, server)?;
            special::parse(&mut event, &mut cursor, server, bot);
        }
        None => {
            let mut cursor = trimmed;
            basic::parse(&mut event, &mut cursor, server);
        }
    }

    sanity::check(&mut event, server, bot);
    Ok(event)
}

/// Stage 3: classify the command token.
///
/// Digits go through the daemon-layered numeric tables; letters through the
/// command-name map. A missing token is the one hard failure; everything
/// else fails soft into `UNSET`/`NUMERIC`.
fn typestring(
    event: &mut Event,
    cursor: &mut &str,
    server: &ServerState,
) -> Result<(), FrameError> {
    let mut token = advance(cursor, " ");
    if token.is_empty() {
        token = take_rest(cursor);
    }

    if token.is_empty() {
        return Err(FrameError::PrefixOnly);
    }

    if token.as_bytes()[0].is_ascii_digit() {
        match token.parse::<u16>() {
            Ok(num) => {
                event.num = num;
                match numerics::lookup(num, server.daemon) {
                    Some(kind) => event.kind = kind,
                    None => {
                        warn!(num, daemon = ?server.daemon, "unknown numeric");
                        event.kind = EventKind::NUMERIC;
                    }
                }
            }
            Err(_) => {
                warn!(token, "malformed numeric token");
            }
        }
    } else {
        let upper = token.to_ascii_uppercase();
        match EventKind::from_command(&upper) {
            Some(kind) => event.kind = kind,
            None => {
                warn!(token, "unknown command");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Role;
    use crate::numerics::Daemon;

    fn fresh() -> (ServerState, BotState) {
        (ServerState::default(), BotState::with_nickname("kameloso"))
    }

    #[test]
    fn test_raw_preserved() {
        let (mut server, mut bot) = fresh();
        for raw in [
            "PING :irc.server.address",
            ":nick!id@host PRIVMSG #chan :hi",
            "@badge-info=;color=#FF0000 :tmi.twitch.tv USERSTATE #zorael",
            "garbage that parses to nothing",
        ] {
            let event = line(raw, &mut server, &mut bot);
            assert_eq!(event.raw, raw);
        }
    }

    #[test]
    fn test_tag_fast_path_reattaches() {
        let (mut server, mut bot) = fresh();
        let event = line(
            "@display-name=Zorael;mod=1;color=#FF0000 :tmi.twitch.tv USERSTATE #zorael",
            &mut server,
            &mut bot,
        );
        assert_eq!(event.kind, EventKind::USERSTATE);
        assert_eq!(event.channel, "#zorael");
        assert_eq!(event.tags, "display-name=Zorael;mod=1;color=#FF0000");
        assert_eq!(event.sender.alias, "Zorael");
        assert_eq!(event.role, Role::Mod);
        assert_eq!(event.colour, "FF0000");
    }

    #[test]
    fn test_numeric_classification() {
        let (mut server, mut bot) = fresh();
        let event = line(
            ":tepper.freenode.net 433 * kameloso :Nickname is already in use.",
            &mut server,
            &mut bot,
        );
        assert_eq!(event.kind, EventKind::ERR_NICKNAMEINUSE);
        assert_eq!(event.num, 433);
        assert_eq!(event.content, "Nickname is already in use.");
    }

    #[test]
    fn test_unknown_numeric_preserved() {
        let (mut server, mut bot) = fresh();
        let event = line(":server.tld 999 kameloso :strange", &mut server, &mut bot);
        assert_eq!(event.kind, EventKind::NUMERIC);
        assert_eq!(event.num, 999);
    }

    #[test]
    fn test_daemon_changes_numeric_meaning() {
        let (mut server, mut bot) = fresh();
        server.daemon = Daemon::Unreal;
        let event = line(":server.tld 600 kameloso zorael :logged on", &mut server, &mut bot);
        assert_eq!(event.kind, EventKind::RPL_LOGON);

        server.daemon = Daemon::Unknown;
        let event = line(":server.tld 600 kameloso zorael :logged on", &mut server, &mut bot);
        assert_eq!(event.kind, EventKind::NUMERIC);
    }

    #[test]
    fn test_self_events() {
        let (mut server, mut bot) = fresh();
        let event = line(":kameloso!~ident@host JOIN #flerrp", &mut server, &mut bot);
        assert_eq!(event.kind, EventKind::SELFJOIN);
        assert_eq!(event.channel, "#flerrp");

        let event = line(":zorael!~ident@host JOIN #flerrp", &mut server, &mut bot);
        assert_eq!(event.kind, EventKind::JOIN);
    }

    #[test]
    fn test_selfnick_updates_bot() {
        let (mut server, mut bot) = fresh();
        let event = line(":kameloso!~ident@host NICK :kameloso^", &mut server, &mut bot);
        assert_eq!(event.kind, EventKind::SELFNICK);
        assert_eq!(bot.nickname, "kameloso^");
        assert!(bot.updated);
    }

    #[test]
    fn test_welcome_adopts_nickname_echo() {
        let (mut server, mut bot) = fresh();
        bot.nickname = "kameloso_".to_string();
        let event = line(
            ":tepper.freenode.net 001 kameloso :Welcome to the freenode IRC Network kameloso",
            &mut server,
            &mut bot,
        );
        assert_eq!(event.kind, EventKind::WELCOME);
        assert_eq!(bot.nickname, "kameloso");
        assert!(bot.updated);
        assert_eq!(server.resolved_address, "tepper.freenode.net");
    }

    #[test]
    fn test_isupport_side_effects() {
        let (mut server, mut bot) = fresh();
        let event = line(
            ":tepper.freenode.net 005 kameloso NETWORK=freenode NICKLEN=16 \
             CHANTYPES=# PREFIX=(ov)@+ :are supported by this server",
            &mut server,
            &mut bot,
        );
        assert_eq!(event.kind, EventKind::ISUPPORT);
        assert_eq!(server.network, "freenode");
        assert_eq!(server.max_nick_length, 16);
        assert_eq!(server.chantypes, "#");
        assert!(server.updated);
    }

    #[test]
    fn test_myinfo_sets_daemon() {
        let (mut server, mut bot) = fresh();
        line(
            ":irc.rizon.io 004 kameloso irc.rizon.io plexus-4(hybrid-8.1.20) CDGNRSUWagilopqrswxyz BCIMNORSabcehiklmnopqstvz Iabehkloqv",
            &mut server,
            &mut bot,
        );
        assert_eq!(server.daemon, Daemon::Rizon);
        assert_eq!(server.daemonstring, "plexus-4(hybrid-8.1.20)");
        assert_eq!(server.resolved_address, "irc.rizon.io");
    }

    #[test]
    fn test_malformed_lines_are_unset() {
        let (mut server, mut bot) = fresh();
        for raw in [":", "@", "@tags-without-line", ":prefix-only", "\r\n"] {
            let event = line(raw, &mut server, &mut bot);
            assert_eq!(event.kind, EventKind::UNSET, "{:?}", raw);
            assert_eq!(event.raw, raw);
        }
    }
}
