//! Stage 4: per-kind disassembly of everything after the typestring.
//!
//! IRC never settled on one argument grammar, so this is a wide switch where
//! every arm is a small parser for one line shape. The arms also fold
//! discovered server facts (ISUPPORT keys, MYINFO daemon strings, our own
//! WELCOME nickname echo) back into the handles, which is how the parser's
//! future behaviour adapts to the network it is reading.

use tracing::warn;

use crate::casemap::irc_eq;
use crate::ctcp;
use crate::error::ValueError;
use crate::event::{Event, EventKind, Role};
use crate::isupport::{self, ChanModes, PrefixSpec};
use crate::numerics::Daemon;
use crate::scan::{advance, take_rest};
use crate::state::{BotState, ServerState};
use crate::validation::{is_known_network, is_valid_channel, network_of_address, strip_mode_sign};

/// Services NOTICE lines confirming a successful authentication, one
/// sentinel per network.
const AUTH_SUCCESS_SENTINELS: &[&str] = &[
    // freenode NickServ
    "You are now identified for",
    // Rizon
    "Password accepted - you are now recognized.",
    // QuakeNet Q
    "You are now logged in as",
    // GameSurge AuthServ
    "I recognize you.",
];

/// Failure counterparts.
const AUTH_FAILURE_SENTINELS: &[&str] = &[
    // freenode
    "Invalid password for",
    // Rizon
    "Password incorrect.",
    // QuakeNet
    "Username or password incorrect.",
    // GameSurge
    "Could not find your account",
];

/// Lines asking us to identify before proceeding.
const AUTH_CHALLENGE_SENTINELS: &[&str] = &[
    "This nickname is registered.",
    "This nickname is registered and protected.",
];

/// Nicknames that are services on effectively every network.
const SERVICE_NICKNAMES: &[&str] = &["NickServ", "ChanServ", "MemoServ", "AuthServ", "Q", "X"];

pub(super) fn parse(
    event: &mut Event,
    cursor: &mut &str,
    server: &mut ServerState,
    bot: &mut BotState,
) {
    use EventKind::*;

    match event.kind {
        NOTICE => {
            let (head, trailer) = split_trailer(cursor);
            if is_valid_channel(head, server) {
                event.channel = head.to_string();
            }
            event.content = trailer.to_string();

            if from_services(event) {
                if AUTH_SUCCESS_SENTINELS.iter().any(|s| trailer.contains(s)) {
                    event.kind = AUTH_SUCCESS;
                } else if AUTH_FAILURE_SENTINELS.iter().any(|s| trailer.contains(s)) {
                    event.kind = AUTH_FAILURE;
                } else if AUTH_CHALLENGE_SENTINELS.iter().any(|s| trailer.contains(s)) {
                    event.kind = AUTH_CHALLENGE;
                }
            }

            if server.resolved_address.is_empty() && trailer.starts_with("***") {
                let name = if !event.sender.nickname.is_empty() {
                    &event.sender.nickname
                } else {
                    &event.sender.address
                };
                if !name.is_empty() {
                    server.resolved_address = name.clone();
                    server.updated = true;
                }
            }
        }

        JOIN => {
            let (head, trailer) = split_trailer(cursor);
            if head.is_empty() {
                event.channel = trailer.to_string();
            } else {
                let mut h = head;
                event.channel = next_token(&mut h).to_string();
                if !h.is_empty() {
                    // Extended join: account and real name follow.
                    if h != "*" {
                        event.sender.account = h.to_string();
                    }
                    event.content = trailer.to_string();
                }
            }
            if is_self(&event.sender.nickname, bot) {
                event.kind = SELFJOIN;
            }
        }

        PART => {
            let (head, trailer) = split_trailer(cursor);
            if head.is_empty() {
                event.channel = trailer.to_string();
            } else {
                event.channel = head.to_string();
                event.content = strip_quotes(trailer).to_string();
            }
            if is_self(&event.sender.nickname, bot) {
                event.kind = SELFPART;
            }
        }

        QUIT => {
            let (head, trailer) = split_trailer(cursor);
            let reason = if trailer.is_empty() { head } else { trailer };
            let reason = strip_quotes(reason);
            let reason = reason.strip_prefix("Quit: ").unwrap_or(reason);
            event.content = reason.to_string();
            if is_self(&event.sender.nickname, bot) {
                event.kind = SELFQUIT;
            }
        }

        NICK => {
            let (head, trailer) = split_trailer(cursor);
            let new_nick = if head.is_empty() { trailer } else { head };
            event.target.nickname = new_nick.to_string();
            event.content = new_nick.to_string();
            if is_self(&event.sender.nickname, bot) {
                event.kind = SELFNICK;
                bot.nickname = new_nick.to_string();
                bot.updated = true;
            }
        }

        PRIVMSG => {
            let (head, trailer) = split_trailer(cursor);
            event.content = trailer.to_string();
            if is_valid_channel(head, server) {
                event.kind = CHAN;
                event.channel = head.to_string();
            } else {
                event.kind = QUERY;
                event.target.nickname = head.to_string();
            }

            if let Some((command, args)) = ctcp::split(trailer) {
                if command == "ACTION" {
                    event.kind = EMOTE;
                    event.content = args.to_string();
                } else {
                    match ctcp::kind_of(command) {
                        Some(kind) => {
                            event.kind = kind;
                            event.content = args.to_string();
                            event.aux = command.to_string();
                        }
                        None => warn!(command, "unknown CTCP command"),
                    }
                }
            }
        }

        MODE => {
            let first = next_token(cursor);
            if is_valid_channel(first, server) {
                event.kind = CHANMODE;
                event.channel = first.to_string();
                if !cursor.is_empty() {
                    let modes = next_token(cursor);
                    event.aux = modes.strip_prefix(':').unwrap_or(modes).to_string();
                    if !cursor.is_empty() {
                        event.target.nickname = strip_mode_sign(next_token(cursor)).to_string();
                    }
                }
            } else {
                event.target.nickname = first.to_string();
                let (head, trailer) = split_trailer(cursor);
                event.aux = if head.is_empty() { trailer } else { head }.to_string();
                event.kind = if is_self(first, bot) {
                    SELFMODE
                } else {
                    USERMODE
                };
            }
        }

        KICK => {
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            event.channel = next_token(&mut h).to_string();
            event.target.nickname = h.to_string();
            event.content = trailer.to_string();
            if is_self(&event.target.nickname, bot) {
                event.kind = SELFKICK;
            }
        }

        TOPIC => {
            let (head, trailer) = split_trailer(cursor);
            event.channel = head.to_string();
            event.content = trailer.to_string();
        }

        INVITE => {
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            event.target.nickname = next_token(&mut h).to_string();
            event.channel = if h.is_empty() { trailer } else { h }.to_string();
        }

        AWAY | WALLOPS => {
            let (head, trailer) = split_trailer(cursor);
            event.content = if trailer.is_empty() { head } else { trailer }.to_string();
        }

        CHGHOST => {
            event.aux = next_token(cursor).to_string();
            event.content = take_rest(cursor).to_string();
        }

        ACCOUNT => {
            let account = next_token(cursor);
            if account == "*" {
                event.sender.account.clear();
            } else {
                event.sender.account = account.to_string();
                event.content = account.to_string();
            }
        }

        CAP => {
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            // `*` before registration, our bouncer id after.
            let client = next_token(&mut h);
            let sub = if h.is_empty() { client } else { next_token(&mut h) };
            event.aux = sub.to_string();
            event.content = trailer.to_string();
        }

        PING | PONG | AUTHENTICATE | ERROR => {
            let (head, trailer) = split_trailer(cursor);
            event.content = if trailer.is_empty() { head } else { trailer }.to_string();
        }

        WELCOME => {
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            let nick = next_token(&mut h);
            event.target.nickname = nick.to_string();
            event.content = trailer.to_string();
            if !nick.is_empty() && nick != bot.nickname {
                // The server's echo is authoritative; it may have truncated
                // or renamed us.
                bot.nickname = nick.to_string();
                bot.updated = true;
            }
            if server.resolved_address.is_empty() && !event.sender.address.is_empty() {
                server.resolved_address = event.sender.address.clone();
                server.updated = true;
            }
        }

        MYINFO => {
            // <self> <servername> <daemonstring> <usermodes> <chanmodes>
            let (head, trailer) = split_trailer(cursor);
            let mut h = if head.is_empty() { trailer } else { head };
            let _own = next_token(&mut h);
            let servername = next_token(&mut h);
            let daemonstring = next_token(&mut h);
            event.aux = next_token(&mut h).to_string();
            event.content = daemonstring.to_string();

            if !servername.is_empty() {
                server.resolved_address = servername.to_string();
            }
            if !daemonstring.is_empty() {
                server.daemonstring = daemonstring.to_string();
                server.daemon = Daemon::from_daemonstring(daemonstring);
            }
            server.updated = true;
        }

        ISUPPORT => {
            let (head, trailer) = split_trailer(cursor);
            event.content = trailer.to_string();
            let mut h = head;
            let own = next_token(&mut h);
            event.target.nickname = own.to_string();
            apply_isupport(h, server);
        }

        RPL_NAMREPLY => {
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            event.target.nickname = next_token(&mut h).to_string();
            // A names-visibility symbol may precede the channel.
            let mut chan = next_token(&mut h);
            if matches!(chan, "=" | "*" | "@") {
                chan = next_token(&mut h);
            }
            event.channel = chan.to_string();
            event.content = trailer.trim_end().to_string();
        }

        RPL_TOPIC | RPL_ENDOFNAMES | CHANNELURL | NEEDAUTHTOJOIN | ERR_INVITEONLYCHAN => {
            // <owner> <channel> :<content>
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            event.target.nickname = next_token(&mut h).to_string();
            event.channel = next_token(&mut h).to_string();
            event.content = trailer.to_string();
        }

        RPL_WHOISUSER => {
            // <self> <nick> <ident> <host> * :<realname>
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            let _own = next_token(&mut h);
            event.target.nickname = next_token(&mut h).to_string();
            event.target.ident = next_token(&mut h).to_string();
            event.target.address = next_token(&mut h).to_string();
            event.content = trailer.to_string();
        }

        RPL_WHOISSERVER => {
            // <self> <nick> <server> :<server info>
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            let _own = next_token(&mut h);
            event.target.nickname = next_token(&mut h).to_string();
            event.aux = next_token(&mut h).to_string();
            event.content = trailer.to_string();
        }

        RPL_WHOISIDLE => {
            // <self> <nick> <idle> <signon> :seconds idle, signon time
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            let _own = next_token(&mut h);
            event.target.nickname = next_token(&mut h).to_string();
            event.aux = next_token(&mut h).to_string();
            event.content = trailer.to_string();
        }

        RPL_WHOISACCOUNT => {
            // <self> <nick> <account> :is logged in as
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            let _own = next_token(&mut h);
            event.target.nickname = next_token(&mut h).to_string();
            event.aux = h.to_string();
            event.content = trailer.to_string();
        }

        RPL_ENDOFWHOIS | RPL_WHOISREGNICK | RPL_WHOISSECURE | ERR_NOSUCHNICK
        | RPL_WHOISHOST | RPL_WHOISCHANNELS | ERR_NICKNAMEINUSE => {
            // <self> <nick> :<text>
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            let _own = next_token(&mut h);
            event.target.nickname = next_token(&mut h).to_string();
            event.content = trailer.trim_end().to_string();
        }

        ERR_BANONCHAN => {
            // <self> <nick> <channel> :<text>
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            let _own = next_token(&mut h);
            event.target.nickname = next_token(&mut h).to_string();
            event.channel = next_token(&mut h).to_string();
            event.content = trailer.to_string();
        }

        TOCONNECTTYPE => {
            // <self> :To connect type /QUOTE PONG <cookie>
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            event.target.nickname = next_token(&mut h).to_string();
            let mut words = trailer.rsplitn(3, ' ');
            event.aux = words.next().unwrap_or("").to_string();
            event.content = words.next().unwrap_or("").to_string();
        }

        RPL_HOSTHIDDEN => {
            // <self> <host> :<text>
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            event.target.nickname = next_token(&mut h).to_string();
            event.aux = next_token(&mut h).to_string();
            event.content = trailer.to_string();
        }

        RPL_HELPSTART | RPL_HELPTXT | RPL_ENDOFHELP => {
            // <self> <topic> :<text>
            let (head, trailer) = split_trailer(cursor);
            let mut h = head;
            event.target.nickname = next_token(&mut h).to_string();
            event.aux = next_token(&mut h).to_string();
            event.content = trailer.to_string();
        }

        USERNOTICE => {
            let (head, trailer) = split_trailer(cursor);
            event.channel = if head.is_empty() { trailer } else { head }.to_string();
            if !head.is_empty() {
                event.content = trailer.to_string();
            }
        }

        ROOMSTATE | USERSTATE | GLOBALUSERSTATE => {
            let (head, trailer) = split_trailer(cursor);
            event.channel = if head.is_empty() { trailer } else { head }.to_string();
        }

        CLEARCHAT => {
            let (head, trailer) = split_trailer(cursor);
            event.channel = if head.is_empty() { trailer } else { head }.to_string();
            if !head.is_empty() && !trailer.is_empty() {
                event.target.nickname = trailer.to_string();
            }
            // TODO: verify whether non-Twitch daemons using CLEARCHAT want a
            // different sender role here.
            event.role = Role::Server;
        }

        HOSTTARGET => {
            let (head, trailer) = split_trailer(cursor);
            event.channel = head.to_string();
            if let Some(viewers) = trailer.strip_prefix("- ") {
                event.kind = HOSTEND;
                event.aux = viewers.to_string();
            } else if trailer == "-" {
                event.kind = HOSTEND;
            } else {
                event.kind = HOSTSTART;
                let mut t = trailer;
                event.content = next_token(&mut t).to_string();
                if t != "-" {
                    event.aux = t.to_string();
                }
            }
        }

        WHISPER => {
            let (head, trailer) = split_trailer(cursor);
            event.target.nickname = head.to_string();
            event.content = trailer.to_string();
        }

        RECONNECT => {}

        _ => {
            if matches!(event.kind, NUMERIC | UNSET) {
                warn!(num = event.num, raw = %event.raw, "unhandled line");
            }
            // Generic two-arm fallback: ` :` splits target from content,
            // otherwise the first space splits target from aux.
            if let Some(stripped) = cursor.strip_prefix(':') {
                event.content = stripped.trim_end().to_string();
                *cursor = "";
            } else if cursor.contains(" :") {
                let head = advance(cursor, " :");
                event.target.nickname = head.to_string();
                event.content = take_rest(cursor).trim_end().to_string();
            } else {
                let first = next_token(cursor);
                event.target.nickname = first.to_string();
                event.aux = take_rest(cursor).to_string();
            }
        }
    }
}

/// Next space-delimited token, or the whole remainder.
fn next_token<'a>(cursor: &mut &'a str) -> &'a str {
    let token = advance(cursor, " ");
    if token.is_empty() && !cursor.is_empty() {
        take_rest(cursor)
    } else {
        token
    }
}

/// Split off the ` :` trailer, consuming the whole cursor.
///
/// Returns `(head, trailer)`; a cursor that opens with `:` is all trailer,
/// one without any ` :` is all head.
fn split_trailer<'a>(cursor: &mut &'a str) -> (&'a str, &'a str) {
    if let Some(stripped) = cursor.strip_prefix(':') {
        *cursor = "";
        return ("", stripped);
    }
    match cursor.find(" :") {
        Some(pos) => {
            let head = &cursor[..pos];
            let trailer = &cursor[pos + 2..];
            *cursor = "";
            (head, trailer)
        }
        None => (take_rest(cursor), ""),
    }
}

/// Strip one pair of surrounding double quotes.
fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s)
}

/// Whether `nickname` is us. Empty nicknames never are, so a sender-less
/// line cannot fabricate a self-event.
fn is_self(nickname: &str, bot: &BotState) -> bool {
    !nickname.is_empty() && irc_eq(nickname, &bot.nickname)
}

/// Whether this NOTICE plausibly came from network services.
fn from_services(event: &Event) -> bool {
    event.sender.special
        || SERVICE_NICKNAMES
            .iter()
            .any(|s| irc_eq(s, &event.sender.nickname))
}

/// Parse an ISUPPORT value that must be numeric.
fn numeric_value(key: &'static str, value: Option<&str>) -> Result<usize, ValueError> {
    let value = value.unwrap_or("");
    value.parse().map_err(|_| ValueError::NotANumber {
        key,
        value: value.to_string(),
    })
}

/// Fold an ISUPPORT token list into the server state.
///
/// A value that fails to parse skips only its own key; the other keys on the
/// line still apply.
fn apply_isupport(head: &str, server: &mut ServerState) {
    for token in isupport::tokens(head) {
        match token.key {
            "NETWORK" => match token.value {
                Some(value) if is_known_network(value) => {
                    server.network = value.to_string();
                    server.updated = true;
                }
                Some(value) => {
                    let err = ValueError::UnknownNetwork(value.to_string());
                    warn!(%err, "skipping ISUPPORT key");
                }
                None => warn!("NETWORK with no value"),
            },
            "NICKLEN" => match numeric_value("NICKLEN", token.value) {
                Ok(len) => {
                    server.max_nick_length = len;
                    server.updated = true;
                }
                Err(err) => warn!(%err, "skipping ISUPPORT key"),
            },
            "CHANNELLEN" => match numeric_value("CHANNELLEN", token.value) {
                Ok(len) => {
                    server.max_channel_length = len;
                    server.updated = true;
                }
                Err(err) => warn!(%err, "skipping ISUPPORT key"),
            },
            "CHANTYPES" => {
                if let Some(value) = token.value {
                    server.chantypes = value.to_string();
                    server.updated = true;
                }
            }
            "PREFIX" => match token.value.and_then(PrefixSpec::parse) {
                Some(spec) => {
                    server.prefix_chars = spec.pairs().collect();
                    server.updated = true;
                }
                None => warn!(value = ?token.value, "unparsable PREFIX"),
            },
            "CHANMODES" => match token.value.and_then(ChanModes::parse) {
                Some(modes) => {
                    server.a_modes = modes.a.to_string();
                    server.b_modes = modes.b.to_string();
                    server.c_modes = modes.c.to_string();
                    server.d_modes = modes.d.to_string();
                    server.updated = true;
                }
                None => warn!(value = ?token.value, "unparsable CHANMODES"),
            },
            // Recognised but not acted on here.
            _ => {}
        }
    }

    if server.network.is_empty() {
        let address = if !server.resolved_address.is_empty() {
            &server.resolved_address
        } else {
            &server.address
        };
        let guess = network_of_address(address);
        if guess != "unknown" {
            server.network = guess.to_string();
            server.updated = true;
        }
    }
}
