//! Stage 1: sender-less lines.
//!
//! A handful of commands arrive without any `:` prefix, mostly during and
//! around registration: PING/PONG keepalives, the ERROR farewell, AUTH-phase
//! notices and SASL's AUTHENTICATE. Everything else without a sender is
//! noise worth logging.

use tracing::warn;

use crate::event::{Event, EventKind};
use crate::scan::{advance, take_rest};
use crate::state::ServerState;

pub(super) fn parse(event: &mut Event, cursor: &mut &str, server: &ServerState) {
    let mut token = advance(cursor, " ");
    if token.is_empty() {
        token = take_rest(cursor);
    }

    // The payload, with the customary `:` sigil dropped.
    let mut rest = take_rest(cursor);
    if let Some(stripped) = rest.strip_prefix(':') {
        rest = stripped;
    }

    match token {
        "PING" => {
            event.kind = EventKind::PING;
            if rest.contains('.') {
                event.sender.address = rest.to_string();
            } else {
                event.content = rest.to_string();
            }
        }
        "PONG" => {
            event.kind = EventKind::PONG;
            if rest.contains('.') {
                event.sender.address = rest.to_string();
            } else {
                event.content = rest.to_string();
            }
        }
        "ERROR" => {
            event.kind = EventKind::ERROR;
            event.content = rest.to_string();
        }
        "NOTICE" => {
            event.kind = EventKind::NOTICE;
            // Shape is `NOTICE AUTH :text` or `NOTICE * :text`; either way
            // the text is what matters.
            let mut payload = rest;
            let head = advance(&mut payload, " :");
            if !head.is_empty() || !payload.is_empty() {
                event.content = if payload.is_empty() {
                    head.to_string()
                } else {
                    payload.to_string()
                };
            } else {
                event.content = rest.to_string();
            }
            // TODO: decide whether this fallback should be limited to
            // AUTH-phase notices; for now every sender-less NOTICE gets the
            // configured server address as its sender.
            if !server.address.is_empty() {
                event.sender.address = server.address.clone();
            }
        }
        "AUTHENTICATE" => {
            event.kind = EventKind::AUTHENTICATE;
            event.content = rest.to_string();
        }
        _ => {
            warn!(token, "unknown sender-less command");
        }
    }
}
