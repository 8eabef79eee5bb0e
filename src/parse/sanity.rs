//! Post-parse sanity pass.
//!
//! The specialcases stage is sprawling enough that impossible field
//! combinations do slip out of it on exotic daemons. This pass logs the
//! ones worth knowing about and clears the one that actively misleads
//! consumers: a target that is ourselves on an event where that carries no
//! information.

use tracing::warn;

use crate::casemap::irc_eq;
use crate::event::{Event, EventKind};
use crate::state::{BotState, ServerState};

pub(super) fn check(event: &mut Event, server: &ServerState, bot: &BotState) {
    let space_tolerant = matches!(event.kind, EventKind::CHANMODE | EventKind::TOPIC);

    if !space_tolerant
        && (event.target.nickname.contains(' ') || event.channel.contains(' '))
    {
        warn!(
            kind = ?event.kind,
            target = %event.target.nickname,
            channel = %event.channel,
            "space in target or channel"
        );
    }

    if let Some(first) = event.target.nickname.chars().next() {
        if server.is_chantype(first) {
            warn!(
                kind = ?event.kind,
                target = %event.target.nickname,
                "channel-prefixed target nickname"
            );
        }
    }

    let self_target_ok = matches!(
        event.kind,
        EventKind::MODE
            | EventKind::CHANMODE
            | EventKind::WELCOME
            | EventKind::QUERY
            | EventKind::WHISPER
            | EventKind::JOIN
    );

    if !self_target_ok
        && !event.target.nickname.is_empty()
        && irc_eq(&event.target.nickname, &bot.nickname)
    {
        event.target.nickname.clear();
    }
}
