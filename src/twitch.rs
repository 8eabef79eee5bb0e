//! Twitch-flavoured IRCv3 tag decoding.
//!
//! Twitch moves most of its semantics out of the command line and into the
//! `@key=value;…` tag section: display names, privilege badges, ban
//! durations, subscription details, even event reclassification via
//! `msg-id`. Decoding runs after the ordinary parse and only ever refines
//! the event it is given.

use tracing::{info, trace, warn};

use crate::event::{Event, EventKind, Role};

/// Decode IRCv3 escape sequences in a tag value.
///
/// `\s` space, `\:` semicolon, `\\` backslash, `\r` CR, `\n` LF. A lone
/// trailing backslash is dropped, unknown escapes keep the escaped char.
pub fn unescape_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    unescaped
}

/// Role granted by a badge name.
fn role_of_badge(badge: &str) -> Option<Role> {
    let role = match badge {
        "broadcaster" => Role::Broadcaster,
        "moderator" => Role::Mod,
        "global_mod" => Role::GlobalMod,
        "admin" => Role::Admin,
        "staff" => Role::Staff,
        "subscriber" => Role::Subscriber,
        "turbo" => Role::Turbo,
        "premium" => Role::Premium,
        "partner" => Role::Partner,
        "bits" => Role::Bits,
        _ => return None,
    };
    Some(role)
}

/// Role granted by the `user-type` tag.
fn role_of_user_type(user_type: &str) -> Option<Role> {
    let role = match user_type {
        "mod" => Role::Mod,
        "global_mod" => Role::GlobalMod,
        "admin" => Role::Admin,
        "staff" => Role::Staff,
        _ => return None,
    };
    Some(role)
}

/// Keys we understand well enough to deliberately not act on.
const IGNORED_KEYS: &[&str] = &[
    "bits",
    "broadcaster-lang",
    "subs-only",
    "r9k",
    "emotes",
    "emote-sets",
    "followers-only",
    "room-id",
    "slow",
    "id",
    "sent-ts",
    "tmi-sent-ts",
    "user",
    "user-id",
    "login",
    "target-user-id",
    "mercury",
];

/// Decode `event.tags` and fold the results into the event.
///
/// Badge and flag keys only ever upgrade `role` through the priority order,
/// so tag ordering within the section cannot demote anyone.
pub fn decode_tags(event: &mut Event) {
    if event.tags.is_empty() {
        return;
    }

    let mut months = "";
    let mut sub_plan = "";
    let mut sub_plan_name = "";

    let tags = std::mem::take(&mut event.tags);

    for pair in tags.split(';') {
        let (key, value) = match pair.find('=') {
            Some(eq) => (&pair[..eq], &pair[eq + 1..]),
            None => (pair, ""),
        };

        match key {
            "display-name" => {
                event.sender.alias = unescape_value(value);
            }
            "badges" => {
                event.rolestring = value.to_string();
                for item in value.split(',').filter(|i| !i.is_empty()) {
                    // Each item is badge/version; the version does not rank.
                    let badge = item.split('/').next().unwrap_or(item);
                    match role_of_badge(badge) {
                        Some(role) => event.role.upgrade(role),
                        None => {
                            trace!(badge, "unranked badge");
                            event.role.upgrade(Role::Other);
                        }
                    }
                }
            }
            "mod" => {
                if value == "1" {
                    event.role.upgrade(Role::Mod);
                }
            }
            "subscriber" => {
                if value == "1" {
                    event.role.upgrade(Role::Subscriber);
                }
            }
            "turbo" => {
                if value == "1" {
                    event.role.upgrade(Role::Turbo);
                }
            }
            "user-type" => match role_of_user_type(value) {
                Some(role) => event.role.upgrade(role),
                None => {
                    if !value.is_empty() {
                        warn!(value, "invalid user-type");
                    }
                }
            },
            "ban-duration" => {
                event.aux = if value.is_empty() {
                    "PERMANENT".to_string()
                } else {
                    value.to_string()
                };
            }
            "ban-reason" | "system-msg" => {
                event.content = unescape_value(value);
            }
            "emote-only" => {
                if value == "1" && event.kind == EventKind::CHAN {
                    event.kind = EventKind::EMOTE;
                }
            }
            "msg-id" => match value {
                "host_on" => event.kind = EventKind::HOSTSTART,
                "host_off" | "host_target_went_offline" => event.kind = EventKind::HOSTEND,
                "sub" => event.kind = EventKind::SUB,
                "resub" => event.kind = EventKind::RESUB,
                _ => info!(msg_id = value, "unhandled msg-id"),
            },
            "msg-param-months" => months = value,
            "msg-param-sub-plan" => sub_plan = value,
            "msg-param-sub-plan-name" => sub_plan_name = value,
            "color" => {
                event.colour = value.strip_prefix('#').unwrap_or(value).to_string();
            }
            _ if IGNORED_KEYS.contains(&key) => {}
            _ => trace!(key, value, "unknown tag key"),
        }
    }

    if !months.is_empty() || !sub_plan.is_empty() {
        let mut aux = format!("{}x{}", months, sub_plan);
        if !sub_plan_name.is_empty() {
            aux.push('x');
            aux.push_str(&unescape_value(sub_plan_name));
        }
        event.aux = aux;
    }

    event.tags = tags;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged_event(tags: &str) -> Event {
        let mut event = Event::new("");
        event.tags = tags.to_string();
        event
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape_value("hello\\sworld"), "hello world");
        assert_eq!(unescape_value("a\\:b"), "a;b");
        assert_eq!(unescape_value("c\\\\d"), "c\\d");
        assert_eq!(unescape_value("line\\r\\n"), "line\r\n");
        assert_eq!(unescape_value("trailing\\"), "trailing");
        assert_eq!(unescape_value("odd\\x"), "oddx");
    }

    #[test]
    fn test_display_name_and_colour() {
        let mut event = tagged_event("display-name=Zorael;color=#FF0000");
        decode_tags(&mut event);
        assert_eq!(event.sender.alias, "Zorael");
        assert_eq!(event.colour, "FF0000");
        // Raw tags survive decoding.
        assert_eq!(event.tags, "display-name=Zorael;color=#FF0000");
    }

    #[test]
    fn test_badges_rank_and_rolestring() {
        let mut event = tagged_event("badges=subscriber/12,moderator/1");
        decode_tags(&mut event);
        assert_eq!(event.role, Role::Mod);
        assert_eq!(event.rolestring, "subscriber/12,moderator/1");
    }

    #[test]
    fn test_flags_upgrade_only() {
        let mut event = tagged_event("mod=1;subscriber=1;turbo=0");
        decode_tags(&mut event);
        assert_eq!(event.role, Role::Mod);

        // A lower-ranked flag later cannot demote.
        let mut event = tagged_event("badges=broadcaster/1;mod=1");
        decode_tags(&mut event);
        assert_eq!(event.role, Role::Broadcaster);
    }

    #[test]
    fn test_user_type() {
        let mut event = tagged_event("user-type=staff");
        decode_tags(&mut event);
        assert_eq!(event.role, Role::Staff);
    }

    #[test]
    fn test_ban_duration() {
        let mut event = tagged_event("ban-duration=600");
        decode_tags(&mut event);
        assert_eq!(event.aux, "600");

        let mut event = tagged_event("ban-duration=");
        decode_tags(&mut event);
        assert_eq!(event.aux, "PERMANENT");
    }

    #[test]
    fn test_system_msg_unescaped() {
        let mut event =
            tagged_event("system-msg=Zorael\\ssubscribed\\sfor\\s12\\smonths!");
        decode_tags(&mut event);
        assert_eq!(event.content, "Zorael subscribed for 12 months!");
    }

    #[test]
    fn test_emote_only_rewrites_chan() {
        let mut event = tagged_event("emote-only=1");
        event.kind = EventKind::CHAN;
        decode_tags(&mut event);
        assert_eq!(event.kind, EventKind::EMOTE);

        let mut event = tagged_event("emote-only=1");
        event.kind = EventKind::QUERY;
        decode_tags(&mut event);
        assert_eq!(event.kind, EventKind::QUERY);
    }

    #[test]
    fn test_msg_id_rewrites() {
        let mut event = tagged_event("msg-id=host_on");
        decode_tags(&mut event);
        assert_eq!(event.kind, EventKind::HOSTSTART);

        let mut event = tagged_event("msg-id=host_target_went_offline");
        decode_tags(&mut event);
        assert_eq!(event.kind, EventKind::HOSTEND);

        let mut event = tagged_event("msg-id=resub");
        decode_tags(&mut event);
        assert_eq!(event.kind, EventKind::RESUB);

        // Unknown ids leave the kind alone.
        let mut event = tagged_event("msg-id=ritual");
        event.kind = EventKind::USERNOTICE;
        decode_tags(&mut event);
        assert_eq!(event.kind, EventKind::USERNOTICE);
    }

    #[test]
    fn test_sub_plan_aux() {
        let mut event = tagged_event(
            "msg-id=resub;msg-param-months=12;msg-param-sub-plan=Prime;\
             msg-param-sub-plan-name=Channel\\sSubscription",
        );
        decode_tags(&mut event);
        assert_eq!(event.kind, EventKind::RESUB);
        assert_eq!(event.aux, "12xPrimexChannel Subscription");
    }

    #[test]
    fn test_sub_plan_aux_without_name() {
        let mut event = tagged_event("msg-param-months=3;msg-param-sub-plan=1000");
        decode_tags(&mut event);
        assert_eq!(event.aux, "3x1000");
    }

    #[test]
    fn test_ignored_keys_do_nothing() {
        let mut event = tagged_event("room-id=22216721;tmi-sent-ts=1495974267;slow=0");
        let before = event.clone();
        decode_tags(&mut event);
        assert_eq!(event, before);
    }
}
