//! Property-based tests for the event classifier.
//!
//! Uses proptest to verify the universal guarantees:
//! 1. Totality - any input yields exactly one event, without panicking
//! 2. Raw preservation - the event always carries the input verbatim
//! 3. Numeric layering determinism
//! 4. Role upgrade monotonicity
//! 5. Formatting strip idempotence

use proptest::prelude::*;

use slirc_events::colors::strip_formatting;
use slirc_events::event::{EventKind, Role};
use slirc_events::numerics::{self, Daemon};
use slirc_events::parse;
use slirc_events::state::{BotState, ServerState};

// =============================================================================
// STRATEGIES
// =============================================================================

/// Arbitrary line content without NUL; covers well-formed and garbage input
/// alike.
fn any_line_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\0]{1,400}").expect("valid regex")
}

/// A plausible wire line, to bias coverage towards the interesting paths.
fn wire_line_strategy() -> impl Strategy<Value = String> {
    let nick = prop::string::string_regex("[a-zA-Z][a-zA-Z0-9\\[\\]^_`|-]{0,8}")
        .expect("valid regex");
    let host = prop::string::string_regex("[a-z0-9]+(\\.[a-z0-9]+){1,3}").expect("valid regex");
    let chan = prop::string::string_regex("[#&][a-zA-Z0-9_-]{1,20}").expect("valid regex");
    let text = prop::string::string_regex("[^\r\n\0]{0,100}").expect("valid regex");
    let cmd = prop::sample::select(vec![
        "PRIVMSG", "NOTICE", "JOIN", "PART", "QUIT", "MODE", "KICK", "TOPIC", "001", "005",
        "311", "332", "353", "366", "433", "513", "600", "999",
    ]);

    (nick, host, chan, text, cmd).prop_map(|(nick, host, chan, text, cmd)| {
        format!(":{}!~id@{} {} {} :{}", nick, host, cmd, chan, text)
    })
}

fn daemon_strategy() -> impl Strategy<Value = Daemon> {
    prop::sample::select(vec![
        Daemon::Unknown,
        Daemon::Unreal,
        Daemon::Bahamut,
        Daemon::InspIRCd,
        Daemon::Hybrid,
        Daemon::Ircu,
        Daemon::Snircd,
        Daemon::Nefarious,
        Daemon::Ratbox,
        Daemon::Rizon,
        Daemon::Charybdis,
        Daemon::Rfc1459,
        Daemon::Rfc2812,
        Daemon::Aircd,
        Daemon::AustHex,
        Daemon::Ptlink,
        Daemon::Sorircd,
        Daemon::RusNet,
        Daemon::Ultimate,
        Daemon::Undernet,
        Daemon::Twitch,
    ])
}

fn role_strategy() -> impl Strategy<Value = Role> {
    prop::sample::select(vec![
        Role::Unset,
        Role::Other,
        Role::Member,
        Role::Bits,
        Role::Turbo,
        Role::Subscriber,
        Role::Premium,
        Role::Partner,
        Role::Mod,
        Role::Operator,
        Role::Broadcaster,
        Role::Admin,
        Role::GlobalMod,
        Role::Staff,
        Role::Server,
    ])
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// Any input produces exactly one event carrying the raw line.
    #[test]
    fn totality_and_raw_preservation(raw in any_line_strategy()) {
        let mut server = ServerState::default();
        let mut bot = BotState::with_nickname("kameloso");
        let event = parse::line(&raw, &mut server, &mut bot);
        prop_assert_eq!(event.raw, raw);
    }

    /// Plausible wire lines never come back unclassified with a panic
    /// either, and numerics keep their code on the event.
    #[test]
    fn wire_lines_classify(raw in wire_line_strategy()) {
        let mut server = ServerState::default();
        let mut bot = BotState::with_nickname("kameloso");
        let event = parse::line(&raw, &mut server, &mut bot);
        prop_assert_eq!(event.raw, raw);
        if event.num > 0 {
            prop_assert!(event.kind != EventKind::UNSET);
        }
    }

    /// Numeric lookup is a pure function of (num, daemon).
    #[test]
    fn numeric_lookup_deterministic(num in 0u16..1000, daemon in daemon_strategy()) {
        prop_assert_eq!(numerics::lookup(num, daemon), numerics::lookup(num, daemon));
    }

    /// Any sequence of upgrades lands on the maximum of the sequence.
    #[test]
    fn role_upgrade_is_max(roles in prop::collection::vec(role_strategy(), 1..10)) {
        let mut role = Role::Unset;
        for &r in &roles {
            role.upgrade(r);
        }
        let expected = roles.iter().copied().max().unwrap_or(Role::Unset).max(Role::Unset);
        prop_assert_eq!(role, expected);
    }

    /// Stripping formatting twice is the same as stripping once.
    #[test]
    fn strip_idempotent(s in any_line_strategy()) {
        let once = strip_formatting(&s).into_owned();
        let twice = strip_formatting(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    /// Events classified as channel-scoped kinds carry a valid channel.
    #[test]
    fn channel_kinds_have_valid_channels(
        chan in prop::string::string_regex("#[a-zA-Z0-9_-]{1,20}").expect("valid regex"),
        text in prop::string::string_regex("[^\r\n\0:\u{1}]{1,60}").expect("valid regex"),
    ) {
        let mut server = ServerState::default();
        let mut bot = BotState::with_nickname("kameloso");
        let raw = format!(":zorael!~id@host.tld PRIVMSG {} :{}", chan, text);
        let event = parse::line(&raw, &mut server, &mut bot);
        prop_assert_eq!(event.kind, EventKind::CHAN);
        prop_assert!(slirc_events::is_valid_channel(&event.channel, &server));
    }
}
