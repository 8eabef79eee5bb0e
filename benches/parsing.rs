//! Benchmarks for event classification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slirc_events::parse;
use slirc_events::state::{BotState, ServerState};

/// Simple PING message
const SIMPLE_MESSAGE: &str = "PING :irc.example.com";

/// Channel message with prefix
const CHAN_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// CTCP ACTION inside a PRIVMSG
const EMOTE_MESSAGE: &str =
    ":nick!user@host PRIVMSG #channel :\u{1}ACTION does the thing\u{1}";

/// Numeric response
const NUMERIC_RESPONSE: &str =
    ":irc.server.net 001 nickname :Welcome to the IRC Network nickname!user@host";

/// ISUPPORT burst with server-fact side effects
const ISUPPORT_MESSAGE: &str = ":irc.server.net 005 nickname NETWORK=example NICKLEN=30 \
     CHANNELLEN=50 CHANTYPES=# PREFIX=(ov)@+ CHANMODES=eIbq,k,flj,imnpst :are supported by this server";

/// Twitch line with a heavy tag section
const TAGGED_MESSAGE: &str = "@badges=subscriber/12,moderator/1;color=#FF0000;\
     display-name=Zorael;mod=1;subscriber=1;turbo=0;user-type=mod \
     :zorael!zorael@zorael.tmi.twitch.tv PRIVMSG #zorael :Kappa 123";

fn benchmark_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("Event Classification");

    let cases = [
        ("simple_ping", SIMPLE_MESSAGE),
        ("chan_message", CHAN_MESSAGE),
        ("emote", EMOTE_MESSAGE),
        ("numeric", NUMERIC_RESPONSE),
        ("isupport", ISUPPORT_MESSAGE),
        ("twitch_tags", TAGGED_MESSAGE),
    ];

    for (name, raw) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), raw, |b, raw| {
            let mut server = ServerState::default();
            let mut bot = BotState::with_nickname("kameloso");
            b.iter(|| {
                let event = parse::line(black_box(raw), &mut server, &mut bot);
                black_box(event)
            })
        });
    }

    group.finish();
}

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("Formatting");

    let coloured = "\x0304,12red on blue\x03 and \x02bold\x02 and plain tail text";

    group.bench_function("mirc_to_ansi", |b| {
        b.iter(|| black_box(slirc_events::mirc_to_ansi(black_box(coloured))))
    });

    group.bench_function("strip_formatting", |b| {
        b.iter(|| black_box(slirc_events::strip_formatting(black_box(coloured))))
    });

    group.bench_function("strip_noop_borrows", |b| {
        b.iter(|| black_box(slirc_events::strip_formatting(black_box("no formatting here"))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_classification, benchmark_formatting);
criterion_main!(benches);
