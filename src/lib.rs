//! # slirc-events
//!
//! IRC event classification for the Straylight stack: raw protocol lines in,
//! one strongly-typed [`Event`] out.
//!
//! Where `slirc-proto` concerns itself with the grammar of IRC messages,
//! this crate concerns itself with their *meaning*: classifying every line
//! into a closed [`EventKind`] taxonomy, extracting sender/target/channel/
//! content fields, resolving numerics through daemon-aware layered tables,
//! decoding Twitch/IRCv3 message tags, and discovering server facts
//! (network, NICKLEN, CHANTYPES, daemon family) that feed back into how
//! subsequent lines are read.
//!
//! ## Quick start
//!
//! ```rust
//! use slirc_events::parse;
//! use slirc_events::event::EventKind;
//! use slirc_events::state::{BotState, ServerState};
//!
//! let mut server = ServerState::with_address("irc.freenode.net");
//! let mut bot = BotState::with_nickname("kameloso");
//!
//! let event = parse::line(
//!     ":zorael!~NaN@some.address.org PRIVMSG kameloso :this is fake",
//!     &mut server,
//!     &mut bot,
//! );
//!
//! assert_eq!(event.kind, EventKind::QUERY);
//! assert_eq!(event.sender.nickname, "zorael");
//! assert_eq!(event.content, "this is fake");
//! ```
//!
//! ## Guarantees
//!
//! - **Total**: every input line yields exactly one event; malformed lines
//!   degrade to `UNSET`/`NUMERIC` kinds with the raw line preserved. The
//!   parser never panics and never loops.
//! - **Pure apart from the handles**: the only side effects are writes to
//!   the [`ServerState`]/[`BotState`] handles passed in, each flagged via
//!   their `updated` fields.
//! - **Diagnosed, not hidden**: unexpected input is reported through
//!   [`tracing`] and never alters the returned event beyond its kind.
//!
//! Transport, connection orchestration and message *serialisation* are out
//! of scope; see `slirc-proto` for those.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod casemap;
pub mod colors;
pub mod ctcp;
pub mod error;
pub mod event;
pub mod isupport;
pub mod numerics;
pub mod parse;
pub mod scan;
pub mod state;
pub mod twitch;
pub mod user;
pub mod validation;

pub use self::casemap::{irc_eq, irc_to_lower};
pub use self::colors::{expand_tags, mirc_to_ansi, strip_formatting};
pub use self::event::{Event, EventKind, Role};
pub use self::numerics::Daemon;
pub use self::state::{BotState, ServerState};
pub use self::user::User;
pub use self::validation::{
    is_valid_channel, is_valid_nickname, network_of_address, strip_mode_sign,
};
