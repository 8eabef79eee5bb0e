//! Connection-lifetime mutable state the parser reads and writes.
//!
//! The parser owns neither record; it receives `&mut` handles per call and
//! assumes exclusive access for the duration. Multiplexing callers keep one
//! pair per connection. Every mutation flips the record's `updated` flag so
//! callers get cheap change detection; clearing the flag after persistence
//! is the caller's job.

use std::collections::HashMap;

use crate::numerics::Daemon;

/// Default channel-type prefixes before ISUPPORT says otherwise.
pub const DEFAULT_CHANTYPES: &str = "#&";

/// Default nickname length cap before NICKLEN is announced. Generous so
/// pre-registration lines never fail validation on a strict network.
pub const DEFAULT_MAX_NICK_LENGTH: usize = 30;

/// Default channel-name length cap before CHANNELLEN, per RFC 1459.
pub const DEFAULT_MAX_CHANNEL_LENGTH: usize = 200;

/// Facts about the server we are talking to, discovered from its replies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerState {
    /// Daemon family, guessed from MYINFO.
    pub daemon: Daemon,
    /// The daemon string as MYINFO announced it.
    pub daemonstring: String,
    /// Network name from ISUPPORT `NETWORK`, or guessed from the address.
    pub network: String,
    /// The address we were configured to connect to.
    pub address: String,
    /// The server's own name for itself, once a reply reveals it.
    pub resolved_address: String,
    /// ISUPPORT `NICKLEN`.
    pub max_nick_length: usize,
    /// ISUPPORT `CHANNELLEN`.
    pub max_channel_length: usize,
    /// Type A (list) channel mode letters.
    pub a_modes: String,
    /// Type B (always-parameter) channel mode letters.
    pub b_modes: String,
    /// Type C (set-parameter) channel mode letters.
    pub c_modes: String,
    /// Type D (no-parameter) channel mode letters.
    pub d_modes: String,
    /// ISUPPORT `PREFIX` mapping: status char (`@`) to mode letter (`o`).
    pub prefix_chars: HashMap<char, char>,
    /// ISUPPORT `CHANTYPES`.
    pub chantypes: String,
    /// Set on any mutation; cleared by the caller.
    pub updated: bool,
}

impl Default for ServerState {
    fn default() -> ServerState {
        ServerState {
            daemon: Daemon::Unknown,
            daemonstring: String::new(),
            network: String::new(),
            address: String::new(),
            resolved_address: String::new(),
            max_nick_length: DEFAULT_MAX_NICK_LENGTH,
            max_channel_length: DEFAULT_MAX_CHANNEL_LENGTH,
            a_modes: String::new(),
            b_modes: String::new(),
            c_modes: String::new(),
            d_modes: String::new(),
            prefix_chars: HashMap::new(),
            chantypes: DEFAULT_CHANTYPES.to_string(),
            updated: false,
        }
    }
}

impl ServerState {
    /// A state seeded with the address we are connecting to.
    pub fn with_address(address: &str) -> ServerState {
        ServerState {
            address: address.to_string(),
            ..ServerState::default()
        }
    }

    /// Whether `c` opens a channel name on this server.
    #[inline]
    pub fn is_chantype(&self, c: char) -> bool {
        self.chantypes.contains(c)
    }
}

/// Our own identity and standing configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BotState {
    /// Current nickname; rewritten on WELCOME and SELFNICK.
    pub nickname: String,
    /// Ident sent at registration.
    pub ident: String,
    /// Real name / GECOS.
    pub user: String,
    /// Services account, when logged in.
    pub account: String,
    /// Reason used when quitting.
    pub quit_reason: String,
    /// Masks with administrative rights over the bot.
    pub admins: Vec<String>,
    /// Channels joined on connect.
    pub home_channels: Vec<String>,
    /// Set on any mutation; cleared by the caller.
    pub updated: bool,
}

impl BotState {
    /// A state with just a nickname, enough for parsing.
    pub fn with_nickname(nickname: &str) -> BotState {
        BotState {
            nickname: nickname.to_string(),
            ..BotState::default()
        }
    }
}
