//! The event record and its closed kind taxonomy.
//!
//! Every parsed line becomes exactly one [`Event`] tagged with an
//! [`EventKind`]. The taxonomy covers RFC 1459/2812 commands, the numeric
//! replies (named per their dominant meaning; daemon disagreements are
//! resolved by the layered tables in [`crate::numerics`]), CTCP subtypes,
//! Twitch extensions, and a handful of fabricated pseudo-kinds (`SELFJOIN`,
//! `CHAN`, `QUERY`, `EMOTE`, …) that spare downstream consumers re-deriving
//! who the subject of a line was.

#![allow(non_camel_case_types)]

use chrono::{DateTime, Utc};

use crate::user::User;

/// Classification of a parsed IRC line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum EventKind {
    // === Sentinels ===
    /// Nothing parsed yet, or the line defeated every stage.
    UNSET,
    /// Server-side `ERROR` line, or a line rejected at framing.
    ERROR,
    /// A numeric with no entry in the active daemon's layered table;
    /// `Event::num` carries the code.
    NUMERIC,

    // === Connection plumbing ===
    PING,
    PONG,
    NOTICE,
    AUTHENTICATE,
    CAP,
    ACCOUNT,
    AWAY,
    WALLOPS,
    CHGHOST,

    // === Messaging ===
    /// `PRIVMSG` before target classification, and the fallback when the
    /// target is neither a valid channel nor a nickname.
    PRIVMSG,
    /// Channel message.
    CHAN,
    /// Private message to us.
    QUERY,
    /// CTCP ACTION, `/me`.
    EMOTE,

    // === Membership and identity ===
    JOIN,
    PART,
    QUIT,
    NICK,
    KICK,
    INVITE,
    TOPIC,
    MODE,
    /// Channel mode change with a mode string in `aux`.
    CHANMODE,
    /// User mode change.
    USERMODE,

    // === Fabricated self-events ===
    SELFJOIN,
    SELFPART,
    SELFQUIT,
    SELFNICK,
    SELFMODE,
    SELFKICK,

    // === Services authentication banners ===
    AUTH_SUCCESS,
    AUTH_FAILURE,
    AUTH_CHALLENGE,

    // === CTCP subtypes ===
    CTCP_VERSION,
    CTCP_TIME,
    CTCP_PING,
    CTCP_CLIENTINFO,
    CTCP_DCC,
    CTCP_SOURCE,
    CTCP_USERINFO,
    CTCP_FINGER,
    CTCP_LAG,
    CTCP_AVATAR,
    CTCP_SLOTS,

    // === Twitch commands ===
    CLEARCHAT,
    USERNOTICE,
    ROOMSTATE,
    USERSTATE,
    GLOBALUSERSTATE,
    HOSTTARGET,
    /// Fabricated from HOSTTARGET / `msg-id=host_on`.
    HOSTSTART,
    /// Fabricated from HOSTTARGET / `msg-id=host_off`.
    HOSTEND,
    /// `msg-id=sub`.
    SUB,
    /// `msg-id=resub`.
    RESUB,
    WHISPER,
    RECONNECT,

    // === Numeric replies: registration (001-099) ===
    /// 001 - Welcome; also echoes our accepted nickname.
    WELCOME,
    /// 002
    RPL_YOURHOST,
    /// 003
    RPL_CREATED,
    /// 004 - Server name, daemon string, mode letters.
    MYINFO,
    /// 005 - Feature advertisement (RPL_BOUNCE under strict RFC 2812).
    ISUPPORT,
    /// 006 - Unreal map entry.
    RPL_MAP,
    /// 007 - Unreal map end.
    RPL_MAPEND,
    /// 008 - ircu server notice mask.
    RPL_SNOMASK,
    /// 010
    RPL_BOUNCE,
    /// 015 - ircu map entry.
    RPL_MAPSTART,
    /// 016 - ircu map continuation.
    RPL_MAPMORE,
    /// 042
    RPL_YOURID,

    // === Numeric replies: command replies (200-399) ===
    /// 200
    RPL_TRACELINK,
    /// 201
    RPL_TRACECONNECTING,
    /// 202
    RPL_TRACEHANDSHAKE,
    /// 203
    RPL_TRACEUNKNOWN,
    /// 204
    RPL_TRACEOPERATOR,
    /// 205
    RPL_TRACEUSER,
    /// 206
    RPL_TRACESERVER,
    /// 207
    RPL_TRACESERVICE,
    /// 208
    RPL_TRACENEWTYPE,
    /// 209
    RPL_TRACECLASS,
    /// 210 - aircd generic stats.
    RPL_STATS,
    /// 211
    RPL_STATSLINKINFO,
    /// 212
    RPL_STATSCOMMANDS,
    /// 213
    RPL_STATSCLINE,
    /// 214
    RPL_STATSNLINE,
    /// 215
    RPL_STATSILINE,
    /// 216
    RPL_STATSKLINE,
    /// 218
    RPL_STATSYLINE,
    /// 219
    RPL_ENDOFSTATS,
    /// 221
    RPL_UMODEIS,
    /// 222 - RusNet codepage.
    RPL_CODEPAGE,
    /// 223 - RusNet charset.
    RPL_CHARSET,
    /// 233 - aircd service entry.
    RPL_SERVICE,
    /// 234
    RPL_SERVLIST,
    /// 235
    RPL_SERVLISTEND,
    /// 242
    RPL_STATSUPTIME,
    /// 243
    RPL_STATSOLINE,
    /// 251
    RPL_LUSERCLIENT,
    /// 252
    RPL_LUSEROP,
    /// 253
    RPL_LUSERUNKNOWN,
    /// 254
    RPL_LUSERCHANNELS,
    /// 255
    RPL_LUSERME,
    /// 256
    RPL_ADMINME,
    /// 257
    RPL_ADMINLOC1,
    /// 258
    RPL_ADMINLOC2,
    /// 259
    RPL_ADMINEMAIL,
    /// 261
    RPL_TRACELOG,
    /// 262
    RPL_TRACEEND,
    /// 263
    RPL_TRYAGAIN,
    /// 265
    RPL_LOCALUSERS,
    /// 266
    RPL_GLOBALUSERS,
    /// 270 - InspIRCd map user counts.
    RPL_MAPUSERS,
    /// 274 - aircd end of notify list.
    RPL_ENDNOTIFY,
    /// 275 - SSL connection notice (ultimate).
    RPL_USINGSSL,
    /// 276
    RPL_WHOISCERTFP,
    /// 301
    RPL_AWAY,
    /// 302
    RPL_USERHOST,
    /// 303
    RPL_ISON,
    /// 305
    RPL_UNAWAY,
    /// 306
    RPL_NOWAWAY,
    /// 307 - Registered-nick flag in WHOIS.
    RPL_WHOISREGNICK,
    /// 308 - Bahamut admin flag in WHOIS.
    RPL_WHOISADMIN,
    /// 309 - Bahamut services-admin flag in WHOIS.
    RPL_WHOISSADMIN,
    /// 310 - Bahamut services-message flag in WHOIS.
    RPL_WHOISSVCMSG,
    /// 311
    RPL_WHOISUSER,
    /// 312
    RPL_WHOISSERVER,
    /// 313
    RPL_WHOISOPERATOR,
    /// 314
    RPL_WHOWASUSER,
    /// 315
    RPL_ENDOFWHO,
    /// 317
    RPL_WHOISIDLE,
    /// 318
    RPL_ENDOFWHOIS,
    /// 319
    RPL_WHOISCHANNELS,
    /// 321
    RPL_LISTSTART,
    /// 322
    RPL_LIST,
    /// 323
    RPL_LISTEND,
    /// 324
    RPL_CHANNELMODEIS,
    /// 325 - sorircd channel mode lock.
    RPL_CHANNELMLOCK,
    /// 328 - Channel URL ("ChanServ URL").
    CHANNELURL,
    /// 329
    RPL_CREATIONTIME,
    /// 330
    RPL_WHOISACCOUNT,
    /// 331
    RPL_NOTOPIC,
    /// 332
    RPL_TOPIC,
    /// 333
    RPL_TOPICWHOTIME,
    /// 335
    RPL_WHOISBOT,
    /// 337 - Nefarious freeform WHOIS text.
    RPL_WHOISTEXT,
    /// 338
    RPL_WHOISACTUALLY,
    /// 340
    RPL_USERIP,
    /// 341
    RPL_INVITING,
    /// 346
    RPL_INVITELIST,
    /// 347
    RPL_ENDOFINVITELIST,
    /// 348
    RPL_EXCEPTLIST,
    /// 349
    RPL_ENDOFEXCEPTLIST,
    /// 351
    RPL_VERSION,
    /// 352
    RPL_WHOREPLY,
    /// 353
    RPL_NAMREPLY,
    /// 357 - AustHex map entry.
    RPL_AUSTMAP,
    /// 364
    RPL_LINKS,
    /// 365
    RPL_ENDOFLINKS,
    /// 366
    RPL_ENDOFNAMES,
    /// 367
    RPL_BANLIST,
    /// 368
    RPL_ENDOFBANLIST,
    /// 369
    RPL_ENDOFWHOWAS,
    /// 371
    RPL_INFO,
    /// 372
    RPL_MOTD,
    /// 374
    RPL_ENDOFINFO,
    /// 375
    RPL_MOTDSTART,
    /// 376
    RPL_ENDOFMOTD,
    /// 378 - Connecting-from host in WHOIS.
    RPL_WHOISHOST,
    /// 379 - User modes in WHOIS.
    RPL_WHOISMODES,
    /// 381
    RPL_YOUREOPER,
    /// 382
    RPL_REHASHING,
    /// 383
    RPL_YOURESERVICE,
    /// 386 - ultimate IRCops listing.
    RPL_IRCOPS,
    /// 387 - ultimate IRCops listing end.
    RPL_ENDOFIRCOPS,
    /// 391
    RPL_TIME,
    /// 396 - Hidden-host confirmation.
    RPL_HOSTHIDDEN,

    // === Numeric replies: errors (400-599) ===
    /// 401
    ERR_NOSUCHNICK,
    /// 402
    ERR_NOSUCHSERVER,
    /// 403
    ERR_NOSUCHCHANNEL,
    /// 404
    ERR_CANNOTSENDTOCHAN,
    /// 405
    ERR_TOOMANYCHANNELS,
    /// 406
    ERR_WASNOSUCHNICK,
    /// 407
    ERR_TOOMANYTARGETS,
    /// 408
    ERR_NOSUCHSERVICE,
    /// 409
    ERR_NOORIGIN,
    /// 411
    ERR_NORECIPIENT,
    /// 412
    ERR_NOTEXTTOSEND,
    /// 413
    ERR_NOTOPLEVEL,
    /// 414
    ERR_WILDTOPLEVEL,
    /// 415
    ERR_BADMASK,
    /// 421
    ERR_UNKNOWNCOMMAND,
    /// 422
    ERR_NOMOTD,
    /// 423
    ERR_NOADMININFO,
    /// 424
    ERR_FILEERROR,
    /// 431
    ERR_NONICKNAMEGIVEN,
    /// 432
    ERR_ERRONEOUSNICKNAME,
    /// 433
    ERR_NICKNAMEINUSE,
    /// 435 - Bahamut "cannot change nickname while banned".
    ERR_BANONCHAN,
    /// 436
    ERR_NICKCOLLISION,
    /// 437
    ERR_UNAVAILRESOURCE,
    /// 441
    ERR_USERNOTINCHANNEL,
    /// 442
    ERR_NOTONCHANNEL,
    /// 443
    ERR_USERONCHANNEL,
    /// 444
    ERR_NOLOGIN,
    /// 445
    ERR_SUMMONDISABLED,
    /// 446
    ERR_USERSDISABLED,
    /// 451
    ERR_NOTREGISTERED,
    /// 461
    ERR_NEEDMOREPARAMS,
    /// 462
    ERR_ALREADYREGISTERED,
    /// 463
    ERR_NOPERMFORHOST,
    /// 464
    ERR_PASSWDMISMATCH,
    /// 465
    ERR_YOUREBANNEDCREEP,
    /// 467
    ERR_KEYSET,
    /// 471
    ERR_CHANNELISFULL,
    /// 472
    ERR_UNKNOWNMODE,
    /// 473
    ERR_INVITEONLYCHAN,
    /// 474
    ERR_BANNEDFROMCHAN,
    /// 475
    ERR_BADCHANNELKEY,
    /// 476
    ERR_BADCHANMASK,
    /// 477 - Registration/auth required to join (ERR_NEEDREGGEDNICK family).
    NEEDAUTHTOJOIN,
    /// 478
    ERR_BANLISTFULL,
    /// 481
    ERR_NOPRIVILEGES,
    /// 482
    ERR_CHANOPRIVSNEEDED,
    /// 483
    ERR_CANTKILLSERVER,
    /// 484
    ERR_RESTRICTED,
    /// 485 - RFC 2812 unique-op; snircd repurposes as "is a real service".
    ERR_UNIQOPPRIVSNEEDED,
    /// 485 under snircd.
    ERR_ISREALSERVICE,
    /// 486 - ircu-family "must be authed to message this user".
    ERR_ACCOUNTONLY,
    /// 491
    ERR_NOOPERHOST,
    /// 501
    ERR_UMODEUNKNOWNFLAG,
    /// 502
    ERR_USERSDONTMATCH,
    /// 513 - "To connect type /QUOTE PONG <cookie>".
    TOCONNECTTYPE,

    // === Numeric replies: extended (600-999) ===
    /// 600 - WATCH: logged on.
    RPL_LOGON,
    /// 601 - WATCH: logged off.
    RPL_LOGOFF,
    /// 602
    RPL_WATCHOFF,
    /// 603
    RPL_WATCHSTAT,
    /// 604
    RPL_NOWON,
    /// 605
    RPL_NOWOFF,
    /// 606
    RPL_WATCHLIST,
    /// 607
    RPL_ENDOFWATCHLIST,
    /// 615 - PTlink map continuation.
    RPL_PTLINKMAPMORE,
    /// 616 - PTlink connecting-from host.
    RPL_PTLINKWHOISHOST,
    /// 670
    RPL_STARTTLS,
    /// 671
    RPL_WHOISSECURE,
    /// 691
    ERR_STARTTLS,
    /// 702 - ratbox module list.
    RPL_MODLIST,
    /// 703 - ratbox module list end.
    RPL_ENDOFMODLIST,
    /// 704
    RPL_HELPSTART,
    /// 705
    RPL_HELPTXT,
    /// 706
    RPL_ENDOFHELP,
    /// 710
    RPL_KNOCK,
    /// 711
    RPL_KNOCKDLVR,
    /// 712
    ERR_TOOMANYKNOCK,
    /// 713
    ERR_CHANOPEN,
    /// 714
    ERR_KNOCKONCHAN,
    /// 716
    RPL_TARGUMODEG,
    /// 717
    RPL_TARGNOTIFY,
    /// 718
    RPL_UMODEGMSG,
    /// 728
    RPL_QUIETLIST,
    /// 729
    RPL_ENDOFQUIETLIST,
    /// 900
    RPL_LOGGEDIN,
    /// 901
    RPL_LOGGEDOUT,
    /// 902
    ERR_NICKLOCKED,
    /// 903
    RPL_SASLSUCCESS,
    /// 904
    ERR_SASLFAIL,
    /// 905
    ERR_SASLTOOLONG,
    /// 906
    ERR_SASLABORTED,
    /// 907
    ERR_SASLALREADY,
    /// 908
    RPL_SASLMECHS,
    /// 936 - InspIRCd word filter rejection.
    ERR_WORDFILTERED,
    /// 972 - Unreal "cannot do command" / InspIRCd "cannot unload module".
    ERR_CANNOTDOCOMMAND,
    /// 972 under InspIRCd.
    ERR_CANTUNLOADMODULE,
    /// 973
    RPL_UNLOADEDMODULE,
    /// 974 - Unreal "cannot change channel mode" / InspIRCd load failure.
    ERR_CANNOTCHANGECHANMODE,
    /// 974 under InspIRCd.
    ERR_CANTLOADMODULE,
    /// 975
    RPL_LOADEDMODULE,
}

impl EventKind {
    /// Map an alphabetic command token to its kind.
    ///
    /// Numerics go through [`crate::numerics::lookup`] instead. Unknown
    /// tokens return `None`; the caller logs and falls back to `UNSET`.
    pub fn from_command(token: &str) -> Option<EventKind> {
        use EventKind::*;
        let kind = match token {
            "PRIVMSG" => PRIVMSG,
            "NOTICE" => NOTICE,
            "JOIN" => JOIN,
            "PART" => PART,
            "QUIT" => QUIT,
            "NICK" => NICK,
            "KICK" => KICK,
            "MODE" => MODE,
            "INVITE" => INVITE,
            "TOPIC" => TOPIC,
            "PING" => PING,
            "PONG" => PONG,
            "ERROR" => ERROR,
            "AUTHENTICATE" => AUTHENTICATE,
            "CAP" => CAP,
            "ACCOUNT" => ACCOUNT,
            "AWAY" => AWAY,
            "WALLOPS" => WALLOPS,
            "CHGHOST" => CHGHOST,
            "CLEARCHAT" => CLEARCHAT,
            "USERNOTICE" => USERNOTICE,
            "ROOMSTATE" => ROOMSTATE,
            "USERSTATE" => USERSTATE,
            "GLOBALUSERSTATE" => GLOBALUSERSTATE,
            "HOSTTARGET" => HOSTTARGET,
            "WHISPER" => WHISPER,
            "RECONNECT" => RECONNECT,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether this kind names one of the fabricated self-events.
    pub fn is_self_event(&self) -> bool {
        matches!(
            self,
            EventKind::SELFJOIN
                | EventKind::SELFPART
                | EventKind::SELFQUIT
                | EventKind::SELFNICK
                | EventKind::SELFMODE
                | EventKind::SELFKICK
        )
    }
}

/// Twitch-flavoured privilege classification, totally ordered.
///
/// [`Role::upgrade`] only ever moves up this order, so feeding badges and
/// mod/subscriber flags in any order converges on the highest one seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Unset,
    Other,
    Member,
    Bits,
    Turbo,
    Subscriber,
    Premium,
    Partner,
    Mod,
    Operator,
    Broadcaster,
    Admin,
    GlobalMod,
    Staff,
    Server,
}

impl Role {
    /// Replace `self` with `new` only when `new` ranks strictly higher.
    pub fn upgrade(&mut self, new: Role) {
        if new > *self {
            *self = new;
        }
    }
}

/// One parsed IRC line.
///
/// Consumers switch on `kind`; `raw` always equals the input line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// What this line was.
    pub kind: EventKind,
    /// Numeric reply code, `0` for non-numeric lines.
    pub num: u16,
    /// The original line, verbatim.
    pub raw: String,
    /// Who sent it.
    pub sender: User,
    /// Whom it concerns, when applicable.
    pub target: User,
    /// Channel name, or empty.
    pub channel: String,
    /// Main textual payload.
    pub content: String,
    /// Kind-specific extra slot: mode string, CTCP command name, viewer
    /// count, subscription plan, numeric argument.
    pub aux: String,
    /// Raw IRCv3 tag section, without the leading `@`.
    pub tags: String,
    /// Sender privilege (Twitch).
    pub role: Role,
    /// Raw badge string the role was derived from (Twitch).
    pub rolestring: String,
    /// Sender colour, hex without `#` (Twitch).
    pub colour: String,
    /// Ingest timestamp.
    pub time: DateTime<Utc>,
}

impl Event {
    /// A fresh event for `raw`, unclassified.
    pub fn new(raw: &str) -> Event {
        Event {
            kind: EventKind::UNSET,
            num: 0,
            raw: raw.to_string(),
            sender: User::default(),
            target: User::default(),
            channel: String::new(),
            content: String::new(),
            aux: String::new(),
            tags: String::new(),
            role: Role::Unset,
            rolestring: String::new(),
            colour: String::new(),
            time: Utc::now(),
        }
    }
}
