//! The numeric tables themselves: one base, one delta per daemon dialect.
//!
//! Base entries follow RFC 1459/2812 and the de-facto meanings on modern
//! networks. Delta entries exist only where a daemon assigns a code the base
//! does not, or assigns it a different meaning; everything else falls
//! through. Keeping them as plain `match` tables keeps additions reviewable
//! against the published numeric lists.

use crate::event::EventKind::{self, *};

pub(super) fn base(num: u16) -> Option<EventKind> {
    let kind = match num {
        1 => WELCOME,
        2 => RPL_YOURHOST,
        3 => RPL_CREATED,
        4 => MYINFO,
        5 => ISUPPORT,
        10 => RPL_BOUNCE,
        42 => RPL_YOURID,

        200 => RPL_TRACELINK,
        201 => RPL_TRACECONNECTING,
        202 => RPL_TRACEHANDSHAKE,
        203 => RPL_TRACEUNKNOWN,
        204 => RPL_TRACEOPERATOR,
        205 => RPL_TRACEUSER,
        206 => RPL_TRACESERVER,
        207 => RPL_TRACESERVICE,
        208 => RPL_TRACENEWTYPE,
        209 => RPL_TRACECLASS,
        211 => RPL_STATSLINKINFO,
        212 => RPL_STATSCOMMANDS,
        213 => RPL_STATSCLINE,
        214 => RPL_STATSNLINE,
        215 => RPL_STATSILINE,
        216 => RPL_STATSKLINE,
        218 => RPL_STATSYLINE,
        219 => RPL_ENDOFSTATS,
        221 => RPL_UMODEIS,
        234 => RPL_SERVLIST,
        235 => RPL_SERVLISTEND,
        242 => RPL_STATSUPTIME,
        243 => RPL_STATSOLINE,
        251 => RPL_LUSERCLIENT,
        252 => RPL_LUSEROP,
        253 => RPL_LUSERUNKNOWN,
        254 => RPL_LUSERCHANNELS,
        255 => RPL_LUSERME,
        256 => RPL_ADMINME,
        257 => RPL_ADMINLOC1,
        258 => RPL_ADMINLOC2,
        259 => RPL_ADMINEMAIL,
        261 => RPL_TRACELOG,
        262 => RPL_TRACEEND,
        263 => RPL_TRYAGAIN,
        265 => RPL_LOCALUSERS,
        266 => RPL_GLOBALUSERS,
        276 => RPL_WHOISCERTFP,

        301 => RPL_AWAY,
        302 => RPL_USERHOST,
        303 => RPL_ISON,
        305 => RPL_UNAWAY,
        306 => RPL_NOWAWAY,
        307 => RPL_WHOISREGNICK,
        311 => RPL_WHOISUSER,
        312 => RPL_WHOISSERVER,
        313 => RPL_WHOISOPERATOR,
        314 => RPL_WHOWASUSER,
        315 => RPL_ENDOFWHO,
        317 => RPL_WHOISIDLE,
        318 => RPL_ENDOFWHOIS,
        319 => RPL_WHOISCHANNELS,
        321 => RPL_LISTSTART,
        322 => RPL_LIST,
        323 => RPL_LISTEND,
        324 => RPL_CHANNELMODEIS,
        328 => CHANNELURL,
        329 => RPL_CREATIONTIME,
        330 => RPL_WHOISACCOUNT,
        331 => RPL_NOTOPIC,
        332 => RPL_TOPIC,
        333 => RPL_TOPICWHOTIME,
        335 => RPL_WHOISBOT,
        338 => RPL_WHOISACTUALLY,
        340 => RPL_USERIP,
        341 => RPL_INVITING,
        346 => RPL_INVITELIST,
        347 => RPL_ENDOFINVITELIST,
        348 => RPL_EXCEPTLIST,
        349 => RPL_ENDOFEXCEPTLIST,
        351 => RPL_VERSION,
        352 => RPL_WHOREPLY,
        353 => RPL_NAMREPLY,
        364 => RPL_LINKS,
        365 => RPL_ENDOFLINKS,
        366 => RPL_ENDOFNAMES,
        367 => RPL_BANLIST,
        368 => RPL_ENDOFBANLIST,
        369 => RPL_ENDOFWHOWAS,
        371 => RPL_INFO,
        372 => RPL_MOTD,
        374 => RPL_ENDOFINFO,
        375 => RPL_MOTDSTART,
        376 => RPL_ENDOFMOTD,
        378 => RPL_WHOISHOST,
        379 => RPL_WHOISMODES,
        381 => RPL_YOUREOPER,
        382 => RPL_REHASHING,
        383 => RPL_YOURESERVICE,
        391 => RPL_TIME,
        396 => RPL_HOSTHIDDEN,

        401 => ERR_NOSUCHNICK,
        402 => ERR_NOSUCHSERVER,
        403 => ERR_NOSUCHCHANNEL,
        404 => ERR_CANNOTSENDTOCHAN,
        405 => ERR_TOOMANYCHANNELS,
        406 => ERR_WASNOSUCHNICK,
        407 => ERR_TOOMANYTARGETS,
        408 => ERR_NOSUCHSERVICE,
        409 => ERR_NOORIGIN,
        411 => ERR_NORECIPIENT,
        412 => ERR_NOTEXTTOSEND,
        413 => ERR_NOTOPLEVEL,
        414 => ERR_WILDTOPLEVEL,
        415 => ERR_BADMASK,
        421 => ERR_UNKNOWNCOMMAND,
        422 => ERR_NOMOTD,
        423 => ERR_NOADMININFO,
        424 => ERR_FILEERROR,
        431 => ERR_NONICKNAMEGIVEN,
        432 => ERR_ERRONEOUSNICKNAME,
        433 => ERR_NICKNAMEINUSE,
        435 => ERR_BANONCHAN,
        436 => ERR_NICKCOLLISION,
        437 => ERR_UNAVAILRESOURCE,
        441 => ERR_USERNOTINCHANNEL,
        442 => ERR_NOTONCHANNEL,
        443 => ERR_USERONCHANNEL,
        444 => ERR_NOLOGIN,
        445 => ERR_SUMMONDISABLED,
        446 => ERR_USERSDISABLED,
        451 => ERR_NOTREGISTERED,
        461 => ERR_NEEDMOREPARAMS,
        462 => ERR_ALREADYREGISTERED,
        463 => ERR_NOPERMFORHOST,
        464 => ERR_PASSWDMISMATCH,
        465 => ERR_YOUREBANNEDCREEP,
        467 => ERR_KEYSET,
        471 => ERR_CHANNELISFULL,
        472 => ERR_UNKNOWNMODE,
        473 => ERR_INVITEONLYCHAN,
        474 => ERR_BANNEDFROMCHAN,
        475 => ERR_BADCHANNELKEY,
        476 => ERR_BADCHANMASK,
        477 => NEEDAUTHTOJOIN,
        478 => ERR_BANLISTFULL,
        481 => ERR_NOPRIVILEGES,
        482 => ERR_CHANOPRIVSNEEDED,
        483 => ERR_CANTKILLSERVER,
        484 => ERR_RESTRICTED,
        485 => ERR_UNIQOPPRIVSNEEDED,
        491 => ERR_NOOPERHOST,
        501 => ERR_UMODEUNKNOWNFLAG,
        502 => ERR_USERSDONTMATCH,
        513 => TOCONNECTTYPE,

        670 => RPL_STARTTLS,
        671 => RPL_WHOISSECURE,
        691 => ERR_STARTTLS,
        704 => RPL_HELPSTART,
        705 => RPL_HELPTXT,
        706 => RPL_ENDOFHELP,
        900 => RPL_LOGGEDIN,
        901 => RPL_LOGGEDOUT,
        902 => ERR_NICKLOCKED,
        903 => RPL_SASLSUCCESS,
        904 => ERR_SASLFAIL,
        905 => ERR_SASLTOOLONG,
        906 => ERR_SASLABORTED,
        907 => ERR_SASLALREADY,
        908 => RPL_SASLMECHS,

        _ => return None,
    };
    Some(kind)
}

pub(super) fn unreal(num: u16) -> Option<EventKind> {
    let kind = match num {
        6 => RPL_MAP,
        7 => RPL_MAPEND,
        600 => RPL_LOGON,
        601 => RPL_LOGOFF,
        602 => RPL_WATCHOFF,
        603 => RPL_WATCHSTAT,
        604 => RPL_NOWON,
        605 => RPL_NOWOFF,
        606 => RPL_WATCHLIST,
        607 => RPL_ENDOFWATCHLIST,
        972 => ERR_CANNOTDOCOMMAND,
        974 => ERR_CANNOTCHANGECHANMODE,
        _ => return None,
    };
    Some(kind)
}

pub(super) fn bahamut(num: u16) -> Option<EventKind> {
    let kind = match num {
        308 => RPL_WHOISADMIN,
        309 => RPL_WHOISSADMIN,
        310 => RPL_WHOISSVCMSG,
        600 => RPL_LOGON,
        601 => RPL_LOGOFF,
        602 => RPL_WATCHOFF,
        603 => RPL_WATCHSTAT,
        604 => RPL_NOWON,
        605 => RPL_NOWOFF,
        606 => RPL_WATCHLIST,
        607 => RPL_ENDOFWATCHLIST,
        _ => return None,
    };
    Some(kind)
}

pub(super) fn inspircd(num: u16) -> Option<EventKind> {
    let kind = match num {
        270 => RPL_MAPUSERS,
        936 => ERR_WORDFILTERED,
        972 => ERR_CANTUNLOADMODULE,
        973 => RPL_UNLOADEDMODULE,
        974 => ERR_CANTLOADMODULE,
        975 => RPL_LOADEDMODULE,
        _ => return None,
    };
    Some(kind)
}

pub(super) fn hybrid(num: u16) -> Option<EventKind> {
    let kind = match num {
        710 => RPL_KNOCK,
        711 => RPL_KNOCKDLVR,
        712 => ERR_TOOMANYKNOCK,
        713 => ERR_CHANOPEN,
        714 => ERR_KNOCKONCHAN,
        _ => return None,
    };
    Some(kind)
}

pub(super) fn ircu(num: u16) -> Option<EventKind> {
    let kind = match num {
        8 => RPL_SNOMASK,
        15 => RPL_MAPSTART,
        16 => RPL_MAPMORE,
        17 => RPL_MAPEND,
        486 => ERR_ACCOUNTONLY,
        _ => return None,
    };
    Some(kind)
}

pub(super) fn snircd(num: u16) -> Option<EventKind> {
    match num {
        485 => Some(ERR_ISREALSERVICE),
        _ => None,
    }
}

pub(super) fn nefarious(num: u16) -> Option<EventKind> {
    match num {
        337 => Some(RPL_WHOISTEXT),
        _ => None,
    }
}

pub(super) fn undernet(num: u16) -> Option<EventKind> {
    // UnderNet runs stock ircu; nothing of its own beyond the inherited
    // dialect so far.
    let _ = num;
    None
}

pub(super) fn ratbox(num: u16) -> Option<EventKind> {
    let kind = match num {
        702 => RPL_MODLIST,
        703 => RPL_ENDOFMODLIST,
        _ => return None,
    };
    Some(kind)
}

pub(super) fn rizon(num: u16) -> Option<EventKind> {
    // Rizon's plexus adds nothing numeric on top of hybrid yet; the WHOIS
    // host reply rides on the base 378.
    let _ = num;
    None
}

pub(super) fn charybdis(num: u16) -> Option<EventKind> {
    let kind = match num {
        716 => RPL_TARGUMODEG,
        717 => RPL_TARGNOTIFY,
        718 => RPL_UMODEGMSG,
        728 => RPL_QUIETLIST,
        729 => RPL_ENDOFQUIETLIST,
        _ => return None,
    };
    Some(kind)
}

pub(super) fn rfc2812(num: u16) -> Option<EventKind> {
    match num {
        // RFC 2812 assigned 005 to server redirection before ISUPPORT
        // squatted it.
        5 => Some(RPL_BOUNCE),
        _ => None,
    }
}

pub(super) fn aircd(num: u16) -> Option<EventKind> {
    let kind = match num {
        210 => RPL_STATS,
        233 => RPL_SERVICE,
        274 => RPL_ENDNOTIFY,
        _ => return None,
    };
    Some(kind)
}

pub(super) fn austhex(num: u16) -> Option<EventKind> {
    let kind = match num {
        357 => RPL_AUSTMAP,
        358 => RPL_MAPMORE,
        359 => RPL_MAPEND,
        _ => return None,
    };
    Some(kind)
}

pub(super) fn ptlink(num: u16) -> Option<EventKind> {
    let kind = match num {
        615 => RPL_PTLINKMAPMORE,
        616 => RPL_PTLINKWHOISHOST,
        _ => return None,
    };
    Some(kind)
}

pub(super) fn sorircd(num: u16) -> Option<EventKind> {
    match num {
        325 => Some(RPL_CHANNELMLOCK),
        _ => None,
    }
}

pub(super) fn rusnet(num: u16) -> Option<EventKind> {
    let kind = match num {
        222 => RPL_CODEPAGE,
        223 => RPL_CHARSET,
        _ => return None,
    };
    Some(kind)
}

pub(super) fn ultimate(num: u16) -> Option<EventKind> {
    let kind = match num {
        275 => RPL_USINGSSL,
        386 => RPL_IRCOPS,
        387 => RPL_ENDOFIRCOPS,
        _ => return None,
    };
    Some(kind)
}
