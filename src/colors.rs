//! mIRC formatting translation and the logging markup expander.
//!
//! Two inverse-free transforms share one tokeniser: translate mIRC colour
//! and effect bytes into ANSI escapes, or strip them entirely. Neither
//! allocates when the input contains no formatting at all.
//!
//! On top sits the project's own markup: short tags like `<i>` and `<e>`
//! tint log lines, `<N>`/`<N,M>` expand to raw mIRC colour tokens for
//! outgoing text, and `<h>text</h>` hashes its content to a stable tint so
//! the same nickname always gets the same colour.

use std::borrow::Cow;

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::opt,
    sequence::preceded,
    IResult,
};

/// mIRC colour introducer.
pub const COLOUR: char = '\x03';
/// mIRC bold toggle.
pub const BOLD: char = '\x02';
/// mIRC italics toggle.
pub const ITALICS: char = '\x1d';
/// mIRC underline toggle.
pub const UNDERLINE: char = '\x1f';
/// mIRC reverse-video toggle.
pub const REVERSE: char = '\x16';
/// mIRC reset byte.
pub const RESET: char = '\x0f';

const ANSI_RESET: &str = "\x1b[0m";

/// Parse the digit part of a colour token: up to two digits, optionally a
/// comma and up to two more.
fn colour_numbers(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    let digits = |i| take_while_m_n(1, 2, |c: char| c.is_ascii_digit())(i);
    let (input, fg) = digits(input)?;
    let (input, bg) = opt(preceded(char(','), digits))(input)?;
    Ok((input, (fg, bg)))
}

/// ANSI foreground code for an mIRC colour number, modulo 16.
fn fg_code(num: u8) -> u8 {
    match num % 16 {
        0 => 97,  // white
        1 => 30,  // black
        2 => 34,  // blue
        3 => 32,  // green
        4 => 91,  // red
        5 => 31,  // brown
        6 => 35,  // purple
        7 => 33,  // orange
        8 => 93,  // yellow
        9 => 92,  // light green
        10 => 36, // cyan
        11 => 96, // light cyan
        12 => 94, // light blue
        13 => 95, // pink
        14 => 90, // grey
        _ => 37,  // light grey
    }
}

/// ANSI background code for an mIRC colour number.
fn bg_code(num: u8) -> u8 {
    fg_code(num) + 10
}

#[derive(Default)]
struct Effects {
    bold: bool,
    italics: bool,
    underline: bool,
    reverse: bool,
    coloured: bool,
}

impl Effects {
    fn any(&self) -> bool {
        self.bold || self.italics || self.underline || self.reverse || self.coloured
    }
}

fn contains_formatting(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c, COLOUR | BOLD | ITALICS | UNDERLINE | REVERSE | RESET))
}

/// Translate mIRC formatting to ANSI escapes.
///
/// Effect bytes alternate pairwise between open and close; a trailing
/// unmatched open (or active colour) receives a closing reset so the line
/// never leaks formatting into whatever follows it.
///
/// # Examples
///
/// ```
/// use slirc_events::colors::mirc_to_ansi;
///
/// assert_eq!(mirc_to_ansi("plain"), "plain");
/// assert_eq!(mirc_to_ansi("\x034red\x03 done"), "\x1b[91mred\x1b[39;49m done");
/// assert_eq!(mirc_to_ansi("\x02bold"), "\x1b[1mbold\x1b[0m");
/// ```
pub fn mirc_to_ansi(s: &str) -> Cow<'_, str> {
    transform(s, false)
}

/// Remove all mIRC formatting, keeping only the text.
///
/// Idempotent: stripping a stripped string is a no-op, and strings without
/// formatting are returned borrowed.
pub fn strip_formatting(s: &str) -> Cow<'_, str> {
    transform(s, true)
}

fn transform(s: &str, strip: bool) -> Cow<'_, str> {
    if !contains_formatting(s) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    let mut effects = Effects::default();
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        match c {
            COLOUR => {
                match colour_numbers(rest) {
                    Ok((after, (fg, bg))) => {
                        rest = after;
                        if !strip {
                            // Values are at most two digits, parse cannot fail.
                            let fg_num: u8 = fg.parse().unwrap_or(0);
                            match bg {
                                Some(bg) => {
                                    let bg_num: u8 = bg.parse().unwrap_or(0);
                                    out.push_str(&format!(
                                        "\x1b[{};{}m",
                                        fg_code(fg_num),
                                        bg_code(bg_num)
                                    ));
                                }
                                None => out.push_str(&format!("\x1b[{}m", fg_code(fg_num))),
                            }
                            effects.coloured = true;
                        }
                    }
                    Err(_) => {
                        // Bare colour byte closes the current colour.
                        if !strip && effects.coloured {
                            out.push_str("\x1b[39;49m");
                            effects.coloured = false;
                        }
                    }
                }
            }
            BOLD => {
                if !strip {
                    out.push_str(if effects.bold { "\x1b[22m" } else { "\x1b[1m" });
                    effects.bold = !effects.bold;
                }
            }
            ITALICS => {
                if !strip {
                    out.push_str(if effects.italics { "\x1b[23m" } else { "\x1b[3m" });
                    effects.italics = !effects.italics;
                }
            }
            UNDERLINE => {
                if !strip {
                    out.push_str(if effects.underline { "\x1b[24m" } else { "\x1b[4m" });
                    effects.underline = !effects.underline;
                }
            }
            REVERSE => {
                if !strip {
                    out.push_str(if effects.reverse { "\x1b[27m" } else { "\x1b[7m" });
                    effects.reverse = !effects.reverse;
                }
            }
            RESET => {
                if !strip {
                    out.push_str(ANSI_RESET);
                    effects = Effects::default();
                }
            }
            c => out.push(c),
        }
    }

    if !strip && effects.any() {
        out.push_str(ANSI_RESET);
    }

    Cow::Owned(out)
}

/// Tints the markup expander knows, one letter each.
fn tint_code(tag: char) -> Option<u8> {
    let code = match tag {
        'l' => 37, // log
        't' => 90, // trace
        'i' => 32, // info
        'w' => 93, // warning
        'e' => 91, // error
        _ => return None,
    };
    Some(code)
}

/// Bright ANSI palette used by the `<h>` content hash.
const HASH_TINTS: &[u8] = &[91, 92, 93, 94, 95, 96];

/// Stable tint for a string: same input, same colour, forever.
fn hash_tint(s: &str) -> u8 {
    let mut hash: u32 = 5381;
    for b in s.bytes() {
        hash = hash.wrapping_mul(33) ^ u32::from(b);
    }
    HASH_TINTS[(hash as usize) % HASH_TINTS.len()]
}

/// Expand the project's `<...>` markup.
///
/// Single-letter tags become ANSI tints, `</>` closes them, `<h>text</h>`
/// tints `text` by its hash, and `<N>`/`<N,M>` expand to mIRC colour tokens.
/// `\<` escapes a literal `<`. Anything else, including tags with more than
/// five characters between the brackets, stays literal text.
pub fn expand_tags(s: &str) -> Cow<'_, str> {
    if !s.contains('<') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    let mut rest = s;

    'outer: while !rest.is_empty() {
        let Some(open) = rest.find(['<', '\\']) else {
            out.push_str(rest);
            break;
        };

        out.push_str(&rest[..open]);
        rest = &rest[open..];

        if let Some(after) = rest.strip_prefix("\\<") {
            out.push('<');
            rest = after;
            continue;
        }
        if rest.starts_with('\\') {
            out.push('\\');
            rest = &rest[1..];
            continue;
        }

        // rest starts with '<'. An oversized or unterminated tag is literal.
        let body_and_beyond = &rest[1..];
        let Some(close) = body_and_beyond.find('>') else {
            out.push('<');
            rest = body_and_beyond;
            continue;
        };
        if close > 5 {
            out.push('<');
            rest = body_and_beyond;
            continue;
        }

        let body = &body_and_beyond[..close];
        let after = &body_and_beyond[close + 1..];

        match body {
            "/" => {
                out.push_str(ANSI_RESET);
                rest = after;
            }
            "h" => {
                // Needs a matching </h>; otherwise leave the tag literal.
                match after.find("</h>") {
                    Some(end) => {
                        let inner = &after[..end];
                        out.push_str(&format!("\x1b[{}m", hash_tint(inner)));
                        out.push_str(inner);
                        out.push_str(ANSI_RESET);
                        rest = &after[end + 4..];
                    }
                    None => {
                        out.push('<');
                        rest = body_and_beyond;
                    }
                }
            }
            _ => {
                if body.len() == 1 {
                    if let Some(code) = tint_code(body.chars().next().unwrap()) {
                        out.push_str(&format!("\x1b[{}m", code));
                        rest = after;
                        continue 'outer;
                    }
                }
                if let Ok((remaining, (fg, bg))) = colour_numbers(body) {
                    if remaining.is_empty() {
                        out.push(COLOUR);
                        out.push_str(fg);
                        if let Some(bg) = bg {
                            out.push(',');
                            out.push_str(bg);
                        }
                        rest = after;
                        continue 'outer;
                    }
                }
                out.push('<');
                rest = body_and_beyond;
            }
        }
    }

    Cow::Owned(out)
}
