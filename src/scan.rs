//! Cursor-advancing string slicing.
//!
//! The entire parsing pipeline is built on one primitive: take a mutable
//! reference to a string slice, find a separator, return everything before it
//! and advance the slice past it. When the separator is missing the cursor is
//! left untouched and the empty string is returned; callers decide what that
//! means for the line at hand, the primitive itself never fails.

/// Advance `cursor` past the first occurrence of `sep`, returning the prefix.
///
/// Returns `""` and leaves `cursor` unchanged when `sep` does not occur.
///
/// # Examples
///
/// ```
/// use slirc_events::scan::advance;
///
/// let mut line = "nick!ident@host PRIVMSG #chan :hi";
/// assert_eq!(advance(&mut line, " "), "nick!ident@host");
/// assert_eq!(line, "PRIVMSG #chan :hi");
///
/// let mut nomatch = "PING";
/// assert_eq!(advance(&mut nomatch, " "), "");
/// assert_eq!(nomatch, "PING");
/// ```
#[inline]
pub fn advance<'a>(cursor: &mut &'a str, sep: &str) -> &'a str {
    match cursor.find(sep) {
        Some(pos) => {
            let head = &cursor[..pos];
            *cursor = &cursor[pos + sep.len()..];
            head
        }
        None => "",
    }
}

/// Byte-separator fast path of [`advance`], for protocol framing where the
/// separator is a single ASCII byte.
///
/// Splitting at an ASCII byte is always a UTF-8 boundary, so the slicing here
/// stays safe for arbitrary user text in the remainder.
#[inline]
pub fn advance_byte<'a>(cursor: &mut &'a str, sep: u8) -> &'a str {
    debug_assert!(sep.is_ascii());
    match cursor.as_bytes().iter().position(|&b| b == sep) {
        Some(pos) => {
            let head = &cursor[..pos];
            *cursor = &cursor[pos + 1..];
            head
        }
        None => "",
    }
}

/// Take the whole remainder, leaving the cursor empty.
#[inline]
pub fn take_rest<'a>(cursor: &mut &'a str) -> &'a str {
    std::mem::take(cursor)
}
