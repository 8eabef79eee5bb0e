//! Error types for the event parser's fallible inner steps.
//!
//! The public entry point ([`crate::parse::line`]) is total: every input
//! yields an event. These types exist for the helpers underneath it; at the
//! boundary they degrade into diagnostics and an `UNSET`/`NUMERIC` kind
//! rather than propagating.

use thiserror::Error;

/// Errors from splitting a raw line into frame parts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FrameError {
    /// Line was empty after CRLF stripping.
    #[error("empty line")]
    EmptyLine,

    /// A `:`-prefixed line with nothing after the prefix.
    #[error("prefix without command")]
    PrefixOnly,

    /// The command token was missing or not extractable.
    #[error("missing command token")]
    MissingCommand,
}

/// Errors from interpreting a discovered server fact.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueError {
    /// An ISUPPORT value that should have been numeric was not.
    #[error("{key} value not a number: {value}")]
    NotANumber {
        /// The ISUPPORT key.
        key: &'static str,
        /// The offending value.
        value: String,
    },

    /// A network name that no known suffix matches.
    #[error("unrecognised network for address {0}")]
    UnknownNetwork(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", FrameError::EmptyLine), "empty line");
        let err = ValueError::NotANumber {
            key: "NICKLEN",
            value: "abc".into(),
        };
        assert_eq!(format!("{}", err), "NICKLEN value not a number: abc");
    }
}
