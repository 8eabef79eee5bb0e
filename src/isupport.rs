//! ISUPPORT (004/005) token handling.
//!
//! The parser splits the argument list off its human-readable tail
//! ("are supported by this server") before handing the head here; this
//! module only knows how to walk `KEY=VALUE` tokens and decode the two
//! structured values, `PREFIX` and `CHANMODES`.

/// One `KEY` or `KEY=VALUE` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub key: &'a str,
    pub value: Option<&'a str>,
}

/// Iterate the space-separated tokens of an ISUPPORT argument head.
pub fn tokens(head: &str) -> impl Iterator<Item = Token<'_>> {
    head.split(' ').filter(|t| !t.is_empty()).map(|t| {
        match t.find('=') {
            Some(eq) => Token {
                key: &t[..eq],
                value: Some(&t[eq + 1..]),
            },
            None => Token {
                key: t,
                value: None,
            },
        }
    })
}

/// Decoded `PREFIX=(ov)@+` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixSpec<'a> {
    /// Mode letters, in rank order.
    pub modes: &'a str,
    /// Status characters, matching `modes` positionally.
    pub prefixes: &'a str,
}

impl<'a> PrefixSpec<'a> {
    pub fn parse(s: &'a str) -> Option<Self> {
        let open = s.find('(')?;
        let close = open + 1 + s[open + 1..].find(')')?;
        let modes = &s[open + 1..close];
        let prefixes = &s[close + 1..];
        if modes.is_empty() || modes.chars().count() != prefixes.chars().count() {
            return None;
        }
        Some(PrefixSpec { modes, prefixes })
    }

    /// Pair each status char with its mode letter.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.prefixes.chars().zip(self.modes.chars())
    }
}

/// Decoded `CHANMODES=eIbq,k,flj,CFLP...` value: the four mode classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChanModes<'a> {
    pub a: &'a str,
    pub b: &'a str,
    pub c: &'a str,
    pub d: &'a str,
}

impl<'a> ChanModes<'a> {
    pub fn parse(s: &'a str) -> Option<Self> {
        let mut parts = s.splitn(4, ',');
        let (a, b, c, d) = (parts.next()?, parts.next()?, parts.next()?, parts.next()?);
        Some(ChanModes { a, b, c, d })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        let head = "NETWORK=freenode NICKLEN=16 EXCEPTS CHANTYPES=#";
        let collected: Vec<_> = tokens(head).collect();
        assert_eq!(collected.len(), 4);
        assert_eq!(collected[0].key, "NETWORK");
        assert_eq!(collected[0].value, Some("freenode"));
        assert_eq!(collected[2].key, "EXCEPTS");
        assert_eq!(collected[2].value, None);
        assert_eq!(collected[3].value, Some("#"));
    }

    #[test]
    fn test_tokens_skip_empty() {
        let collected: Vec<_> = tokens("A=1  B=2").collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn test_prefix_spec() {
        let spec = PrefixSpec::parse("(ov)@+").unwrap();
        assert_eq!(spec.modes, "ov");
        assert_eq!(spec.prefixes, "@+");
        let pairs: Vec<_> = spec.pairs().collect();
        assert_eq!(pairs, vec![('@', 'o'), ('+', 'v')]);

        assert!(PrefixSpec::parse("(qaohv)~&@%+").is_some());
        assert!(PrefixSpec::parse("ov@+").is_none());
        assert!(PrefixSpec::parse("(ov)@").is_none());
        assert!(PrefixSpec::parse("()").is_none());
    }

    #[test]
    fn test_chan_modes() {
        let modes = ChanModes::parse("eIbq,k,flj,CFLMPQScgimnprstz").unwrap();
        assert_eq!(modes.a, "eIbq");
        assert_eq!(modes.b, "k");
        assert_eq!(modes.c, "flj");
        assert_eq!(modes.d, "CFLMPQScgimnprstz");

        assert!(ChanModes::parse("a,b,c").is_none());
    }
}
