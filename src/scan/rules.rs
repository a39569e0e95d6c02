//! The token-rule table.
//!
//! Each clickable family is one [`TokenRule`] value: a needle, a search
//! function, an extractor and a target builder. Adding a family means adding
//! a row, not a branch in the scanner.

use std::fmt;

use super::{email, search, uri};

/// Which kind of link a rule produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// A URI, activated by opening it.
    Uri,
    /// A bare e-mail address, activated by composing a message.
    Email,
}

/// Search function: offset of `needle` in the haystack.
pub type FindFn = fn(&[u8], &[u8]) -> Option<usize>;

/// Extractor: grow a needle match at the given offset into a `(begin, end)` span.
pub type ExtractFn = fn(&[u8], usize) -> Option<(usize, usize)>;

/// Builder: turn span bytes into the link target.
pub type BuildFn = fn(&[u8]) -> String;

/// One clickable-token family.
#[derive(Clone, Copy)]
pub struct TokenRule {
    /// Literal trigger bytes.
    pub needle: &'static [u8],
    /// Kind of link produced.
    pub kind: LinkKind,
    /// Needle search.
    pub find: FindFn,
    /// Span extraction around a match.
    pub extract: ExtractFn,
    /// Target synthesis.
    pub build: BuildFn,
}

impl TokenRule {
    /// A URI-family rule for `needle`.
    pub const fn uri(needle: &'static [u8]) -> Self {
        Self {
            needle,
            kind: LinkKind::Uri,
            find: search::find_ignore_case,
            extract: uri::extract,
            build: uri::build,
        }
    }

    /// The bare e-mail rule, triggered by `@`.
    pub const fn email() -> Self {
        Self {
            needle: b"@",
            kind: LinkKind::Email,
            find: search::find_byte,
            extract: email::extract,
            build: email::build,
        }
    }

    /// Length of the needle in bytes.
    #[inline]
    pub const fn needle_len(&self) -> usize {
        self.needle.len()
    }
}

impl fmt::Debug for TokenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRule")
            .field("needle", &String::from_utf8_lossy(self.needle))
            .field("kind", &self.kind)
            .finish()
    }
}

/// Built-in rules in priority order. Ties at the same offset go to the
/// earlier row.
pub static RULES: [TokenRule; 6] = [
    TokenRule::uri(b"http://"),
    TokenRule::uri(b"https://"),
    TokenRule::uri(b"ftp://"),
    TokenRule::uri(b"www."),
    TokenRule::uri(b"mailto:"),
    TokenRule::email(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let needles: Vec<&[u8]> = RULES.iter().map(|r| r.needle).collect();
        assert_eq!(
            needles,
            [&b"http://"[..], b"https://", b"ftp://", b"www.", b"mailto:", b"@"]
        );
    }

    #[test]
    fn test_kinds() {
        assert!(RULES[..5].iter().all(|r| r.kind == LinkKind::Uri));
        assert_eq!(RULES[5].kind, LinkKind::Email);
    }

    #[test]
    fn test_debug_shows_needle() {
        let dbg = format!("{:?}", RULES[3]);
        assert!(dbg.contains("www."));
        assert!(dbg.contains("Uri"));
    }
}
