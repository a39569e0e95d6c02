//! Quote-level classification of message lines.
//!
//! `>`, `foo>` and `_>` count as quote markers; `<foo>`, `foo bar>` and
//! `foo->` do not. The level is 0 for one marker, 1 for two, and so on.

use memchr::{memchr, memrchr};

use crate::limits::QUOTE_COLORS;

/// Quote level of `line`, or `None` for an unquoted line.
pub fn quote_level(line: &[u8]) -> Option<usize> {
    let first = memchr(b'>', line)?;
    if memchr(b'<', &line[..first]).is_some() {
        return None;
    }
    let last = memrchr(b'>', line)?;

    let mut level: Option<usize> = None;
    let mut p = 0;
    while p <= last {
        while p < last && line[p].is_ascii_whitespace() {
            p += 1;
        }

        let b = line[p];
        if b == b'>' {
            level = Some(level.map_or(0, |l| l + 1));
        } else if b != b'-' && !b.is_ascii_whitespace() {
            // a prefix like "foo>" is allowed, but only without '-' or spaces
            while p < last && !matches!(line[p], b'-' | b'>') && !line[p].is_ascii_whitespace() {
                p += 1;
            }
            if line[p] == b'>' {
                level = Some(level.map_or(0, |l| l + 1));
            } else {
                break;
            }
        }

        p += 1;
    }

    level
}

/// Map a quote level to one of [`QUOTE_COLORS`] visual classes.
///
/// Deep levels wrap around when `recycle` is set and stick to the last
/// class otherwise.
#[inline]
pub fn quote_class(level: usize, recycle: bool) -> usize {
    if level < QUOTE_COLORS {
        level
    } else if recycle {
        level % QUOTE_COLORS
    } else {
        QUOTE_COLORS - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(s: &str) -> Option<usize> {
        quote_level(s.as_bytes())
    }

    #[test]
    fn test_unquoted() {
        assert_eq!(level("plain text"), None);
        assert_eq!(level(""), None);
    }

    #[test]
    fn test_simple_levels() {
        assert_eq!(level("> a"), Some(0));
        assert_eq!(level(">> a"), Some(1));
        assert_eq!(level("> > > a"), Some(2));
    }

    #[test]
    fn test_prefixed_marker() {
        assert_eq!(level("foo> a"), Some(0));
        assert_eq!(level("_> a"), Some(0));
        assert_eq!(level("foo>> a"), Some(1));
    }

    #[test]
    fn test_rejected_markers() {
        assert_eq!(level("<foo> a"), None);
        assert_eq!(level("foo bar> a"), None);
        assert_eq!(level("foo-> a"), None);
    }

    #[test]
    fn test_leading_space() {
        assert_eq!(level("  > a"), Some(0));
    }

    #[test]
    fn test_text_stops_counting() {
        assert_eq!(level("> a > b"), Some(0));
    }

    #[test]
    fn test_quote_class() {
        assert_eq!(quote_class(0, false), 0);
        assert_eq!(quote_class(2, true), 2);
        assert_eq!(quote_class(3, true), 0);
        assert_eq!(quote_class(4, true), 1);
        assert_eq!(quote_class(7, false), 2);
    }
}
