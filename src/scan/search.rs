//! Needle search over line bytes.
//!
//! Candidate positions come from `memchr`/`memchr2` on the needle's first
//! byte (both cases for letters), and the rest of the needle is compared
//! ASCII case-insensitively. No allocation, O(n * needle) worst case.

use memchr::{memchr, memchr2};

/// Find `needle` in `haystack`, ignoring ASCII case.
///
/// Returns the offset of the first match. An empty needle matches at 0.
///
/// # Example
/// ```
/// use linkspan::scan::search::find_ignore_case;
///
/// assert_eq!(find_ignore_case(b"see HTTP://x", b"http://"), Some(4));
/// assert_eq!(find_ignore_case(b"nothing", b"www."), None);
/// ```
#[inline]
pub fn find_ignore_case(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let Some(&first) = needle.first() else {
        return Some(0);
    };
    if needle.len() > haystack.len() {
        return None;
    }

    let last_start = haystack.len() - needle.len();
    let lower = first.to_ascii_lowercase();
    let upper = first.to_ascii_uppercase();
    let tail = &needle[1..];

    let mut pos = 0;
    while pos <= last_start {
        let window = &haystack[pos..=last_start];
        let hit = if lower == upper {
            memchr(lower, window)
        } else {
            memchr2(lower, upper, window)
        };
        let Some(rel) = hit else {
            return None;
        };
        let start = pos + rel;
        let rest = &haystack[start + 1..start + needle.len()];
        if rest.eq_ignore_ascii_case(tail) {
            return Some(start);
        }
        pos = start + 1;
    }
    None
}

/// Find a single-byte needle exactly.
///
/// Used for needles with no letters, where case folding is moot.
#[inline]
pub fn find_byte(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    match needle {
        [b] => memchr(*b, haystack),
        _ => find_ignore_case(haystack, needle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_exact_case() {
        assert_eq!(find_ignore_case(b"go to http://a", b"http://"), Some(6));
    }

    #[test]
    fn test_find_mixed_case() {
        assert_eq!(find_ignore_case(b"Www.Example.com", b"www."), Some(0));
        assert_eq!(find_ignore_case(b"MAILTO:x@y", b"mailto:"), Some(0));
    }

    #[test]
    fn test_find_first_of_many() {
        assert_eq!(find_ignore_case(b"www. www.", b"www."), Some(0));
        assert_eq!(find_ignore_case(b"ww www.", b"www."), Some(3));
    }

    #[test]
    fn test_find_partial_prefix_then_match() {
        assert_eq!(find_ignore_case(b"httphttp://", b"http://"), Some(4));
    }

    #[test]
    fn test_find_needle_longer_than_haystack() {
        assert_eq!(find_ignore_case(b"http", b"http://"), None);
    }

    #[test]
    fn test_find_at_end() {
        assert_eq!(find_ignore_case(b"abc ftp://", b"ftp://"), Some(4));
    }

    #[test]
    fn test_find_empty() {
        assert_eq!(find_ignore_case(b"", b"@"), None);
        assert_eq!(find_ignore_case(b"abc", b""), Some(0));
    }

    #[test]
    fn test_find_byte() {
        assert_eq!(find_byte(b"foo@bar", b"@"), Some(3));
        assert_eq!(find_byte(b"foobar", b"@"), None);
        assert_eq!(find_byte(b"x WWW.y", b"www."), Some(2));
    }
}
