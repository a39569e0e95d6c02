//! URI-family extraction: `http://`, `https://`, `ftp://`, `www.`, `mailto:`.
//!
//! A URI span starts at the needle and runs over printable 7-bit ASCII up to
//! whitespace or one of `( ) < > "`. Trailing punctuation other than `/` is
//! then dropped so sentence punctuation does not end up in the link.

/// Byte may appear inside a URI span.
#[inline]
pub fn is_uri_byte(b: u8) -> bool {
    b.is_ascii_graphic() && !matches!(b, b'(' | b')' | b'<' | b'>' | b'"')
}

/// Byte is stripped from the end of a URI span.
#[inline]
fn is_trailing_punct(b: u8) -> bool {
    b.is_ascii_punctuation() && b != b'/'
}

/// Grow a URI span from a needle match at `at`.
///
/// Always succeeds; the scanner decides whether the result is long enough.
/// The strip loop keeps at least two bytes after `at`.
pub fn extract(text: &[u8], at: usize) -> Option<(usize, usize)> {
    let mut end = at;
    while end < text.len() && is_uri_byte(text[end]) {
        end += 1;
    }

    while end > at + 2 && is_trailing_punct(text[end - 1]) {
        end -= 1;
    }

    Some((at, end))
}

/// The target of a URI span is its text.
pub fn build(span: &[u8]) -> String {
    String::from_utf8_lossy(span).into_owned()
}
