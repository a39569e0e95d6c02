//! E-mail-family extraction around an `@`.
//!
//! Unlike URIs the match sits in the middle of the span, so the local part
//! is found by scanning backward and the domain by scanning forward. Both
//! ends are trimmed to an ASCII alphanumeric.

/// Byte may appear in a bare address: printable 7-bit ASCII except
/// `( ) , ; < > "`.
#[inline]
pub fn is_address_byte(b: u8) -> bool {
    b.is_ascii_graphic() && !matches!(b, b'(' | b')' | b',' | b';' | b'<' | b'>' | b'"')
}

/// Grow an address span around the `@` at `at`.
///
/// `text` must not extend before the scanner's cursor; the backward scan
/// stops at its first byte.
pub fn extract(text: &[u8], at: usize) -> Option<(usize, usize)> {
    let mut start = at;
    while start > 0 && is_address_byte(text[start - 1]) {
        start -= 1;
    }
    while start < at && !text[start].is_ascii_alphanumeric() {
        start += 1;
    }
    if start == at {
        return None;
    }

    let mut end = at + 1;
    while end < text.len() && is_address_byte(text[end]) {
        end += 1;
    }
    while end > at + 1 && !text[end - 1].is_ascii_alphanumeric() {
        end -= 1;
    }
    if end <= at + 1 {
        return None;
    }

    Some((start, end))
}

/// Bare addresses activate as `mailto:` links.
pub fn build(span: &[u8]) -> String {
    let mut target = String::with_capacity(span.len() + 7);
    target.push_str("mailto:");
    target.push_str(&String::from_utf8_lossy(span));
    target
}
