//! Clickable-span scanning for a single line of text.
//!
//! One left-to-right pass: at the cursor every rule searches for its needle,
//! the left-most match wins (ties go to the earlier rule), and the winning
//! rule's extractor grows the match into a span. A rejected match moves the
//! cursor past its needle. Each rule's next match is remembered until the
//! cursor passes it, so every rule searches the line about once.
//!
//! # Example
//! ```
//! use linkspan::scan::{scan, RULES};
//!
//! let line = "Visit http://example.com/path, or mail foo@example.com.";
//! let spans = scan(line);
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[0].as_str(line), "http://example.com/path");
//! assert_eq!(spans[1].target(line.as_bytes(), &RULES), "mailto:foo@example.com");
//! ```

pub mod email;
pub mod rules;
pub mod search;
pub mod uri;

pub use rules::{LinkKind, RULES, TokenRule};

use smallvec::{smallvec, SmallVec};

use crate::limits;

/// A detected clickable region of a line.
///
/// Half-open byte range into the scanned line plus the index of the rule
/// that produced it. Span bytes are always ASCII.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub begin: u32,
    pub end: u32,
    pub rule: u8,
}

// Compile-time size verification
const _: () = assert!(std::mem::size_of::<Span>() == 12);

/// Spans found in one line, in order.
pub type Spans = SmallVec<[Span; limits::INLINE_SPANS]>;

impl Span {
    /// Create a span from usize offsets.
    #[inline]
    pub fn from_usize(begin: usize, end: usize, rule: usize) -> Self {
        debug_assert!(end <= u32::MAX as usize);
        debug_assert!(rule <= u8::MAX as usize);
        Self {
            begin: begin as u32,
            end: end as u32,
            rule: rule as u8,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        (self.end - self.begin) as usize
    }

    /// Whether the span is empty. Never true for scanner output.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// The span as a `usize` range.
    #[inline]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.begin as usize..self.end as usize
    }

    /// Bytes of the line covered by this span.
    #[inline]
    pub fn slice<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        &line[self.range()]
    }

    /// Text of the line covered by this span.
    #[inline]
    pub fn as_str<'a>(&self, line: &'a str) -> &'a str {
        &line[self.range()]
    }

    /// The rule that produced this span.
    #[inline]
    pub fn rule<'r>(&self, rules: &'r [TokenRule]) -> &'r TokenRule {
        &rules[self.rule as usize]
    }

    /// Build the link target for this span.
    pub fn target(&self, line: &[u8], rules: &[TokenRule]) -> String {
        (self.rule(rules).build)(self.slice(line))
    }
}

/// Cached search result of one rule.
#[derive(Clone, Copy)]
enum Next {
    Unknown,
    At(usize),
    Absent,
}

/// Scan a line with the built-in rules.
#[inline]
pub fn scan(line: &str) -> Spans {
    scan_with(line.as_bytes(), &RULES)
}

/// Scan a line with a caller-supplied rule table.
///
/// Only the first [`limits::MAX_LINE_LEN`] bytes are considered. A table
/// with more than [`limits::MAX_RULES`] rows finds nothing.
pub fn scan_with(line: &[u8], rules: &[TokenRule]) -> Spans {
    if rules.len() > limits::MAX_RULES {
        log::warn!("rule table of {} rows exceeds {}", rules.len(), limits::MAX_RULES);
        return Spans::new();
    }

    let line = &line[..line.len().min(limits::MAX_LINE_LEN)];
    let mut spans = Spans::new();
    // next match of each rule at or after the cursor, searched lazily
    let mut next: SmallVec<[Next; 8]> = smallvec![Next::Unknown; rules.len()];
    let mut walk = 0usize;

    while walk < line.len() {
        let rest = &line[walk..];

        let mut best: Option<(usize, usize)> = None;
        for (idx, rule) in rules.iter().enumerate() {
            let pos = match next[idx] {
                Next::At(pos) if pos >= walk => Some(pos),
                Next::Absent => None,
                _ => {
                    let found = (rule.find)(rest, rule.needle).map(|rel| walk + rel);
                    next[idx] = found.map_or(Next::Absent, Next::At);
                    found
                }
            };
            if let Some(pos) = pos {
                if best.is_none_or(|(at, _)| pos < at) {
                    best = Some((pos, idx));
                }
            }
        }
        let Some((pos, idx)) = best else {
            break;
        };
        let at = pos - walk;

        let rule = &rules[idx];
        match (rule.extract)(rest, at) {
            Some((begin, end))
                if begin <= end && end <= rest.len() && end - begin > rule.needle_len() + 1 =>
            {
                spans.push(Span::from_usize(walk + begin, walk + end, idx));
                walk += end;
            }
            _ => {
                log::trace!(
                    "rejected {:?} match at {}",
                    String::from_utf8_lossy(rule.needle),
                    walk + at
                );
                walk += at + rule.needle_len().max(1);
            }
        }
    }

    spans
}
