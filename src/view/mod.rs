//! Rendered message text with clickable links.
//!
//! [`TextView`] is the append-only document a message body is written
//! into, line by line. Each line is scanned for links; plain and link
//! pieces are appended as [`Segment`]s and every link is registered under
//! its character range in the document. Activating a range looks the link
//! up again and, for web links, checks the text currently shown for it
//! against the target before anything is opened.

pub mod quote;
pub mod registry;

pub use quote::{quote_class, quote_level};
pub use registry::{LinkRegistry, RegisteredLink};

use std::ops::Range;

use crate::error::{Error, Result};
use crate::limits;
use crate::scan::{self, RULES};
use crate::trust::{self, Confirm, Mismatch};
use crate::Options;

/// What a piece of rendered text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Plain text, with the quote class of its line.
    Text { quote: Option<usize> },
    /// A registered link, with the quote class of its line.
    Link { quote: Option<usize> },
    /// A header name followed by its colon.
    HeaderName,
    /// The newline ending a line.
    LineBreak,
}

/// One contiguous piece of the rendered text.
///
/// `start..end` are character offsets into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: usize,
    pub end: usize,
    bytes: Range<usize>,
}

impl Segment {
    #[inline]
    pub fn is_link(&self) -> bool {
        matches!(self.kind, SegmentKind::Link { .. })
    }
}

/// What to do after a link was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Compose a new message to `address` (target had a `mailto:` prefix).
    Compose { address: String },
    /// Open `uri`.
    Open { uri: String },
    /// The link's text disguises its target and the reader did not agree
    /// to open it.
    Blocked { mismatch: Mismatch },
}

const MAILTO: &str = "mailto:";

/// Headers whose bodies are shown on a single line.
const UNFOLDED_HEADERS: [&str; 4] = ["Subject", "From", "To", "Cc"];

/// Document of rendered message text.
#[derive(Debug, Default)]
pub struct TextView {
    text: String,
    char_len: usize,
    segments: Vec<Segment>,
    links: LinkRegistry,
    cursor: usize,
    selection: Option<(usize, usize)>,
    options: Options,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The whole rendered text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the rendered text in characters.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn links(&self) -> &LinkRegistry {
        &self.links
    }

    /// Text of a segment produced by this view.
    pub fn segment_text(&self, segment: &Segment) -> &str {
        &self.text[segment.bytes.clone()]
    }

    /// Append one line of decoded text, detecting links in it.
    ///
    /// A trailing `\n` or `\r\n` is dropped and replaced by a line break
    /// segment. Returns the segments added for this line.
    pub fn write_line(&mut self, line: &str) -> &[Segment] {
        let first = self.segments.len();
        let line = line.trim_end_matches(['\r', '\n']);

        let quote = if self.options.enable_color {
            quote_level(line.as_bytes())
                .map(|level| quote_class(level, self.options.recycle_quote_colors))
        } else {
            None
        };

        if line.len() > limits::MAX_LINE_LEN {
            log::debug!(
                "line of {} bytes scanned up to {} bytes only",
                line.len(),
                limits::MAX_LINE_LEN
            );
        }

        self.write_scanned(line, quote);
        self.push("\n", SegmentKind::LineBreak);

        &self.segments[first..]
    }

    /// Append one message header, detecting links in its body.
    ///
    /// `Subject`, `From`, `To` and `Cc` bodies are unfolded onto one line
    /// first. Other bodies keep their line breaks.
    pub fn write_header(&mut self, name: &str, body: &str) -> &[Segment] {
        let first = self.segments.len();
        self.push(&format!("{name}:"), SegmentKind::HeaderName);

        if UNFOLDED_HEADERS.iter().any(|h| h.eq_ignore_ascii_case(name)) {
            let unfolded = unfold(body);
            self.write_scanned(unfolded.trim_end_matches(['\r', '\n']), None);
        } else {
            let body = body.trim_end_matches(['\r', '\n']);
            for (idx, line) in body.split('\n').enumerate() {
                if idx > 0 {
                    self.push("\n", SegmentKind::LineBreak);
                }
                self.write_scanned(line.trim_end_matches('\r'), None);
            }
        }
        self.push("\n", SegmentKind::LineBreak);

        &self.segments[first..]
    }

    /// Scan `line` and append its plain and link pieces.
    fn write_scanned(&mut self, line: &str, quote: Option<usize>) {
        let mut plain = 0;
        for span in scan::scan(line) {
            let range = span.range();
            if range.start > plain {
                self.push(&line[plain..range.start], SegmentKind::Text { quote });
            }
            let target = span.target(line.as_bytes(), &RULES);
            let (start, end) = self.push(&line[range.clone()], SegmentKind::Link { quote });
            self.links.push(target, start, end);
            plain = range.end;
        }
        if plain < line.len() {
            self.push(&line[plain..], SegmentKind::Text { quote });
        }
    }

    /// Append a whole body, one [`write_line`](Self::write_line) per line.
    pub fn write_text(&mut self, body: &str) {
        for line in body.lines() {
            self.write_line(line);
        }
    }

    /// Append an anchor from an HTML part: `text` shown, `uri` as target.
    ///
    /// Leading whitespace of `text` stays plain. HTML entities in `uri`
    /// are decoded. No line break is added.
    pub fn write_link(&mut self, text: &str, uri: &str) {
        let text = text.trim_end_matches(['\r', '\n']);
        if text.is_empty() {
            return;
        }

        let shown = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
        let lead = &text[..text.len() - shown.len()];
        if !lead.is_empty() {
            self.push(lead, SegmentKind::Text { quote: None });
        }
        if shown.is_empty() {
            return;
        }

        let target = html_escape::decode_html_entities(uri).into_owned();
        let (start, end) = self.push(shown, SegmentKind::Link { quote: None });
        self.links.push(target, start, end);
    }

    /// Drop all text and links, e.g. before showing another message.
    pub fn clear(&mut self) {
        self.text.clear();
        self.char_len = 0;
        self.segments.clear();
        self.links.clear();
        self.cursor = 0;
        self.selection = None;
    }

    /// Text shown at the character range `start..end`.
    pub fn text_range(&self, start: usize, end: usize) -> Result<&str> {
        if start > end || end > self.char_len {
            return Err(Error::OutOfBounds {
                start,
                end,
                len: self.char_len,
            });
        }
        let from = self.byte_offset(start);
        let to = from + byte_len(&self.text[from..], end - start);
        Ok(&self.text[from..to])
    }

    /// The link registered for exactly `start..end`.
    pub fn link_at(&self, start: usize, end: usize) -> Option<&RegisteredLink> {
        self.links.get(start, end)
    }

    /// The link shown at character `offset`, e.g. under the pointer.
    pub fn link_containing(&self, offset: usize) -> Option<&RegisteredLink> {
        self.links.find_containing(offset)
    }

    /// Activate the link shown at character `offset`.
    ///
    /// Same as [`activate`](Self::activate) on that link's range.
    pub fn activate_at(&self, offset: usize, prompt: &mut dyn Confirm) -> Option<Action> {
        let link = self.links.find_containing(offset)?;
        self.activate(link.start, link.end, prompt)
    }

    /// Link target shortened for a status line.
    pub fn status_text(&self, link: &RegisteredLink) -> String {
        trim_chars(&link.target, self.options.status_width)
    }

    /// Activate the link at exactly `start..end`.
    ///
    /// Returns `None` when no link is registered there. `mailto:` targets
    /// compose without any check. Other targets are verified against the
    /// text currently shown and `prompt` is asked when they disagree.
    pub fn activate(&self, start: usize, end: usize, prompt: &mut dyn Confirm) -> Option<Action> {
        let link = self.links.get(start, end)?;
        log::debug!("activate {:?} at {}..{}", link.target, start, end);

        let target = link.target.as_str();
        if target.len() >= MAILTO.len()
            && target.as_bytes()[..MAILTO.len()].eq_ignore_ascii_case(MAILTO.as_bytes())
        {
            return Some(Action::Compose {
                address: target[MAILTO.len()..].to_owned(),
            });
        }

        let visible = match self.text_range(link.start, link.end) {
            Ok(visible) => visible,
            Err(err) => {
                log::warn!("cannot read link text: {err}");
                return Some(Action::Blocked {
                    mismatch: Mismatch {
                        actual: target.to_owned(),
                        apparent: String::new(),
                    },
                });
            }
        };

        let verdict = trust::verify(target, visible);
        Some(match trust::confirm_verdict(verdict, prompt) {
            Ok(()) => Action::Open {
                uri: target.to_owned(),
            },
            Err(mismatch) => Action::Blocked { mismatch },
        })
    }

    /// Insertion cursor, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the text, and clear the selection.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.char_len);
        self.selection = None;
    }

    /// Range selected by the last successful search.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Find `needle` at or after the cursor and select it.
    ///
    /// The cursor moves to the end of the match.
    pub fn search_forward(&mut self, needle: &str, case_sensitive: bool) -> Option<(usize, usize)> {
        if needle.is_empty() {
            return None;
        }
        let from = self.byte_offset(self.cursor);
        let pos = self.text[from..]
            .char_indices()
            .position(|(i, _)| starts_with_chars(&self.text[from + i..], needle, case_sensitive))?;

        let start = self.cursor + pos;
        let found = (start, start + needle.chars().count());
        self.selection = Some(found);
        self.cursor = found.1;
        Some(found)
    }

    /// Find `needle` starting before the cursor and select it.
    ///
    /// The cursor moves to the start of the match.
    pub fn search_backward(&mut self, needle: &str, case_sensitive: bool) -> Option<(usize, usize)> {
        if needle.is_empty() {
            return None;
        }
        let to = self.byte_offset(self.cursor);
        let back = self.text[..to]
            .char_indices()
            .rev()
            .position(|(i, _)| starts_with_chars(&self.text[i..], needle, case_sensitive))?;

        let start = self.cursor - back - 1;
        let found = (start, start + needle.chars().count());
        self.selection = Some(found);
        self.cursor = start;
        Some(found)
    }

    /// Append `s` and record it as a segment. Returns its character range.
    fn push(&mut self, s: &str, kind: SegmentKind) -> (usize, usize) {
        let start = self.char_len;
        let bytes_start = self.text.len();
        self.text.push_str(s);
        self.char_len += s.chars().count();
        self.segments.push(Segment {
            kind,
            start,
            end: self.char_len,
            bytes: bytes_start..self.text.len(),
        });
        (start, self.char_len)
    }

    fn byte_offset(&self, chars: usize) -> usize {
        byte_len(&self.text, chars)
    }
}

/// Byte length of the first `chars` characters of `s`.
#[inline]
fn byte_len(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

/// Whether `hay` starts with the characters of `needle`.
#[inline]
fn starts_with_chars(hay: &str, needle: &str, case_sensitive: bool) -> bool {
    let mut hay = hay.chars();
    needle.chars().all(|n| {
        hay.next().is_some_and(|h| {
            h == n || (!case_sensitive && h.to_lowercase().eq(n.to_lowercase()))
        })
    })
}

/// Join folded header lines: a line break followed by whitespace is dropped.
fn unfold(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(idx) = rest.find(['\r', '\n']) {
        out.push_str(&rest[..idx]);
        let after = rest[idx..].trim_start_matches(['\r', '\n']);
        if !after.starts_with([' ', '\t']) && !after.is_empty() {
            out.push(' ');
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

/// Shorten `s` to `width` characters, marking the cut with `...`.
pub fn trim_chars(s: &str, width: usize) -> String {
    match s.char_indices().nth(width) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + 3);
            out.push_str(&s[..cut]);
            out.push_str("...");
            out
        }
        None => s.to_owned(),
    }
}
