//! linkspan: clickable link detection for mail text views
//!
//! Finds URIs and bare e-mail addresses in lines of decoded message text,
//! keeps track of where they were rendered, and checks on activation
//! whether a link's visible text disguises a different target.
//!
//! # Design Principles
//! - One pass per line: byte-level scanning, no regex, no backtracking
//! - Token families are data: a table of needle/search/extract/build rules
//! - Scanner and verifier are total: hostile text never makes them fail
//! - A suspicious link only opens on an explicit yes
//!
//! # Example
//! ```
//! use linkspan::{Action, Answer, TextView};
//!
//! let mut view = TextView::new();
//! view.write_line("Details at http://example.com/info, or ask bob@example.com.");
//!
//! let link = view.links().iter().next().unwrap();
//! assert_eq!(link.target, "http://example.com/info");
//!
//! let action = view.activate(link.start, link.end, &mut |_: &linkspan::Mismatch| Answer::No);
//! assert_eq!(action, Some(Action::Open { uri: "http://example.com/info".into() }));
//! ```

pub mod error;
pub mod limits;
pub mod render;
pub mod scan;
pub mod trust;
pub mod view;

// Re-export primary types
pub use error::{Error, Result};
pub use render::HtmlWriter;
pub use scan::{scan, scan_with, LinkKind, Span, Spans, TokenRule, RULES};
pub use trust::{verify, Answer, Confirm, Mismatch, Verdict};
pub use view::{Action, LinkRegistry, RegisteredLink, Segment, SegmentKind, TextView};

/// Display options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Classify quoted lines so they can be coloured.
    pub enable_color: bool,
    /// Wrap quote levels past the last colour instead of clamping.
    pub recycle_quote_colors: bool,
    /// Characters of a link target shown in a status line.
    pub status_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            enable_color: true,
            recycle_quote_colors: false,
            status_width: limits::STATUS_URI_WIDTH,
        }
    }
}

/// Render a plain-text body to HTML with clickable links.
///
/// # Example
/// ```
/// let html = linkspan::to_html("see www.example.org\n> quoted");
/// assert!(html.contains("<a href=\"www.example.org\">www.example.org</a>"));
/// assert!(html.contains("<span class=\"quote0\">"));
/// ```
pub fn to_html(body: &str) -> String {
    to_html_with_options(body, &Options::default())
}

/// Render a plain-text body to HTML with options.
pub fn to_html_with_options(body: &str, options: &Options) -> String {
    let mut view = TextView::with_options(*options);
    view.write_text(body);
    let mut writer = HtmlWriter::with_capacity_for(body.len());
    writer.write_view(&view);
    writer.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert!(options.enable_color);
        assert!(!options.recycle_quote_colors);
        assert_eq!(options.status_width, limits::STATUS_URI_WIDTH);
    }

    #[test]
    fn test_to_html_empty() {
        assert_eq!(to_html(""), "<pre class=\"message\"></pre>\n");
    }

    #[test]
    fn test_to_html_lines() {
        let html = to_html("one\ntwo http://a.example\n");
        assert_eq!(
            html,
            "<pre class=\"message\">one\ntwo <a href=\"http://a.example\">http://a.example</a>\n</pre>\n"
        );
    }

    #[test]
    fn test_to_html_without_color() {
        let options = Options {
            enable_color: false,
            ..Options::default()
        };
        assert_eq!(
            to_html_with_options("> q", &options),
            "<pre class=\"message\">&gt; q\n</pre>\n"
        );
    }
}
