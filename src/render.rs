//! HTML output for a rendered [`TextView`].
//!
//! The document becomes one `<pre>` block. Quoted text is wrapped in
//! `<span class="quoteN">`, links become `<a href>` with their registered
//! target. Everything is escaped with `html-escape`.

use crate::view::{SegmentKind, TextView};

/// HTML output writer with a reusable buffer.
///
/// # Example
/// ```
/// use linkspan::{HtmlWriter, TextView};
///
/// let mut view = TextView::new();
/// view.write_line("mail a@b.example <now>");
///
/// let mut writer = HtmlWriter::with_capacity_for(view.text().len());
/// writer.write_view(&view);
/// let html = writer.into_string();
/// assert!(html.contains("<a href=\"mailto:a@b.example\">a@b.example</a>"));
/// assert!(html.contains("&lt;now&gt;"));
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create with capacity for a document of `text_len` bytes.
    ///
    /// Markup and escapes typically add about a half again.
    #[inline]
    pub fn with_capacity_for(text_len: usize) -> Self {
        Self::with_capacity(text_len + text_len / 2 + 32)
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// Write raw markup without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write text content, escaping `<`, `>` and `&`.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        html_escape::encode_text_to_string(text, &mut self.out);
    }

    /// Write a double-quoted attribute value.
    #[inline]
    pub fn write_escaped_attr(&mut self, value: &str) {
        html_escape::encode_double_quoted_attribute_to_string(value, &mut self.out);
    }

    fn open_quote(&mut self, quote: Option<usize>) {
        if let Some(class) = quote {
            self.out.push_str("<span class=\"quote");
            self.out.push_str(&class.to_string());
            self.out.push_str("\">");
        }
    }

    fn close_quote(&mut self, quote: Option<usize>) {
        if quote.is_some() {
            self.out.push_str("</span>");
        }
    }

    /// Write the whole view as a `<pre>` block.
    pub fn write_view(&mut self, view: &TextView) {
        self.write_str("<pre class=\"message\">");
        for segment in view.segments() {
            let text = view.segment_text(segment);
            match segment.kind {
                SegmentKind::Text { quote } => {
                    self.open_quote(quote);
                    self.write_escaped_text(text);
                    self.close_quote(quote);
                }
                SegmentKind::Link { quote } => {
                    self.open_quote(quote);
                    match view.link_at(segment.start, segment.end) {
                        Some(link) => {
                            self.write_str("<a href=\"");
                            self.write_escaped_attr(&link.target);
                            self.write_str("\">");
                            self.write_escaped_text(text);
                            self.write_str("</a>");
                        }
                        None => self.write_escaped_text(text),
                    }
                    self.close_quote(quote);
                }
                SegmentKind::HeaderName => {
                    self.write_str("<b class=\"header\">");
                    self.write_escaped_text(text);
                    self.write_str("</b>");
                }
                SegmentKind::LineBreak => self.write_str("\n"),
            }
        }
        self.write_str("</pre>\n");
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
