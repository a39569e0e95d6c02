//! Fixed limits for scanning and display.
//!
//! These bound the work done per line so that hostile message bodies
//! cannot make rendering arbitrarily expensive.

/// Maximum number of bytes of a single line that are scanned for links.
/// Bytes past this limit are rendered as plain text.
pub const MAX_LINE_LEN: usize = 8191;

/// Maximum number of characters of a link target shown in a status line.
pub const STATUS_URI_WIDTH: usize = 60;

/// Number of distinct quote colours; deeper levels wrap or clamp.
pub const QUOTE_COLORS: usize = 3;

/// Maximum number of rows in a rule table; a span stores its rule index
/// in one byte.
pub const MAX_RULES: usize = u8::MAX as usize + 1;

/// Inline capacity of the per-line span list before it spills to the heap.
pub const INLINE_SPANS: usize = 4;
