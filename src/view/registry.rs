//! Registered links of a rendered document.
//!
//! Links are appended in document order and looked up by their exact
//! character range, the way an activation event resolves the link under
//! the pointer. The whole set is dropped when the document is cleared.

use rustc_hash::FxHashMap;

/// A link committed to the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredLink {
    /// Target to activate.
    pub target: String,
    /// Start offset in characters from the beginning of the document.
    pub start: usize,
    /// End offset (exclusive) in characters.
    pub end: usize,
}

/// Links of one document, in insertion order.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    links: Vec<RegisteredLink>,
    by_range: FxHashMap<(usize, usize), usize>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a link. A second link with the same range is kept in order
    /// but never found by [`get`](Self::get).
    pub fn push(&mut self, target: String, start: usize, end: usize) {
        debug_assert!(start <= end);
        let idx = self.links.len();
        self.by_range.entry((start, end)).or_insert(idx);
        self.links.push(RegisteredLink { target, start, end });
    }

    /// The link registered for exactly `start..end`.
    pub fn get(&self, start: usize, end: usize) -> Option<&RegisteredLink> {
        self.by_range.get(&(start, end)).map(|&idx| &self.links[idx])
    }

    /// The first link whose range contains `offset`.
    pub fn find_containing(&self, offset: usize) -> Option<&RegisteredLink> {
        let idx = self.links.partition_point(|l| l.end <= offset);
        self.links.get(idx).filter(|l| l.start <= offset && offset < l.end)
    }

    /// Drop every link.
    pub fn clear(&mut self) {
        self.links.clear();
        self.by_range.clear();
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegisteredLink> {
        self.links.iter()
    }
}

impl<'a> IntoIterator for &'a LinkRegistry {
    type Item = &'a RegisteredLink;
    type IntoIter = std::slice::Iter<'a, RegisteredLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
