//! Upstream pagination envelope.

use serde::{Deserialize, Serialize};

/// One page of a paginated upstream list response.
///
/// The catalog reports `count` for the whole collection and `next`/`previous`
/// as absolute URLs (or null at either end of the collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total entity count across the whole collection, not just this page.
    pub count: u64,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// Entities on this page (upstream serves at most 10).
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether a following page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Whether a preceding page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Total page count at the upstream page size of 10.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.count.div_ceil(10)
    }

    /// Map the results, keeping the pagination envelope intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
