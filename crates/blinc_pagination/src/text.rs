//! Label texts for the pagination bar
//!
//! Static labels are plain strings; the labels that embed numbers are
//! closures so hosts can localize them.
//!
//! ```ignore
//! let text = PaginationText::default()
//!     .items_per_page("Elemente pro Seite:")
//!     .page_range(|_current, total| format!("von {} Seiten", total));
//! ```

use std::fmt;
use std::sync::Arc;

/// `(start, end, total)` -> "1–5 of 50 items"
pub type ItemRangeFn = Arc<dyn Fn(usize, usize, usize) -> String + Send + Sync>;
/// `(start, end)` -> "1–5 items", used when the total is unknown
pub type ItemFn = Arc<dyn Fn(usize, usize) -> String + Send + Sync>;
/// `(current, page_count)` -> "of 10 pages"
pub type PageRangeFn = Arc<dyn Fn(usize, usize) -> String + Send + Sync>;
/// `(current)` -> "page 1", used when the page count is unknown
pub type PageFn = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// Texts rendered by the pagination bar
#[derive(Clone)]
pub struct PaginationText {
    pub(crate) items_per_page: String,
    pub(crate) backward: String,
    pub(crate) forward: String,
    pub(crate) item_range: ItemRangeFn,
    pub(crate) item: ItemFn,
    pub(crate) page_range: PageRangeFn,
    pub(crate) page: PageFn,
}

impl Default for PaginationText {
    fn default() -> Self {
        Self {
            items_per_page: "Items per page:".to_string(),
            backward: "Previous page".to_string(),
            forward: "Next page".to_string(),
            item_range: Arc::new(|start, end, total| format!("{start}–{end} of {total} items")),
            item: Arc::new(|start, end| format!("{start}–{end} items")),
            page_range: Arc::new(|_current, total| {
                format!("of {} {}", total, if total == 1 { "page" } else { "pages" })
            }),
            page: Arc::new(|page| format!("page {page}")),
        }
    }
}

impl PaginationText {
    /// Set the label in front of the page size dropdown
    pub fn items_per_page(mut self, text: impl Into<String>) -> Self {
        self.items_per_page = text.into();
        self
    }

    /// Set the backward button label
    pub fn backward(mut self, text: impl Into<String>) -> Self {
        self.backward = text.into();
        self
    }

    /// Set the forward button label
    pub fn forward(mut self, text: impl Into<String>) -> Self {
        self.forward = text.into();
        self
    }

    /// Set the item range formatter used when the total is known
    pub fn item_range<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize, usize) -> String + Send + Sync + 'static,
    {
        self.item_range = Arc::new(f);
        self
    }

    /// Set the item range formatter used when the total is unknown
    pub fn item<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize) -> String + Send + Sync + 'static,
    {
        self.item = Arc::new(f);
        self
    }

    /// Set the page count formatter
    pub fn page_range<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize) -> String + Send + Sync + 'static,
    {
        self.page_range = Arc::new(f);
        self
    }

    /// Set the current page formatter used when the page count is unknown
    pub fn page<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) -> String + Send + Sync + 'static,
    {
        self.page = Arc::new(f);
        self
    }

    pub(crate) fn format_item_range(&self, start: usize, end: usize, total: Option<usize>) -> String {
        match total {
            Some(total) => (self.item_range)(start, end, total),
            None => (self.item)(start, end),
        }
    }

    pub(crate) fn format_page_range(&self, current: usize, page_count: Option<usize>) -> String {
        match page_count {
            Some(count) => (self.page_range)(current, count),
            None => (self.page)(current),
        }
    }
}

impl fmt::Debug for PaginationText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationText")
            .field("items_per_page", &self.items_per_page)
            .field("backward", &self.backward)
            .field("forward", &self.forward)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_texts() {
        let text = PaginationText::default();
        assert_eq!(text.format_item_range(1, 5, Some(50)), "1–5 of 50 items");
        assert_eq!(text.format_item_range(1, 5, None), "1–5 items");
        assert_eq!(text.format_page_range(1, Some(10)), "of 10 pages");
        assert_eq!(text.format_page_range(1, Some(1)), "of 1 page");
        assert_eq!(text.format_page_range(3, None), "page 3");
    }

    #[test]
    fn test_overrides() {
        let text = PaginationText::default()
            .items_per_page("Per page")
            .page_range(|current, total| format!("{current}/{total}"));
        assert_eq!(text.items_per_page, "Per page");
        assert_eq!(text.format_page_range(2, Some(7)), "2/7");
        // Untouched formatters keep their defaults
        assert_eq!(text.format_item_range(0, 0, Some(0)), "0–0 of 0 items");
    }
}
