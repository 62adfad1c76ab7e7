//! Page state reconciliation
//!
//! [`PageState`] owns the current page and page size of one pagination
//! instance. It changes in two ways:
//!
//! - **User events** (`select_page_size`, `forward`, `backward`, `jump_to`)
//!   return a [`PageChange`] for the component to report through `on_change`.
//! - **Prop changes** (`reconcile`) adopt controlled `page` / `page_size`
//!   overrides and reset to the first page when the current page size
//!   disappears from `page_sizes`. These are silent.
//!
//! Prop rules compare each prop against the value it had on the previous
//! render cycle, never against the internal state. A re-render that
//! re-supplies `page = 3` after the user moved to page 2 leaves the user on
//! page 2.

use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::props::PaginationProps;

/// Payload of the `on_change` notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageChange {
    pub page: usize,
    pub page_size: usize,
}

/// Number of pages needed for `total_items`, never less than one
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// First and last item index (1-based, inclusive) shown on `page`
///
/// Both ends are zero for an empty collection. Without a total the end is
/// the last slot of the page. Both ends saturate at `usize::MAX`.
pub fn item_range(page: usize, page_size: usize, total_items: Option<usize>) -> (usize, usize) {
    let first_slot = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .saturating_add(1);
    let last_slot = page.saturating_mul(page_size);
    match total_items {
        Some(0) => (0, 0),
        Some(total) => (first_slot, last_slot.min(total)),
        None => (first_slot, last_slot),
    }
}

/// Internal page state plus the previous cycle's controlled props
#[derive(Clone, Debug)]
pub struct PageState {
    current_page: usize,
    current_page_size: usize,
    prev_page: Option<usize>,
    prev_page_size: Option<usize>,
    prev_page_sizes: SmallVec<[usize; 4]>,
}

impl PageState {
    /// Seed state from the first render's props
    ///
    /// `props.page_sizes` must not be empty.
    pub fn new(props: &PaginationProps) -> Self {
        let current_page = props.page.unwrap_or(1);
        let current_page_size = props.page_size.unwrap_or_else(|| props.first_page_size());
        debug!(
            page = current_page,
            page_size = current_page_size,
            "pagination mounted"
        );
        Self {
            current_page,
            current_page_size,
            prev_page: props.page,
            prev_page_size: props.page_size,
            prev_page_sizes: props.page_size_values(),
        }
    }

    pub fn page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.current_page_size
    }

    /// Current page and page size as a notification payload
    pub fn snapshot(&self) -> PageChange {
        PageChange {
            page: self.current_page,
            page_size: self.current_page_size,
        }
    }

    /// Page count for the given props, `None` when pages are unknown
    pub fn page_count(&self, props: &PaginationProps) -> Option<usize> {
        props
            .known_total()
            .map(|total| page_count(total, self.current_page_size))
    }

    pub fn item_range(&self, props: &PaginationProps) -> (usize, usize) {
        item_range(
            self.current_page,
            self.current_page_size,
            props.known_total(),
        )
    }

    pub fn can_go_backward(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_forward(&self, props: &PaginationProps) -> bool {
        if self.current_page == usize::MAX {
            return false;
        }
        if props.pages_unknown {
            return !props.is_last_page.unwrap_or(false);
        }
        match self.page_count(props) {
            Some(count) => self.current_page < count,
            // Total not supplied: nothing bounds the page
            None => true,
        }
    }

    /// Run one reconciliation pass against a new render cycle's props
    ///
    /// Returns `true` if the page or page size changed. Every shadow value
    /// is updated whether or not its rule fired.
    pub fn reconcile(&mut self, props: &PaginationProps) -> bool {
        let before = self.snapshot();

        if props.page != self.prev_page {
            if let Some(page) = props.page {
                debug!(from = self.current_page, to = page, "controlled page changed");
                self.current_page = page;
            }
        }
        self.prev_page = props.page;

        if props.page_size != self.prev_page_size {
            if let Some(size) = props.page_size {
                debug!(
                    from = self.current_page_size,
                    to = size,
                    in_page_sizes = props.contains_page_size(size),
                    "controlled page size changed"
                );
                self.current_page_size = size;
            }
        }
        self.prev_page_size = props.page_size;

        let page_sizes = props.page_size_values();
        if page_sizes != self.prev_page_sizes {
            if !page_sizes.contains(&self.current_page_size) {
                debug!(
                    page_size = self.current_page_size,
                    ?page_sizes,
                    "page size no longer offered, returning to first page"
                );
                self.current_page = 1;
            } else {
                trace!(?page_sizes, "page sizes changed, current size still offered");
            }
        }
        self.prev_page_sizes = page_sizes;

        let changed = self.snapshot() != before;
        if !changed {
            trace!("reconciliation pass left page state unchanged");
        }
        changed
    }

    /// User picked a page size in the dropdown
    pub fn select_page_size(&mut self, size: usize) -> Option<PageChange> {
        if size == self.current_page_size {
            return None;
        }
        debug!(
            from = self.current_page_size,
            to = size,
            "page size selected, returning to first page"
        );
        self.current_page_size = size;
        self.current_page = 1;
        Some(self.snapshot())
    }

    /// User clicked the forward button
    pub fn forward(&mut self, props: &PaginationProps) -> Option<PageChange> {
        if !self.can_go_forward(props) {
            trace!(page = self.current_page, "forward ignored at last page");
            return None;
        }
        self.current_page += 1;
        debug!(page = self.current_page, "moved forward");
        Some(self.snapshot())
    }

    /// User clicked the backward button
    pub fn backward(&mut self) -> Option<PageChange> {
        if !self.can_go_backward() {
            trace!("backward ignored at first page");
            return None;
        }
        self.current_page -= 1;
        debug!(page = self.current_page, "moved backward");
        Some(self.snapshot())
    }

    /// User committed an explicit page number
    ///
    /// Pages below one or past the known page count are dropped.
    pub fn jump_to(&mut self, page: usize, props: &PaginationProps) -> Option<PageChange> {
        let in_bounds = page >= 1 && self.page_count(props).map_or(true, |count| page <= count);
        if !in_bounds {
            debug!(page, "page jump out of bounds, ignored");
            return None;
        }
        if page == self.current_page {
            return None;
        }
        debug!(from = self.current_page, to = page, "jumped to page");
        self.current_page = page;
        Some(self.snapshot())
    }
}
