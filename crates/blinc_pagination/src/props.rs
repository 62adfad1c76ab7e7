//! Props supplied to the pagination component on every render cycle

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::text::PaginationText;

/// An entry in the page size dropdown
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSizeOption {
    /// Number of items per page
    pub value: usize,
    /// Label shown in the dropdown
    pub text: String,
}

impl PageSizeOption {
    pub fn new(value: usize, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }
}

impl From<usize> for PageSizeOption {
    fn from(value: usize) -> Self {
        Self {
            value,
            text: value.to_string(),
        }
    }
}

/// Ordered page size options
pub type PageSizes = SmallVec<[PageSizeOption; 4]>;

/// External configuration of one render cycle
///
/// `page_sizes` must not be empty. `page` and `page_size` are controlled
/// overrides: they only take effect when they differ from the previous
/// cycle's value.
#[derive(Clone, Debug)]
pub struct PaginationProps {
    pub page_sizes: PageSizes,
    /// Total number of items, `None` when unknown
    pub total_items: Option<usize>,
    /// Hide the page count and gate forward navigation on `is_last_page`
    pub pages_unknown: bool,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub disabled: bool,
    /// Only consulted when `pages_unknown` is set
    pub is_last_page: Option<bool>,
    pub page_input_disabled: bool,
    pub page_size_input_disabled: bool,
    pub text: PaginationText,
}

impl PaginationProps {
    /// Create props for the given page sizes
    pub fn new<I, T>(page_sizes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PageSizeOption>,
    {
        Self {
            page_sizes: page_sizes.into_iter().map(Into::into).collect(),
            total_items: None,
            pages_unknown: false,
            page: None,
            page_size: None,
            disabled: false,
            is_last_page: None,
            page_input_disabled: false,
            page_size_input_disabled: false,
            text: PaginationText::default(),
        }
    }

    pub fn page_sizes<I, T>(mut self, page_sizes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PageSizeOption>,
    {
        self.page_sizes = page_sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn total_items(mut self, total: usize) -> Self {
        self.total_items = Some(total);
        self
    }

    pub fn pages_unknown(mut self, unknown: bool) -> Self {
        self.pages_unknown = unknown;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_last_page(mut self, last: bool) -> Self {
        self.is_last_page = Some(last);
        self
    }

    pub fn page_input_disabled(mut self, disabled: bool) -> Self {
        self.page_input_disabled = disabled;
        self
    }

    pub fn page_size_input_disabled(mut self, disabled: bool) -> Self {
        self.page_size_input_disabled = disabled;
        self
    }

    pub fn text(mut self, text: PaginationText) -> Self {
        self.text = text;
        self
    }

    /// The page size used when nothing else selects one
    ///
    /// Panics if `page_sizes` is empty, which callers must not supply.
    pub fn first_page_size(&self) -> usize {
        self.page_sizes[0].value
    }

    /// Page size values in display order
    pub fn page_size_values(&self) -> SmallVec<[usize; 4]> {
        self.page_sizes.iter().map(|o| o.value).collect()
    }

    pub fn contains_page_size(&self, size: usize) -> bool {
        self.page_sizes.iter().any(|o| o.value == size)
    }

    /// Whether the page count is computable
    pub(crate) fn known_total(&self) -> Option<usize> {
        if self.pages_unknown {
            None
        } else {
            self.total_items
        }
    }
}
