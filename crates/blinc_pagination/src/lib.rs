//! # Blinc Pagination (blinc_pagination)
//!
//! A headless pagination bar for the Blinc component library: page size
//! dropdown, item range label, page count label, previous/next buttons and a
//! page input.
//!
//! The crate owns the state, not the pixels. A host renders a
//! [`PaginationView`] with its own dropdown, button and input primitives and
//! feeds user interaction back as [`PaginationEvent`]s.
//!
//! - **Props**: [`PaginationProps`] describe one render cycle. `page` and
//!   `page_size` are controlled overrides that apply when they change
//!   between cycles.
//! - **State**: [`PageState`] reconciles props with what the user did.
//! - **Component**: [`Pagination`] ties state, the debounced page input and
//!   the `on_change` callback together.
//!
//! ## Example
//!
//! ```
//! use std::time::Instant;
//! use blinc_pagination::prelude::*;
//!
//! let mut pager = pagination([5, 10])
//!     .total_items(50)
//!     .on_change(|change| println!("Page: {}", change.page))
//!     .build();
//!
//! let view = pager.view();
//! assert_eq!(view.item_range_label, "1–5 of 50 items");
//! assert_eq!(view.page_range_label, "of 10 pages");
//!
//! pager.handle(PaginationEvent::SelectPageSize(10), Instant::now());
//! assert_eq!(pager.view().page_range_label, "of 5 pages");
//! ```

pub mod config;
pub mod debounce;
pub mod error;
pub mod input;
pub mod pagination;
pub mod props;
pub mod state;
pub mod text;
pub mod view;

pub use config::PaginationConfig;
pub use debounce::{Debounce, DEFAULT_DEBOUNCE};
pub use error::{PaginationError, Result};
pub use input::{parse_page, PageJumpInput};
pub use pagination::{pagination, OnChange, Pagination, PaginationBuilder, PaginationEvent};
pub use props::{PageSizeOption, PageSizes, PaginationProps};
pub use state::{item_range, page_count, PageChange, PageState};
pub use text::PaginationText;
pub use view::{NavButton, NavDirection, PageInputView, PaginationView, SelectOption, SelectView};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::pagination::{pagination, Pagination, PaginationBuilder, PaginationEvent};
    pub use crate::props::{PageSizeOption, PaginationProps};
    pub use crate::state::PageChange;
    pub use crate::text::PaginationText;
    pub use crate::view::{NavDirection, PaginationView};
}
