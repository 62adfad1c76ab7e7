//! Pagination component
//!
//! Wraps a [`PageState`] with the page input, the current props and the
//! `on_change` callback. A host drives it once per render cycle with
//! [`Pagination::set_props`], forwards UI events to [`Pagination::handle`],
//! calls [`Pagination::tick`] every frame so a debounced page jump can fire,
//! and draws [`Pagination::view`].
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use blinc_pagination::prelude::*;
//!
//! let mut pager = pagination([5, 10])
//!     .total_items(50)
//!     .on_change(|change| println!("page {} of size {}", change.page, change.page_size))
//!     .build();
//!
//! pager.handle(PaginationEvent::Forward, Instant::now());
//! assert_eq!(pager.view().item_range_label, "6–10 of 50 items");
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::input::PageJumpInput;
use crate::props::{PageSizeOption, PaginationProps};
use crate::state::{PageChange, PageState};
use crate::text::PaginationText;
use crate::view::PaginationView;

/// Callback invoked after a user event changed the page or page size
pub type OnChange = Arc<dyn Fn(PageChange) + Send + Sync>;

/// UI events the collaborators forward to the component
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaginationEvent {
    /// A page size was picked in the dropdown
    SelectPageSize(usize),
    /// The forward button was clicked
    Forward,
    /// The backward button was clicked
    Backward,
    /// A page was picked from the page dropdown; commits immediately
    SelectPage(usize),
    /// The page input text changed; commits after the debounce window
    EditPageInput(String),
}

/// A pagination instance
pub struct Pagination {
    props: PaginationProps,
    state: PageState,
    input: PageJumpInput,
    on_change: Option<OnChange>,
}

impl Pagination {
    /// Mount a pagination with its first render's props
    pub fn new(props: PaginationProps) -> Self {
        let state = PageState::new(&props);
        let mut input = PageJumpInput::new(DEFAULT_DEBOUNCE);
        input.sync(state.page());
        Self {
            props,
            state,
            input,
            on_change: None,
        }
    }

    /// Set the page change callback
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(PageChange) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Set the page input quiescence window
    pub fn debounce(mut self, window: Duration) -> Self {
        self.input.set_window(window);
        self
    }

    pub fn props(&self) -> &PaginationProps {
        &self.props
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn page(&self) -> usize {
        self.state.page()
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size()
    }

    /// Start a new render cycle with `props`
    ///
    /// Returns `true` if the page or page size changed. Prop-driven changes
    /// are not reported through `on_change`.
    pub fn set_props(&mut self, props: PaginationProps) -> bool {
        let changed = self.state.reconcile(&props);
        self.props = props;
        if changed || self.input_hidden() {
            self.input.cancel();
        }
        self.input.sync(self.state.page());
        changed
    }

    /// Apply a UI event at time `now`
    pub fn handle(&mut self, event: PaginationEvent, now: Instant) -> Option<PageChange> {
        trace!(?event, "pagination event");
        if self.props.disabled {
            debug!(?event, "pagination disabled, event ignored");
            return None;
        }

        let change = match event {
            PaginationEvent::SelectPageSize(size) => {
                if self.props.page_size_input_disabled {
                    return None;
                }
                self.state.select_page_size(size)
            }
            PaginationEvent::Forward => self.state.forward(&self.props),
            PaginationEvent::Backward => self.state.backward(),
            PaginationEvent::SelectPage(page) => {
                if self.props.page_input_disabled {
                    return None;
                }
                self.state.jump_to(page, &self.props)
            }
            PaginationEvent::EditPageInput(text) => {
                if self.props.page_input_disabled {
                    return None;
                }
                self.input.edit(text, now);
                return None;
            }
        };

        if change.is_some() {
            // Navigation supersedes a half-typed page number
            self.input.cancel();
        }
        self.input.sync(self.state.page());
        self.notify(change)
    }

    /// Advance time; commits a settled page input
    pub fn tick(&mut self, now: Instant) -> Option<PageChange> {
        if self.input_hidden() {
            let was_editing = self.input.is_editing();
            self.input.cancel();
            if was_editing {
                debug!("page input hidden, pending edit dropped");
            }
            return None;
        }
        let page_count = self.state.page_count(&self.props);
        let committed = self.input.poll(now, page_count);
        let change = committed.and_then(|page| self.state.jump_to(page, &self.props));
        self.input.sync(self.state.page());
        self.notify(change)
    }

    /// When the pending page input commits, if an edit is in flight
    pub fn next_deadline(&self) -> Option<Instant> {
        self.input.deadline()
    }

    /// Build the view for the current state
    pub fn view(&self) -> PaginationView {
        PaginationView::build(&self.state, &self.props, &self.input)
    }

    /// The page input is not shown and must not commit
    fn input_hidden(&self) -> bool {
        self.props.disabled || self.props.page_input_disabled
    }

    fn notify(&self, change: Option<PageChange>) -> Option<PageChange> {
        if let (Some(change), Some(cb)) = (change, &self.on_change) {
            cb(change);
        }
        change
    }
}

impl fmt::Debug for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pagination")
            .field("props", &self.props)
            .field("state", &self.state)
            .field("input", &self.input)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Builder for pagination component
pub struct PaginationBuilder {
    props: PaginationProps,
    debounce: Duration,
    on_change: Option<OnChange>,
}

impl PaginationBuilder {
    /// Create a new pagination builder
    pub fn new<I, T>(page_sizes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PageSizeOption>,
    {
        Self {
            props: PaginationProps::new(page_sizes),
            debounce: DEFAULT_DEBOUNCE,
            on_change: None,
        }
    }

    /// Set the total number of items
    pub fn total_items(mut self, total: usize) -> Self {
        self.props = self.props.total_items(total);
        self
    }

    /// Hide the page count; forward navigation follows `is_last_page`
    pub fn pages_unknown(mut self, unknown: bool) -> Self {
        self.props = self.props.pages_unknown(unknown);
        self
    }

    /// Mark the current page as the last one (pages unknown only)
    pub fn is_last_page(mut self, last: bool) -> Self {
        self.props = self.props.is_last_page(last);
        self
    }

    /// Start on `page`
    pub fn page(mut self, page: usize) -> Self {
        self.props = self.props.page(page);
        self
    }

    /// Start with `size` items per page
    pub fn page_size(mut self, size: usize) -> Self {
        self.props = self.props.page_size(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props = self.props.disabled(disabled);
        self
    }

    pub fn page_input_disabled(mut self, disabled: bool) -> Self {
        self.props = self.props.page_input_disabled(disabled);
        self
    }

    pub fn page_size_input_disabled(mut self, disabled: bool) -> Self {
        self.props = self.props.page_size_input_disabled(disabled);
        self
    }

    /// Replace the label texts
    pub fn text(mut self, text: PaginationText) -> Self {
        self.props = self.props.text(text);
        self
    }

    /// Set the page input quiescence window
    pub fn debounce(mut self, window: Duration) -> Self {
        self.debounce = window;
        self
    }

    /// Set page change callback
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(PageChange) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Props the component will mount with
    pub fn props(&self) -> &PaginationProps {
        &self.props
    }

    /// Mount the component
    pub fn build(self) -> Pagination {
        let mut pagination = Pagination::new(self.props).debounce(self.debounce);
        pagination.on_change = self.on_change;
        pagination
    }
}

/// Create a pagination component
///
/// # Example
///
/// ```
/// use blinc_pagination::pagination;
///
/// let pager = pagination([10, 20, 30]).total_items(95).page_size(20).build();
/// assert_eq!(pager.view().page_range_label, "of 5 pages");
/// ```
pub fn pagination<I, T>(page_sizes: I) -> PaginationBuilder
where
    I: IntoIterator<Item = T>,
    T: Into<PageSizeOption>,
{
    PaginationBuilder::new(page_sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorded() -> (Arc<Mutex<Vec<PageChange>>>, impl Fn(PageChange) + Send + Sync) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        (log, move |change| sink.lock().unwrap().push(change))
    }

    #[test]
    fn test_no_notification_on_mount() {
        let (log, cb) = recorded();
        let pager = pagination([5, 10]).total_items(50).page(2).on_change(cb).build();
        assert_eq!(pager.page(), 2);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_events_notify_once() {
        let (log, cb) = recorded();
        let now = Instant::now();
        let mut pager = pagination([5, 10]).total_items(50).on_change(cb).build();

        pager.handle(PaginationEvent::Forward, now);
        pager.handle(PaginationEvent::SelectPageSize(10), now);
        pager.handle(PaginationEvent::Backward, now);

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                PageChange { page: 2, page_size: 5 },
                PageChange { page: 1, page_size: 10 },
            ]
        );
    }

    #[test]
    fn test_prop_changes_are_silent() {
        let (log, cb) = recorded();
        let mut pager = pagination([5, 10]).total_items(50).on_change(cb).build();
        let props = pager.props().clone();

        assert!(pager.set_props(props.clone().page(4)));
        assert!(pager.set_props(props.page_sizes([20, 40])));
        assert_eq!(pager.page(), 1);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_debounced_page_input() {
        let (log, cb) = recorded();
        let start = Instant::now();
        let mut pager = pagination([5, 10])
            .total_items(50)
            .debounce(Duration::from_millis(200))
            .on_change(cb)
            .build();

        pager.handle(PaginationEvent::EditPageInput("1".into()), start);
        pager.handle(
            PaginationEvent::EditPageInput("7".into()),
            start + Duration::from_millis(50),
        );
        assert_eq!(pager.view().page_input.map(|i| i.text), Some("7".to_string()));
        assert_eq!(
            pager.next_deadline(),
            Some(start + Duration::from_millis(250))
        );

        assert_eq!(pager.tick(start + Duration::from_millis(200)), None);
        assert_eq!(
            pager.tick(start + Duration::from_millis(250)),
            Some(PageChange { page: 7, page_size: 5 })
        );
        assert_eq!(pager.tick(start + Duration::from_secs(5)), None);
        assert_eq!(log.lock().unwrap().len(), 1);
        assert_eq!(pager.next_deadline(), None);
    }

    #[test]
    fn test_rejected_input_restores_text() {
        let start = Instant::now();
        let mut pager = pagination([5, 10]).total_items(50).build();
        pager.handle(PaginationEvent::EditPageInput("99".into()), start);
        assert_eq!(pager.tick(start + DEFAULT_DEBOUNCE), None);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.view().page_input.map(|i| i.text), Some("1".to_string()));
    }

    #[test]
    fn test_navigation_cancels_pending_input() {
        let start = Instant::now();
        let mut pager = pagination([5, 10]).total_items(50).build();
        pager.handle(PaginationEvent::EditPageInput("9".into()), start);
        pager.handle(PaginationEvent::Forward, start);
        assert_eq!(pager.tick(start + DEFAULT_DEBOUNCE), None);
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_disabled_ignores_events() {
        let (log, cb) = recorded();
        let now = Instant::now();
        let mut pager = pagination([5, 10])
            .total_items(50)
            .disabled(true)
            .on_change(cb)
            .build();
        assert_eq!(pager.handle(PaginationEvent::Forward, now), None);
        assert_eq!(pager.handle(PaginationEvent::SelectPageSize(10), now), None);
        assert_eq!(pager.page(), 1);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disabling_drops_pending_input() {
        let (log, cb) = recorded();
        let start = Instant::now();
        let mut pager = pagination([5, 10]).total_items(50).on_change(cb).build();
        let props = pager.props().clone();

        pager.handle(PaginationEvent::EditPageInput("7".into()), start);
        assert!(!pager.set_props(props.clone().disabled(true)));
        assert_eq!(pager.next_deadline(), None);
        assert_eq!(pager.tick(start + Duration::from_secs(1)), None);

        // Re-enabling does not resurrect the dropped edit
        pager.set_props(props);
        assert_eq!(pager.tick(start + Duration::from_secs(2)), None);
        assert_eq!(pager.page(), 1);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_hiding_page_input_drops_pending_input() {
        let (log, cb) = recorded();
        let start = Instant::now();
        let mut pager = pagination([5, 10]).total_items(50).on_change(cb).build();
        let props = pager.props().clone();

        pager.handle(PaginationEvent::EditPageInput("4".into()), start);
        pager.set_props(props.page_input_disabled(true));
        assert_eq!(pager.tick(start + Duration::from_secs(1)), None);
        assert_eq!(pager.page(), 1);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_huge_typed_page_with_unknown_pages() {
        let start = Instant::now();
        let mut pager = pagination([5, 10]).pages_unknown(true).build();
        pager.handle(PaginationEvent::EditPageInput(usize::MAX.to_string()), start);
        assert_eq!(
            pager.tick(start + Duration::from_secs(1)),
            Some(PageChange { page: usize::MAX, page_size: 5 })
        );

        let view = pager.view();
        assert_eq!(view.item_range, (usize::MAX, usize::MAX));
        assert!(view.forward.disabled);
        assert_eq!(pager.handle(PaginationEvent::Forward, start), None);
        assert_eq!(pager.page(), usize::MAX);
    }
}
