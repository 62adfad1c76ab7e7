//! Page-index input with debounced commit
//!
//! Keystrokes update the visible text immediately and rearm the debounce.
//! Only the text that survives the quiescence window is parsed, so typing
//! "12" commits page 12 once instead of page 1 and then page 12.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::debounce::Debounce;

/// Parse a page number typed by the user
///
/// Accepts surrounding whitespace. Rejects empty, non-numeric and zero.
pub fn parse_page(text: &str) -> Option<usize> {
    match text.trim().parse::<usize>() {
        Ok(page) if page >= 1 => Some(page),
        _ => None,
    }
}

/// State of the numeric page input
#[derive(Clone, Debug)]
pub struct PageJumpInput {
    text: String,
    debounce: Debounce<String>,
}

impl PageJumpInput {
    pub fn new(window: Duration) -> Self {
        Self {
            text: String::new(),
            debounce: Debounce::new(window),
        }
    }

    /// Text currently shown in the input
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_editing(&self) -> bool {
        self.debounce.is_pending()
    }

    /// When the pending edit commits
    pub fn deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    pub fn window(&self) -> Duration {
        self.debounce.window()
    }

    pub fn set_window(&mut self, window: Duration) {
        self.debounce.set_window(window);
    }

    /// Show `page` unless an edit is in flight
    pub fn sync(&mut self, page: usize) {
        if !self.is_editing() {
            self.text = page.to_string();
        }
    }

    /// Record a keystroke and rearm the commit timer
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.debounce.arm(self.text.clone(), now);
    }

    /// Drop a pending edit
    pub fn cancel(&mut self) {
        self.debounce.cancel();
    }

    /// Commit the settled text if the window elapsed
    ///
    /// Returns the page to jump to. Text that is not a page within
    /// `1..=page_count` (upper bound only when known) is dropped silently.
    pub fn poll(&mut self, now: Instant, page_count: Option<usize>) -> Option<usize> {
        let text = self.debounce.poll(now)?;
        let page = parse_page(&text).filter(|page| page_count.map_or(true, |count| *page <= count));
        if page.is_none() {
            debug!(input = %text, ?page_count, "page input rejected");
        }
        page
    }
}

impl Default for PageJumpInput {
    fn default() -> Self {
        Self::new(crate::debounce::DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page("3"), Some(3));
        assert_eq!(parse_page(" 12 "), Some(12));
        assert_eq!(parse_page("0"), None);
        assert_eq!(parse_page("-1"), None);
        assert_eq!(parse_page("two"), None);
        assert_eq!(parse_page(""), None);
    }

    #[test]
    fn test_rapid_edits_commit_once() {
        let start = Instant::now();
        let mut input = PageJumpInput::new(ms(300));
        input.edit("1", start);
        input.edit("12", start + ms(80));
        assert_eq!(input.text(), "12");

        assert_eq!(input.poll(start + ms(300), Some(20)), None);
        assert_eq!(input.poll(start + ms(380), Some(20)), Some(12));
        assert_eq!(input.poll(start + ms(1000), Some(20)), None);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let start = Instant::now();
        let mut input = PageJumpInput::new(ms(300));
        input.edit("11", start);
        assert_eq!(input.poll(start + ms(300), Some(10)), None);

        input.edit("abc", start);
        assert_eq!(input.poll(start + ms(300), None), None);

        input.edit("11", start);
        assert_eq!(input.poll(start + ms(300), None), Some(11));
    }

    #[test]
    fn test_sync_waits_for_edit() {
        let start = Instant::now();
        let mut input = PageJumpInput::default();
        input.sync(4);
        assert_eq!(input.text(), "4");

        input.edit("7", start);
        input.sync(5);
        assert_eq!(input.text(), "7");

        input.cancel();
        input.sync(5);
        assert_eq!(input.text(), "5");
    }
}
