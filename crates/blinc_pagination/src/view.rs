//! Render-ready description of the pagination bar
//!
//! The view is what the dropdown, button and input collaborators consume.
//! It is rebuilt from scratch after every prop change or event and holds no
//! state of its own.

use serde::Serialize;

use crate::input::PageJumpInput;
use crate::props::PaginationProps;
use crate::state::PageState;

/// Which way a navigation button moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDirection {
    Backward,
    Forward,
}

/// A previous/next button
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavButton {
    pub direction: NavDirection,
    /// Accessible label ("Previous page" / "Next page")
    pub label: String,
    pub disabled: bool,
    /// Set when the page input is not shown, so the button sits flush
    pub no_index: bool,
}

/// One entry of a dropdown
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: usize,
    pub label: String,
}

/// A dropdown with its options and current selection
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectView {
    pub options: Vec<SelectOption>,
    pub selected: usize,
    pub disabled: bool,
}

/// The page-index input
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageInputView {
    /// Text shown in the input, including an uncommitted edit
    pub text: String,
    /// Pages that can be picked directly; a single entry when the page
    /// count is unknown. The selected entry is the current page.
    pub options: Vec<SelectOption>,
    /// Largest accepted page, `None` when unbounded
    pub max: Option<usize>,
}

/// Everything needed to draw one pagination bar
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub page: usize,
    pub page_size: usize,
    pub page_count: Option<usize>,
    pub item_range: (usize, usize),
    pub items_per_page_label: String,
    pub item_range_label: String,
    pub page_range_label: String,
    pub page_size_select: SelectView,
    /// `None` when the input is hidden
    pub page_input: Option<PageInputView>,
    pub backward: NavButton,
    pub forward: NavButton,
}

impl PaginationView {
    pub fn build(state: &PageState, props: &PaginationProps, input: &PageJumpInput) -> Self {
        let page = state.page();
        let page_size = state.page_size();
        let page_count = state.page_count(props);
        let (start, end) = state.item_range(props);
        let text = &props.text;

        let page_size_select = SelectView {
            options: props
                .page_sizes
                .iter()
                .map(|option| SelectOption {
                    value: option.value,
                    label: option.text.clone(),
                })
                .collect(),
            selected: page_size,
            disabled: props.disabled || props.page_size_input_disabled,
        };

        let input_hidden = props.disabled || props.page_input_disabled;
        let page_input = (!input_hidden).then(|| {
            let options = match page_count {
                Some(count) => (1..=count).map(page_option).collect(),
                None => vec![page_option(page)],
            };
            PageInputView {
                text: input.text().to_string(),
                options,
                max: page_count,
            }
        });

        let backward = NavButton {
            direction: NavDirection::Backward,
            label: text.backward.clone(),
            disabled: props.disabled || !state.can_go_backward(),
            no_index: input_hidden,
        };
        let forward = NavButton {
            direction: NavDirection::Forward,
            label: text.forward.clone(),
            disabled: props.disabled || !state.can_go_forward(props),
            no_index: input_hidden,
        };

        Self {
            page,
            page_size,
            page_count,
            item_range: (start, end),
            items_per_page_label: text.items_per_page.clone(),
            item_range_label: text.format_item_range(start, end, props.known_total()),
            page_range_label: text.format_page_range(page, page_count),
            page_size_select,
            page_input,
            backward,
            forward,
        }
    }
}

fn page_option(page: usize) -> SelectOption {
    SelectOption {
        value: page,
        label: page.to_string(),
    }
}
