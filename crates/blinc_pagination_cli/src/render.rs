//! Plain-text rendering of a pagination view

use blinc_pagination::{NavButton, PaginationView, SelectView};

/// One-line rendering, e.g.
/// `Items per page: [5] 10 | 1–5 of 50 items | page [1] of 10 pages | < >`
pub fn render_line(view: &PaginationView) -> String {
    let mut line = format!(
        "{} {} | {} |",
        view.items_per_page_label,
        render_select(&view.page_size_select),
        view.item_range_label
    );

    match &view.page_input {
        Some(input) if view.page_count.is_some() => {
            line.push_str(&format!(" page [{}] {}", input.text, view.page_range_label));
        }
        Some(input) => {
            line.push_str(&format!(" [{}] {}", input.text, view.page_range_label));
        }
        None => {
            line.push_str(&format!(" {}", view.page_range_label));
        }
    }

    line.push_str(&format!(
        " | {} {}",
        render_button(&view.backward, "<"),
        render_button(&view.forward, ">")
    ));
    line
}

fn render_select(select: &SelectView) -> String {
    let options: Vec<String> = select
        .options
        .iter()
        .map(|option| {
            if option.value == select.selected {
                format!("[{}]", option.label)
            } else {
                option.label.clone()
            }
        })
        .collect();
    let mut out = options.join(" ");
    // A controlled size outside the options is still shown
    if !select.options.iter().any(|o| o.value == select.selected) {
        out.push_str(&format!(" [{}]", select.selected));
    }
    if select.disabled {
        out.push_str(" (disabled)");
    }
    out
}

fn render_button(button: &NavButton, glyph: &str) -> String {
    if button.disabled {
        "·".to_string()
    } else {
        glyph.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blinc_pagination::prelude::*;

    #[test]
    fn test_render_first_page() {
        let pager = pagination([5, 10]).total_items(50).build();
        assert_eq!(
            render_line(&pager.view()),
            "Items per page: [5] 10 | 1–5 of 50 items | page [1] of 10 pages | · >"
        );
    }

    #[test]
    fn test_render_pages_unknown_disabled() {
        let pager = pagination([100]).pages_unknown(true).disabled(true).build();
        assert_eq!(
            render_line(&pager.view()),
            "Items per page: [100] (disabled) | 1–100 items | page 1 | · ·"
        );
    }

    #[test]
    fn test_render_size_outside_options() {
        let pager = pagination([5, 10]).total_items(50).page_size(7).build();
        assert!(render_line(&pager.view()).starts_with("Items per page: 5 10 [7] |"));
    }
}
