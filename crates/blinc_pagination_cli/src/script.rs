//! Interaction scripts
//!
//! A script mounts one pagination and plays a list of steps against it:
//!
//! ```toml
//! [props]
//! page_sizes = [5, 10]
//! total_items = 50
//!
//! [[step]]
//! action = "forward"
//!
//! [[step]]
//! action = "type"
//! text = "7"
//!
//! [[step]]
//! action = "wait"
//! ms = 400
//!
//! [[step]]
//! action = "render"
//! props = { page_sizes = [25, 50], total_items = 50 }
//! ```

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use blinc_pagination::{
    PageChange, Pagination, PaginationConfig, PaginationEvent, PaginationProps, PaginationText,
    PaginationView,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Props as written in a script
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScriptProps {
    pub page_sizes: Vec<usize>,
    #[serde(default)]
    pub total_items: Option<usize>,
    #[serde(default)]
    pub pages_unknown: bool,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub is_last_page: Option<bool>,
    #[serde(default)]
    pub page_input_disabled: bool,
    #[serde(default)]
    pub page_size_input_disabled: bool,
}

impl ScriptProps {
    pub fn into_props(self, text: PaginationText) -> PaginationProps {
        let mut props = PaginationProps::new(self.page_sizes)
            .pages_unknown(self.pages_unknown)
            .disabled(self.disabled)
            .page_input_disabled(self.page_input_disabled)
            .page_size_input_disabled(self.page_size_input_disabled)
            .text(text);
        props.total_items = self.total_items;
        props.page = self.page;
        props.page_size = self.page_size;
        props.is_last_page = self.is_last_page;
        props
    }
}

/// One step of a script
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Forward,
    Backward,
    /// Pick a page size in the dropdown
    PageSize { value: usize },
    /// Pick a page in the page dropdown
    SelectPage { value: usize },
    /// Type into the page input
    Type { text: String },
    /// Let time pass
    Wait { ms: u64 },
    /// Re-render with new props
    Render { props: ScriptProps },
}

#[derive(Debug, Deserialize)]
pub struct Script {
    pub props: ScriptProps,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let script: Script = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if script.props.page_sizes.is_empty() {
            anyhow::bail!("{}: props.page_sizes must not be empty", path.display());
        }
        Ok(script)
    }
}

/// What happened during one step
#[derive(Debug, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub step: Step,
    pub changes: Vec<PageChange>,
    pub view: PaginationView,
}

/// Play `script` against a fresh pagination on a virtual clock
pub fn replay(script: Script, config: &PaginationConfig) -> Vec<StepRecord> {
    let props = script.props.into_props(config.text());
    let mut pager = Pagination::new(props).debounce(config.debounce());
    let mut clock = Instant::now();
    let mut records = Vec::with_capacity(script.steps.len());

    info!(steps = script.steps.len(), "replaying script");

    for (index, step) in script.steps.into_iter().enumerate() {
        debug!(index, ?step, "step");
        let mut changes = Vec::new();
        let event = match &step {
            Step::Forward => Some(PaginationEvent::Forward),
            Step::Backward => Some(PaginationEvent::Backward),
            Step::PageSize { value } => Some(PaginationEvent::SelectPageSize(*value)),
            Step::SelectPage { value } => Some(PaginationEvent::SelectPage(*value)),
            Step::Type { text } => Some(PaginationEvent::EditPageInput(text.clone())),
            Step::Wait { ms } => {
                clock += Duration::from_millis(*ms);
                None
            }
            Step::Render { props } => {
                pager.set_props(props.clone().into_props(config.text()));
                None
            }
        };

        if let Some(event) = event {
            changes.extend(pager.handle(event, clock));
        }
        changes.extend(pager.tick(clock));

        records.push(StepRecord {
            index,
            step,
            changes,
            view: pager.view(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"
        [props]
        page_sizes = [5, 10]
        total_items = 50

        [[step]]
        action = "forward"

        [[step]]
        action = "type"
        text = "7"

        [[step]]
        action = "wait"
        ms = 400

        [[step]]
        action = "page_size"
        value = 10

        [[step]]
        action = "render"
        props = { page_sizes = [25, 50], total_items = 50 }
    "#;

    #[test]
    fn test_replay() {
        let script: Script = toml::from_str(SCRIPT).unwrap();
        let records = replay(script, &PaginationConfig::default());
        assert_eq!(records.len(), 5);

        assert_eq!(records[0].changes, vec![PageChange { page: 2, page_size: 5 }]);
        // Typed text waits for the quiescence window
        assert!(records[1].changes.is_empty());
        assert_eq!(records[1].view.page, 2);
        assert_eq!(records[2].changes, vec![PageChange { page: 7, page_size: 5 }]);
        assert_eq!(records[3].changes, vec![PageChange { page: 1, page_size: 10 }]);
        // Prop-driven changes are silent
        assert!(records[4].changes.is_empty());
        assert_eq!(records[4].view.page_size, 10);
        assert_eq!(records[4].view.page, 1);
    }

    #[test]
    fn test_demo_session() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/session.toml");
        let records = replay(Script::load(&path).unwrap(), &PaginationConfig::default());
        let pages: Vec<usize> = records.iter().map(|r| r.view.page).collect();
        assert_eq!(pages, vec![2, 2, 1, 1, 3, 1]);
        assert_eq!(records[4].changes, vec![PageChange { page: 3, page_size: 10 }]);
        assert_eq!(records[5].view.page_size, 25);
    }
}
