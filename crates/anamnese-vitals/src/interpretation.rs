use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Severity hint attached to an interpretation, mapped to a color by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ColorTag {
    Normal,
    Warning,
    Danger,
    /// No data.
    #[default]
    Neutral,
    /// Below range where low is the concern (hypothermia, hypotension).
    Cold,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub label: String,
    pub color: ColorTag,
}

impl Interpretation {
    pub fn new(label: &str, color: ColorTag) -> Self {
        Self {
            label: label.to_string(),
            color,
        }
    }

    /// Empty label with the neutral tag: "not provided".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }
}
