use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FORMAT, DEFAULT_PANE};

#[derive(ValueEnum, Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaneSelection {
    /// Original text with removals struck through
    Original,
    /// Current text with insertions highlighted
    Current,
    /// Both sides interleaved, like a word diff
    Both,
}

#[derive(ValueEnum, Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "default_pane")]
    pub pane: PaneSelection,

    #[serde(default)]
    pub differences_only: bool,

    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

fn default_pane() -> PaneSelection {
    debug!("Using default pane: {DEFAULT_PANE:?}");
    DEFAULT_PANE
}

fn default_format() -> OutputFormat {
    debug!("Using default output format: {DEFAULT_FORMAT:?}");
    DEFAULT_FORMAT
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            pane: default_pane(),
            differences_only: false,
            format: default_format(),
        }
    }
}
