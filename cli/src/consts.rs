use crate::config::display_config::{OutputFormat, PaneSelection};

pub const DEFAULT_CONFIG_PATH: &str = "revision-diff.yml";

pub const DEFAULT_PANE: PaneSelection = PaneSelection::Both;
pub const DEFAULT_FORMAT: OutputFormat = OutputFormat::Text;
