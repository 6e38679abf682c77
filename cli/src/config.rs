use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use display_config::DisplayConfig;
use log::{debug, info};
use revision_diff::DiffOptions;
use serde::{Deserialize, Serialize};

use crate::cli::args::DisplayArgs;

pub mod display_config;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub diff: DiffOptions,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn read_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            info!("Loading configuration from '{}'", path.display());
            Self::load_from_file(path)
        } else {
            debug!(
                "No configuration at '{}', using the defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!(
                "Cannot load configuration from disk from {}",
                path.display()
            )
        })?;

        let config = serde_yaml::from_str(&contents).context("Failed to parse configuration")?;

        Ok(config)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let contents = serde_yaml::to_string(&self).context("Failed to serialize configuration")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write configuration to {}", path.display()))
    }

    /// Command-line flags take precedence over the file.
    pub fn apply_overrides(&mut self, args: &DisplayArgs) {
        if let Some(pane) = args.pane {
            self.display.pane = pane;
        }
        if args.differences_only {
            self.display.differences_only = true;
        }
        if let Some(format) = args.format {
            self.display.format = format;
        }
        if let Some(algorithm) = args.algorithm {
            self.diff.algorithm = algorithm.into();
        }
    }
}
