use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use revision_diff::DiffAlgorithm;

use crate::{
    cli::color_when::ColorWhen,
    config::display_config::{OutputFormat, PaneSelection},
};

/// Compare versions of job descriptions word by word
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// YAML configuration file, `revision-diff.yml` if not given
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    #[arg(
            long,
            global = true,
            value_name = "WHEN",
            default_value_t = ColorWhen::Auto,
            default_missing_value = "always",
            num_args = 0..=1,
            value_enum
        )]
    pub color: ColorWhen,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Command-line overrides of the configuration file.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayArgs {
    /// Which side of the comparison to print
    #[arg(long, global = true, value_enum)]
    pub pane: Option<PaneSelection>,

    /// Only print added and removed text
    #[arg(long, global = true)]
    pub differences_only: bool,

    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true, value_enum)]
    pub algorithm: Option<AlgorithmArg>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compare two text files
    Text { original: PathBuf, current: PathBuf },

    /// Compare two files holding one list item per line
    List { original: PathBuf, current: PathBuf },

    /// Compare two YAML job-description versions field by field
    Versions { original: PathBuf, current: PathBuf },

    /// Write the default configuration to PATH or to the `--config` path
    InitConfig { path: Option<PathBuf> },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlgorithmArg {
    Lcs,
    Myers,
}

impl From<AlgorithmArg> for DiffAlgorithm {
    fn from(algorithm: AlgorithmArg) -> Self {
        match algorithm {
            AlgorithmArg::Lcs => DiffAlgorithm::Lcs,
            AlgorithmArg::Myers => DiffAlgorithm::Myers,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_text_command() {
        let args = Args::parse_from([
            "revdiff",
            "text",
            "v1.txt",
            "v2.txt",
            "--pane",
            "current",
            "--differences-only",
            "--algorithm",
            "myers",
        ]);

        assert_eq!(args.command, Command::Text {
            original: "v1.txt".into(),
            current: "v2.txt".into(),
        });
        assert_eq!(args.display, DisplayArgs {
            pane: Some(PaneSelection::Current),
            differences_only: true,
            format: None,
            algorithm: Some(AlgorithmArg::Myers),
        });
        assert_eq!(args.color, ColorWhen::Auto);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_parse_global_options_before_command() {
        let args = Args::parse_from([
            "revdiff",
            "--config",
            "custom.yml",
            "--color",
            "never",
            "--format",
            "json",
            "init-config",
        ]);

        assert_eq!(args.command, Command::InitConfig { path: None });
        assert_eq!(args.config, Some("custom.yml".into()));
        assert_eq!(args.color, ColorWhen::Never);
        assert_eq!(args.display.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_missing_operand_is_rejected() {
        assert!(Args::try_parse_from(["revdiff", "versions", "only_one.yml"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
