use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use log::{debug, info, warn};
use revision_diff::{
    DiffStats, JobDescriptionVersion, compare_versions, compute_diff_with_options,
    compute_list_diff_with_options,
};

use crate::{
    cli::args::{Args, Command},
    config::Config,
    consts::DEFAULT_CONFIG_PATH,
    errors::{CliError, init_error, input_error, output_error},
    output::Printer,
};

pub fn run(args: Args) -> Result<(), CliError> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = load_config(&args.command, args.config.as_deref())?;
    config.apply_overrides(&args.display);
    debug!("Effective configuration: {config:?}");

    let stdout = io::stdout();
    let use_colors = args.color.use_colors_for(&stdout);
    let mut printer = Printer::new(stdout.lock(), config.display.clone(), use_colors);

    execute(&args.command, &config_path, &config, &mut printer)
}

/// The configuration `command` runs with. A path given with `--config` has to
/// exist, the default one is optional.
fn load_config(command: &Command, explicit_path: Option<&Path>) -> Result<Config, CliError> {
    match (command, explicit_path) {
        (Command::InitConfig { .. }, _) => Ok(Config::default()),
        (_, Some(path)) => Config::load_from_file(path).map_err(input_error),
        (_, None) => Config::read_or_default(Path::new(DEFAULT_CONFIG_PATH)).map_err(init_error),
    }
}

/// Run `command`, printing comparisons with `printer`. `init-config` writes
/// to `config_path` unless given a path of its own.
pub fn execute<W>(
    command: &Command,
    config_path: &Path,
    config: &Config,
    printer: &mut Printer<W>,
) -> Result<(), CliError>
where
    W: Write,
{
    match command {
        Command::Text { original, current } => {
            let original = read_text(original).map_err(input_error)?;
            let current = read_text(current).map_err(input_error)?;

            let segments = compute_diff_with_options(&original, &current, &config.diff);
            log_stats(&DiffStats::from_segments(&segments));
            printer.print_segments(&segments).map_err(output_error)
        }
        Command::List { original, current } => {
            let original = read_text(original).map_err(input_error)?;
            let current = read_text(current).map_err(input_error)?;
            let original_items = original.lines().collect::<Vec<_>>();
            let current_items = current.lines().collect::<Vec<_>>();

            let segments =
                compute_list_diff_with_options(&original_items, &current_items, &config.diff);
            log_stats(&DiffStats::from_segments(&segments));
            printer.print_segments(&segments).map_err(output_error)
        }
        Command::Versions { original, current } => {
            let original = read_version(original).map_err(input_error)?;
            let current = read_version(current).map_err(input_error)?;
            info!(
                "Comparing version {} with version {} of '{}'",
                original.version.as_deref().unwrap_or("?"),
                current.version.as_deref().unwrap_or("?"),
                current
                    .title
                    .as_deref()
                    .or(original.title.as_deref())
                    .unwrap_or("untitled")
            );

            let comparison = compare_versions(&original, &current, &config.diff);
            log_stats(&comparison.stats);
            printer.print_comparison(&comparison).map_err(output_error)
        }
        Command::InitConfig { path } => {
            init_config(path.as_deref().unwrap_or(config_path)).map_err(output_error)
        }
    }
}

fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        warn!("Replacing the existing configuration at '{}'", path.display());
    }

    Config::default().write(path)?;
    info!("Wrote default configuration to '{}'", path.display());
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

fn read_version(path: &Path) -> Result<JobDescriptionVersion> {
    let contents = read_text(path)?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse job description version '{}'", path.display()))
}

fn log_stats(stats: &DiffStats) {
    debug!(
        "{} words unchanged, {} added, {} removed",
        stats.unchanged_words, stats.added_words, stats.removed_words
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::display_config::{DisplayConfig, OutputFormat, PaneSelection};

    fn execute_to_string(command: &Command, config_path: &Path) -> Result<String, CliError> {
        let config = Config {
            display: DisplayConfig {
                pane: PaneSelection::Both,
                differences_only: false,
                format: OutputFormat::Text,
            },
            ..Config::default()
        };
        let mut printer = Printer::new(Vec::new(), config.display.clone(), false);

        execute(command, config_path, &config, &mut printer)?;

        Ok(String::from_utf8(printer.into_inner()).unwrap())
    }

    #[test]
    fn test_text_command() {
        let directory = tempfile::tempdir().unwrap();
        let original = directory.path().join("v1.txt");
        let current = directory.path().join("v2.txt");
        fs::write(&original, "Record patient vitals\n").unwrap();
        fs::write(&current, "Record vitals hourly\n").unwrap();

        let output = execute_to_string(
            &Command::Text { original, current },
            &directory.path().join("unused.yml"),
        )
        .unwrap();

        assert_eq!(output, "Record {+vitals+}[-patient-] {+hourly+}[-vitals-]\n");
    }

    #[test]
    fn test_list_command() {
        let directory = tempfile::tempdir().unwrap();
        let original = directory.path().join("v1.txt");
        let current = directory.path().join("v2.txt");
        fs::write(&original, "Triage\nDischarge\n").unwrap();
        fs::write(&current, "Triage\nAdmit\nDischarge\n").unwrap();

        let output = execute_to_string(
            &Command::List { original, current },
            &directory.path().join("unused.yml"),
        )
        .unwrap();

        assert_eq!(output, "Triage{+\nAdmit+}\nDischarge\n");
    }

    #[test]
    fn test_versions_command() {
        let directory = tempfile::tempdir().unwrap();
        let original = directory.path().join("v1.yml");
        let current = directory.path().join("v2.yml");
        fs::write(&original, "version: '1'\nfields:\n  summary: Monitor vitals\n").unwrap();
        fs::write(
            &current,
            "version: '2'\nfields:\n  summary: Monitor vitals\n  shift: Nights\n",
        )
        .unwrap();

        let output = execute_to_string(
            &Command::Versions { original, current },
            &directory.path().join("unused.yml"),
        )
        .unwrap();

        assert_eq!(
            output,
            "== shift ==\n{+Nights+}\n== summary ==\nMonitor vitals\n1 of 2 fields changed, 1 \
             words added, 0 words removed\n"
        );
    }

    #[test]
    fn test_missing_input_file() {
        let directory = tempfile::tempdir().unwrap();

        let error = execute_to_string(
            &Command::Text {
                original: directory.path().join("missing.txt"),
                current: directory.path().join("missing.txt"),
            },
            &directory.path().join("unused.yml"),
        )
        .unwrap_err();

        assert!(matches!(error, CliError::InputError(_)));
        assert!(error.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_invalid_version_file() {
        let directory = tempfile::tempdir().unwrap();
        let original = directory.path().join("v1.yml");
        fs::write(&original, "fields: [").unwrap();

        let error = execute_to_string(
            &Command::Versions {
                original: original.clone(),
                current: original,
            },
            &directory.path().join("unused.yml"),
        )
        .unwrap_err();

        assert!(matches!(error, CliError::InputError(_)));
    }

    #[test]
    fn test_init_config() {
        let directory = tempfile::tempdir().unwrap();
        let config_path = directory.path().join("revision-diff.yml");

        execute_to_string(&Command::InitConfig { path: None }, &config_path).unwrap();

        assert_eq!(Config::load_from_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let directory = tempfile::tempdir().unwrap();
        let missing = directory.path().join("missing.yml");
        let command = Command::Text {
            original: directory.path().join("v1.txt"),
            current: directory.path().join("v2.txt"),
        };

        let error = load_config(&command, Some(&missing)).unwrap_err();

        assert!(matches!(error, CliError::InputError(_)));
        assert!(error.to_string().contains("missing.yml"));
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("custom.yml");
        fs::write(&path, "diff:\n  algorithm: myers\n").unwrap();
        let command = Command::List {
            original: directory.path().join("v1.txt"),
            current: directory.path().join("v2.txt"),
        };

        let config = load_config(&command, Some(&path)).unwrap();

        assert_eq!(config.diff.algorithm, revision_diff::DiffAlgorithm::Myers);
    }

    #[test]
    fn test_init_config_ignores_missing_explicit_config() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("new.yml");

        let config = load_config(&Command::InitConfig { path: None }, Some(&path)).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_config_replaces_existing_file() {
        let directory = tempfile::tempdir().unwrap();
        let config_path = directory.path().join("revision-diff.yml");
        fs::write(&config_path, "display:\n  format: json\n").unwrap();

        execute_to_string(&Command::InitConfig { path: None }, &config_path).unwrap();

        assert_eq!(Config::load_from_file(&config_path).unwrap(), Config::default());
    }
}
