use std::io::IsTerminal;

use clap::ValueEnum;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorWhen {
    Always,
    Auto,
    Never,
}

impl ColorWhen {
    /// Whether to style what is written to `stream`. In `auto` mode this
    /// depends on `stream` being a terminal and `NO_COLOR` being unset.
    pub fn use_colors_for(self, stream: &impl IsTerminal) -> bool {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Auto => std::env::var_os("NO_COLOR").is_none() && stream.is_terminal(),
            ColorWhen::Never => false,
        }
    }
}

impl std::fmt::Display for ColorWhen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_choices_ignore_the_stream() {
        let file = tempfile::tempfile().unwrap();

        assert!(ColorWhen::Always.use_colors_for(&file));
        assert!(!ColorWhen::Never.use_colors_for(&std::io::stdout()));
        assert!(!ColorWhen::Never.use_colors_for(&std::io::stderr()));
    }

    #[test]
    fn test_auto_never_styles_files() {
        let file = tempfile::tempfile().unwrap();

        assert!(!ColorWhen::Auto.use_colors_for(&file));
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorWhen::Auto.to_string(), "auto");
        assert_eq!(ColorWhen::Never.to_string(), "never");
    }
}
