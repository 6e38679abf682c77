use std::io::Write;

use anyhow::{Context as _, Result};
use colored::Colorize as _;
use revision_diff::{
    DiffSegment, Pane, RenderOptions, RenderedSpan, SegmentKind, SpanStyle, VersionComparison,
    merge_adjacent, render_pane,
};

use crate::config::display_config::{DisplayConfig, OutputFormat, PaneSelection};

/// Writes diffs in the configured format. Without colours, changes are marked
/// `{+added+}` and `[-removed-]` like `git diff --word-diff`, with consecutive
/// changes of the same kind joined into one mark.
#[derive(Debug)]
pub struct Printer<W>
where
    W: Write,
{
    out: W,
    display: DisplayConfig,
    use_colors: bool,
}

impl<W> Printer<W>
where
    W: Write,
{
    pub fn new(out: W, display: DisplayConfig, use_colors: bool) -> Self {
        Self {
            out,
            display,
            use_colors,
        }
    }

    pub fn print_segments(&mut self, segments: &[DiffSegment]) -> Result<()> {
        match self.display.format {
            OutputFormat::Json => self.write_json(&self.spans_or_segments_json(segments)?),
            OutputFormat::Text => {
                let pieces = self.text_pieces(segments);
                self.write_pieces(&pieces)
            }
        }
    }

    pub fn print_comparison(&mut self, comparison: &VersionComparison) -> Result<()> {
        if self.display.format == OutputFormat::Json {
            let json = serde_json::to_value(comparison).context("Failed to serialize comparison")?;
            return self.write_json(&json);
        }

        for field in &comparison.fields {
            if self.display.differences_only && !field.has_changes() {
                continue;
            }

            let header = format!("== {} ==", field.name);
            let header = if self.use_colors {
                header.bold().to_string()
            } else {
                header
            };
            writeln!(self.out, "{header}").context("Failed to write output")?;

            let pieces = self.text_pieces(&field.segments);
            self.write_pieces(&pieces)?;
        }

        let changed = comparison.changed_fields().count();
        writeln!(
            self.out,
            "{changed} of {} fields changed, {} words added, {} words removed",
            comparison.fields.len(),
            comparison.stats.added_words,
            comparison.stats.removed_words
        )
        .context("Failed to write output")
    }

    pub fn into_inner(self) -> W { self.out }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            differences_only: self.display.differences_only,
        }
    }

    fn pane(&self) -> Option<Pane> {
        match self.display.pane {
            PaneSelection::Original => Some(Pane::Original),
            PaneSelection::Current => Some(Pane::Current),
            PaneSelection::Both => None,
        }
    }

    fn spans_or_segments_json(&self, segments: &[DiffSegment]) -> Result<serde_json::Value> {
        match self.pane() {
            Some(pane) => serde_json::to_value(render_pane(segments, pane, self.render_options())),
            None if self.display.differences_only => serde_json::to_value(
                segments
                    .iter()
                    .filter(|segment| segment.is_change())
                    .collect::<Vec<_>>(),
            ),
            None => serde_json::to_value(segments),
        }
        .context("Failed to serialize diff")
    }

    fn text_pieces(&self, segments: &[DiffSegment]) -> Vec<String> {
        match self.pane() {
            Some(pane) => render_pane(segments, pane, self.render_options())
                .iter()
                .map(|span| self.format_span(span))
                .collect(),
            None => merge_adjacent(segments.to_vec())
                .iter()
                .filter(|segment| !self.display.differences_only || segment.is_change())
                .map(|segment| self.format_segment(segment))
                .collect(),
        }
    }

    fn format_segment(&self, segment: &DiffSegment) -> String {
        match segment.kind() {
            SegmentKind::Unchanged => segment.text(),
            SegmentKind::Added => self.inserted(segment.as_str()),
            SegmentKind::Removed => self.deleted(segment.as_str()),
        }
    }

    fn format_span(&self, span: &RenderedSpan) -> String {
        match span.style() {
            SpanStyle::Plain => span.text(),
            SpanStyle::Deleted => self.deleted(span.as_str()),
            SpanStyle::Inserted => self.inserted(span.as_str()),
            SpanStyle::Placeholder => span.visible_text(),
        }
    }

    fn inserted(&self, text: &str) -> String {
        if self.use_colors {
            text.green().underline().to_string()
        } else {
            format!("{{+{text}+}}")
        }
    }

    fn deleted(&self, text: &str) -> String {
        if self.use_colors {
            text.red().strikethrough().to_string()
        } else {
            format!("[-{text}-]")
        }
    }

    /// Changes are printed one per line when unchanged text is hidden, as the
    /// pieces would otherwise run together.
    fn write_pieces(&mut self, pieces: &[String]) -> Result<()> {
        let separator = if self.display.differences_only { "\n" } else { "" };
        let text = pieces.join(separator);

        if text.ends_with('\n') || text.is_empty() {
            write!(self.out, "{text}")
        } else {
            writeln!(self.out, "{text}")
        }
        .context("Failed to write output")
    }

    fn write_json(&mut self, json: &serde_json::Value) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, json).context("Failed to write JSON")?;
        writeln!(self.out).context("Failed to write output")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use revision_diff::{DiffOptions, JobDescriptionVersion, compare_versions, compute_diff};

    use super::*;

    fn print(display: DisplayConfig, original: &str, current: &str) -> String {
        let mut printer = Printer::new(Vec::new(), display, false);
        printer
            .print_segments(&compute_diff(original, current))
            .unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    fn display(pane: PaneSelection, differences_only: bool) -> DisplayConfig {
        DisplayConfig {
            pane,
            differences_only,
            format: OutputFormat::Text,
        }
    }

    const ORIGINAL: &str = "Monitor Patient Vitals.";
    const CURRENT: &str = "Monitor Vital Signs.";

    #[test]
    fn test_word_diff() {
        assert_eq!(
            print(display(PaneSelection::Both, false), ORIGINAL, CURRENT),
            "Monitor {+Vital+}[-Patient-] {+Signs.+}[-Vitals.-]\n"
        );
    }

    #[test]
    fn test_original_pane() {
        assert_eq!(
            print(display(PaneSelection::Original, false), ORIGINAL, CURRENT),
            "Monitor      [-Patient-]       [-Vitals.-]\n"
        );
    }

    #[test]
    fn test_current_pane() {
        assert_eq!(
            print(display(PaneSelection::Current, false), ORIGINAL, CURRENT),
            "Monitor {+Vital+} {+Signs.+}\n"
        );
    }

    #[test]
    fn test_differences_only() {
        assert_eq!(
            print(display(PaneSelection::Current, true), ORIGINAL, CURRENT),
            "{+Vital+}\n{+Signs.+}\n"
        );
        assert_eq!(print(display(PaneSelection::Both, true), "same", "same"), "");
    }

    #[test]
    fn test_json() {
        let output = print(
            DisplayConfig {
                pane: PaneSelection::Current,
                differences_only: true,
                format: OutputFormat::Json,
            },
            ORIGINAL,
            CURRENT,
        );

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "style": "inserted", "text": "Vital" },
                { "style": "inserted", "text": "Signs." },
            ])
        );
    }

    #[test]
    fn test_comparison() {
        let original = JobDescriptionVersion::default()
            .with_field("summary", ORIGINAL)
            .with_field("location", "Ward 3");
        let current = JobDescriptionVersion::default()
            .with_field("summary", CURRENT)
            .with_field("location", "Ward 3");
        let comparison = compare_versions(&original, &current, &DiffOptions::default());

        let mut printer = Printer::new(Vec::new(), display(PaneSelection::Both, true), false);
        printer.print_comparison(&comparison).unwrap();

        insta::assert_snapshot!(String::from_utf8(printer.into_inner()).unwrap(), @r"
        == summary ==
        {+Vital+}
        [-Patient-]
        {+Signs.+}
        [-Vitals.-]
        1 of 2 fields changed, 2 words added, 2 words removed
        ");
    }
}
