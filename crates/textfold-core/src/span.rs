//! Semantic styled spans for rendering folded text.
//!
//! Frontends map span roles to concrete colors and attributes; the core
//! never names colors.

use crate::fold::{FoldOptions, FoldState};
use crate::measure::{LayoutMeasurement, StyledText, TextMeasurer};
use crate::truncate::{TruncationResult, truncate_measured};

/// Visual role of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    /// Body text.
    Content,
    /// De-emphasized decoration, such as the ellipsis before the
    /// expand affordance.
    Hint,
    /// Interactive expand/close affordance.
    Affordance,
}

/// A run of text with one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: SpanStyle,
}

impl StyledSpan {
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Content,
        }
    }

    pub fn hint(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Hint,
        }
    }

    pub fn affordance(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Affordance,
        }
    }
}

/// One rendered line of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Renders `text` into styled lines for the given fold state.
///
/// Collapsed output is clamped to `options.max_lines` with the truncated
/// last line carrying the ellipsis hint and the expand affordance.
/// Expanded output is the full text, with the close affordance appended
/// inline when it fits after the final line and on its own line otherwise.
pub fn fold_lines<M: TextMeasurer>(
    measurer: &M,
    text: &StyledText,
    options: &FoldOptions,
    state: FoldState,
    available_width: usize,
) -> Vec<StyledLine> {
    let measurement = measurer.measure(text, available_width);
    match state.line_budget(options.max_lines) {
        Some(budget) => collapsed_lines(measurer, text, &measurement, options, budget, available_width),
        None => expanded_lines(measurer, text, &measurement, options, available_width),
    }
}

fn collapsed_lines<M: TextMeasurer>(
    measurer: &M,
    text: &StyledText,
    measurement: &LayoutMeasurement,
    options: &FoldOptions,
    budget: usize,
    available_width: usize,
) -> Vec<StyledLine> {
    let label = options.affordance_label();
    match truncate_measured(measurer, text, measurement, budget, available_width, &label) {
        TruncationResult::NotTruncated => content_lines(text, measurement),
        TruncationResult::Truncated { visible_prefix, .. } => {
            let last = &measurement.lines[budget - 1];
            let mut lines: Vec<StyledLine> = measurement.lines[..budget - 1]
                .iter()
                .map(|extent| content_line(extent.slice(text.as_str())))
                .collect();

            let shrunk = &visible_prefix[last.start..];
            let mut spans = Vec::new();
            if !shrunk.is_empty() {
                spans.push(StyledSpan::content(shrunk));
            }
            if !options.ellipsis.is_empty() {
                spans.push(StyledSpan::hint(options.ellipsis.clone()));
            }
            spans.push(StyledSpan::affordance(options.expand_label.clone()));
            lines.push(StyledLine { spans });
            lines
        }
    }
}

fn expanded_lines<M: TextMeasurer>(
    measurer: &M,
    text: &StyledText,
    measurement: &LayoutMeasurement,
    options: &FoldOptions,
    available_width: usize,
) -> Vec<StyledLine> {
    let mut lines = content_lines(text, measurement);
    let expandable = options.max_lines > 0 && measurement.line_count() >= options.max_lines;
    if !expandable || !options.has_close_label() {
        return lines;
    }

    let close_width = measurer.run_width(&options.close_label, text.style());
    let last_width = measurement.lines.last().map_or(0, |line| line.width);
    if last_width + 1 + close_width <= available_width {
        if let Some(last) = lines.last_mut() {
            last.spans.push(StyledSpan::content(" "));
            last.spans.push(StyledSpan::affordance(options.close_label.clone()));
        }
    } else {
        lines.push(StyledLine {
            spans: vec![StyledSpan::affordance(options.close_label.clone())],
        });
    }
    lines
}

fn content_lines(text: &StyledText, measurement: &LayoutMeasurement) -> Vec<StyledLine> {
    measurement
        .lines
        .iter()
        .map(|extent| content_line(extent.slice(text.as_str())))
        .collect()
}

fn content_line(text: &str) -> StyledLine {
    if text.is_empty() {
        StyledLine::empty()
    } else {
        StyledLine {
            spans: vec![StyledSpan::content(text)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MonospaceMeasurer;

    fn fold(text: &str, state: FoldState, width: usize) -> Vec<StyledLine> {
        fold_lines(
            &MonospaceMeasurer,
            &StyledText::plain(text),
            &FoldOptions::default(),
            state,
            width,
        )
    }

    fn line_text(line: &StyledLine) -> String {
        line.spans.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn test_collapsed_clamps_and_appends_affordance() {
        let lines = fold(&"A".repeat(200), FoldState::Collapsed, 20);
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[0]), "A".repeat(20));
        assert_eq!(
            lines[2].spans,
            vec![
                StyledSpan::content("A".repeat(12)),
                StyledSpan::hint("… "),
                StyledSpan::affordance("expand"),
            ]
        );
    }

    #[test]
    fn test_collapsed_short_text_has_no_affordance() {
        let lines = fold("short text", FoldState::Collapsed, 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans, vec![StyledSpan::content("short text")]);
    }

    #[test]
    fn test_expanded_close_on_own_line_when_last_is_full() {
        let lines = fold(&"A".repeat(200), FoldState::Expanded, 20);
        assert_eq!(lines.len(), 11);
        assert_eq!(
            lines[10].spans,
            vec![StyledSpan::affordance("close")]
        );
    }

    #[test]
    fn test_expanded_close_inline_when_it_fits() {
        // Final line is 5 columns wide, leaving room for " close"
        let lines = fold(&"A".repeat(45), FoldState::Expanded, 20);
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[2].spans,
            vec![
                StyledSpan::content("A".repeat(5)),
                StyledSpan::content(" "),
                StyledSpan::affordance("close"),
            ]
        );
    }

    #[test]
    fn test_expanded_short_text_is_plain() {
        let lines = fold("short text", FoldState::Expanded, 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans, vec![StyledSpan::content("short text")]);
    }

    #[test]
    fn test_double_toggle_restores_rendering() {
        let before = fold(&"A".repeat(200), FoldState::Collapsed, 20);
        let toggled = FoldState::Collapsed.toggle().toggle();
        let after = fold(&"A".repeat(200), toggled, 20);
        assert_eq!(before, after);
    }

    #[test]
    fn test_degenerate_width_renders_bare_affordance() {
        let lines = fold(&"A".repeat(200), FoldState::Collapsed, 4);
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[2].spans,
            vec![StyledSpan::hint("… "), StyledSpan::affordance("expand")]
        );
    }

    #[test]
    fn test_empty_close_label_leaves_expanded_plain() {
        let options = FoldOptions {
            close_label: String::new(),
            ..FoldOptions::default()
        };
        let lines = fold_lines(
            &MonospaceMeasurer,
            &StyledText::plain(&"A".repeat(200)),
            &options,
            FoldState::Expanded,
            20,
        );
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|line| {
            line.spans.iter().all(|span| span.style == SpanStyle::Content)
        }));
    }

    #[test]
    fn test_blank_lines_render_empty() {
        let lines = fold("a\n\nb", FoldState::Expanded, 20);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].spans.is_empty());
    }
}
