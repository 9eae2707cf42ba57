//! Text measurement against an available width.
//!
//! Widths are terminal display columns per `unicode_width`: CJK and emoji
//! count two columns, zero-width characters none. Layout records byte
//! offsets into the measured text so callers can slice lines back out of
//! the source without re-wrapping.

use std::borrow::Cow;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Measurement-affecting style descriptor.
///
/// Terminal cells are uniform, so the only input that changes measurement
/// is how tabs expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Columns a tab expands to when the text is sanitized.
    pub tab_width: usize,
}

impl TextStyle {
    pub const DEFAULT_TAB_WIDTH: usize = 4;
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            tab_width: Self::DEFAULT_TAB_WIDTH,
        }
    }
}

/// A string paired with the style it is measured under. Immutable.
///
/// Construction sanitizes the input the way the terminal will see it, so
/// every offset produced by measurement refers to the stored string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    style: TextStyle,
}

impl StyledText {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        let raw = text.into();
        let text = match sanitize(&raw, style.tab_width) {
            Cow::Borrowed(_) => raw,
            Cow::Owned(clean) => clean,
        };
        Self { text, style }
    }

    /// Shorthand for [`StyledText::new`] with the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::default())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }
}

/// Sanitizes a string for width measurement and display.
///
/// Strips ANSI escape introducers (which breaks any escape sequence) and
/// expands tabs. Tabs would otherwise measure as zero columns while
/// terminals render them as variable-width jumps to the next tab stop.
pub fn sanitize(s: &str, tab_width: usize) -> Cow<'_, str> {
    if s.contains('\x1b') || s.contains('\t') {
        let tab = " ".repeat(tab_width);
        Cow::Owned(s.replace('\x1b', "").replace('\t', &tab))
    } else {
        Cow::Borrowed(s)
    }
}

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// One laid-out line: its byte range in the measured text plus its width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineExtent {
    /// Byte offset of the line start in the measured text.
    pub start: usize,
    /// Byte offset one past the line end.
    pub end: usize,
    /// Display width of the line in columns.
    pub width: usize,
}

impl LineExtent {
    /// Slices this line out of the text it was measured from.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Result of laying a [`StyledText`] out against an available width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutMeasurement {
    /// Per-line extents, in order. Never empty: empty text measures as one
    /// empty line.
    pub lines: Vec<LineExtent>,
    /// Width of the widest line, in columns.
    pub max_line_width: usize,
}

impl LayoutMeasurement {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Measurement capability consumed by truncation and rendering.
///
/// The bundled [`MonospaceMeasurer`] measures terminal columns; tests and
/// other frontends can substitute fixed-metric implementations.
pub trait TextMeasurer {
    /// Lays `text` out against `available_width` columns.
    fn measure(&self, text: &StyledText, available_width: usize) -> LayoutMeasurement;

    /// Width of a single unwrapped run of text.
    fn run_width(&self, text: &str, style: TextStyle) -> usize;
}

/// Column-based measurer for monospace terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMeasurer;

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &StyledText, available_width: usize) -> LayoutMeasurement {
        let mut lines = Vec::new();
        let mut offset = 0;
        for segment in text.as_str().split('\n') {
            layout_segment(offset, segment, available_width, &mut lines);
            offset += segment.len() + 1;
        }
        let max_line_width = lines.iter().map(|line| line.width).max().unwrap_or(0);
        LayoutMeasurement {
            lines,
            max_line_width,
        }
    }

    fn run_width(&self, text: &str, _style: TextStyle) -> usize {
        text.width()
    }
}

/// Lays out one hard-break segment with greedy word wrapping.
///
/// Offsets are absolute into the measured text (`seg_start` + relative).
/// Whitespace between words stays inside a line when the next word fits
/// and is consumed by the break otherwise; leading whitespace counts as
/// indentation on the first line. Words wider than the available width
/// fall back to per-cluster breaking.
fn layout_segment(seg_start: usize, segment: &str, width: usize, lines: &mut Vec<LineExtent>) {
    if segment.is_empty() {
        lines.push(LineExtent {
            start: seg_start,
            end: seg_start,
            width: 0,
        });
        return;
    }
    if width == 0 {
        // Caller contract violation; degrade to a single unwrapped line.
        lines.push(LineExtent {
            start: seg_start,
            end: seg_start + segment.len(),
            width: segment.width(),
        });
        return;
    }

    let lines_before = lines.len();
    let mut line_start = seg_start;
    let mut line_end = seg_start;
    let mut line_width = 0usize;
    // Whitespace run awaiting the next word: (absolute end, width).
    let mut pending_ws: Option<(usize, usize)> = None;

    for (run_start, run_end, is_ws) in char_runs(segment) {
        let abs_start = seg_start + run_start;
        let abs_end = seg_start + run_end;
        let run = &segment[run_start..run_end];
        let run_width = run.width();

        if is_ws {
            if line_end == line_start && line_start == seg_start {
                // Leading indentation belongs to the first line.
                line_end = abs_end;
                line_width += run_width;
            } else {
                pending_ws = Some((abs_end, run_width));
            }
            continue;
        }

        let (_, ws_width) = pending_ws.take().unwrap_or((abs_start, 0));
        if line_end == line_start {
            place_word(
                run, abs_start, width, &mut line_start, &mut line_end, &mut line_width, lines,
            );
        } else if line_width + ws_width + run_width <= width {
            line_end = abs_end;
            line_width += ws_width + run_width;
        } else {
            lines.push(LineExtent {
                start: line_start,
                end: line_end,
                width: line_width,
            });
            line_start = abs_start;
            line_end = abs_start;
            line_width = 0;
            place_word(
                run, abs_start, width, &mut line_start, &mut line_end, &mut line_width, lines,
            );
        }
    }

    if line_end > line_start || lines.len() == lines_before {
        lines.push(LineExtent {
            start: line_start,
            end: line_end,
            width: line_width,
        });
    }
}

/// Places one word on an empty line, breaking by grapheme cluster when the
/// word alone is wider than the available width.
#[allow(clippy::too_many_arguments)]
fn place_word(
    word: &str,
    abs_start: usize,
    width: usize,
    line_start: &mut usize,
    line_end: &mut usize,
    line_width: &mut usize,
    lines: &mut Vec<LineExtent>,
) {
    let word_width = word.width();
    if word_width <= width {
        *line_end = abs_start + word.len();
        *line_width = word_width;
        return;
    }

    for (idx, cluster) in word.grapheme_indices(true) {
        let cluster_width = cluster.width();
        if cluster_width == 0 {
            // Zero-width clusters attach to the current line.
            *line_end = abs_start + idx + cluster.len();
            continue;
        }
        if *line_width + cluster_width > width && *line_width > 0 {
            lines.push(LineExtent {
                start: *line_start,
                end: *line_end,
                width: *line_width,
            });
            *line_start = abs_start + idx;
            *line_end = *line_start;
            *line_width = 0;
        }
        *line_end = abs_start + idx + cluster.len();
        *line_width += cluster_width;
    }
}

/// Splits a segment into alternating whitespace/word runs of byte offsets.
fn char_runs(segment: &str) -> Vec<(usize, usize, bool)> {
    let mut runs: Vec<(usize, usize, bool)> = Vec::new();
    for (idx, ch) in segment.char_indices() {
        let ws = ch.is_whitespace();
        match runs.last_mut() {
            Some((_, end, last_ws)) if *last_ws == ws => *end = idx + ch.len_utf8(),
            _ => runs.push((idx, idx + ch.len_utf8(), ws)),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(text: &str, width: usize) -> LayoutMeasurement {
        MonospaceMeasurer.measure(&StyledText::plain(text), width)
    }

    fn line_texts(text: &str, measurement: &LayoutMeasurement) -> Vec<String> {
        measurement
            .lines
            .iter()
            .map(|line| line.slice(text).to_string())
            .collect()
    }

    #[test]
    fn test_measure_single_line() {
        let m = measure("hello world", 20);
        assert_eq!(m.line_count(), 1);
        assert_eq!(m.lines[0], LineExtent { start: 0, end: 11, width: 11 });
        assert_eq!(m.max_line_width, 11);
    }

    #[test]
    fn test_measure_wraps_at_word_boundary() {
        let m = measure("hello world", 8);
        assert_eq!(line_texts("hello world", &m), vec!["hello", "world"]);
        assert_eq!(m.lines[1].start, 6);
        assert_eq!(m.lines[1].width, 5);
    }

    #[test]
    fn test_measure_breaks_long_word() {
        let m = measure("supercalifragilistic", 10);
        assert_eq!(
            line_texts("supercalifragilistic", &m),
            vec!["supercalif", "ragilistic"]
        );
    }

    #[test]
    fn test_measure_cjk_double_width() {
        // Each CJK character is 2 columns wide
        let m = measure("你好世界", 6);
        assert_eq!(line_texts("你好世界", &m), vec!["你好世", "界"]);
        assert_eq!(m.lines[0].width, 6);
        assert_eq!(m.lines[1].width, 2);
    }

    #[test]
    fn test_measure_mixed_ascii_cjk() {
        let m = measure("Hi你好", 5);
        assert_eq!(line_texts("Hi你好", &m), vec!["Hi你", "好"]);
    }

    #[test]
    fn test_measure_words_with_unicode() {
        let m = measure("Hello 你好 World", 10);
        assert_eq!(line_texts("Hello 你好 World", &m), vec!["Hello 你好", "World"]);
    }

    #[test]
    fn test_measure_hard_newlines() {
        let text = "one\ntwo three\nfour";
        let m = measure(text, 20);
        assert_eq!(line_texts(text, &m), vec!["one", "two three", "four"]);
    }

    #[test]
    fn test_measure_blank_line_preserved() {
        let text = "a\n\nb";
        let m = measure(text, 20);
        assert_eq!(line_texts(text, &m), vec!["a", "", "b"]);
        assert_eq!(m.lines[1], LineExtent { start: 2, end: 2, width: 0 });
    }

    #[test]
    fn test_measure_empty_text() {
        let m = measure("", 20);
        assert_eq!(m.line_count(), 1);
        assert_eq!(m.lines[0].width, 0);
    }

    #[test]
    fn test_measure_leading_indent_kept() {
        let m = measure("  foo bar", 20);
        assert_eq!(line_texts("  foo bar", &m), vec!["  foo bar"]);
        assert_eq!(m.lines[0].width, 9);
    }

    #[test]
    fn test_measure_break_consumes_whitespace() {
        // The space between words is not carried onto the wrapped line
        let m = measure("hello  world", 6);
        assert_eq!(line_texts("hello  world", &m), vec!["hello", "world"]);
        assert_eq!(m.lines[1].start, 7);
    }

    #[test]
    fn test_measure_uniform_fill() {
        let text = "A".repeat(200);
        let m = measure(&text, 20);
        assert_eq!(m.line_count(), 10);
        for (i, line) in m.lines.iter().enumerate() {
            assert_eq!(line.start, i * 20);
            assert_eq!(line.end, i * 20 + 20);
            assert_eq!(line.width, 20);
        }
    }

    #[test]
    fn test_styled_text_expands_tabs() {
        let styled = StyledText::new("a\tb", TextStyle { tab_width: 4 });
        assert_eq!(styled.as_str(), "a    b");
    }

    #[test]
    fn test_styled_text_strips_ansi() {
        let styled = StyledText::plain("\x1b[31mred\x1b[0m");
        assert_eq!(styled.as_str(), "[31mred[0m");
    }

    #[test]
    fn test_run_width_zero_width_chars() {
        // Combining mark adds no columns
        assert_eq!(MonospaceMeasurer.run_width("e\u{0301}", TextStyle::default()), 1);
        assert_eq!(MonospaceMeasurer.run_width("🎉", TextStyle::default()), 2);
    }
}
