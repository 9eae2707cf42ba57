//! Collapse-aware truncation.
//!
//! The core operation measures a text against an available width and, when
//! it would occupy `max_lines` or more lines, shrinks the last visible line
//! until an affordance label fits after it on the same line.

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::measure::{LayoutMeasurement, StyledText, TextMeasurer};

/// Outcome of [`measure_and_truncate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TruncationResult {
    /// The full text fits within the line budget; render it as-is.
    NotTruncated,
    /// The text was cut. `visible_prefix` is the retained text; `suffix`
    /// is the affordance label to render after it in its own style.
    Truncated {
        visible_prefix: String,
        suffix: String,
    },
}

impl TruncationResult {
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

/// Measures `text` against `available_width` and truncates it to
/// `max_lines`, reserving room on the last line for `affordance_label`.
///
/// Pure: identical inputs always produce an identical result. Zero
/// `max_lines` or `available_width` are caller contract violations and
/// degrade to [`TruncationResult::NotTruncated`].
pub fn measure_and_truncate<M: TextMeasurer>(
    measurer: &M,
    text: &StyledText,
    max_lines: usize,
    available_width: usize,
    affordance_label: &str,
) -> TruncationResult {
    let measurement = measurer.measure(text, available_width);
    truncate_measured(
        measurer,
        text,
        &measurement,
        max_lines,
        available_width,
        affordance_label,
    )
}

/// Truncation against an existing measurement of the same text and width.
///
/// Callers that already hold a [`LayoutMeasurement`] (renderers, caches)
/// use this to avoid re-measuring.
pub fn truncate_measured<M: TextMeasurer>(
    measurer: &M,
    text: &StyledText,
    measurement: &LayoutMeasurement,
    max_lines: usize,
    available_width: usize,
    affordance_label: &str,
) -> TruncationResult {
    if max_lines == 0 || measurement.line_count() < max_lines {
        return TruncationResult::NotTruncated;
    }

    let last = &measurement.lines[max_lines - 1];
    let mut line = last.slice(text.as_str()).trim_end().to_string();
    let label_width = measurer.run_width(affordance_label, text.style());

    // Shrink until the label fits after the line, or the line is gone. The
    // label itself is never shrunk: if it alone exceeds the width, the
    // overflow is accepted and left to the renderer.
    while !line.is_empty()
        && measurer.run_width(&line, text.style()) + label_width > available_width
    {
        drop_last_cluster(&mut line);
    }

    let mut visible_prefix = text.as_str()[..last.start].to_string();
    visible_prefix.push_str(&line);
    TruncationResult::Truncated {
        visible_prefix,
        suffix: affordance_label.to_string(),
    }
}

/// Removes the final grapheme cluster so combining marks and emoji
/// sequences are never split mid-cluster.
fn drop_last_cluster(line: &mut String) {
    if let Some((idx, _)) = line.grapheme_indices(true).next_back() {
        line.truncate(idx);
    }
}

/// Truncates a single run to `max_width` columns, appending `…` when cut.
///
/// Single-line helper for status bars and list rows; the fold-aware path
/// above is for multi-line content.
pub fn truncate_line(text: &str, max_width: usize) -> String {
    if text.chars().map(|c| c.width().unwrap_or(0)).sum::<usize>() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let next = used + ch.width().unwrap_or(0);
        // Reserve one column for the ellipsis
        if next + 1 > max_width {
            break;
        }
        out.push(ch);
        used = next;
    }
    out.push('…');
    out
}
