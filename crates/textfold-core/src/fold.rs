//! Collapsed/expanded presentation state and fold parameters.

use crate::measure::LayoutMeasurement;

/// Presentation toggle for a foldable text.
///
/// Transient per-view state: it is never persisted and both transitions
/// are synchronous. Activating the expand affordance moves to `Expanded`;
/// activating the close affordance moves back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FoldState {
    #[default]
    Collapsed,
    Expanded,
}

impl FoldState {
    pub fn toggle(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_collapsed(self) -> bool {
        matches!(self, Self::Collapsed)
    }

    /// Line budget to clamp rendering to: `Some(max_lines)` when collapsed,
    /// unbounded when expanded.
    pub fn line_budget(self, max_lines: usize) -> Option<usize> {
        match self {
            Self::Collapsed => Some(max_lines),
            Self::Expanded => None,
        }
    }
}

/// Lines a measured text occupies under a collapsed budget.
pub fn collapsed_height(measurement: &LayoutMeasurement, max_lines: usize) -> usize {
    measurement.line_count().min(max_lines)
}

/// Fold parameters: the collapsed line budget and the affordance wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldOptions {
    /// Lines shown while collapsed.
    pub max_lines: usize,
    /// Hint rendered before the expand label, usually an ellipsis.
    pub ellipsis: String,
    /// Expand affordance wording.
    pub expand_label: String,
    /// Close affordance wording; empty disables the close affordance and
    /// leaves expanded text plain.
    pub close_label: String,
}

impl FoldOptions {
    pub const DEFAULT_MAX_LINES: usize = 3;

    /// Full suffix reserved on the collapsed last line.
    pub fn affordance_label(&self) -> String {
        format!("{}{}", self.ellipsis, self.expand_label)
    }

    pub fn has_close_label(&self) -> bool {
        !self.close_label.is_empty()
    }
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            max_lines: Self::DEFAULT_MAX_LINES,
            ellipsis: "… ".to_string(),
            expand_label: "expand".to_string(),
            close_label: "close".to_string(),
        }
    }
}
