//! Rendering for the sample list.

use std::cell::Cell;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use textfold_core::fold::FoldState;
use textfold_core::measure::{MonospaceMeasurer, display_width};
use textfold_core::span::{SpanStyle, StyledLine, fold_lines};
use textfold_core::truncate::truncate_line;

use crate::state::TuiState;

use super::state::SampleState;

/// Horizontal margin around the sample list.
const LIST_MARGIN: u16 = 1;

/// Renders the sample list into `area`, keeping the selection visible.
pub fn render_samples(state: &TuiState, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(LIST_MARGIN * 2) as usize;
    if width == 0 || area.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut selection = (0, 0);
    for (index, sample) in state.samples.samples.iter().enumerate() {
        let start = lines.len();
        lines.push(title_line(sample, width, index == state.samples.selected));
        for styled_line in body_lines(state, index, width) {
            lines.push(convert_styled_line(styled_line));
        }
        if index == state.samples.selected {
            selection = (start, lines.len());
        }
        lines.push(Line::default());
    }

    let viewport = area.height as usize;
    let scroll = scroll_offset(&state.samples.scroll, selection, lines.len(), viewport);
    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(viewport).collect();

    let list_area = Rect {
        x: area.x + LIST_MARGIN,
        y: area.y,
        width: area.width.saturating_sub(LIST_MARGIN * 2),
        height: area.height,
    };
    // NOTE: No .wrap() here - fold_lines already wrapped the content
    frame.render_widget(Paragraph::new(visible), list_area);
}

/// Fold rendering for one sample, memoized per `(sample, width, fold)`.
fn body_lines(state: &TuiState, index: usize, width: usize) -> Vec<StyledLine> {
    let sample = &state.samples.samples[index];
    if let Some(lines) = state.samples.cache.get(index, width, sample.fold) {
        return lines;
    }
    let lines = fold_lines(
        &MonospaceMeasurer,
        &sample.text,
        &state.fold_options,
        sample.fold,
        width,
    );
    state
        .samples
        .cache
        .insert(index, width, sample.fold, lines.clone());
    lines
}

/// Title row: a fold marker plus the sample title, highlighted when selected.
fn title_line(sample: &SampleState, width: usize, selected: bool) -> Line<'static> {
    let marker = match sample.fold {
        FoldState::Collapsed => "▸ ",
        FoldState::Expanded => "▾ ",
    };
    let title_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let title = truncate_line(&sample.title, width.saturating_sub(display_width(marker)));
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::DarkGray)),
        Span::styled(title, title_style),
    ])
}

/// Nudges the scroll offset so the selection stays in view, then clamps it
/// to the content. The adjusted offset is written back for the next frame.
/// A selection taller than the viewport pins to its first line, so the
/// offset is a fixed point across frames.
fn scroll_offset(
    scroll: &Cell<usize>,
    (selection_start, selection_end): (usize, usize),
    total_lines: usize,
    viewport: usize,
) -> usize {
    let mut offset = scroll.get();
    if selection_start < offset {
        offset = selection_start;
    } else if selection_end > offset + viewport {
        offset = selection_end.saturating_sub(viewport).min(selection_start);
    }
    offset = offset.min(total_lines.saturating_sub(viewport));
    scroll.set(offset);
    offset
}

/// Converts a semantic styled line into a ratatui line.
fn convert_styled_line(styled_line: StyledLine) -> Line<'static> {
    let spans: Vec<Span> = styled_line
        .spans
        .into_iter()
        .map(|span| Span::styled(span.text, convert_style(span.style)))
        .collect();
    Line::from(spans)
}

/// Maps semantic span roles to terminal styles.
fn convert_style(style: SpanStyle) -> Style {
    match style {
        SpanStyle::Content => Style::default(),
        SpanStyle::Hint => Style::default().fg(Color::DarkGray),
        SpanStyle::Affordance => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
    }
}
