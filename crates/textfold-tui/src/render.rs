//! Pure view: renders state to a ratatui frame.
//!
//! Render reads state but never mutates it, so the same state always
//! draws the same frame. Scroll bookkeeping lives in a `Cell` inside
//! `SamplesState`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::samples;
use crate::state::AppState;

/// Height of the title bar in rows.
const TITLE_HEIGHT: u16 = 1;
/// Height of the status line in rows.
const STATUS_HEIGHT: u16 = 1;

/// Renders the full application frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_title_bar(app, frame, chunks[0]);
    samples::render_samples(&app.tui, frame, chunks[1]);
    render_status_line(app, frame, chunks[2]);
}

fn render_title_bar(app: &AppState, frame: &mut Frame, area: Rect) {
    let count = app.tui.samples.samples.len();
    let line = Line::from(vec![
        Span::styled(" textfold", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {count} samples"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Status line with key hints.
fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let hint = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled("↑/↓", hint),
        Span::raw(" select  "),
        Span::styled("Enter", hint),
        Span::raw(format!(" {}  ", enter_hint(app))),
        Span::styled("o", hint),
        Span::raw(" config  "),
        Span::styled("q", hint),
        Span::raw(" quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Wording for the Enter hint: the action it would take on the selection.
fn enter_hint(app: &AppState) -> &'static str {
    let samples = &app.tui.samples;
    match samples.samples.get(samples.selected) {
        Some(sample) if !sample.fold.is_collapsed() => "close",
        _ => "expand",
    }
}
