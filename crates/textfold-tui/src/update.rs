//! Pure reducer: applies events to state and returns effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::samples;
use crate::state::{AppState, TuiState};

/// Applies one event to the state, returning effects for the runtime.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Frame { width, height } => {
            handle_frame(&mut app.tui, width, height);
            vec![]
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
    }
}

/// Records the terminal size sampled at the top of the loop iteration.
fn handle_frame(tui: &mut TuiState, width: u16, height: u16) {
    let previous_width = tui.terminal_size.0;
    tui.terminal_size = (width, height);
    if previous_width != width {
        tui.samples.cache.clear();
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => {
            // Clear the fold cache on resize since folding depends on width
            app.tui.samples.cache.clear();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
            vec![UiEffect::Quit]
        }
        (KeyCode::Up | KeyCode::Char('k'), _) => {
            samples::select_previous(&mut app.tui.samples);
            vec![]
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            samples::select_next(&mut app.tui.samples);
            vec![]
        }
        (KeyCode::Enter | KeyCode::Char(' '), _) => {
            samples::toggle_selected(&mut app.tui.samples);
            vec![]
        }
        (KeyCode::Char('o'), _) => vec![UiEffect::OpenConfig],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textfold_core::config::Config;
    use textfold_core::fold::FoldState;

    fn app() -> AppState {
        AppState::new(&Config::default())
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(update(&mut app, key(KeyCode::Char('q'))), vec![UiEffect::Quit]);
        let ctrl_c = UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(update(&mut app, ctrl_c), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_selection_moves() {
        let mut app = app();
        update(&mut app, key(KeyCode::Down));
        assert_eq!(app.tui.samples.selected, 1);
        update(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.tui.samples.selected, 2);
        update(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.tui.samples.selected, 1);
        update(&mut app, key(KeyCode::Up));
        assert_eq!(app.tui.samples.selected, 0);
    }

    #[test]
    fn test_enter_and_space_toggle_selected_sample() {
        let mut app = app();
        update(&mut app, key(KeyCode::Enter));
        assert_eq!(app.tui.samples.samples[0].fold, FoldState::Expanded);
        update(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.tui.samples.samples[0].fold, FoldState::Collapsed);
    }

    #[test]
    fn test_open_config_effect() {
        let mut app = app();
        assert_eq!(
            update(&mut app, key(KeyCode::Char('o'))),
            vec![UiEffect::OpenConfig]
        );
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut app = app();
        assert!(update(&mut app, key(KeyCode::Char('x'))).is_empty());
        assert_eq!(app.tui.samples.selected, 0);
    }

    #[test]
    fn test_resize_clears_fold_cache() {
        let mut app = app();
        app.tui.samples.cache.insert(0, 80, FoldState::Collapsed, vec![]);
        update(&mut app, UiEvent::Terminal(Event::Resize(100, 40)));
        assert!(app.tui.samples.cache.is_empty());
    }

    #[test]
    fn test_frame_tracks_size_and_clears_cache_on_width_change() {
        let mut app = app();
        update(&mut app, UiEvent::Frame { width: 80, height: 24 });
        assert_eq!(app.tui.terminal_size, (80, 24));

        app.tui.samples.cache.insert(0, 80, FoldState::Collapsed, vec![]);
        update(&mut app, UiEvent::Frame { width: 60, height: 24 });
        assert!(app.tui.samples.cache.is_empty());

        // Height-only changes keep the cache
        app.tui.samples.cache.insert(0, 60, FoldState::Collapsed, vec![]);
        update(&mut app, UiEvent::Frame { width: 60, height: 30 });
        assert!(!app.tui.samples.cache.is_empty());
    }

    #[test]
    fn test_tick_produces_no_effects() {
        let mut app = app();
        assert!(update(&mut app, UiEvent::Tick).is_empty());
    }
}
