//! Application state for the demo TUI.
//!
//! State hierarchy:
//!
//! ```text
//! AppState
//! └── TuiState
//!     ├── SamplesState   (sample list, selection, scroll, fold cache)
//!     ├── FoldOptions    (collapsed line budget and affordance labels)
//!     └── terminal_size
//! ```

use textfold_core::config::Config;
use textfold_core::fold::FoldOptions;

use crate::features::samples::SamplesState;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// State owned by the terminal view.
    pub tui: TuiState,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            tui: TuiState::new(config),
        }
    }
}

/// State for the terminal view.
#[derive(Debug)]
pub struct TuiState {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Sample list, selection, and fold cache.
    pub samples: SamplesState,
    /// Fold parameters shared by every sample.
    pub fold_options: FoldOptions,
    /// Current terminal size (width, height).
    pub terminal_size: (u16, u16),
}

impl TuiState {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            samples: SamplesState::new(config),
            fold_options: config.fold_options(),
            terminal_size: (0, 0),
        }
    }
}
