//! Side effects requested by the reducer.
//!
//! Effects are commands returned by the reducer that the runtime executes
//! after each update. This keeps the reducer pure: it describes what should
//! happen without touching the terminal or the filesystem itself.

/// Side effects the runtime executes on behalf of the reducer.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,
    /// Open the config file in the default system editor/app.
    OpenConfig,
}
