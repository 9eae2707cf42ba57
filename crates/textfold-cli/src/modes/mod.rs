//! Runtime execution modes.
//!
//! - text commands: non-interactive output on stdout
//! - `tui`: full-screen interactive demo (optional feature)

#[cfg(feature = "tui")]
pub use textfold_tui::run_demo;

#[cfg(not(feature = "tui"))]
pub fn run_demo(_config: &textfold_core::config::Config) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
