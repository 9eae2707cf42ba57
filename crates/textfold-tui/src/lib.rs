//! Terminal demo UI for textfold.
//!
//! Renders the configured text samples as a navigable list where each
//! sample folds to a configured number of lines and expands in place.

pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

pub use runtime::TuiRuntime;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use textfold_core::config::{Config, paths};

/// Run the interactive demo until the user quits.
pub fn run_demo(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("textfold must be run in a terminal");
    }

    let mut err = stderr();
    writeln!(err, "textfold demo")?;
    let config_path = paths::config_path();
    if config_path.exists() {
        writeln!(err, "Config file: {}", config_path.display())?;
    }
    err.flush()?;

    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()?;

    // Print goodbye after the runtime drops and the terminal is restored.
    drop(runtime);
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
