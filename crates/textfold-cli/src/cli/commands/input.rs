//! Input resolution shared by the text commands.

use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Resolves the text to operate on: the positional argument, `--file`, or
/// piped stdin, in that order. Trailing newlines are stripped so shell
/// pipes do not add a phantom empty line.
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    let text = if let Some(text) = text {
        text
    } else if let Some(path) = file {
        std::fs::read_to_string(path)
            .with_context(|| format!("read text from {}", path.display()))?
    } else {
        if std::io::stdin().is_terminal() {
            anyhow::bail!("No text provided. Pass TEXT, --file, or pipe stdin.");
        }
        let mut text = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut text)
            .context("read text from stdin")?;
        text
    };
    Ok(text.trim_end_matches('\n').to_string())
}
