//! Truncate command handler.

use std::path::PathBuf;

use anyhow::Result;
use textfold_core::config::Config;
use textfold_core::measure::{MonospaceMeasurer, StyledText, TextMeasurer};
use textfold_core::truncate::{TruncationResult, truncate_measured};

use super::input;

pub struct TruncateOptions<'a> {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub max_lines: Option<usize>,
    pub width: usize,
    pub label: Option<String>,
    pub json: bool,
    pub config: &'a Config,
}

pub fn run(options: TruncateOptions) -> Result<()> {
    let TruncateOptions {
        text,
        file,
        max_lines,
        width,
        label,
        json,
        config,
    } = options;

    let fold = config.fold_options();
    let max_lines = max_lines.unwrap_or(fold.max_lines);
    let label = label.unwrap_or_else(|| fold.affordance_label());

    let text = input::read_input(text, file.as_deref())?;
    let styled = StyledText::new(text, config.text_style());
    let measurer = MonospaceMeasurer;
    let measurement = measurer.measure(&styled, width);
    let result = truncate_measured(&measurer, &styled, &measurement, max_lines, width, &label);
    tracing::debug!(width, max_lines, truncated = result.is_truncated(), "truncate finished");

    if json {
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    match &result {
        TruncationResult::NotTruncated => {
            for line in &measurement.lines {
                println!("{}", line.slice(styled.as_str()));
            }
        }
        TruncationResult::Truncated {
            visible_prefix,
            suffix,
        } => {
            let last = &measurement.lines[max_lines - 1];
            for line in &measurement.lines[..max_lines - 1] {
                println!("{}", line.slice(styled.as_str()));
            }
            println!("{}{}", &visible_prefix[last.start..], suffix);
        }
    }

    Ok(())
}
