//! Measure command handler.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use textfold_core::config::Config;
use textfold_core::measure::{LineExtent, MonospaceMeasurer, StyledText, TextMeasurer};

use super::input;

/// JSON layout report.
#[derive(Serialize)]
struct MeasureReport<'a> {
    line_count: usize,
    max_line_width: usize,
    lines: &'a [LineExtent],
}

pub fn run(
    text: Option<String>,
    file: Option<&Path>,
    width: usize,
    json: bool,
    config: &Config,
) -> Result<()> {
    let text = input::read_input(text, file)?;
    let styled = StyledText::new(text, config.text_style());
    let measurement = MonospaceMeasurer.measure(&styled, width);

    if json {
        let report = MeasureReport {
            line_count: measurement.line_count(),
            max_line_width: measurement.max_line_width,
            lines: &measurement.lines,
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    println!(
        "{} lines, max width {}",
        measurement.line_count(),
        measurement.max_line_width
    );
    for (index, line) in measurement.lines.iter().enumerate() {
        println!("{:>4}  {:>4}  {}", index + 1, line.width, line.slice(styled.as_str()));
    }

    Ok(())
}
