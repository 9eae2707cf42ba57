//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use textfold_core::config::Config;
use textfold_core::logging;

use crate::modes;

mod commands;

#[derive(Parser)]
#[command(name = "textfold")]
#[command(version)]
#[command(about = "Fold long text to a line budget with an expand affordance")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Truncate text to the collapsed line budget
    Truncate {
        /// The text to fold (reads stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Lines to keep while collapsed (default: from config)
        #[arg(long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        max_lines: Option<usize>,

        /// Available line width in columns
        #[arg(long, value_name = "COLS", default_value_t = 80, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        width: usize,

        /// Affordance label reserved on the last line (default: from config)
        #[arg(long, value_name = "LABEL")]
        label: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Measure how text wraps at a given width
    Measure {
        /// The text to measure (reads stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Available line width in columns
        #[arg(long, value_name = "COLS", default_value_t = 80, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        width: usize,

        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _logging_guard = logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "textfold started");

    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // default to the interactive demo
    let Some(command) = cli.command else {
        return modes::run_demo(&config).context("interactive demo failed");
    };

    match command {
        Commands::Truncate {
            text,
            file,
            max_lines,
            width,
            label,
            json,
        } => commands::truncate::run(commands::truncate::TruncateOptions {
            text,
            file,
            max_lines,
            width,
            label,
            json,
            config: &config,
        }),

        Commands::Measure {
            text,
            file,
            width,
            json,
        } => commands::measure::run(text, file.as_deref(), width, json, &config),

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
