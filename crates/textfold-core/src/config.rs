//! Configuration management for textfold.
//!
//! Loads configuration from ${TEXTFOLD_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fold::FoldOptions;
use crate::measure::TextStyle;

/// One demo sample: a title and the text to fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub title: String,
    pub text: String,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            text: String::new(),
        }
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for textfold configuration and data directories.
    //!
    //! TEXTFOLD_HOME resolution order:
    //! 1. TEXTFOLD_HOME environment variable (if set)
    //! 2. ~/.config/textfold (default)

    use std::path::PathBuf;

    /// Returns the textfold home directory.
    ///
    /// Checks TEXTFOLD_HOME env var first, falls back to ~/.config/textfold
    pub fn textfold_home() -> PathBuf {
        if let Ok(home) = std::env::var("TEXTFOLD_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("textfold"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        textfold_home().join("config.toml")
    }

    /// Returns the path to the log directory.
    pub fn logs_dir() -> PathBuf {
        textfold_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lines shown while a text is collapsed
    pub max_lines: usize,

    /// Hint rendered before the expand label
    pub ellipsis: String,

    /// Expand affordance wording
    pub expand_label: String,

    /// Close affordance wording; empty disables the close affordance
    pub close_label: String,

    /// Columns a tab expands to
    pub tab_width: usize,

    /// Demo sample texts; empty means the built-in samples
    #[serde(default)]
    pub samples: Vec<SampleConfig>,
}

impl Config {
    const DEFAULT_ELLIPSIS: &str = "… ";
    const DEFAULT_EXPAND_LABEL: &str = "expand";
    const DEFAULT_CLOSE_LABEL: &str = "close";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Fold parameters derived from this config.
    ///
    /// A zero line budget would disable folding entirely and is quietly
    /// clamped to one.
    pub fn fold_options(&self) -> FoldOptions {
        FoldOptions {
            max_lines: self.max_lines.max(1),
            ellipsis: self.ellipsis.clone(),
            expand_label: self.expand_label.clone(),
            close_label: self.close_label.clone(),
        }
    }

    /// Text style derived from this config.
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            tab_width: self.tab_width,
        }
    }

    /// Demo samples: the configured list, or the built-ins when none are
    /// configured.
    pub fn samples(&self) -> Vec<SampleConfig> {
        if self.samples.is_empty() {
            default_samples()
        } else {
            self.samples.clone()
        }
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_lines: FoldOptions::DEFAULT_MAX_LINES,
            ellipsis: Self::DEFAULT_ELLIPSIS.to_string(),
            expand_label: Self::DEFAULT_EXPAND_LABEL.to_string(),
            close_label: Self::DEFAULT_CLOSE_LABEL.to_string(),
            tab_width: TextStyle::DEFAULT_TAB_WIDTH,
            samples: Vec::new(),
        }
    }
}

/// Built-in demo samples shown when the config declares none.
fn default_samples() -> Vec<SampleConfig> {
    vec![
        SampleConfig {
            title: "Pangram, repeated".to_string(),
            text: "The quick brown fox jumps over the lazy dog. ".repeat(8).trim_end().to_string(),
        },
        SampleConfig {
            title: "Short note".to_string(),
            text: "Fits on a single line.".to_string(),
        },
        SampleConfig {
            title: "Spring dawn (CJK)".to_string(),
            text: "春眠不觉晓，处处闻啼鸟。夜来风雨声，花落知多少。".repeat(4),
        },
        SampleConfig {
            title: "Paragraph breaks".to_string(),
            text: "Hard line breaks survive wrapping and folding.\n\nThis second paragraph only appears once the block is expanded, along with everything after it in the sample."
                .to_string(),
        },
    ]
}
