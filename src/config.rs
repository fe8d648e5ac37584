//! Scoring configuration.
//!
//! Settings are layered: built-in defaults, then the user config file
//! (`<config dir>/bc2score/config.toml`) when it exists, then an explicit
//! `--config` file, then command-line flags.
//!
//! ```toml
//! threshold = 0.55
//! report = "recall"
//! format = "text"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::eval::{Classifier, OutputFormat, ReportMode, DEFAULT_THRESHOLD};
use crate::{Error, Result};

/// File name looked up inside the user config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolved settings for one scoring run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Similarity a matched excerpt must strictly exceed.
    pub threshold: f64,
    /// Detail rows to print after the summary.
    pub report: Option<ReportMode>,
    /// Output encoding.
    pub format: OutputFormat,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            report: None,
            format: OutputFormat::default(),
        }
    }
}

/// A config file's contents; every field optional so files can be partial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverrides {
    threshold: Option<f64>,
    report: Option<ReportMode>,
    format: Option<OutputFormat>,
}

impl ScoringConfig {
    /// Resolve defaults, the user config file and an optional explicit file.
    ///
    /// An explicit `path` must exist; the user config file is skipped when
    /// absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_layered(user_config_path().as_deref(), path)
    }

    /// Like [`ScoringConfig::load`], with the user config file given
    /// explicitly. A `user_file` that does not exist is skipped.
    pub fn load_layered(user_file: Option<&Path>, path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_file) = user_file.filter(|p| p.is_file()) {
            log::debug!("Reading user config {}", user_file.display());
            config = config.merge_file(&user_file)?;
        }
        if let Some(path) = path {
            config = config.merge_file(path)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse settings from TOML text on top of the defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config = Self::default().merge_toml(text)?;
        config.validate()?;
        Ok(config)
    }

    fn merge_file(self, path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        self.merge_toml(&text)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    fn merge_toml(self, text: &str) -> Result<Self> {
        let overrides: ConfigOverrides =
            toml::from_str(text).map_err(|e| Error::config(e.to_string()))?;
        Ok(Self {
            threshold: overrides.threshold.unwrap_or(self.threshold),
            report: overrides.report.or(self.report),
            format: overrides.format.unwrap_or(self.format),
        })
    }

    /// Check that the threshold is usable.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::config(format!(
                "threshold must be in [0.0, 1.0], got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Build the classifier for these settings.
    pub fn classifier(&self) -> Result<Classifier> {
        Classifier::with_threshold(self.threshold).map_err(|e| Error::config(e.to_string()))
    }
}

/// Location of the per-user config file, if the platform has a config dir.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut dir| {
        dir.push("bc2score");
        dir.push(CONFIG_FILE_NAME);
        dir
    })
}
