//! Analyzer configuration with sane defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::AnalyzerError;

/// Tunable thresholds for the classifiers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Apply the pinned-example name table before the pattern rules.
  pub use_pinned_examples: bool,
  /// Mock ratio above which mock usage is excessive.
  pub excessive_mock_ratio: f64,
  /// Mock ratio below which mock usage is insufficient (with high complexity).
  pub insufficient_mock_ratio: f64,
  /// Complexity above which a low mock ratio counts as insufficient.
  pub insufficient_mock_complexity: u32,
  /// Complexity above which high debt makes refactoring priority high.
  pub refactoring_high_complexity: u32,
  /// Complexity above which refactoring priority is at least medium.
  pub refactoring_medium_complexity: u32,
  /// client/service/provider mentions above which integration complexity is high.
  pub integration_high_mentions: usize,
  /// client/service/provider mentions above which integration complexity is medium.
  pub integration_medium_mentions: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      use_pinned_examples: true,
      excessive_mock_ratio: 0.7,
      insufficient_mock_ratio: 0.1,
      insufficient_mock_complexity: 15,
      refactoring_high_complexity: 20,
      refactoring_medium_complexity: 25,
      integration_high_mentions: 3,
      integration_medium_mentions: 1,
    }
  }
}

impl Config {
  /// Parse a TOML document; missing keys keep their defaults.
  pub fn from_toml_str(raw: &str) -> Result<Self, AnalyzerError> {
    let config: Self = toml::from_str(raw).map_err(|e| AnalyzerError::config(e.to_string()))?;
    config.check()?;
    Ok(config)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
      .map_err(|e| AnalyzerError::config(format!("{}: {}", path.display(), e)))?;
    Self::from_toml_str(&raw)
  }

  fn check(&self) -> Result<(), AnalyzerError> {
    for (name, ratio) in [
      ("excessive_mock_ratio", self.excessive_mock_ratio),
      ("insufficient_mock_ratio", self.insufficient_mock_ratio),
    ] {
      if !(0.0..=1.0).contains(&ratio) {
        return Err(AnalyzerError::config(format!("{} must be within 0..=1", name)));
      }
    }
    if self.insufficient_mock_ratio > self.excessive_mock_ratio {
      return Err(AnalyzerError::config(
        "insufficient_mock_ratio must not exceed excessive_mock_ratio",
      ));
    }
    Ok(())
  }
}
