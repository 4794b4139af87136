//! Structured error types for the coverage analyzer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
  #[error("invalid input: {field}: {reason}")]
  InvalidInput { field: String, reason: String },

  #[error("config: {0}")]
  Config(String),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl AnalyzerError {
  pub fn invalid_input(field: &str, reason: &str) -> Self {
    Self::InvalidInput {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }
}
