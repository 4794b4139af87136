//! Structural validation of inbound function descriptions.

use crate::error::AnalyzerError;
use crate::types::FunctionDescription;

/// Decode one JSON line. Malformed JSON and negative integers surface as
/// `AnalyzerError::Json`; range checks are left to `validate`.
pub fn parse(line: &str) -> Result<FunctionDescription, AnalyzerError> {
  Ok(serde_json::from_str(line)?)
}

/// Reject structurally invalid input; everything past this point is total.
pub fn validate(raw: &FunctionDescription) -> Result<(), AnalyzerError> {
  if raw.function_name.trim().is_empty() {
    return Err(AnalyzerError::invalid_input("function_name", "must not be empty"));
  }
  check_percentage("branch_coverage", raw.branch_coverage)?;
  check_percentage("line_coverage", raw.line_coverage)?;
  Ok(())
}

fn check_percentage(field: &str, value: f64) -> Result<(), AnalyzerError> {
  if !value.is_finite() {
    return Err(AnalyzerError::invalid_input(field, "must be a finite number"));
  }
  if !(0.0..=100.0).contains(&value) {
    return Err(AnalyzerError::invalid_input(
      field,
      &format!("expected 0..=100, got {}", value),
    ));
  }
  Ok(())
}
