//! Stable analysis id for a function description.

use crate::rules::RULE_SET_VERSION;
use crate::types::FunctionDescription;

/// Compute a stable id from the parts of a description that identify the
/// function itself.
///
/// Key components: rule set version + function name + complexity + source.
/// Tests and coverage figures are left out so the id survives a re-run
/// after new tests land.
pub fn analysis_id(input: &FunctionDescription) -> String {
  let mut hasher = blake3::Hasher::new();
  hasher.update(RULE_SET_VERSION.as_bytes());
  hasher.update(b"|");
  hasher.update(input.function_name.as_bytes());
  hasher.update(b"|");
  hasher.update(input.complexity.to_string().as_bytes());
  hasher.update(b"|");
  hasher.update(input.source_code.as_bytes());

  let hex = hasher.finalize().to_hex();
  format!("fn-{}", &hex[..16])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_names::fixtures::{describe, unit_cases};

  #[test]
  fn same_function_same_id() {
    let a = describe("calculatePrice", 12, "return base * rate;", vec![], 80.0, 90.0);
    let b = describe("calculatePrice", 12, "return base * rate;", vec![], 80.0, 90.0);
    assert_eq!(analysis_id(&a), analysis_id(&b));
  }

  #[test]
  fn id_ignores_tests_and_coverage() {
    let a = describe("calculatePrice", 12, "return base * rate;", vec![], 0.0, 0.0);
    let tests = unit_cases(&["should apply the rate"]);
    let b = describe("calculatePrice", 12, "return base * rate;", tests, 100.0, 100.0);
    assert_eq!(analysis_id(&a), analysis_id(&b));
  }

  #[test]
  fn different_source_different_id() {
    let a = describe("calculatePrice", 12, "return base * rate;", vec![], 80.0, 90.0);
    let b = describe("calculatePrice", 12, "return base + rate;", vec![], 80.0, 90.0);
    assert_ne!(analysis_id(&a), analysis_id(&b));
  }

  #[test]
  fn different_complexity_different_id() {
    let a = describe("calculatePrice", 12, "", vec![], 80.0, 90.0);
    let b = describe("calculatePrice", 13, "", vec![], 80.0, 90.0);
    assert_ne!(analysis_id(&a), analysis_id(&b));
  }

  #[test]
  fn id_format() {
    let id = analysis_id(&describe("f", 1, "", vec![], 0.0, 0.0));
    assert!(id.starts_with("fn-"));
    assert_eq!(id.len(), 3 + 16);
    assert!(id[3..].chars().all(|c| c.is_ascii_hexdigit()));
  }
}
