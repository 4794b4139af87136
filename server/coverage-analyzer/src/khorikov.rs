//! Four-pillar rubric (Khorikov): regression protection, refactoring
//! resistance, fast feedback, maintainability.

use crate::config::Config;
use crate::test_names;
use crate::types::{
  CoverageKind, FunctionDescription, KhorikovTestEvaluation, MockUsage, QualityLevel, TestType,
};

pub fn evaluate(input: &FunctionDescription, config: &Config) -> KhorikovTestEvaluation {
  let tests = input.test_cases.as_slice();
  let mock_usage = test_names::mock_usage(tests, input.complexity, config);
  let test_type = test_names::test_type(tests);

  let protection_against_regressions = regression_protection(input);
  let resistance_to_refactoring = refactoring_resistance(input);
  let fast_feedback = feedback_speed(input);
  let maintainability = maintainability(mock_usage, test_names::name_expressiveness(tests), test_type);

  KhorikovTestEvaluation {
    protection_against_regressions,
    resistance_to_refactoring,
    fast_feedback,
    maintainability,
    test_type,
    mock_usage,
    overall_score: aggregate([
      protection_against_regressions,
      resistance_to_refactoring,
      fast_feedback,
      maintainability,
    ]),
  }
}

fn regression_protection(input: &FunctionDescription) -> QualityLevel {
  let (branch, line) = (input.branch_coverage, input.line_coverage);
  if input.test_cases.is_empty() {
    QualityLevel::Critical
  } else if branch >= 90.0 && line >= 90.0 {
    QualityLevel::High
  } else if branch >= 70.0 && line >= 80.0 {
    QualityLevel::Medium
  } else {
    QualityLevel::Low
  }
}

/// Implementation coupling is checked first and wins.
fn refactoring_resistance(input: &FunctionDescription) -> QualityLevel {
  let tests = input.test_cases.as_slice();
  if test_names::any_name(tests, test_names::is_implementation_coupled) {
    QualityLevel::Low
  } else if test_names::any_name(tests, test_names::is_should_behavior) {
    QualityLevel::High
  } else {
    QualityLevel::Medium
  }
}

/// Any e2e test dominates any integration test.
fn feedback_speed(input: &FunctionDescription) -> QualityLevel {
  let tests = input.test_cases.as_slice();
  if test_names::has_kind(tests, CoverageKind::E2e) {
    QualityLevel::Low
  } else if test_names::has_kind(tests, CoverageKind::Integration) {
    QualityLevel::Medium
  } else {
    QualityLevel::High
  }
}

/// Integration suites cap at medium even when well named.
fn maintainability(mock_usage: MockUsage, names: QualityLevel, test_type: TestType) -> QualityLevel {
  if mock_usage == MockUsage::Excessive || names == QualityLevel::Low {
    QualityLevel::Low
  } else if test_type == TestType::Integration {
    QualityLevel::Medium
  } else if mock_usage == MockUsage::Appropriate && names == QualityLevel::High {
    QualityLevel::High
  } else {
    QualityLevel::Medium
  }
}

/// >= 2 failing → low; >= 2 high with no failing → high; >= 3 high → high; else medium.
pub fn aggregate(scores: [QualityLevel; 4]) -> QualityLevel {
  let failing = scores.iter().filter(|s| s.is_failing()).count();
  let high = scores.iter().filter(|s| **s == QualityLevel::High).count();
  if failing >= 2 {
    QualityLevel::Low
  } else if high >= 2 && failing == 0 {
    QualityLevel::High
  } else if high >= 3 {
    QualityLevel::High
  } else {
    QualityLevel::Medium
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_names::fixtures::{case, describe, unit_cases};
  use QualityLevel::*;

  fn evaluate_default(input: &FunctionDescription) -> KhorikovTestEvaluation {
    evaluate(input, &Config::default())
  }

  #[test]
  fn behavior_focused_unit_suite_scores_high_everywhere() {
    let tests = unit_cases(&[
      "should calculate 10% tax for income under 50k",
      "should calculate progressive tax for middle income",
      "should calculate highest tax rate for high income",
      "should handle zero taxable income when deductions exceed income",
    ]);
    let r = evaluate_default(&describe("calculateTax", 6, "", tests, 100.0, 100.0));
    assert_eq!(r.protection_against_regressions, High);
    assert_eq!(r.resistance_to_refactoring, High);
    assert_eq!(r.fast_feedback, High);
    assert_eq!(r.maintainability, High);
    assert_eq!(r.test_type, TestType::Unit);
    assert_eq!(r.mock_usage, MockUsage::Appropriate);
    assert_eq!(r.overall_score, High);
  }

  #[test]
  fn should_call_suite_is_implementation_coupled() {
    let tests = unit_cases(&[
      "should call OrderValidator.validate with correct params",
      "should call PriceCalculator.calculate with order items",
      "should call InventoryService.reserve",
      "should call PaymentService.charge with calculated price",
    ]);
    let r = evaluate_default(&describe("processOrder", 10, "", tests, 85.0, 90.0));
    assert_eq!(r.protection_against_regressions, Medium);
    assert_eq!(r.resistance_to_refactoring, Low);
    assert_eq!(r.fast_feedback, High);
    assert_eq!(r.maintainability, Low);
    assert_eq!(r.mock_usage, MockUsage::Excessive);
    assert_eq!(r.overall_score, Low);
  }

  #[test]
  fn integration_suite_caps_maintainability_at_medium() {
    let tests = vec![
      case("should authenticate valid user and return token", CoverageKind::Integration),
      case("should throw error for non-existent user", CoverageKind::Integration),
      case("should throw error for invalid password", CoverageKind::Integration),
    ];
    let r = evaluate_default(&describe("authenticateUser", 12, "", tests, 100.0, 95.0));
    assert_eq!(r.protection_against_regressions, High);
    assert_eq!(r.resistance_to_refactoring, High);
    assert_eq!(r.fast_feedback, Medium);
    assert_eq!(r.maintainability, Medium);
    assert_eq!(r.test_type, TestType::Integration);
    assert_eq!(r.overall_score, High);
  }

  #[test]
  fn e2e_presence_dominates_feedback_speed() {
    let tests = vec![
      case("should place an order end to end", CoverageKind::E2e),
      case("should persist the order row", CoverageKind::Integration),
    ];
    let r = evaluate_default(&describe("placeOrder", 5, "", tests, 80.0, 80.0));
    assert_eq!(r.fast_feedback, Low);
    assert_eq!(r.test_type, TestType::Mixed);
  }

  #[test]
  fn empty_suite_is_critical_without_panicking() {
    let r = evaluate_default(&describe("untested", 30, "", vec![], 0.0, 0.0));
    assert_eq!(r.protection_against_regressions, Critical);
    assert_eq!(r.resistance_to_refactoring, Medium);
    assert_eq!(r.mock_usage, MockUsage::Insufficient);
    assert_eq!(r.maintainability, Low);
    assert_eq!(r.overall_score, Low);
  }

  #[test]
  fn two_low_two_high_aggregates_low() {
    assert_eq!(aggregate([Low, High, Low, High]), Low);
  }

  #[test]
  fn aggregate_voting_rules() {
    assert_eq!(aggregate([High, High, Medium, Medium]), High);
    assert_eq!(aggregate([High, High, High, Low]), High);
    assert_eq!(aggregate([High, High, Medium, Critical]), Medium);
    assert_eq!(aggregate([Medium, Medium, Medium, Medium]), Medium);
    assert_eq!(aggregate([Critical, Medium, Low, High]), Low);
  }
}
