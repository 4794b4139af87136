//! Test-name predicates and ratio helpers shared by both rubrics.
//!
//! All name checks are case-sensitive substring tests. Ratios divide by
//! `max(count, 1)` so an empty suite resolves to 0.0 rather than NaN.

use std::collections::BTreeSet;

use crate::config::Config;
use crate::rules::{self, contains_any};
use crate::types::{CoverageKind, MockUsage, QualityLevel, TestCase, TestType};

/// Name suggests verification of internal calls (`call`, `mock`, `stub`).
pub fn is_mock_related(name: &str) -> bool {
  contains_any(name, rules::MOCK_TOKENS)
}

/// Name couples the test to implementation details (`should call`, `mock`, `stub`).
pub fn is_implementation_coupled(name: &str) -> bool {
  contains_any(name, rules::COUPLING_TOKENS)
}

/// "should ..." without "call".
pub fn is_should_behavior(name: &str) -> bool {
  name.contains(rules::SHOULD) && !name.contains(rules::CALL)
}

pub fn has_any_given_when_then(name: &str) -> bool {
  contains_any(name, &rules::GIVEN_WHEN_THEN)
}

pub fn has_full_given_when_then(name: &str) -> bool {
  rules::GIVEN_WHEN_THEN.iter().all(|t| name.contains(t))
}

/// Behavior-style: a non-call "should" name, or any Given/When/Then keyword.
pub fn is_behavior_style(name: &str) -> bool {
  is_should_behavior(name) || has_any_given_when_then(name)
}

pub fn is_placeholder_name(name: &str) -> bool {
  name == rules::PLACEHOLDER_NAME || name.ends_with(rules::PLACEHOLDER_SUFFIX)
}

/// Name length in characters, not bytes.
pub fn name_len(name: &str) -> usize {
  name.chars().count()
}

pub fn is_edge_case(name: &str) -> bool {
  contains_any(name, rules::EDGE_CASE_TOKENS)
}

/// Fraction of test cases whose name satisfies `pred`.
pub fn ratio(tests: &[TestCase], pred: impl Fn(&str) -> bool) -> f64 {
  let hits = tests.iter().filter(|t| pred(&t.test_case)).count();
  hits as f64 / tests.len().max(1) as f64
}

pub fn any_name(tests: &[TestCase], pred: impl Fn(&str) -> bool) -> bool {
  tests.iter().any(|t| pred(&t.test_case))
}

pub fn mock_ratio(tests: &[TestCase]) -> f64 {
  ratio(tests, is_mock_related)
}

pub fn behavior_ratio(tests: &[TestCase]) -> f64 {
  ratio(tests, is_behavior_style)
}

/// `>= 0.8` high, `>= 0.5` medium, else low.
pub fn band(ratio: f64) -> QualityLevel {
  if ratio >= 0.8 {
    QualityLevel::High
  } else if ratio >= 0.5 {
    QualityLevel::Medium
  } else {
    QualityLevel::Low
  }
}

pub fn mock_usage(tests: &[TestCase], complexity: u32, config: &Config) -> MockUsage {
  let ratio = mock_ratio(tests);
  if ratio > config.excessive_mock_ratio {
    MockUsage::Excessive
  } else if ratio < config.insufficient_mock_ratio && complexity > config.insufficient_mock_complexity {
    MockUsage::Insufficient
  } else {
    MockUsage::Appropriate
  }
}

/// A single distinct kind names the type; more than one is `mixed`; none is `unit`.
pub fn test_type(tests: &[TestCase]) -> TestType {
  let kinds: BTreeSet<CoverageKind> = tests.iter().map(|t| t.coverage_type).collect();
  if kinds.len() > 1 {
    return TestType::Mixed;
  }
  match kinds.into_iter().next() {
    Some(CoverageKind::E2e) => TestType::E2e,
    Some(CoverageKind::Integration) => TestType::Integration,
    Some(CoverageKind::Unit) | None => TestType::Unit,
  }
}

pub fn has_kind(tests: &[TestCase], kind: CoverageKind) -> bool {
  tests.iter().any(|t| t.coverage_type == kind)
}

/// `low` on any placeholder or too-short name; otherwise banded by the share of
/// "should"/"Given" names.
pub fn name_expressiveness(tests: &[TestCase]) -> QualityLevel {
  let poor = any_name(tests, |n| {
    is_placeholder_name(n) || name_len(n) < rules::MIN_EXPRESSIVE_NAME_LEN
  });
  if poor {
    return QualityLevel::Low;
  }
  band(ratio(tests, |n| n.contains(rules::SHOULD) || n.contains("Given")))
}
