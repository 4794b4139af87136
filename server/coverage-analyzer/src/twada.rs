//! Five-dimension rubric (t-wada): tests as specifications.

use crate::rules;
use crate::test_names::{self, band, name_len};
use crate::types::{FunctionDescription, QualityLevel, TwadaTestEvaluation};

pub fn evaluate(input: &FunctionDescription) -> TwadaTestEvaluation {
  let tests = input.test_cases.as_slice();

  let specification_clarity = specification_clarity(input);
  let behavior_focus = band(test_names::behavior_ratio(tests));
  let test_structure_clarity = band(test_names::ratio(tests, is_structured));
  let test_name_expressiveness = test_names::name_expressiveness(tests);
  let edge_case_coverage = edge_case_coverage(input);

  TwadaTestEvaluation {
    specification_clarity,
    behavior_focus,
    test_structure_clarity,
    test_name_expressiveness,
    edge_case_coverage,
    overall_score: aggregate([
      specification_clarity,
      behavior_focus,
      test_structure_clarity,
      test_name_expressiveness,
      edge_case_coverage,
    ]),
  }
}

fn specification_clarity(input: &FunctionDescription) -> QualityLevel {
  let tests = input.test_cases.as_slice();
  if tests.is_empty() {
    QualityLevel::Low
  } else if test_names::any_name(tests, test_names::has_full_given_when_then) {
    QualityLevel::High
  } else if test_names::any_name(tests, |n| n.contains(rules::SHOULD) && name_len(n) > 20) {
    QualityLevel::Medium
  } else {
    QualityLevel::Low
  }
}

fn is_structured(name: &str) -> bool {
  name.contains("Given") || (name.contains(rules::SHOULD) && name_len(name) > 30)
}

/// Edge-case share, gated by branch coverage.
fn edge_case_coverage(input: &FunctionDescription) -> QualityLevel {
  let edge_ratio = test_names::ratio(&input.test_cases, test_names::is_edge_case);
  let branch = input.branch_coverage;
  if branch >= 95.0 && edge_ratio >= 0.3 {
    QualityLevel::High
  } else if branch >= 75.0 && edge_ratio >= 0.1 {
    QualityLevel::Medium
  } else if branch >= 50.0 {
    QualityLevel::Medium
  } else {
    QualityLevel::Low
  }
}

/// >= 3 failing → low; >= 4 high → high; else medium.
pub fn aggregate(scores: [QualityLevel; 5]) -> QualityLevel {
  let failing = scores.iter().filter(|s| s.is_failing()).count();
  let high = scores.iter().filter(|s| **s == QualityLevel::High).count();
  if failing >= 3 {
    QualityLevel::Low
  } else if high >= 4 {
    QualityLevel::High
  } else {
    QualityLevel::Medium
  }
}
