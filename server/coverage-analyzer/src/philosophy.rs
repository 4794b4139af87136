//! Test Philosophy Evaluator: runs both rubrics side by side.
//!
//! The two rubrics share only the helpers in `test_names`; neither reads the
//! other's scores. Only the summary and recommendation list look at both.

use crate::config::Config;
use crate::khorikov;
use crate::templates::{self, RecommendationText};
use crate::twada;
use crate::types::{
  ActionableRecommendation, Degree, FunctionDescription, KhorikovTestEvaluation, PhilosophyEvaluation,
  PhilosophyReport, Priority, QualityLevel, RecommendationCategory, TwadaTestEvaluation,
};

pub fn evaluate(input: &FunctionDescription, config: &Config) -> PhilosophyEvaluation {
  let khorikov = khorikov::evaluate(input, config);
  let twada = twada::evaluate(input);
  tracing::debug!(
    function = %input.function_name,
    khorikov = %khorikov.overall_score,
    twada = %twada.overall_score,
    "evaluated test philosophy"
  );
  PhilosophyEvaluation { khorikov, twada }
}

pub fn evaluate_comprehensively(input: &FunctionDescription, config: &Config) -> PhilosophyReport {
  let PhilosophyEvaluation { khorikov, twada } = evaluate(input, config);
  let summary = summary(&khorikov, &twada);
  let recommendations = recommendations(input, &khorikov, &twada);
  PhilosophyReport {
    khorikov,
    twada,
    summary,
    recommendations,
  }
}

/// Lists all nine sub-scores under one heading per rubric.
pub fn summary(khorikov: &KhorikovTestEvaluation, twada: &TwadaTestEvaluation) -> String {
  let lines = [
    "## Comprehensive Test Evaluation Summary".to_string(),
    String::new(),
    "### Vladimir Khorikov: four pillars".to_string(),
    format!("- Protection against regressions: {}", khorikov.protection_against_regressions),
    format!("- Resistance to refactoring: {}", khorikov.resistance_to_refactoring),
    format!("- Fast feedback: {}", khorikov.fast_feedback),
    format!("- Maintainability: {}", khorikov.maintainability),
    String::new(),
    "### T-wada: tests as specifications".to_string(),
    format!("- Specification clarity: {}", twada.specification_clarity),
    format!("- Behavior focus: {}", twada.behavior_focus),
    format!("- Test structure clarity: {}", twada.test_structure_clarity),
    format!("- Test name expressiveness: {}", twada.test_name_expressiveness),
    format!("- Edge-case coverage: {}", twada.edge_case_coverage),
    String::new(),
    format!(
      "Across both philosophies this test strategy rates {} quality (Khorikov) and {} specification quality (t-wada).",
      khorikov.overall_score, twada.overall_score
    ),
  ];
  lines.join("\n")
}

/// Ordered list; never empty.
pub fn recommendations(
  input: &FunctionDescription,
  khorikov: &KhorikovTestEvaluation,
  twada: &TwadaTestEvaluation,
) -> Vec<ActionableRecommendation> {
  let mut out = Vec::new();
  if khorikov.resistance_to_refactoring == QualityLevel::Low {
    out.push(test_strategy(&templates::REDUCE_COUPLING, Priority::Immediate, Degree::Medium));
  }
  if twada.behavior_focus == QualityLevel::Low {
    out.push(test_strategy(&templates::REWRITE_AS_BEHAVIOR, Priority::ShortTerm, Degree::High));
  }
  if input.test_cases.is_empty() {
    out.push(test_strategy(&templates::ESTABLISH_BASELINE, Priority::Immediate, Degree::High));
  }
  if out.is_empty() {
    out.push(test_strategy(
      &templates::CONTINUOUS_IMPROVEMENT,
      Priority::ShortTerm,
      Degree::Medium,
    ));
  }
  out
}

fn test_strategy(text: &RecommendationText, priority: Priority, effort: Degree) -> ActionableRecommendation {
  recommendation(RecommendationCategory::TestStrategy, text, priority, effort)
}

pub(crate) fn recommendation(
  category: RecommendationCategory,
  text: &RecommendationText,
  priority: Priority,
  effort: Degree,
) -> ActionableRecommendation {
  ActionableRecommendation {
    category,
    priority,
    description: text.description.to_string(),
    rationale: text.rationale.to_string(),
    estimated_effort: effort,
  }
}
