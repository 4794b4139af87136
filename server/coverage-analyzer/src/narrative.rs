//! Risk Synthesizer: risk and resilience verdicts plus narrative text.
//!
//! Uses its own simplified two-group classifier and a simpler philosophy
//! label than the rubrics; both are tuned for narrative use.

use crate::rules::{self, NARRATIVE_RULES};
use crate::templates;
use crate::test_names;
use crate::types::{
  ComplexityCategory, ComplexityNarrative, FunctionDescription, NarrativeAnalysis, QualityLevel,
  ResilienceLevel, RiskLevel, StrategicNarrative, TestPhilosophy, TestStrategyNarrative,
};

/// Complexity-side narrative: category, reason, risk and resilience.
pub fn analyze_complexity(input: &FunctionDescription) -> ComplexityNarrative {
  let source = input.source_code.as_str();
  let category = NARRATIVE_RULES
    .first_match(source)
    .unwrap_or(ComplexityCategory::Unknown);
  let risk_level = risk_level(input);

  ComplexityNarrative {
    complexity_category: category,
    complexity_reason: complexity_reason(source, category).to_string(),
    business_background: match category {
      ComplexityCategory::BusinessLogic => templates::NARRATIVE_BACKGROUND_BUSINESS.to_string(),
      _ => String::new(),
    },
    technical_constraints: match category {
      ComplexityCategory::TechnicalConstraints => {
        templates::NARRATIVE_CONSTRAINTS_TECHNICAL.to_string()
      }
      _ => String::new(),
    },
    risk_level,
    risk_assessment: templates::risk_assessment(risk_level).to_string(),
    change_resilience: resilience(input),
    behavior_description: templates::behavior_description(&input.function_name),
  }
}

/// Test-side narrative: philosophy label, smells and recommendations.
pub fn evaluate_test_strategy(input: &FunctionDescription) -> TestStrategyNarrative {
  let philosophy = philosophy(input);
  TestStrategyNarrative {
    test_philosophy: philosophy,
    test_strategy: templates::test_strategy(philosophy).to_string(),
    test_smells: test_smells(input),
    test_quality: test_quality(input),
    strategic_evaluation: templates::strategic_evaluation_for_philosophy(philosophy).to_string(),
    change_resilience: resilience(input),
    recommendations: owned(templates::philosophy_recommendations(philosophy)),
    specification_quality: if input.test_cases.is_empty() {
      QualityLevel::Critical
    } else {
      QualityLevel::Medium
    },
  }
}

/// Strategic narrative; depends only on the risk level and resilience.
pub fn strategic_assessment(input: &FunctionDescription) -> StrategicNarrative {
  let risk_level = risk_level(input);
  StrategicNarrative {
    risk_level,
    risk_assessment: templates::risk_assessment(risk_level).to_string(),
    strategic_evaluation: templates::strategic_evaluation_for_risk(risk_level).to_string(),
    change_resilience: resilience(input),
    recommendations: owned(templates::strategic_recommendations(risk_level)),
  }
}

/// All three calls merged into one record.
///
/// The strategic (risk-keyed) evaluation wins over the philosophy-keyed one;
/// recommendations from both are kept, philosophy first, without duplicates.
pub fn synthesize(input: &FunctionDescription) -> NarrativeAnalysis {
  let complexity = analyze_complexity(input);
  let strategy = evaluate_test_strategy(input);
  let strategic = strategic_assessment(input);

  let mut recommendations = strategy.recommendations;
  for rec in strategic.recommendations {
    if !recommendations.contains(&rec) {
      recommendations.push(rec);
    }
  }

  tracing::debug!(
    function = %input.function_name,
    risk = %complexity.risk_level,
    resilience = %complexity.change_resilience,
    philosophy = %strategy.test_philosophy,
    "synthesized risk narrative"
  );

  NarrativeAnalysis {
    complexity_category: complexity.complexity_category,
    complexity_reason: complexity.complexity_reason,
    business_background: complexity.business_background,
    technical_constraints: complexity.technical_constraints,
    historical_context: String::new(),
    test_philosophy: strategy.test_philosophy,
    test_strategy: strategy.test_strategy,
    test_smells: strategy.test_smells,
    test_quality: strategy.test_quality,
    risk_level: complexity.risk_level,
    risk_assessment: complexity.risk_assessment,
    strategic_evaluation: strategic.strategic_evaluation,
    change_resilience: complexity.change_resilience,
    recommendations,
    behavior_description: complexity.behavior_description,
    specification_quality: strategy.specification_quality,
  }
}

fn complexity_reason(source: &str, category: ComplexityCategory) -> &'static str {
  match category {
    ComplexityCategory::BusinessLogic if source.contains("b2b") || source.contains("B2B") => {
      templates::NARRATIVE_REASON_B2B
    }
    ComplexityCategory::BusinessLogic => templates::NARRATIVE_REASON_BUSINESS,
    ComplexityCategory::TechnicalConstraints if source.contains("api") || source.contains("API") => {
      templates::NARRATIVE_REASON_API
    }
    ComplexityCategory::TechnicalConstraints => templates::NARRATIVE_REASON_TECHNICAL,
    _ => templates::NARRATIVE_REASON_UNKNOWN,
  }
}

/// First match wins; the order is part of the contract.
pub fn risk_level(input: &FunctionDescription) -> RiskLevel {
  let complexity = input.complexity;
  let branch = input.branch_coverage;
  let has_tests = !input.test_cases.is_empty();

  if complexity > 20 && !has_tests {
    RiskLevel::Critical
  } else if complexity > 15 && branch < 50.0 {
    RiskLevel::High
  } else if complexity > 10 && branch < 80.0 {
    RiskLevel::Medium
  } else if branch >= 90.0 && has_tests {
    RiskLevel::Low
  } else if complexity > 10 || branch < 80.0 {
    RiskLevel::Medium
  } else {
    RiskLevel::Low
  }
}

pub fn resilience(input: &FunctionDescription) -> ResilienceLevel {
  let (branch, line) = (input.branch_coverage, input.line_coverage);
  if input.test_cases.is_empty() {
    if input.complexity > 20 {
      ResilienceLevel::Fragile
    } else {
      ResilienceLevel::Brittle
    }
  } else if branch > 90.0 && line > 90.0 {
    ResilienceLevel::Resilient
  } else if branch > 50.0 || line > 70.0 {
    ResilienceLevel::Fragile
  } else {
    ResilienceLevel::Brittle
  }
}

/// Placeholder names count as coupling here, unlike in the rubrics.
pub fn philosophy(input: &FunctionDescription) -> TestPhilosophy {
  let tests = input.test_cases.as_slice();
  if tests.is_empty() {
    TestPhilosophy::Missing
  } else if test_names::any_name(tests, |n| {
    test_names::is_implementation_coupled(n) || test_names::is_placeholder_name(n)
  }) {
    TestPhilosophy::ImplementationCoupled
  } else if test_names::any_name(tests, test_names::is_behavior_style) {
    TestPhilosophy::BehaviorDriven
  } else {
    TestPhilosophy::CoverageDriven
  }
}

fn test_quality(input: &FunctionDescription) -> QualityLevel {
  let tests = input.test_cases.as_slice();
  if tests.is_empty() {
    QualityLevel::Critical
  } else if test_names::any_name(tests, test_names::is_implementation_coupled) {
    QualityLevel::Low
  } else if input.branch_coverage < 50.0 {
    QualityLevel::Low
  } else if input.branch_coverage < 80.0 {
    QualityLevel::Medium
  } else {
    QualityLevel::High
  }
}

pub fn test_smells(input: &FunctionDescription) -> Vec<String> {
  let tests = input.test_cases.as_slice();
  let mut smells = Vec::new();
  if test_names::any_name(tests, |n| rules::contains_any(n, rules::MOCKING_SMELL_TOKENS)) {
    smells.push(rules::SMELL_EXCESSIVE_MOCKING.to_string());
  }
  if test_names::any_name(tests, |n| {
    test_names::is_placeholder_name(n) || n.contains("should call")
  }) {
    smells.push(rules::SMELL_STRUCTURE_DEPENDENCY.to_string());
  }
  smells
}

fn owned(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}
