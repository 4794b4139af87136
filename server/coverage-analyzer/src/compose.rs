//! Comprehensive Composer and the `Analyzer` facade.
//!
//! The analyzer holds only its configuration; every call is a pure function
//! of the description it is handed, so one instance can be shared freely
//! across threads.

use rayon::prelude::*;

use crate::config::Config;
use crate::error::AnalyzerError;
use crate::fingerprint;
use crate::intent;
use crate::narrative;
use crate::philosophy::{self, recommendation};
use crate::rules::RULE_SET_VERSION;
use crate::templates;
use crate::types::*;
use crate::validate::validate;

/// Entry point for all analyses. Validates first, then scores.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
  config: Config,
}

impl Analyzer {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn classify_complexity(
    &self,
    input: &FunctionDescription,
  ) -> Result<ComplexityIntentResult, AnalyzerError> {
    validate(input)?;
    Ok(intent::classify(input, &self.config))
  }

  pub fn evaluate_test_philosophy(
    &self,
    input: &FunctionDescription,
  ) -> Result<PhilosophyEvaluation, AnalyzerError> {
    validate(input)?;
    Ok(philosophy::evaluate(input, &self.config))
  }

  /// Both rubrics plus the summary and ordered recommendations.
  pub fn evaluate_comprehensively(
    &self,
    input: &FunctionDescription,
  ) -> Result<PhilosophyReport, AnalyzerError> {
    validate(input)?;
    Ok(philosophy::evaluate_comprehensively(input, &self.config))
  }

  pub fn synthesize_risk(&self, input: &FunctionDescription) -> Result<NarrativeAnalysis, AnalyzerError> {
    validate(input)?;
    Ok(narrative::synthesize(input))
  }

  /// Run every component and merge their outputs into one record.
  pub fn compose(&self, input: &FunctionDescription) -> Result<ComprehensiveResult, AnalyzerError> {
    validate(input)?;

    let intent = intent::classify(input, &self.config);
    let PhilosophyReport {
      khorikov,
      twada,
      summary,
      mut recommendations,
    } = philosophy::evaluate_comprehensively(input, &self.config);
    let mut analysis = narrative::synthesize(input);

    // The full classifier replaces the narrative's two-group answer.
    analysis.complexity_category = intent.complexity_category;
    analysis.complexity_reason = intent.complexity_reason.clone();
    analysis.business_background = intent.business_background.clone();
    analysis.technical_constraints = intent.technical_constraints.clone();
    analysis.historical_context = intent.historical_context.clone();
    analysis.test_quality = khorikov.overall_score;
    analysis.specification_quality = twada.overall_score;

    recommendations.extend(extra_recommendations(&intent));

    tracing::debug!(
      function = %input.function_name,
      category = %intent.complexity_category,
      risk = %analysis.risk_level,
      recommendations = recommendations.len(),
      "composed comprehensive result"
    );

    Ok(ComprehensiveResult {
      analysis_id: fingerprint::analysis_id(input),
      function_name: input.function_name.clone(),
      rule_set_version: RULE_SET_VERSION,
      analysis,
      intent,
      khorikov_evaluation: khorikov,
      twada_evaluation: twada,
      comprehensive_summary: summary,
      actionable_recommendations: recommendations,
    })
  }

  /// Compose every description in parallel. Output order equals input order.
  pub fn compose_batch(
    &self,
    inputs: &[FunctionDescription],
  ) -> Vec<Result<ComprehensiveResult, AnalyzerError>> {
    tracing::debug!(batch = inputs.len(), "composing batch");
    inputs.par_iter().map(|input| self.compose(input)).collect()
  }
}

/// Appended after the test-strategy list; never reorders it.
fn extra_recommendations(intent: &ComplexityIntentResult) -> Vec<ActionableRecommendation> {
  let mut out = Vec::new();
  if intent.refactoring_priority == Degree::High {
    out.push(recommendation(
      RecommendationCategory::Refactoring,
      &templates::SCHEDULE_REFACTORING,
      Priority::LongTerm,
      Degree::High,
    ));
  }
  if intent.intentional_complexity && !intent.business_background.is_empty() {
    out.push(recommendation(
      RecommendationCategory::Documentation,
      &templates::DOCUMENT_BUSINESS_RULES,
      Priority::ShortTerm,
      Degree::Low,
    ));
  }
  out
}
