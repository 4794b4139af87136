//! Coverage Analyzer: deterministic, rule-based function risk analysis.
//!
//! Takes one function description (name, complexity, source text, test cases,
//! coverage figures) and explains why the function is complex, how good its
//! tests are under two testing philosophies, and how risky it is to change.
//!
//! No AI, no DB, no network; pure computation over one immutable input.

pub mod compose;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod intent;
pub mod khorikov;
pub mod narrative;
pub mod philosophy;
pub mod rules;
pub mod templates;
pub mod test_names;
pub mod twada;
pub mod types;
pub mod validate;

pub use compose::Analyzer;
pub use config::Config;
pub use error::AnalyzerError;
pub use types::{
  ComplexityIntentResult, ComprehensiveResult, FunctionDescription, NarrativeAnalysis,
  PhilosophyEvaluation, PhilosophyReport, TestCase,
};

/// Classify with the default configuration.
pub fn classify_complexity(input: &FunctionDescription) -> Result<ComplexityIntentResult, AnalyzerError> {
  Analyzer::with_defaults().classify_complexity(input)
}

/// Run both rubrics with the default configuration.
pub fn evaluate_test_philosophy(
  input: &FunctionDescription,
) -> Result<PhilosophyEvaluation, AnalyzerError> {
  Analyzer::with_defaults().evaluate_test_philosophy(input)
}

pub fn synthesize_risk(input: &FunctionDescription) -> Result<NarrativeAnalysis, AnalyzerError> {
  Analyzer::with_defaults().synthesize_risk(input)
}

/// Full composed result with the default configuration.
pub fn compose(input: &FunctionDescription) -> Result<ComprehensiveResult, AnalyzerError> {
  Analyzer::with_defaults().compose(input)
}
