//! Core types for the coverage analyzer (JSON contracts + closed enums).

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the caller sends)
// ---------------------------------------------------------------------------

/// One function to evaluate. Unknown fields are silently ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDescription {
  pub function_name: String,
  pub complexity: u32,
  #[serde(default)]
  pub source_code: String,
  #[serde(default)]
  pub test_cases: Vec<TestCase>,
  pub branch_coverage: f64,
  pub line_coverage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
  pub test_file: String,
  /// Test name or description; the primary signal for every name heuristic.
  pub test_case: String,
  pub coverage_type: CoverageKind,
  #[serde(default)]
  pub covered_lines: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageKind {
  Unit,
  Integration,
  E2e,
}

// ---------------------------------------------------------------------------
// Closed enums
// ---------------------------------------------------------------------------

/// Root cause of a function's structural complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplexityCategory {
  BusinessLogic,
  TechnicalConstraints,
  HistoricalLayers,
  Algorithmic,
  Integration,
  Unknown,
}

impl ComplexityCategory {
  /// Complexity earned by genuine domain or algorithmic demand rather than debt.
  pub const fn is_intentional(self) -> bool {
    matches!(self, Self::BusinessLogic | Self::Algorithmic)
  }
}

/// Ordinal test-quality rating: `critical < low < medium < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
  Critical,
  Low,
  Medium,
  High,
}

impl QualityLevel {
  /// Counts as a failing vote in rubric aggregation.
  pub const fn is_failing(self) -> bool {
    matches!(self, Self::Critical | Self::Low)
  }
}

/// Ordinal rating for business value and security implications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Low,
  Medium,
  High,
  Critical,
}

/// Three-step rating for migration, debt, integration, priority and effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Degree {
  Low,
  Medium,
  High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
  Low,
  Medium,
  High,
  Critical,
}

/// How well a suite would catch a behavior-changing edit. Not ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResilienceLevel {
  Brittle,
  Fragile,
  Resilient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestPhilosophy {
  Missing,
  ImplementationCoupled,
  BehaviorDriven,
  CoverageDriven,
  SpecificationBased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
  Unit,
  Integration,
  E2e,
  Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MockUsage {
  Appropriate,
  Excessive,
  Insufficient,
}

/// `ALL`, `as_str` and `Display` from one variant list per enum. The names
/// must equal the serde wire names; `wire_names_match_serde` checks that.
macro_rules! wire_names {
  ($($ty:ident { $($variant:ident => $name:literal),+ $(,)? })+) => {
    $(
      impl $ty {
        pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

        pub const fn as_str(self) -> &'static str {
          match self {
            $(Self::$variant => $name,)+
          }
        }
      }

      impl fmt::Display for $ty {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
          f.write_str(self.as_str())
        }
      }
    )+
  };
}

wire_names! {
  ComplexityCategory {
    BusinessLogic => "business-logic",
    TechnicalConstraints => "technical-constraints",
    HistoricalLayers => "historical-layers",
    Algorithmic => "algorithmic",
    Integration => "integration",
    Unknown => "unknown",
  }
  QualityLevel { Critical => "critical", Low => "low", Medium => "medium", High => "high" }
  Severity { Low => "low", Medium => "medium", High => "high", Critical => "critical" }
  Degree { Low => "low", Medium => "medium", High => "high" }
  RiskLevel { Low => "low", Medium => "medium", High => "high", Critical => "critical" }
  ResilienceLevel { Brittle => "brittle", Fragile => "fragile", Resilient => "resilient" }
  TestPhilosophy {
    Missing => "missing",
    ImplementationCoupled => "implementation-coupled",
    BehaviorDriven => "behavior-driven",
    CoverageDriven => "coverage-driven",
    SpecificationBased => "specification-based",
  }
  TestType { Unit => "unit", Integration => "integration", E2e => "e2e", Mixed => "mixed" }
  MockUsage { Appropriate => "appropriate", Excessive => "excessive", Insufficient => "insufficient" }
}

// ---------------------------------------------------------------------------
// Complexity Classifier output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexityIntentResult {
  pub complexity_category: ComplexityCategory,
  /// Never contains `complexity_category` itself.
  pub secondary_categories: Vec<ComplexityCategory>,
  pub business_background: String,
  pub technical_constraints: String,
  pub complexity_reason: String,
  pub historical_context: String,
  pub mixed_complexity_reason: String,
  pub intentional_complexity: bool,
  pub business_value: Severity,
  pub security_implications: Severity,
  pub migration_complexity: Degree,
  pub technical_debt: Degree,
  pub integration_complexity: Degree,
  pub external_dependencies: Vec<String>,
  pub algorithmic_purpose: String,
  pub performance_considerations: String,
  /// Best-effort hint, not a derived bound.
  pub algorithmic_complexity: String,
  pub refactoring_priority: Degree,
}

// ---------------------------------------------------------------------------
// Test Philosophy Evaluator output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KhorikovTestEvaluation {
  pub protection_against_regressions: QualityLevel,
  pub resistance_to_refactoring: QualityLevel,
  pub fast_feedback: QualityLevel,
  pub maintainability: QualityLevel,
  pub test_type: TestType,
  pub mock_usage: MockUsage,
  pub overall_score: QualityLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwadaTestEvaluation {
  pub specification_clarity: QualityLevel,
  pub behavior_focus: QualityLevel,
  pub test_structure_clarity: QualityLevel,
  pub test_name_expressiveness: QualityLevel,
  pub edge_case_coverage: QualityLevel,
  pub overall_score: QualityLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhilosophyEvaluation {
  pub khorikov: KhorikovTestEvaluation,
  pub twada: TwadaTestEvaluation,
}

/// Both rubrics plus the summary text and recommendation list built from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhilosophyReport {
  pub khorikov: KhorikovTestEvaluation,
  pub twada: TwadaTestEvaluation,
  pub summary: String,
  pub recommendations: Vec<ActionableRecommendation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationCategory {
  TestStrategy,
  Refactoring,
  Documentation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
  Immediate,
  ShortTerm,
  LongTerm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionableRecommendation {
  pub category: RecommendationCategory,
  pub priority: Priority,
  pub description: String,
  pub rationale: String,
  pub estimated_effort: Degree,
}

// ---------------------------------------------------------------------------
// Risk Synthesizer output
// ---------------------------------------------------------------------------

/// Complexity-side narrative from the simplified two-group classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityNarrative {
  pub complexity_category: ComplexityCategory,
  pub complexity_reason: String,
  pub business_background: String,
  pub technical_constraints: String,
  pub risk_level: RiskLevel,
  pub risk_assessment: String,
  pub change_resilience: ResilienceLevel,
  pub behavior_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestStrategyNarrative {
  pub test_philosophy: TestPhilosophy,
  pub test_strategy: String,
  pub test_smells: Vec<String>,
  pub test_quality: QualityLevel,
  pub strategic_evaluation: String,
  pub change_resilience: ResilienceLevel,
  pub recommendations: Vec<String>,
  pub specification_quality: QualityLevel,
}

/// Pure function of risk level and resilience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategicNarrative {
  pub risk_level: RiskLevel,
  pub risk_assessment: String,
  pub strategic_evaluation: String,
  pub change_resilience: ResilienceLevel,
  pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeAnalysis {
  pub complexity_category: ComplexityCategory,
  pub complexity_reason: String,
  pub business_background: String,
  pub technical_constraints: String,
  pub historical_context: String,
  pub test_philosophy: TestPhilosophy,
  pub test_strategy: String,
  pub test_smells: Vec<String>,
  pub test_quality: QualityLevel,
  pub risk_level: RiskLevel,
  pub risk_assessment: String,
  pub strategic_evaluation: String,
  pub change_resilience: ResilienceLevel,
  pub recommendations: Vec<String>,
  pub behavior_description: String,
  pub specification_quality: QualityLevel,
}

// ---------------------------------------------------------------------------
// Composed output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComprehensiveResult {
  pub analysis_id: String,
  pub function_name: String,
  pub rule_set_version: &'static str,
  pub analysis: NarrativeAnalysis,
  pub intent: ComplexityIntentResult,
  pub khorikov_evaluation: KhorikovTestEvaluation,
  pub twada_evaluation: TwadaTestEvaluation,
  pub comprehensive_summary: String,
  pub actionable_recommendations: Vec<ActionableRecommendation>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
