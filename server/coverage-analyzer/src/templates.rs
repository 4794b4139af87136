//! Narrative wording, keyed by enum value.
//!
//! Scoring code picks a key; this module owns the sentence. Changing wording
//! never touches a classification rule.

use crate::types::{ComplexityCategory, RiskLevel, TestPhilosophy};

// ---------------------------------------------------------------------------
// Complexity Classifier
// ---------------------------------------------------------------------------

pub const BACKGROUND_MULTI_SEGMENT_PRICING: &str =
  "Pricing strategy serving several customer segments (Enterprise, SMB, individual)";
pub const BACKGROUND_MULTI_TENANT_ACCESS: &str =
  "Security and access control in a multi-tenant environment";
pub const BACKGROUND_GENERIC_BUSINESS: &str =
  "Business requirements call for multiple user types and conditional branches";

pub const CONSTRAINT_LEGACY_FORMAT: &str =
  "Fixed-width field conversion for compatibility with legacy systems (COBOL, mainframe)";
pub const CONSTRAINT_EXTERNAL_SYSTEM: &str =
  "Technical constraints imposed by integration with external systems";
pub const CONSTRAINT_INTEGRATION: &str =
  "External APIs, rate limiting and differing data formats must all be handled";

pub const REASON_TENANT_PERMISSIONS: &str =
  "Tenant isolation and hierarchical permission management multiply the branches";
pub const REASON_SEGMENT_PRICING: &str =
  "Per-segment pricing rules for each customer tier multiply the branches";
pub const REASON_GENERIC_BUSINESS: &str =
  "Business rules for several user types and conditions multiply the branches";
pub const REASON_LEGACY_COMPATIBILITY: &str =
  "Backward compatibility with legacy formats and external system integration drive the complexity";
pub const REASON_TECHNICAL_CONSTRAINTS: &str =
  "Backward compatibility and external system integration requirements drive the complexity";

/// Default reason per category; business-logic and technical-constraints have
/// token-conditioned variants chosen by the classifier.
pub const fn complexity_reason(category: ComplexityCategory) -> &'static str {
  match category {
    ComplexityCategory::BusinessLogic => REASON_GENERIC_BUSINESS,
    ComplexityCategory::TechnicalConstraints => REASON_TECHNICAL_CONSTRAINTS,
    ComplexityCategory::Integration => {
      "Differing data formats and coordination with external services drive the complexity"
    }
    ComplexityCategory::Algorithmic => {
      "TF-IDF and cosine similarity calculations for search accuracy drive the complexity"
    }
    ComplexityCategory::HistoricalLayers => {
      "Accumulated past bug fixes and browser compatibility patches drive the complexity"
    }
    ComplexityCategory::Unknown => "The source of the complexity could not be determined",
  }
}

pub const ALGORITHMIC_PURPOSE: &str =
  "Search accuracy through TF-IDF, cosine similarity and a ranking algorithm";
pub const PERFORMANCE_NOTE: &str = "Balance between computational cost and memory efficiency";
pub const NESTED_COLLECTION_BIG_O: &str = "O(n*m)";

pub const MIXED_COMPLEXITY: &str =
  "Compound complexity from multiple factors (business logic, technical constraints, historical layers)";

pub const HISTORY_ISSUE_SUFFIX: &str = "fix history";
pub const HISTORY_DATE_PREFIX: &str = "dated changes";
pub const HISTORY_BROWSER_SUFFIX: &str = "browser compatibility";
pub const HISTORY_LEAP_YEAR: &str = "leap year handling fix";
pub const HISTORY_SEPARATOR: &str = "; ";

// ---------------------------------------------------------------------------
// Risk Synthesizer
// ---------------------------------------------------------------------------

pub const NARRATIVE_REASON_B2B: &str =
  "The B2B/B2C user permission model multiplies the branches";
pub const NARRATIVE_REASON_BUSINESS: &str =
  "Business requirements demand many conditional branches, so the complexity is inherent to the specification";
pub const NARRATIVE_REASON_API: &str =
  "External API integration and compatibility with existing assets require complex conversion handling";
pub const NARRATIVE_REASON_TECHNICAL: &str =
  "Compatibility with external systems and technical constraints require complex conversion handling";
pub const NARRATIVE_REASON_UNKNOWN: &str = "The source of the complexity is still being identified";
pub const NARRATIVE_BACKGROUND_BUSINESS: &str =
  "Design driven by business requirements for multiple user types and conditional branches";
pub const NARRATIVE_CONSTRAINTS_TECHNICAL: &str =
  "Technical constraints from external system integration requirements";

pub const fn risk_assessment(level: RiskLevel) -> &'static str {
  match level {
    RiskLevel::Critical => {
      "[HIGH RISK] Insufficient tests make unexpected side effects likely when this function changes"
    }
    RiskLevel::High => "High complexity with only partial test coverage; change risk is significant",
    RiskLevel::Medium => "Moderate change risk; complexity or branch coverage warrants a careful review",
    RiskLevel::Low => "Well tested; change risk is low",
  }
}

pub const fn strategic_evaluation_for_risk(level: RiskLevel) -> &'static str {
  match level {
    RiskLevel::Critical => {
      "Test hardening is the top priority; incremental refactoring backed by integration tests is strongly recommended"
    }
    RiskLevel::High | RiskLevel::Medium => {
      "Targeted test improvements are recommended before significant changes"
    }
    RiskLevel::Low => "Adequately safeguarded; keep the current implementation and test strategy",
  }
}

pub const fn strategic_recommendations(level: RiskLevel) -> &'static [&'static str] {
  match level {
    RiskLevel::Critical => &["incremental refactoring", "add integration tests"],
    RiskLevel::High | RiskLevel::Medium => &["improve test quality"],
    RiskLevel::Low => &[],
  }
}

pub const fn test_strategy(philosophy: TestPhilosophy) -> &'static str {
  match philosophy {
    TestPhilosophy::BehaviorDriven => {
      "Tests are written in terms of behavior and cover normal paths and boundary values"
    }
    TestPhilosophy::ImplementationCoupled => {
      "Test design is coupled to implementation details; move toward behavior-based tests"
    }
    TestPhilosophy::Missing => "No tests exist; behavior-based tests are urgently needed",
    TestPhilosophy::CoverageDriven => {
      "Tests exercise the code for coverage without describing its behavior"
    }
    TestPhilosophy::SpecificationBased => "Tests read as a specification of the function's contract",
  }
}

pub const fn strategic_evaluation_for_philosophy(philosophy: TestPhilosophy) -> &'static str {
  match philosophy {
    TestPhilosophy::BehaviorDriven | TestPhilosophy::SpecificationBased => {
      "Tests describe the specification; the test design is strategically sound"
    }
    TestPhilosophy::ImplementationCoupled => {
      "Tests are pulled along by implementation details, so refactoring resistance is low"
    }
    TestPhilosophy::Missing => "No safety net exists for changes to this function",
    TestPhilosophy::CoverageDriven => {
      "Coverage exists but carries little specification value"
    }
  }
}

pub const fn philosophy_recommendations(philosophy: TestPhilosophy) -> &'static [&'static str] {
  match philosophy {
    TestPhilosophy::ImplementationCoupled => &["behavior-based tests", "reduce mock usage"],
    TestPhilosophy::Missing => &["incremental refactoring", "add integration tests"],
    TestPhilosophy::BehaviorDriven
    | TestPhilosophy::CoverageDriven
    | TestPhilosophy::SpecificationBased => &[],
  }
}

pub fn behavior_description(function_name: &str) -> String {
  format!("Expected behavior of {}", function_name)
}

// ---------------------------------------------------------------------------
// Actionable recommendations
// ---------------------------------------------------------------------------

pub struct RecommendationText {
  pub description: &'static str,
  pub rationale: &'static str,
}

pub const REDUCE_COUPLING: RecommendationText = RecommendationText {
  description: "Reduce implementation coupling",
  rationale: "Raises resistance to refactoring",
};

pub const REWRITE_AS_BEHAVIOR: RecommendationText = RecommendationText {
  description: "Rewrite tests as behavior specifications",
  rationale: "Follows the t-wada principle that tests are specifications",
};

pub const ESTABLISH_BASELINE: RecommendationText = RecommendationText {
  description: "Establish baseline tests",
  rationale: "Lays the foundation for code quality",
};

pub const CONTINUOUS_IMPROVEMENT: RecommendationText = RecommendationText {
  description: "Continuous test-quality improvement",
  rationale: "Sustains long-term maintainability",
};

pub const SCHEDULE_REFACTORING: RecommendationText = RecommendationText {
  description: "Schedule refactoring of accumulated workarounds",
  rationale: "High technical debt in a highly complex function compounds change cost",
};

pub const DOCUMENT_BUSINESS_RULES: RecommendationText = RecommendationText {
  description: "Document the business rules behind the branching",
  rationale: "Intentional complexity should be explained, not refactored away",
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_category_has_a_reason() {
    for &cat in ComplexityCategory::ALL {
      assert!(!complexity_reason(cat).is_empty());
    }
  }

  #[test]
  fn only_low_risk_has_no_strategic_recommendations() {
    assert!(strategic_recommendations(RiskLevel::Low).is_empty());
    assert_eq!(strategic_recommendations(RiskLevel::Critical).len(), 2);
    assert_eq!(strategic_recommendations(RiskLevel::Medium), &["improve test quality"]);
  }

  #[test]
  fn critical_risk_assessment_is_flagged() {
    assert!(risk_assessment(RiskLevel::Critical).starts_with("[HIGH RISK]"));
  }
}
