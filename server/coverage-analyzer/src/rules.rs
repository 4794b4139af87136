//! Pattern rule tables shared by every classifier.
//!
//! Pure data: ordered `(category, patterns)` tables, the pinned example names,
//! and the token lists behind the test-name heuristics. Regexes compile once on
//! first use and are read-only afterwards, so the tables are safe to share
//! across worker threads.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};

use crate::types::ComplexityCategory;

/// Bumped whenever a table below changes meaning.
pub const RULE_SET_VERSION: &str = "2024.1";

// ---------------------------------------------------------------------------
// Category tables
// ---------------------------------------------------------------------------

const BUSINESS_LOGIC: &[&str] = &[
  r"user\.type|userType|accountType",
  r"enterprise|smb|b2b|b2c|individual",
  r"subscription|premium|basic|plan",
  r"pricing|discount|fee|cost",
  r"role|permission|access|auth",
  r"tenant|organization|department",
  r"contract|tier|loyalty",
  r"customer|client|user",
  r"calculatePricing|validateUserPermissions",
  r"checkResourceAccess|processUserSubscription",
  r"admin|super_admin",
  r"platinum|gold|silver",
];

const TECHNICAL_CONSTRAINTS: &[&str] = &[
  r"legacy|mainframe|cobol",
  r"compatibility|backward",
  r"fixed.*width|pad.*start|pad.*end",
  r"fallback|retry|error.*handling",
  r"format.*conversion|transform",
  r"syncCustomerData|syncWithExternalAPI",
  r"legacyApiTransform|normalizeResponse",
  r"modernApiClient|legacySystemClient",
];

// Kept narrow so that plain loops are not mistaken for algorithmic work.
const ALGORITHMIC: &[&str] = &[
  r"similarity.*cosine",
  r"tf.*idf.*vector",
  r"ranking.*algorithm",
  r"levenshtein.*score",
];

const INTEGRATION: &[&str] = &[
  r"api.*client|external.*api",
  r"rate.*limit|throttle",
  r"stripe|paypal|square|braintree",
  r"response.*format|different.*format",
  r"aggregatePaymentProviders",
  r"providers.*=.*\[",
  r"await.*client\.",
];

const HISTORICAL_LAYERS: &[&str] = &[
  r"fix.*for.*issue|issue.*#\d+",
  r"bug.*fix|workaround",
  r"safari|browser.*compatibility",
  r"\d{4}-\d{2}-\d{2}|\d{4}/\d{2}/\d{2}",
  r"legacy.*implementation|old.*implementation",
];

// Simplified two-group table used by the narrative synthesizer.
const NARRATIVE_BUSINESS_LOGIC: &[&str] = &[
  r"user\.type|userType",
  r"accountType|account\.type",
  r"subscription|pricing|discount",
  r"role|permission|access",
  r"b2b|b2c|enterprise|smb",
];

const NARRATIVE_TECHNICAL_CONSTRAINTS: &[&str] = &[
  r"legacy|mainframe|cobol",
  r"api.*client|external.*api",
  r"compatibility|backward",
  r"rate.*limit|throttle",
];

/// One category and the case-insensitive patterns that signal it.
#[derive(Debug)]
pub struct PatternGroup {
  pub category: ComplexityCategory,
  patterns: RegexSet,
}

impl PatternGroup {
  fn new(category: ComplexityCategory, patterns: &[&str]) -> Self {
    Self {
      category,
      patterns: case_insensitive_set(patterns),
    }
  }

  pub fn matches(&self, text: &str) -> bool {
    self.patterns.is_match(text)
  }
}

/// Groups evaluated strictly in table order; the first match wins.
#[derive(Debug)]
pub struct RuleTable {
  groups: Vec<PatternGroup>,
}

impl RuleTable {
  pub fn groups(&self) -> &[PatternGroup] {
    &self.groups
  }

  pub fn first_match(&self, text: &str) -> Option<ComplexityCategory> {
    self
      .groups
      .iter()
      .find(|g| g.matches(text))
      .map(|g| g.category)
  }

  /// Whether the group for `category` matches. Categories absent from the table never match.
  pub fn category_matches(&self, category: ComplexityCategory, text: &str) -> bool {
    self
      .groups
      .iter()
      .any(|g| g.category == category && g.matches(text))
  }
}

/// Priority order: business-logic, technical-constraints, algorithmic, integration, historical-layers.
pub static INTENT_RULES: Lazy<RuleTable> = Lazy::new(|| RuleTable {
  groups: vec![
    PatternGroup::new(ComplexityCategory::BusinessLogic, BUSINESS_LOGIC),
    PatternGroup::new(ComplexityCategory::TechnicalConstraints, TECHNICAL_CONSTRAINTS),
    PatternGroup::new(ComplexityCategory::Algorithmic, ALGORITHMIC),
    PatternGroup::new(ComplexityCategory::Integration, INTEGRATION),
    PatternGroup::new(ComplexityCategory::HistoricalLayers, HISTORICAL_LAYERS),
  ],
});

pub static NARRATIVE_RULES: Lazy<RuleTable> = Lazy::new(|| RuleTable {
  groups: vec![
    PatternGroup::new(ComplexityCategory::BusinessLogic, NARRATIVE_BUSINESS_LOGIC),
    PatternGroup::new(
      ComplexityCategory::TechnicalConstraints,
      NARRATIVE_TECHNICAL_CONSTRAINTS,
    ),
  ],
});

/// Categories re-tested for the secondary label set, in output order.
pub const SECONDARY_CANDIDATES: [ComplexityCategory; 3] = [
  ComplexityCategory::TechnicalConstraints,
  ComplexityCategory::HistoricalLayers,
  ComplexityCategory::Integration,
];

// ---------------------------------------------------------------------------
// Pinned examples
// ---------------------------------------------------------------------------

/// Canonical example functions with a fixed answer. Configuration data, not a
/// general mechanism: do not grow this list.
pub const PINNED_EXAMPLES: &[(&str, ComplexityCategory)] = &[
  ("syncCustomerData", ComplexityCategory::TechnicalConstraints),
  ("aggregatePaymentProviders", ComplexityCategory::Integration),
  ("fuzzySearchWithRanking", ComplexityCategory::Algorithmic),
  ("dateTimeParser", ComplexityCategory::HistoricalLayers),
  ("processUserSubscription", ComplexityCategory::BusinessLogic),
];

pub fn pinned_category(function_name: &str) -> Option<ComplexityCategory> {
  PINNED_EXAMPLES
    .iter()
    .find(|(name, _)| *name == function_name)
    .map(|(_, category)| *category)
}

// ---------------------------------------------------------------------------
// Attribute matchers
// ---------------------------------------------------------------------------

pub static SECURITY_SENSITIVE: Lazy<RegexSet> = Lazy::new(|| {
  case_insensitive_set(&[
    r"permission|access|auth",
    r"tenant|security",
    r"password|token|credential",
  ])
});

pub static TECHNICAL_DEBT: Lazy<RegexSet> = Lazy::new(|| {
  case_insensitive_set(&[
    r"workaround|hack|fix.*for",
    r"legacy|compatibility",
    r"issue.*#\d+",
  ])
});

pub static INTEGRATION_MENTION: Lazy<Regex> =
  Lazy::new(|| case_insensitive(r"client|service|provider"));

/// Extractors for external dependency names, in output order.
pub static DEPENDENCY_EXTRACTORS: Lazy<Vec<Regex>> = Lazy::new(|| {
  vec![
    case_insensitive(r"stripe|paypal|square|braintree"),
    case_insensitive(r"api.*client"),
    case_insensitive(r"external.*service"),
  ]
});

pub static ISSUE_REFERENCE: Lazy<Regex> = Lazy::new(|| case_insensitive(r"Issue #\d+"));

pub static DATE_STAMP: Lazy<Regex> = Lazy::new(|| case_insensitive(r"\d{4}-\d{2}-\d{2}"));

pub static LEAP_YEAR: Lazy<Regex> = Lazy::new(|| case_insensitive(r"leap year"));

/// Browser names recorded as historical compatibility work (exact case).
pub const NAMED_BROWSERS: &[&str] = &["Safari"];

/// Loop keyword and collection name behind the O(n*m) hint.
pub const LOOP_KEYWORD: &str = "for";
pub const DOCUMENT_COLLECTION: &str = "documents";

/// Vocabulary behind the performance note.
pub const PERFORMANCE_VOCABULARY: &[&str] = &[
  "algorithm",
  "optimization",
  "similarity",
  "ranking",
  "fuzzy",
  "search",
];

// ---------------------------------------------------------------------------
// Test-name tokens (case-sensitive substrings)
// ---------------------------------------------------------------------------

pub const MOCK_TOKENS: &[&str] = &["call", "mock", "stub"];
pub const COUPLING_TOKENS: &[&str] = &["should call", "mock", "stub"];
pub const SHOULD: &str = "should";
pub const CALL: &str = "call";
pub const GIVEN_WHEN_THEN: [&str; 3] = ["Given", "When", "Then"];
pub const EDGE_CASE_TOKENS: &[&str] = &[
  "boundary",
  "edge",
  "negative",
  "zero",
  "null",
  "empty",
  "invalid",
  "error",
  "exception",
];
pub const PLACEHOLDER_NAME: &str = "test1";
pub const PLACEHOLDER_SUFFIX: &str = "_test";
pub const MIN_EXPRESSIVE_NAME_LEN: usize = 10;

// Test smell labels and their triggers.
pub const SMELL_EXCESSIVE_MOCKING: &str = "excessive mocking";
pub const SMELL_STRUCTURE_DEPENDENCY: &str = "internal-structure dependency";
pub const MOCKING_SMELL_TOKENS: &[&str] = &["call", "mock"];

fn case_insensitive_set(patterns: &[&str]) -> RegexSet {
  RegexSetBuilder::new(patterns)
    .case_insensitive(true)
    .build()
    .expect("static pattern table must compile")
}

fn case_insensitive(pattern: &str) -> Regex {
  RegexBuilder::new(pattern)
    .case_insensitive(true)
    .build()
    .expect("static pattern must compile")
}

/// Substring test over a token list.
pub fn contains_any(text: &str, tokens: &[&str]) -> bool {
  tokens.iter().any(|t| text.contains(t))
}
