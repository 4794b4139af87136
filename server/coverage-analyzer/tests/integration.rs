//! Integration tests for the coverage analyzer.

use coverage_analyzer::types::{
  ComplexityCategory, Degree, MockUsage, Priority, QualityLevel, RiskLevel, Severity,
  TestPhilosophy,
};
use coverage_analyzer::{Analyzer, AnalyzerError, Config, FunctionDescription};

fn parse(json: &str) -> FunctionDescription {
  serde_json::from_str(json).unwrap()
}

fn untested(name: &str, complexity: u32, source: &str, branch: f64) -> FunctionDescription {
  parse(
    &serde_json::json!({
      "function_name": name,
      "complexity": complexity,
      "source_code": source,
      "test_cases": [],
      "branch_coverage": branch,
      "line_coverage": branch,
    })
    .to_string(),
  )
}

fn with_tests(name: &str, complexity: u32, names: &[&str], branch: f64, line: f64) -> FunctionDescription {
  let cases: Vec<_> = names
    .iter()
    .map(|n| {
      serde_json::json!({
        "test_file": format!("{}.test.js", name),
        "test_case": n,
        "coverage_type": "unit",
        "covered_lines": [1, 2, 3],
      })
    })
    .collect();
  parse(
    &serde_json::json!({
      "function_name": name,
      "complexity": complexity,
      "source_code": "",
      "test_cases": cases,
      "branch_coverage": branch,
      "line_coverage": line,
    })
    .to_string(),
  )
}

fn fixture_function() -> FunctionDescription {
  parse(
    r#"{
    "function_name": "withdrawMoney",
    "complexity": 8,
    "source_code": "if (amount <= 0) throw new Error('invalid'); if (balance < amount) throw new Error('funds');",
    "test_cases": [
      {"test_file": "bank.test.js", "test_case": "Given active account, When withdrawing valid amount, Then balance should decrease", "coverage_type": "unit", "covered_lines": [1, 2]},
      {"test_file": "bank.test.js", "test_case": "Given active account, When withdrawing zero amount, Then should reject with validation error", "coverage_type": "unit", "covered_lines": [1]},
      {"test_file": "bank.int.test.js", "test_case": "Given low balance, When withdrawing more than balance, Then should reject with error", "coverage_type": "integration", "covered_lines": [2]}
    ],
    "branch_coverage": 100.0,
    "line_coverage": 100.0
  }"#,
  )
}

// ---------------------------------------------------------------------------
// Complexity classification scenarios
// ---------------------------------------------------------------------------

#[test]
fn segment_pricing_is_intentional_business_logic() {
  let source = "if (account.segment === 'enterprise') { rate = contractTier.discount; } \
                else if (account.segment === 'smb') { rate = 0.95; }";
  let r = Analyzer::with_defaults()
    .classify_complexity(&untested("quoteRate", 18, source, 65.0))
    .unwrap();
  assert_eq!(r.complexity_category, ComplexityCategory::BusinessLogic);
  assert_eq!(r.business_value, Severity::High);
  assert!(r.intentional_complexity);
}

#[test]
fn legacy_fixed_width_is_technical_constraint() {
  let source = "const raw = mainframe.read(); // legacy layout\nconst code = raw.code.padStart(8, '0');";
  let r = Analyzer::with_defaults()
    .classify_complexity(&untested("readRecord", 25, source, 40.0))
    .unwrap();
  assert_eq!(r.complexity_category, ComplexityCategory::TechnicalConstraints);
  assert_eq!(r.migration_complexity, Degree::High);
  assert_eq!(r.technical_debt, Degree::High);
  assert!(!r.intentional_complexity);
}

#[test]
fn payment_providers_are_integration_with_many_dependencies() {
  let source = "const providers = [stripe, paypal, square, braintree];\n\
                for (const p of providers) { await rateLimiter.wait(p.name); results.push(await p.charges.list()); }";
  let r = Analyzer::with_defaults()
    .classify_complexity(&untested("collectCharges", 20, source, 50.0))
    .unwrap();
  assert_eq!(r.complexity_category, ComplexityCategory::Integration);
  assert!(r.external_dependencies.len() > 3, "{:?}", r.external_dependencies);
}

#[test]
fn pinned_name_overrides_source_patterns() {
  let source = "if (user.type === 'legacy') return fallback();";
  let analyzer = Analyzer::with_defaults();
  let r = analyzer
    .classify_complexity(&untested("fuzzySearchWithRanking", 12, source, 70.0))
    .unwrap();
  assert_eq!(r.complexity_category, ComplexityCategory::Algorithmic);

  let r = analyzer
    .classify_complexity(&untested("dateTimeParser", 12, source, 70.0))
    .unwrap();
  assert_eq!(r.complexity_category, ComplexityCategory::HistoricalLayers);
}

#[test]
fn business_logic_wins_over_technical_constraints() {
  let source = "if (user.type === 'legacy') return legacyFormat(user);";
  let r = Analyzer::with_defaults()
    .classify_complexity(&untested("formatAccount", 12, source, 70.0))
    .unwrap();
  assert_eq!(r.complexity_category, ComplexityCategory::BusinessLogic);
  assert!(r
    .secondary_categories
    .contains(&ComplexityCategory::TechnicalConstraints));
  assert!(!r.secondary_categories.contains(&ComplexityCategory::BusinessLogic));
}

#[test]
fn historical_context_joins_issues_and_browser() {
  let source = "// Issue #123: Safari drops the offset\n// Issue #456: keep the old rounding\nreturn value;";
  let r = Analyzer::with_defaults()
    .classify_complexity(&untested("roundOffset", 9, source, 70.0))
    .unwrap();
  assert!(r.historical_context.contains("Issue #123"));
  assert!(r.historical_context.contains("Issue #456"));
  assert!(r.historical_context.contains("Safari"));
  assert!(!r.historical_context.ends_with(';'));
  assert!(!r.historical_context.ends_with(' '));
}

#[test]
fn empty_source_is_unknown() {
  let r = Analyzer::with_defaults()
    .classify_complexity(&untested("noop", 0, "", 0.0))
    .unwrap();
  assert_eq!(r.complexity_category, ComplexityCategory::Unknown);
  assert!(r.secondary_categories.is_empty());
  assert!(r.external_dependencies.is_empty());
  assert_eq!(r.historical_context, "");
}

// ---------------------------------------------------------------------------
// Test philosophy scenarios
// ---------------------------------------------------------------------------

#[test]
fn should_call_suite_is_coupled_and_low() {
  let input = with_tests(
    "processOrder",
    10,
    &[
      "should call OrderValidator.validate",
      "should call PriceCalculator.calculate",
      "should call InventoryService.reserve",
      "should call PaymentService.charge",
    ],
    85.0,
    90.0,
  );
  let r = Analyzer::with_defaults().evaluate_test_philosophy(&input).unwrap();
  assert_eq!(r.khorikov.resistance_to_refactoring, QualityLevel::Low);
  assert_eq!(r.khorikov.mock_usage, MockUsage::Excessive);
  assert_eq!(r.khorikov.overall_score, QualityLevel::Low);
}

#[test]
fn eight_of_ten_mock_names_is_excessive() {
  let mut names: Vec<String> = (0..8).map(|i| format!("mock repository returns row {}", i)).collect();
  names.push("should return totals for a full cart".into());
  names.push("should return zero for an empty cart".into());
  let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
  let r = Analyzer::with_defaults()
    .evaluate_test_philosophy(&with_tests("cartTotal", 6, &refs, 90.0, 90.0))
    .unwrap();
  assert_eq!(r.khorikov.mock_usage, MockUsage::Excessive);
}

#[test]
fn zero_tests_resolve_to_documented_branches() {
  let input = untested("untested", 30, "", 0.0);
  let r = Analyzer::with_defaults().evaluate_test_philosophy(&input).unwrap();
  assert_eq!(r.khorikov.protection_against_regressions, QualityLevel::Critical);
  assert_eq!(r.khorikov.mock_usage, MockUsage::Insufficient);
  assert_eq!(r.twada.behavior_focus, QualityLevel::Low);
  assert_eq!(r.twada.overall_score, QualityLevel::Low);
}

#[test]
fn comprehensive_report_has_ordered_recommendations() {
  let report = Analyzer::with_defaults()
    .evaluate_comprehensively(&untested("untested", 30, "", 0.0))
    .unwrap();
  assert!(!report.recommendations.is_empty());
  assert!(report
    .recommendations
    .iter()
    .any(|r| r.priority == Priority::Immediate));
  assert!(report.summary.contains("Khorikov"));
}

// ---------------------------------------------------------------------------
// Risk narrative and composition
// ---------------------------------------------------------------------------

#[test]
fn untested_complex_function_is_critical_risk() {
  let r = Analyzer::with_defaults()
    .synthesize_risk(&untested("legacyMonster", 28, "", 0.0))
    .unwrap();
  assert_eq!(r.risk_level, RiskLevel::Critical);
  assert_eq!(r.test_philosophy, TestPhilosophy::Missing);
  assert_eq!(r.test_quality, QualityLevel::Critical);
}

#[test]
fn fixture_composes_into_full_result() {
  let result = Analyzer::with_defaults().compose(&fixture_function()).unwrap();
  assert!(result.analysis_id.starts_with("fn-"));
  assert_eq!(result.function_name, "withdrawMoney");
  assert_eq!(result.analysis.risk_level, RiskLevel::Low);
  assert_eq!(result.analysis.test_philosophy, TestPhilosophy::BehaviorDriven);
  assert_eq!(result.analysis.test_quality, result.khorikov_evaluation.overall_score);
  assert_eq!(
    result.analysis.specification_quality,
    result.twada_evaluation.overall_score
  );
  assert_eq!(result.twada_evaluation.specification_clarity, QualityLevel::High);
  assert!(!result.comprehensive_summary.is_empty());
  assert!(!result.actionable_recommendations.is_empty());
}

#[test]
fn compose_is_deterministic() {
  let analyzer = Analyzer::with_defaults();
  let input = fixture_function();
  let a = serde_json::to_string(&analyzer.compose(&input).unwrap()).unwrap();
  let b = serde_json::to_string(&analyzer.compose(&input).unwrap()).unwrap();
  assert_eq!(a, b);
}

#[test]
fn batch_matches_single_calls() {
  let analyzer = Analyzer::with_defaults();
  let inputs = vec![
    fixture_function(),
    untested("legacyMonster", 28, "", 0.0),
    untested("noop", 0, "", 100.0),
  ];
  let batch = analyzer.compose_batch(&inputs);
  for (input, result) in inputs.iter().zip(batch) {
    let single = serde_json::to_string(&analyzer.compose(input).unwrap()).unwrap();
    assert_eq!(serde_json::to_string(&result.unwrap()).unwrap(), single);
  }
}

#[test]
fn free_functions_match_default_analyzer() {
  let input = fixture_function();
  let a = serde_json::to_string(&coverage_analyzer::compose(&input).unwrap()).unwrap();
  let b = serde_json::to_string(&Analyzer::with_defaults().compose(&input).unwrap()).unwrap();
  assert_eq!(a, b);
  assert!(coverage_analyzer::classify_complexity(&input).is_ok());
  assert!(coverage_analyzer::evaluate_test_philosophy(&input).is_ok());
  assert!(coverage_analyzer::synthesize_risk(&input).is_ok());
}

// ---------------------------------------------------------------------------
// Input contract
// ---------------------------------------------------------------------------

#[test]
fn unknown_fields_are_ignored() {
  let input = parse(
    r#"{"function_name": "f", "complexity": 3, "branch_coverage": 50, "line_coverage": 50,
        "language": "typescript", "owner": "payments"}"#,
  );
  assert_eq!(input.source_code, "");
  assert!(input.test_cases.is_empty());
  assert!(Analyzer::with_defaults().compose(&input).is_ok());
}

#[test]
fn negative_complexity_fails_to_deserialize() {
  let err = serde_json::from_str::<FunctionDescription>(
    r#"{"function_name": "f", "complexity": -1, "branch_coverage": 50, "line_coverage": 50}"#,
  );
  assert!(err.is_err());
}

#[test]
fn out_of_range_coverage_is_invalid_input() {
  let input = untested("f", 3, "", 120.0);
  match Analyzer::with_defaults().compose(&input) {
    Err(AnalyzerError::InvalidInput { field, .. }) => assert_eq!(field, "branch_coverage"),
    other => panic!("expected InvalidInput, got {:?}", other.map(|r| r.function_name)),
  }
}

#[test]
fn config_from_toml_changes_thresholds() {
  let input = with_tests(
    "processOrder",
    10,
    &[
      "should call OrderValidator.validate",
      "should call PriceCalculator.calculate",
      "should call InventoryService.reserve",
      "should call PaymentService.charge",
      "should return the order id",
    ],
    85.0,
    90.0,
  );
  let default = Analyzer::with_defaults().evaluate_test_philosophy(&input).unwrap();
  assert_eq!(default.khorikov.mock_usage, MockUsage::Excessive);

  let relaxed = Config::from_toml_str("excessive_mock_ratio = 0.95\n").unwrap();
  let r = Analyzer::new(relaxed).evaluate_test_philosophy(&input).unwrap();
  assert_eq!(r.khorikov.mock_usage, MockUsage::Appropriate);
}
