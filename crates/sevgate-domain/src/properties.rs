//! Property-based tests for the gate.
//!
//! These use proptest to verify:
//! - the four first-match decision properties over arbitrary counts
//! - coercion never panics and is idempotent on integers
//! - evaluation of arbitrary JSON never panics and always yields a decision

use crate::coerce::{parse_int_literal, to_int};
use crate::engine::{decide, evaluate};
use crate::policy::{GateRule, MEDIUM_WARN_THRESHOLD};
use crate::report::ScanReport;
use proptest::prelude::*;
use serde_json::{Value, json};
use sevgate_types::{Decision, SeverityCounts};

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary JSON leaves, weighted toward the shapes scanners actually emit.
fn arb_count_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<u32>().prop_map(|n| json!(n)),
        any::<i64>().prop_map(|n| json!(n)),
        any::<u32>().prop_map(|n| json!(n.to_string())),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        ".*".prop_map(Value::String),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
        Just(json!([])),
        Just(json!({})),
    ]
}

fn arb_report_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => (
            prop::option::of(arb_count_value()),
            prop::option::of(arb_count_value()),
            prop::option::of(arb_count_value()),
        )
            .prop_map(|(critical, high, medium)| {
                let mut map = serde_json::Map::new();
                if let Some(v) = critical {
                    map.insert("critical".to_string(), v);
                }
                if let Some(v) = high {
                    map.insert("high".to_string(), v);
                }
                if let Some(v) = medium {
                    map.insert("medium".to_string(), v);
                }
                Value::Object(map)
            }),
        1 => arb_count_value(),
    ]
}

// ============================================================================
// Decision properties
// ============================================================================

proptest! {
    #[test]
    fn critical_always_blocks(critical in 1u64.., high in any::<u64>(), medium in any::<u64>()) {
        let rule = decide(&SeverityCounts::new(critical, high, medium));
        prop_assert_eq!(rule, GateRule::CriticalFindings);
        prop_assert_eq!(rule.decision(), Decision::Block);
    }

    #[test]
    fn high_without_critical_warns(high in 1u64.., medium in any::<u64>()) {
        let rule = decide(&SeverityCounts::new(0, high, medium));
        prop_assert_eq!(rule, GateRule::HighFindings);
        prop_assert_eq!(rule.decision(), Decision::Warn);
    }

    #[test]
    fn medium_volume_warns(medium in MEDIUM_WARN_THRESHOLD..) {
        let rule = decide(&SeverityCounts::new(0, 0, medium));
        prop_assert_eq!(rule, GateRule::MediumVolume);
        prop_assert_eq!(rule.decision(), Decision::Warn);
    }

    #[test]
    fn low_medium_allows(medium in 0u64..MEDIUM_WARN_THRESHOLD) {
        let rule = decide(&SeverityCounts::new(0, 0, medium));
        prop_assert_eq!(rule, GateRule::Clean);
        prop_assert_eq!(rule.decision(), Decision::Allow);
    }

    #[test]
    fn evaluate_reports_counts_it_decided_on(value in arb_report_value()) {
        let outcome = evaluate(&ScanReport::from_value(value));
        prop_assert_eq!(outcome.rule, decide(&outcome.counts));
        prop_assert_eq!(outcome.decision, outcome.rule.decision());
    }

    #[test]
    fn non_object_reports_allow(value in arb_count_value()) {
        prop_assume!(!value.is_object());
        let outcome = evaluate(&ScanReport::from_value(value));
        prop_assert_eq!(outcome.decision, Decision::Allow);
        prop_assert_eq!(outcome.counts, SeverityCounts::default());
    }
}

// ============================================================================
// Coercion properties
// ============================================================================

proptest! {
    #[test]
    fn to_int_is_identity_on_unsigned(n in any::<u64>()) {
        prop_assert_eq!(to_int(&json!(n)), n);
        prop_assert_eq!(to_int(&json!(to_int(&json!(n)))), n);
    }

    #[test]
    fn to_int_reads_numeric_strings(n in any::<u64>()) {
        prop_assert_eq!(to_int(&Value::String(n.to_string())), n);
    }

    #[test]
    fn to_int_rejects_fractional_strings(whole in any::<u32>(), frac in 1u32..1000) {
        let text = format!("{whole}.{frac}");
        prop_assert_eq!(to_int(&Value::String(text)), 0);
    }

    #[test]
    fn to_int_never_panics(value in arb_count_value()) {
        let _ = to_int(&value);
    }

    #[test]
    fn parse_int_literal_matches_std_for_plain_integers(n in any::<i64>()) {
        prop_assert_eq!(parse_int_literal(&n.to_string()), Some(i128::from(n)));
    }

    #[test]
    fn parse_int_literal_never_panics(text in ".*") {
        let _ = parse_int_literal(&text);
    }
}
