//! Parameter resolution tests.
//!
//! The resolver's contract is leniency: it never fails, it never
//! surfaces a validation error, it always returns a complete set.

use cvp_core::params::{defaults, resolve_float, CvpParams, ResolvedQuery, ScenarioInputs};
use std::collections::HashMap;

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// An empty query resolves to the full documented default set.
#[test]
fn empty_query_resolves_to_defaults() {
    let resolved = ResolvedQuery::from_query(&HashMap::new());

    assert_eq!(resolved.baseline, CvpParams::default());
    assert_eq!(resolved.scenarios, ScenarioInputs::default());
    assert_eq!(resolved.target_net_income, defaults::TARGET_NET_INCOME);
}

/// A value that is not a number silently falls back to the default.
#[test]
fn unparsable_value_falls_back() {
    let resolved = ResolvedQuery::from_query(&query(&[("selling_price", "abc")]));
    assert_eq!(resolved.baseline.selling_price, 3000.0);
}

/// An empty value behaves like an absent one.
#[test]
fn empty_value_falls_back() {
    let resolved = ResolvedQuery::from_query(&query(&[("fixed_costs", "")]));
    assert_eq!(resolved.baseline.fixed_costs, defaults::FIXED_COSTS);
}

/// Valid values override their defaults, key by key, leaving the rest
/// untouched.
#[test]
fn valid_values_override_defaults() {
    let resolved = ResolvedQuery::from_query(&query(&[
        ("selling_price", "4500"),
        ("units_sold", "1250.5"),
        ("scB_vc_drop", "75"),
    ]));

    assert_eq!(resolved.baseline.selling_price, 4500.0);
    assert_eq!(resolved.baseline.units_sold, 1250.5);
    assert_eq!(resolved.scenarios.sc_b_vc_drop, 75.0);

    assert_eq!(resolved.baseline.variable_cost, defaults::VARIABLE_COST);
    assert_eq!(resolved.scenarios.sc_a_price_drop, defaults::SC_A_PRICE_DROP);
}

/// Keys the report does not recognize are ignored entirely.
#[test]
fn unrecognized_keys_are_ignored() {
    let resolved = ResolvedQuery::from_query(&query(&[("utm_source", "newsletter")]));
    assert_eq!(resolved.baseline, CvpParams::default());
}

/// resolve_float is the single primitive everything goes through.
#[test]
fn resolve_float_handles_all_fallback_cases() {
    let q = query(&[("good", "12.5"), ("bad", "12,5"), ("blank", "")]);

    assert_eq!(resolve_float(&q, "good", 1.0), 12.5);
    assert_eq!(resolve_float(&q, "bad", 1.0), 1.0);
    assert_eq!(resolve_float(&q, "blank", 1.0), 1.0);
    assert_eq!(resolve_float(&q, "missing", 1.0), 1.0);
}
