//! Scenario builder tests.

use cvp_core::metrics::Metrics;
use cvp_core::params::{CvpParams, ScenarioInputs};
use cvp_core::scenario::{Scenario, ScenarioKind};

/// Scenario A with both knobs at zero is the identity transformation:
/// the derived metrics reproduce the baseline exactly.
#[test]
fn scenario_a_identity_reproduces_baseline() {
    let baseline = CvpParams::default();
    let inputs = ScenarioInputs {
        sc_a_price_drop: 0.0,
        sc_a_sales_lift: 0.0,
        ..ScenarioInputs::default()
    };

    let sc = Scenario::derive(ScenarioKind::A, &baseline, &inputs);

    assert_eq!(sc.params, baseline);
    assert_eq!(sc.metrics, Metrics::from_params(&baseline));
}

/// Scenario A applies both percentage rules to the baseline.
#[test]
fn scenario_a_applies_percentage_rules() {
    let baseline = CvpParams::default();
    let sc = Scenario::derive(ScenarioKind::A, &baseline, &ScenarioInputs::default());

    // 20% price drop and 11% sales lift on the defaults.
    assert_eq!(sc.params.selling_price, 2400.0);
    assert!((sc.params.units_sold - 2220.0).abs() < 1e-9);
    assert_eq!(sc.params.variable_cost, baseline.variable_cost);
    assert_eq!(sc.params.fixed_costs, baseline.fixed_costs);
}

/// Scenario B's absolute drops are floored at zero; price and variable
/// cost never go negative.
#[test]
fn scenario_b_floors_at_zero() {
    let baseline = CvpParams {
        selling_price: 200.0,
        variable_cost: 30.0,
        ..CvpParams::default()
    };
    let inputs = ScenarioInputs {
        sc_b_sp_drop: 5000.0,
        sc_b_vc_drop: 600.0,
        ..ScenarioInputs::default()
    };

    let sc = Scenario::derive(ScenarioKind::B, &baseline, &inputs);

    assert_eq!(sc.params.selling_price, 0.0);
    assert_eq!(sc.params.variable_cost, 0.0);
    // Degenerate margin: break-even collapses to zero, no error.
    assert_eq!(sc.metrics.breakeven_units, 0.0);
}

/// Scenario C replaces the unit volume outright and cuts price and
/// fixed costs by their percentages.
#[test]
fn scenario_c_replaces_units_outright() {
    let baseline = CvpParams::default();
    let sc = Scenario::derive(ScenarioKind::C, &baseline, &ScenarioInputs::default());

    assert_eq!(sc.params.units_sold, 1700.0);
    assert_eq!(sc.params.selling_price, 2700.0);
    assert_eq!(sc.params.fixed_costs, 2_400_000.0);
    assert_eq!(sc.params.variable_cost, baseline.variable_cost);
}

/// The scenario set is fixed: three entries, A then B then C, each with
/// its fixed display label.
#[test]
fn build_all_is_ordered_and_labeled() {
    let scenarios = Scenario::build_all(&CvpParams::default(), &ScenarioInputs::default());

    assert_eq!(scenarios[0].kind, ScenarioKind::A);
    assert_eq!(scenarios[1].kind, ScenarioKind::B);
    assert_eq!(scenarios[2].kind, ScenarioKind::C);

    assert_eq!(scenarios[0].label(), "Scenario A (price ↓, volume ↑)");
    assert_eq!(scenarios[1].label(), "Scenario B (lower price & VC)");
    assert_eq!(scenarios[2].label(), "Scenario C (fixed ↓, price ↓)");
}

/// Scenario metrics are recomputed from the adjusted parameters, not
/// copied from the baseline.
#[test]
fn scenario_metrics_track_adjusted_params() {
    let baseline = CvpParams::default();
    let sc = Scenario::derive(ScenarioKind::A, &baseline, &ScenarioInputs::default());

    let expected = Metrics::from_params(&sc.params);
    assert_eq!(sc.metrics, expected);
    assert!(
        sc.metrics.breakeven_units > Metrics::from_params(&baseline).breakeven_units,
        "a thinner margin pushes break-even volume up"
    );
}

/// The baseline tax rate rides along into every scenario.
#[test]
fn tax_rate_carries_through_all_scenarios() {
    let baseline = CvpParams {
        tax_rate: 40.0,
        ..CvpParams::default()
    };

    for sc in Scenario::build_all(&baseline, &ScenarioInputs::default()) {
        assert_eq!(sc.params.tax_rate, 40.0);
    }
}
