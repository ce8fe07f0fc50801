//! Metrics calculator tests.

use cvp_core::metrics::Metrics;
use cvp_core::params::CvpParams;

fn params(sp: f64, vc: f64, fc: f64, units: f64, tax: f64) -> CvpParams {
    CvpParams {
        selling_price: sp,
        variable_cost: vc,
        fixed_costs:   fc,
        units_sold:    units,
        tax_rate:      tax,
    }
}

/// The standard worked example: every derived metric lands on the
/// textbook numbers.
#[test]
fn worked_example_matches_reference_numbers() {
    let m = Metrics::from_params(&params(3000.0, 500.0, 3_000_000.0, 2000.0, 25.0));

    assert_eq!(m.cm_per_unit, 2500.0);
    assert_eq!(m.total_cm, 5_000_000.0);
    assert_eq!(m.operating_income, 2_000_000.0);
    assert_eq!(m.net_income, 1_500_000.0);
    assert_eq!(m.breakeven_units, 1200.0);
    assert_eq!(m.breakeven_revenue, 3_600_000.0);
    assert!(
        (m.cm_pct - 2500.0 / 3000.0).abs() < 1e-12,
        "CM ratio should be cm_per_unit / selling_price"
    );
}

/// Selling the break-even volume recovers exactly the fixed costs,
/// for any healthy margin.
#[test]
fn breakeven_volume_recovers_fixed_costs() {
    let cases = [
        params(3000.0, 500.0, 3_000_000.0, 2000.0, 25.0),
        params(49.99, 12.50, 180_000.0, 9_000.0, 21.0),
        params(10.0, 9.99, 1_000.0, 100.0, 0.0),
        params(1_250_000.0, 400_000.0, 8_500_000.0, 25.0, 30.0),
    ];

    for p in cases {
        let m = Metrics::from_params(&p);
        let recovered = m.breakeven_units * m.cm_per_unit;
        assert!(
            (recovered - p.fixed_costs).abs() < 1e-6 * p.fixed_costs.max(1.0),
            "B/E units × CM should equal fixed costs, got {recovered} vs {}",
            p.fixed_costs
        );
    }
}

/// A non-positive contribution margin has no break-even point; both
/// break-even metrics are zero, not an error.
#[test]
fn degenerate_margin_zeroes_breakeven() {
    for p in [
        params(500.0, 500.0, 1_000_000.0, 2000.0, 25.0),
        params(400.0, 500.0, 1_000_000.0, 2000.0, 25.0),
        params(0.0, 0.0, 1_000_000.0, 2000.0, 25.0),
    ] {
        let m = Metrics::from_params(&p);
        assert_eq!(m.breakeven_units, 0.0);
        assert_eq!(m.breakeven_revenue, 0.0);
    }
}

/// With no tax there is nothing between operating and net income.
#[test]
fn zero_tax_net_equals_operating() {
    let m = Metrics::from_params(&params(3000.0, 500.0, 3_000_000.0, 2000.0, 0.0));
    assert_eq!(m.net_income, m.operating_income);
}

/// A zero selling price cannot produce a CM ratio; the guard returns 0
/// instead of dividing by zero.
#[test]
fn zero_price_zeroes_cm_ratio() {
    let m = Metrics::from_params(&params(0.0, 500.0, 3_000_000.0, 2000.0, 25.0));
    assert_eq!(m.cm_pct, 0.0);
}

/// Losses flow through: operating income below zero stays negative
/// after tax rather than being clamped.
#[test]
fn losses_survive_the_tax_line() {
    let m = Metrics::from_params(&params(1000.0, 800.0, 5_000_000.0, 1000.0, 25.0));
    assert!(m.operating_income < 0.0);
    assert!(m.net_income < 0.0);
    assert_eq!(m.net_income, m.operating_income * 0.75);
}
