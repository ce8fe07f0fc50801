//! Closed-form CVP metrics.
//!
//! Pure functions of the baseline parameters. Degenerate economics
//! (contribution margin or price at or below zero) yield zeroed ratios
//! instead of errors — there is no failure path.

use crate::params::CvpParams;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Contribution margin per unit: what each sale leaves after
    /// variable cost.
    pub cm_per_unit: f64,
    pub total_cm: f64,
    /// CM as a fraction of the selling price (0..1).
    pub cm_pct: f64,
    pub operating_income: f64,
    pub net_income: f64,
    /// Unit volume at which operating income crosses zero. Zero when the
    /// contribution margin is non-positive.
    pub breakeven_units: f64,
    pub breakeven_revenue: f64,
}

impl Metrics {
    pub fn from_params(p: &CvpParams) -> Self {
        let cm_per_unit = p.selling_price - p.variable_cost;
        let total_cm = cm_per_unit * p.units_sold;
        let operating_income = total_cm - p.fixed_costs;
        let net_income = operating_income * (1.0 - p.tax_rate / 100.0);

        let breakeven_units = if cm_per_unit > 0.0 {
            p.fixed_costs / cm_per_unit
        } else {
            0.0
        };
        let breakeven_revenue = breakeven_units * p.selling_price;

        let cm_pct = if p.selling_price > 0.0 {
            cm_per_unit / p.selling_price
        } else {
            0.0
        };

        Self {
            cm_per_unit,
            total_cm,
            cm_pct,
            operating_income,
            net_income,
            breakeven_units,
            breakeven_revenue,
        }
    }
}
