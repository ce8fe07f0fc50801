//! What-if scenarios.
//!
//! The scenario set is a closed enumeration of three fixed adjustment
//! rules — A, B, C — applied to the baseline parameters. It is not a
//! user-extensible collection; matching on `ScenarioKind` is exhaustive
//! by construction.

use crate::{
    metrics::Metrics,
    params::{CvpParams, ScenarioInputs},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    /// Price cut, volume lift (both percentage adjustments).
    A,
    /// Absolute drops to selling price and variable cost, floored at zero.
    B,
    /// Percentage cuts to price and fixed costs, unit volume replaced
    /// outright.
    C,
}

impl ScenarioKind {
    /// Fixed display order.
    pub const ALL: [ScenarioKind; 3] = [ScenarioKind::A, ScenarioKind::B, ScenarioKind::C];

    pub fn key(self) -> &'static str {
        match self {
            ScenarioKind::A => "A",
            ScenarioKind::B => "B",
            ScenarioKind::C => "C",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScenarioKind::A => "Scenario A (price ↓, volume ↑)",
            ScenarioKind::B => "Scenario B (lower price & VC)",
            ScenarioKind::C => "Scenario C (fixed ↓, price ↓)",
        }
    }
}

/// One derived scenario: the adjusted parameter set plus its recomputed
/// metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub kind:    ScenarioKind,
    pub params:  CvpParams,
    pub metrics: Metrics,
}

impl Scenario {
    /// Apply one scenario's adjustment rule to the baseline. The baseline
    /// tax rate carries through unchanged; only the named fields move.
    pub fn derive(kind: ScenarioKind, baseline: &CvpParams, inputs: &ScenarioInputs) -> Self {
        let mut p = baseline.clone();
        match kind {
            ScenarioKind::A => {
                p.selling_price *= 1.0 - inputs.sc_a_price_drop / 100.0;
                p.units_sold *= 1.0 + inputs.sc_a_sales_lift / 100.0;
            }
            ScenarioKind::B => {
                p.selling_price = (p.selling_price - inputs.sc_b_sp_drop).max(0.0);
                p.variable_cost = (p.variable_cost - inputs.sc_b_vc_drop).max(0.0);
            }
            ScenarioKind::C => {
                p.selling_price *= 1.0 - inputs.sc_c_sp_drop / 100.0;
                p.fixed_costs *= 1.0 - inputs.sc_c_fc_drop / 100.0;
                p.units_sold = inputs.sc_c_units;
            }
        }

        let metrics = Metrics::from_params(&p);
        Self { kind, params: p, metrics }
    }

    /// Build all three scenarios in fixed A, B, C order.
    pub fn build_all(baseline: &CvpParams, inputs: &ScenarioInputs) -> [Scenario; 3] {
        ScenarioKind::ALL.map(|kind| Scenario::derive(kind, baseline, inputs))
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}
