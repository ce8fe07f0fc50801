//! Query parameter resolution.
//!
//! RULE: resolution never fails. Every recognized key has a documented
//! default; a missing, empty, or unparsable value silently falls back to
//! it. The leniency is deliberate — the report always renders, whatever
//! the analyst pastes into the URL.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default values for every recognized query key.
pub mod defaults {
    // Baseline inputs
    pub const SELLING_PRICE: f64 = 3000.0;
    pub const VARIABLE_COST: f64 = 500.0;
    pub const FIXED_COSTS: f64 = 3_000_000.0;
    pub const TARGET_NET_INCOME: f64 = 1_500_000.0;
    pub const TAX_RATE: f64 = 25.0;
    pub const UNITS_SOLD: f64 = 2000.0;

    // Scenario adjustment knobs
    pub const SC_A_PRICE_DROP: f64 = 20.0;
    pub const SC_A_SALES_LIFT: f64 = 11.0;
    pub const SC_B_VC_DROP: f64 = 50.0;
    pub const SC_B_SP_DROP: f64 = 250.0;
    pub const SC_C_FC_DROP: f64 = 20.0;
    pub const SC_C_SP_DROP: f64 = 10.0;
    pub const SC_C_UNITS: f64 = 1700.0;
}

/// The five baseline inputs every formula consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvpParams {
    pub selling_price: f64,
    pub variable_cost: f64,
    pub fixed_costs:   f64,
    pub units_sold:    f64,
    pub tax_rate:      f64,
}

impl Default for CvpParams {
    fn default() -> Self {
        Self {
            selling_price: defaults::SELLING_PRICE,
            variable_cost: defaults::VARIABLE_COST,
            fixed_costs:   defaults::FIXED_COSTS,
            units_sold:    defaults::UNITS_SOLD,
            tax_rate:      defaults::TAX_RATE,
        }
    }
}

/// Scenario adjustment knobs. Percentages are expressed as 0–100 values,
/// drops as absolute amounts, `sc_c_units` as an outright replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    pub sc_a_price_drop: f64,
    pub sc_a_sales_lift: f64,
    pub sc_b_vc_drop:    f64,
    pub sc_b_sp_drop:    f64,
    pub sc_c_fc_drop:    f64,
    pub sc_c_sp_drop:    f64,
    pub sc_c_units:      f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            sc_a_price_drop: defaults::SC_A_PRICE_DROP,
            sc_a_sales_lift: defaults::SC_A_SALES_LIFT,
            sc_b_vc_drop:    defaults::SC_B_VC_DROP,
            sc_b_sp_drop:    defaults::SC_B_SP_DROP,
            sc_c_fc_drop:    defaults::SC_C_FC_DROP,
            sc_c_sp_drop:    defaults::SC_C_SP_DROP,
            sc_c_units:      defaults::SC_C_UNITS,
        }
    }
}

/// Everything the page needs out of the query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuery {
    pub baseline:          CvpParams,
    pub scenarios:         ScenarioInputs,
    pub target_net_income: f64,
}

/// Parse one named float out of the query map, falling back to `default`
/// on a missing, empty, or unparsable value.
pub fn resolve_float(query: &HashMap<String, String>, key: &str, default: f64) -> f64 {
    match query.get(key) {
        None => default,
        Some(raw) if raw.is_empty() => default,
        Some(raw) => match raw.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                log::debug!("query key {key}={raw:?} is not a number, using default {default}");
                default
            }
        },
    }
}

impl ResolvedQuery {
    /// Resolve the full recognized key set against the raw query map.
    /// Unrecognized keys are ignored.
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let baseline = CvpParams {
            selling_price: resolve_float(query, "selling_price", defaults::SELLING_PRICE),
            variable_cost: resolve_float(query, "variable_cost", defaults::VARIABLE_COST),
            fixed_costs:   resolve_float(query, "fixed_costs", defaults::FIXED_COSTS),
            units_sold:    resolve_float(query, "units_sold", defaults::UNITS_SOLD),
            tax_rate:      resolve_float(query, "tax_rate", defaults::TAX_RATE),
        };

        let scenarios = ScenarioInputs {
            sc_a_price_drop: resolve_float(query, "scA_price_drop", defaults::SC_A_PRICE_DROP),
            sc_a_sales_lift: resolve_float(query, "scA_sales_lift", defaults::SC_A_SALES_LIFT),
            sc_b_vc_drop:    resolve_float(query, "scB_vc_drop", defaults::SC_B_VC_DROP),
            sc_b_sp_drop:    resolve_float(query, "scB_sp_drop", defaults::SC_B_SP_DROP),
            sc_c_fc_drop:    resolve_float(query, "scC_fc_drop", defaults::SC_C_FC_DROP),
            sc_c_sp_drop:    resolve_float(query, "scC_sp_drop", defaults::SC_C_SP_DROP),
            sc_c_units:      resolve_float(query, "scC_units", defaults::SC_C_UNITS),
        };

        Self {
            baseline,
            scenarios,
            target_net_income: resolve_float(query, "target_net_income", defaults::TARGET_NET_INCOME),
        }
    }
}
