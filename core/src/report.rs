//! Page composition.
//!
//! One self-contained HTML document: the input form (echoing the
//! resolved parameters so the analyst can tweak and resubmit), the
//! baseline metrics, the scenario comparison table, and the four chart
//! images inlined as data URIs. No external assets.

use crate::{
    chart::ChartSet,
    format,
    metrics::Metrics,
    params::ResolvedQuery,
    scenario::Scenario,
};

/// Render the full report page.
pub fn render_page(
    query: &ResolvedQuery,
    baseline: &Metrics,
    scenarios: &[Scenario; 3],
    charts: &ChartSet,
) -> String {
    let p = &query.baseline;
    let s = &query.scenarios;

    let mut baseline_inputs = String::new();
    for (label, name, value) in [
        ("Selling price", "selling_price", p.selling_price),
        ("Variable cost / unit", "variable_cost", p.variable_cost),
        ("Fixed costs", "fixed_costs", p.fixed_costs),
        ("Units sold", "units_sold", p.units_sold),
        ("Tax rate (%)", "tax_rate", p.tax_rate),
        ("Target net income", "target_net_income", query.target_net_income),
    ] {
        baseline_inputs.push_str(&input_field(label, name, value));
    }

    let mut scenario_inputs = String::new();
    for (label, name, value) in [
        ("A: price drop (%)", "scA_price_drop", s.sc_a_price_drop),
        ("A: sales lift (%)", "scA_sales_lift", s.sc_a_sales_lift),
        ("B: SP drop ($)", "scB_sp_drop", s.sc_b_sp_drop),
        ("B: VC drop ($)", "scB_vc_drop", s.sc_b_vc_drop),
        ("C: SP drop (%)", "scC_sp_drop", s.sc_c_sp_drop),
        ("C: FC drop (%)", "scC_fc_drop", s.sc_c_fc_drop),
        ("C: units sold", "scC_units", s.sc_c_units),
    ] {
        scenario_inputs.push_str(&input_field(label, name, value));
    }

    let mut scenario_head = String::new();
    let mut scenario_rows = String::new();
    for sc in scenarios {
        scenario_head.push_str(&format!("<th>{}</th>", escape(sc.label())));
    }
    for (row_label, cell) in scenario_cells(scenarios) {
        scenario_rows.push_str(&format!(
            "<tr><td>{row_label}</td>{cell}</tr>\n"
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>CVP Break-Even Analysis</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box}}
body{{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#f8fafc;color:#0f172a}}
header{{background:#0f172a;color:#fff;padding:24px 32px}}
header h1{{font-size:1.4em;font-weight:500}}
header p{{font-size:0.9em;opacity:0.75;margin-top:4px}}
main{{max-width:1200px;margin:0 auto;padding:24px}}
section{{background:#fff;border-radius:8px;box-shadow:0 1px 3px rgba(15,23,42,0.08);padding:24px;margin-bottom:20px}}
section h3{{font-size:1.1em;margin-bottom:16px;border-bottom:2px solid #e2e8f0;padding-bottom:8px}}
.inputs-grid{{display:grid;grid-template-columns:repeat(auto-fill,minmax(170px,1fr));gap:12px}}
.field label{{display:block;font-size:0.75em;color:#475569;text-transform:uppercase;letter-spacing:0.5px;margin-bottom:4px}}
.field input{{width:100%;padding:6px 8px;border:1px solid #cbd5e1;border-radius:4px;font-size:0.95em}}
form button{{margin-top:16px;padding:8px 24px;background:#2563eb;color:#fff;border:none;border-radius:4px;cursor:pointer;font-size:0.95em}}
.metrics-grid{{display:grid;grid-template-columns:repeat(auto-fill,minmax(170px,1fr));gap:12px}}
.metric{{background:#f8fafc;border-radius:6px;padding:12px;text-align:center}}
.metric .label{{display:block;font-size:0.75em;color:#475569;text-transform:uppercase;letter-spacing:0.5px}}
.metric .value{{display:block;font-size:1.25em;font-weight:600;margin-top:4px}}
table{{width:100%;border-collapse:collapse;font-size:0.9em}}
th,td{{padding:8px 12px;text-align:left;border-bottom:1px solid #e2e8f0}}
th{{background:#f8fafc;font-weight:600}}
.chart-row{{display:grid;grid-template-columns:1fr 1fr;gap:20px;margin-bottom:20px}}
@media(max-width:900px){{.chart-row{{grid-template-columns:1fr}}}}
.chart-box{{background:#fff;border-radius:8px;box-shadow:0 1px 3px rgba(15,23,42,0.08);padding:16px}}
.chart-box h4{{font-size:0.95em;margin-bottom:8px;color:#475569}}
.chart-box img{{width:100%;height:auto}}
footer{{text-align:center;padding:16px;color:#94a3b8;font-size:0.8em}}
</style>
</head>
<body>
<header>
 <h1>CVP Break-Even Analysis</h1>
 <p>Cost-volume-profit report with scenario comparison</p>
</header>
<main>

<section>
<h3>Inputs</h3>
<form method="get" action="/">
<div class="inputs-grid">
{baseline_inputs}
{scenario_inputs}
</div>
<button type="submit">Recalculate</button>
</form>
</section>

<section>
<h3>Baseline Metrics</h3>
<div class="metrics-grid">
 <div class="metric"><span class="label">CM per unit</span><span class="value">{cm_per_unit}</span></div>
 <div class="metric"><span class="label">CM ratio</span><span class="value">{cm_pct}</span></div>
 <div class="metric"><span class="label">Total CM</span><span class="value">{total_cm}</span></div>
 <div class="metric"><span class="label">Operating income</span><span class="value">{operating_income}</span></div>
 <div class="metric"><span class="label">Net income</span><span class="value">{net_income}</span></div>
 <div class="metric"><span class="label">Break-even units</span><span class="value">{breakeven_units}</span></div>
 <div class="metric"><span class="label">Break-even revenue</span><span class="value">{breakeven_revenue}</span></div>
 <div class="metric"><span class="label">Target net income</span><span class="value">{target_net_income}</span></div>
</div>
</section>

<div class="chart-row">
 <div class="chart-box"><h4>Cost structure vs revenue</h4><img src="data:image/png;base64,{cost_img}" alt="Cost and revenue lines"></div>
 <div class="chart-box"><h4>Total contribution margin</h4><img src="data:image/png;base64,{cm_img}" alt="Contribution margin line"></div>
</div>
<div class="chart-row">
 <div class="chart-box"><h4>Operating income by scenario</h4><img src="data:image/png;base64,{scenario_img}" alt="Scenario operating income comparison"></div>
 <div class="chart-box"><h4>Revenue vs total cost by scenario</h4><img src="data:image/png;base64,{scenario_cost_img}" alt="Scenario revenue and cost comparison"></div>
</div>

<section>
<h3>Scenario Comparison</h3>
<table>
<tr><th></th>{scenario_head}</tr>
{scenario_rows}
</table>
</section>

</main>
<footer>Generated by cvp-desk</footer>
</body>
</html>
"#,
        baseline_inputs = baseline_inputs,
        scenario_inputs = scenario_inputs,
        cm_per_unit = format::currency(baseline.cm_per_unit),
        cm_pct = format::percent(baseline.cm_pct),
        total_cm = format::currency(baseline.total_cm),
        operating_income = format::currency(baseline.operating_income),
        net_income = format::currency(baseline.net_income),
        breakeven_units = format::thousands(baseline.breakeven_units),
        breakeven_revenue = format::currency(baseline.breakeven_revenue),
        target_net_income = format::currency(query.target_net_income),
        cost_img = charts.cost_lines,
        cm_img = charts.contribution_margin,
        scenario_img = charts.scenario_income,
        scenario_cost_img = charts.scenario_cost_revenue,
        scenario_head = scenario_head,
        scenario_rows = scenario_rows,
    )
}

/// One labeled numeric input, prefilled with the resolved value.
fn input_field(label: &str, name: &str, value: f64) -> String {
    format!(
        "<div class=\"field\"><label for=\"{name}\">{label}</label>\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></div>\n",
        name = name,
        label = escape(label),
        value = input_value(value),
    )
}

/// Rows of the scenario comparison table: one (label, cells) pair per
/// metric, cells in fixed A, B, C order.
fn scenario_cells(scenarios: &[Scenario; 3]) -> Vec<(&'static str, String)> {
    let row = |f: &dyn Fn(&Scenario) -> String| -> String {
        scenarios
            .iter()
            .map(|sc| format!("<td>{}</td>", f(sc)))
            .collect()
    };

    vec![
        ("Selling price", row(&|sc| format::currency(sc.params.selling_price))),
        ("Variable cost / unit", row(&|sc| format::currency(sc.params.variable_cost))),
        ("Fixed costs", row(&|sc| format::currency(sc.params.fixed_costs))),
        ("Units sold", row(&|sc| format::thousands(sc.params.units_sold))),
        ("CM per unit", row(&|sc| format::currency(sc.metrics.cm_per_unit))),
        ("CM ratio", row(&|sc| format::percent(sc.metrics.cm_pct))),
        ("Total CM", row(&|sc| format::currency(sc.metrics.total_cm))),
        ("Operating income", row(&|sc| format::currency(sc.metrics.operating_income))),
        ("Net income", row(&|sc| format::currency(sc.metrics.net_income))),
        ("Break-even units", row(&|sc| format::thousands(sc.metrics.breakeven_units))),
        ("Break-even revenue", row(&|sc| format::currency(sc.metrics.breakeven_revenue))),
    ]
}

/// Echo a resolved value back into a form field without trailing
/// decimal noise.
fn input_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Minimal HTML escaping for the fixed labels (one of them carries
/// an ampersand).
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
