//! Chart rendering.
//!
//! Four independent renderers, each producing a base64-encoded PNG for
//! inline embedding. Sampling is always 31 evenly spaced points over
//! [0, max_units], and the span never collapses below 1000 units, so a
//! degenerate parameter set still yields a drawable axis.

mod style;
mod text_safe;

use crate::{
    error::{ReportError, ReportResult},
    format,
    params::CvpParams,
    scenario::Scenario,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use text_safe::TextSafeBackend;

pub const UNIT_SAMPLES: usize = 30;
pub const MIN_UNIT_SPAN: f64 = 1000.0;

/// All four report images, in page order.
pub struct ChartSet {
    pub cost_lines: String,
    pub contribution_margin: String,
    pub scenario_income: String,
    pub scenario_cost_revenue: String,
}

impl ChartSet {
    pub fn render(baseline: &CvpParams, scenarios: &[Scenario; 3]) -> ReportResult<Self> {
        Ok(Self {
            cost_lines: render_cost_lines(baseline)?,
            contribution_margin: render_contribution_margin(baseline)?,
            scenario_income: render_scenario_income(scenarios)?,
            scenario_cost_revenue: render_scenario_cost_revenue(scenarios)?,
        })
    }
}

/// 31 evenly spaced sample points from 0 to max(`max_units`, 1000).
pub fn units_range(max_units: f64) -> Vec<f64> {
    let max_units = max_units.max(MIN_UNIT_SPAN);
    let step = max_units / UNIT_SAMPLES as f64;
    (0..=UNIT_SAMPLES).map(|i| i as f64 * step).collect()
}

/// Cost structure of the baseline: fixed, variable, and total cost lines
/// against the revenue line.
pub fn render_cost_lines(params: &CvpParams) -> ReportResult<String> {
    let cm = params.selling_price - params.variable_cost;
    let upper = (params.units_sold * 1.6).max(params.fixed_costs / cm.max(1.0) * 1.3);
    let units = units_range(upper);
    let x_max = upper.max(MIN_UNIT_SPAN);

    let fixed: Vec<(f64, f64)> = units.iter().map(|&u| (u, params.fixed_costs)).collect();
    let variable: Vec<(f64, f64)> = units
        .iter()
        .map(|&u| (u, params.variable_cost * u))
        .collect();
    let total: Vec<(f64, f64)> = units
        .iter()
        .map(|&u| (u, params.fixed_costs + params.variable_cost * u))
        .collect();
    let revenue: Vec<(f64, f64)> = units
        .iter()
        .map(|&u| (u, params.selling_price * u))
        .collect();

    let (y_min, y_max) = padded_range(
        fixed
            .iter()
            .chain(&variable)
            .chain(&total)
            .chain(&revenue)
            .map(|&(_, y)| y),
    );

    let (w, h) = style::BASELINE_SIZE;
    let mut buf = vec![0u8; (w * h * 3) as usize];
    {
        let root =
            TextSafeBackend::new(BitMapBackend::with_buffer(&mut buf, (w, h))).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(16)
            .set_label_area_size(LabelAreaPosition::Left, 84)
            .set_label_area_size(LabelAreaPosition::Bottom, 48)
            .build_cartesian_2d(0f64..x_max, y_min..y_max)
            .map_err(draw_err)?;
        chart.plotting_area().fill(&style::PLOT_BG).map_err(draw_err)?;
        configure_axes(&mut chart, "USD").map_err(draw_err)?;

        let solid = [
            (fixed, "Fixed cost", style::BLUE),
            (variable, "Variable cost", style::ORANGE),
            (total, "Total cost", style::PURPLE),
        ];
        for (line, name, color) in solid {
            chart
                .draw_series(LineSeries::new(line, color.stroke_width(style::LINE_WIDTH)))
                .map_err(draw_err)?
                .label(name)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(style::LINE_WIDTH))
                });
        }
        chart
            .draw_series(DashedLineSeries::new(
                revenue,
                style::DASH_SIZE,
                style::DASH_GAP,
                style::GREEN.stroke_width(style::LINE_WIDTH),
            ))
            .map_err(draw_err)?
            .label("Revenue")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 24, y)], style::GREEN.stroke_width(style::LINE_WIDTH))
            });

        draw_legend(&mut chart, 14).map_err(draw_err)?;
        root.present().map_err(draw_err)?;
    }

    encode_png(&buf, (w, h))
}

/// Total contribution margin against unit volume, baseline only.
pub fn render_contribution_margin(params: &CvpParams) -> ReportResult<String> {
    let cm = params.selling_price - params.variable_cost;
    let units = units_range(params.units_sold * 1.6);
    let x_max = (params.units_sold * 1.6).max(MIN_UNIT_SPAN);

    let line: Vec<(f64, f64)> = units.iter().map(|&u| (u, cm * u)).collect();
    let (y_min, y_max) = padded_range(line.iter().map(|&(_, y)| y));

    let (w, h) = style::BASELINE_SIZE;
    let mut buf = vec![0u8; (w * h * 3) as usize];
    {
        let root =
            TextSafeBackend::new(BitMapBackend::with_buffer(&mut buf, (w, h))).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(16)
            .set_label_area_size(LabelAreaPosition::Left, 84)
            .set_label_area_size(LabelAreaPosition::Bottom, 48)
            .build_cartesian_2d(0f64..x_max, y_min..y_max)
            .map_err(draw_err)?;
        chart.plotting_area().fill(&style::PLOT_BG).map_err(draw_err)?;
        configure_axes(&mut chart, "USD").map_err(draw_err)?;

        chart
            .draw_series(LineSeries::new(line, style::ROSE.stroke_width(style::LINE_WIDTH)))
            .map_err(draw_err)?
            .label("Total contribution margin")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 24, y)], style::ROSE.stroke_width(style::LINE_WIDTH))
            });

        draw_legend(&mut chart, 14).map_err(draw_err)?;
        root.present().map_err(draw_err)?;
    }

    encode_png(&buf, (w, h))
}

/// Operating income per scenario, with each break-even point marked on
/// the zero line.
pub fn render_scenario_income(scenarios: &[Scenario; 3]) -> ReportResult<String> {
    let upper = scenario_units_upper(scenarios);
    let units = units_range(upper);
    let x_max = upper.max(MIN_UNIT_SPAN);

    let lines: Vec<Vec<(f64, f64)>> = scenarios
        .iter()
        .map(|s| {
            let cm = s.params.selling_price - s.params.variable_cost;
            units
                .iter()
                .map(|&u| (u, cm * u - s.params.fixed_costs))
                .collect()
        })
        .collect();
    let (y_min, y_max) = padded_range(lines.iter().flatten().map(|&(_, y)| y));

    let (w, h) = style::SCENARIO_SIZE;
    let mut buf = vec![0u8; (w * h * 3) as usize];
    {
        let root =
            TextSafeBackend::new(BitMapBackend::with_buffer(&mut buf, (w, h))).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(16)
            .set_label_area_size(LabelAreaPosition::Left, 84)
            .set_label_area_size(LabelAreaPosition::Bottom, 48)
            .build_cartesian_2d(0f64..x_max, y_min..y_max)
            .map_err(draw_err)?;
        chart.plotting_area().fill(&style::PLOT_BG).map_err(draw_err)?;
        configure_axes(&mut chart, "Operating income (USD)").map_err(draw_err)?;

        // Zero line first so the scenario lines sit on top of it.
        chart
            .draw_series(DashedLineSeries::new(
                vec![(0.0, 0.0), (x_max, 0.0)],
                style::DASH_SIZE,
                style::DASH_GAP,
                style::SLATE.stroke_width(2),
            ))
            .map_err(draw_err)?;

        for (s, line) in scenarios.iter().zip(lines) {
            let color = style::scenario_color(s.kind);
            chart
                .draw_series(LineSeries::new(line, color.stroke_width(style::LINE_WIDTH)))
                .map_err(draw_err)?
                .label(s.label())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(style::LINE_WIDTH))
                });

            draw_breakeven_marker(
                &mut chart,
                (s.metrics.breakeven_units, 0.0),
                color,
                s,
            )
            .map_err(draw_err)?;
        }

        draw_legend(&mut chart, 12).map_err(draw_err)?;
        root.present().map_err(draw_err)?;
    }

    encode_png(&buf, (w, h))
}

/// Revenue and total cost per scenario; the break-even marker sits on
/// the revenue/cost intersection.
pub fn render_scenario_cost_revenue(scenarios: &[Scenario; 3]) -> ReportResult<String> {
    let upper = scenario_units_upper(scenarios);
    let units = units_range(upper);
    let x_max = upper.max(MIN_UNIT_SPAN);

    let revenue_lines: Vec<Vec<(f64, f64)>> = scenarios
        .iter()
        .map(|s| {
            units
                .iter()
                .map(|&u| (u, s.params.selling_price * u))
                .collect()
        })
        .collect();
    let cost_lines: Vec<Vec<(f64, f64)>> = scenarios
        .iter()
        .map(|s| {
            units
                .iter()
                .map(|&u| (u, s.params.fixed_costs + s.params.variable_cost * u))
                .collect()
        })
        .collect();
    let (y_min, y_max) = padded_range(
        revenue_lines
            .iter()
            .chain(&cost_lines)
            .flatten()
            .map(|&(_, y)| y),
    );

    let (w, h) = style::SCENARIO_SIZE;
    let mut buf = vec![0u8; (w * h * 3) as usize];
    {
        let root =
            TextSafeBackend::new(BitMapBackend::with_buffer(&mut buf, (w, h))).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(16)
            .set_label_area_size(LabelAreaPosition::Left, 84)
            .set_label_area_size(LabelAreaPosition::Bottom, 48)
            .build_cartesian_2d(0f64..x_max, y_min..y_max)
            .map_err(draw_err)?;
        chart.plotting_area().fill(&style::PLOT_BG).map_err(draw_err)?;
        configure_axes(&mut chart, "USD").map_err(draw_err)?;

        for ((s, revenue), cost) in scenarios.iter().zip(revenue_lines).zip(cost_lines) {
            let color = style::scenario_color(s.kind);
            chart
                .draw_series(LineSeries::new(revenue, color.stroke_width(style::LINE_WIDTH)))
                .map_err(draw_err)?
                .label(format!("{} revenue", s.label()))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(style::LINE_WIDTH))
                });
            chart
                .draw_series(DashedLineSeries::new(
                    cost,
                    style::DASH_SIZE,
                    style::DASH_GAP,
                    color.stroke_width(style::LINE_WIDTH),
                ))
                .map_err(draw_err)?
                .label(format!("{} total cost", s.label()))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(style::LINE_WIDTH))
                });

            draw_breakeven_marker(
                &mut chart,
                (s.metrics.breakeven_units, s.metrics.breakeven_revenue),
                color,
                s,
            )
            .map_err(draw_err)?;
        }

        draw_legend(&mut chart, 12).map_err(draw_err)?;
        root.present().map_err(draw_err)?;
    }

    encode_png(&buf, (w, h))
}

fn scenario_units_upper(scenarios: &[Scenario; 3]) -> f64 {
    scenarios.iter().fold(0.0_f64, |acc, s| {
        acc.max(s.params.units_sold * 1.4)
            .max(s.metrics.breakeven_units * 1.6)
    })
}

/// Pad the observed value range by 5% each way. Zero is always inside
/// the range, and a flat range is widened so the axis never degenerates.
fn padded_range<I: IntoIterator<Item = f64>>(ys: I) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for y in ys {
        if y.is_finite() {
            lo = lo.min(y);
            hi = hi.max(y);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }

    let lo = lo.min(0.0);
    let hi = hi.max(0.0);
    let span = hi - lo;
    if span <= f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    (lo - span * 0.05, hi + span * 0.05)
}

fn configure_axes<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    y_desc: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    chart
        .configure_mesh()
        .x_desc("Units sold")
        .y_desc(y_desc)
        .axis_style(style::EDGE)
        .bold_line_style(style::GRID)
        .light_line_style(style::GRID.mix(0.4))
        .label_style(("sans-serif", 15).into_font().color(&style::TICK))
        .axis_desc_style(("sans-serif", 16).into_font().color(&style::INK))
        .x_label_formatter(&|v| format::thousands(*v))
        .y_label_formatter(&|v| format::thousands(*v))
        .draw()
}

fn draw_legend<'a, DB: DrawingBackend + 'a>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    font_size: i32,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.7))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", font_size))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()
}

/// Filled dot with an ink ring, plus its own legend entry, the way the
/// break-even points are called out on both scenario charts.
fn draw_breakeven_marker<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    at: (f64, f64),
    color: RGBColor,
    scenario: &Scenario,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    chart
        .draw_series(std::iter::once(Circle::new(at, 5, color.filled())))?
        .label(format!(
            "B/E {} ({:.0} units, {:.0} USD)",
            scenario.kind.key(),
            scenario.metrics.breakeven_units,
            scenario.metrics.breakeven_revenue
        ))
        .legend(move |(x, y)| Circle::new((x + 12, y), 4, color.filled()));
    chart.draw_series(std::iter::once(Circle::new(at, 7, style::INK.stroke_width(2))))?;
    Ok(())
}

fn draw_err<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Chart(e.to_string())
}

fn encode_png(rgb: &[u8], (width, height): (u32, u32)) -> ReportResult<String> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(rgb, width, height, ColorType::Rgb8)?;
    Ok(STANDARD.encode(&png))
}
