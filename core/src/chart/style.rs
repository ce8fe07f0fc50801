//! Read-only chart styling.
//!
//! RULE: style is fixed at compile time and never mutated. Renderers read
//! these constants; nothing writes them.

use crate::scenario::ScenarioKind;
use plotters::style::RGBColor;

pub const BLUE: RGBColor = RGBColor(0x25, 0x63, 0xeb);
pub const ORANGE: RGBColor = RGBColor(0xf9, 0x73, 0x16);
pub const PURPLE: RGBColor = RGBColor(0xa8, 0x55, 0xf7);
pub const GREEN: RGBColor = RGBColor(0x22, 0xc5, 0x5e);
pub const ROSE: RGBColor = RGBColor(0xfb, 0x71, 0x85);

/// Horizontal zero line.
pub const SLATE: RGBColor = RGBColor(0x94, 0xa3, 0xb8);
/// Break-even marker ring.
pub const INK: RGBColor = RGBColor(0x0f, 0x17, 0x2a);
/// Tick and axis label text.
pub const TICK: RGBColor = RGBColor(0x47, 0x55, 0x69);
/// Axis frame.
pub const EDGE: RGBColor = RGBColor(0xcb, 0xd5, 0xe1);

pub const PLOT_BG: RGBColor = RGBColor(0xf8, 0xfa, 0xfc);
pub const GRID: RGBColor = RGBColor(0xe2, 0xe8, 0xf0);

/// Baseline charts render slightly smaller than the scenario
/// comparisons, matching the page layout.
pub const BASELINE_SIZE: (u32, u32) = (980, 588);
pub const SCENARIO_SIZE: (u32, u32) = (1050, 630);

pub const LINE_WIDTH: u32 = 3;

/// Dash geometry for the dashed series (revenue, total cost, zero line).
pub const DASH_SIZE: u32 = 8;
pub const DASH_GAP: u32 = 5;

/// Scenario line colors, fixed per kind.
pub fn scenario_color(kind: ScenarioKind) -> RGBColor {
    match kind {
        ScenarioKind::A => BLUE,
        ScenarioKind::B => ORANGE,
        ScenarioKind::C => GREEN,
    }
}
