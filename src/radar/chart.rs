//! Spider-chart geometry for per-axis scores.
//!
//! Turns a list of named values in `[0, 1]` into render-ready coordinates:
//! one spoke per value, concentric grid rings, and a closed outline through
//! the scaled vertices. Everything is origin-centered; axis angles run
//! clockwise from twelve o'clock, so the first axis always points straight
//! up and the y axis grows downward as on screen.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::PI;

use super::grid::Point;

// ── Proportions ─────────────────────────────────────────────────────────────

/// Default chart edge length when the caller has no size preference.
pub const DEFAULT_CHART_SIZE: f64 = 400.0;

/// Number of concentric grid rings.
pub const GRID_LEVELS: u32 = 5;

/// Axis lines extend past the rim by this factor.
const AXIS_OVERSHOOT: f64 = 1.1;

/// Labels sit past the axis line ends by this factor.
const LABEL_OVERSHOOT: f64 = 1.15;

// ── Input ───────────────────────────────────────────────────────────────────

/// One named score to plot, with `value` in `[0, 1]`.
///
/// Values outside the domain are mapped linearly all the same; a score of
/// `1.2` lands past the rim rather than clamping to it.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisValue {
    pub name: String,
    pub value: f64,
}

// ── Geometry ────────────────────────────────────────────────────────────────

/// One spoke of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartAxis {
    /// Axis label, carried over from the input.
    pub name: String,
    /// Clockwise angle from twelve o'clock, in radians.
    pub angle: f64,
    /// Far end of the axis line, just past the rim.
    pub line_end: Point,
    /// Anchor point for the axis label, past the line end.
    pub label_anchor: Point,
}

/// Full chart geometry for one list of scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    /// Rim radius: half the smaller chart dimension.
    pub radius: f64,
    /// Angle between adjacent axes, in radians.
    pub angle_slice: f64,
    /// Radii of the concentric grid rings, innermost first.
    pub grid_radii: Vec<f64>,
    /// One spoke per input value, in input order.
    pub axes: Vec<ChartAxis>,
    /// Scaled vertex per input value, in input order. Closing the polygon
    /// is left to the renderer.
    pub outline: Vec<Point>,
}

/// Compute the chart geometry for `samples` within a `width` by `height`
/// viewport centered on the origin.
///
/// An empty sample list yields a geometry with no axes and no outline; the
/// rim radius and grid radii still describe the viewport.
#[must_use]
pub fn chart_geometry(samples: &[AxisValue], width: f64, height: f64) -> ChartGeometry {
    let radius = width.min(height) / 2.0;
    let grid_radii = (1..=GRID_LEVELS)
        .map(|level| radius * f64::from(level) / f64::from(GRID_LEVELS))
        .collect();

    if samples.is_empty() {
        return ChartGeometry {
            radius,
            angle_slice: 0.0,
            grid_radii,
            axes: Vec::new(),
            outline: Vec::new(),
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let angle_slice = 2.0 * PI / samples.len() as f64;

    let mut axes = Vec::with_capacity(samples.len());
    let mut outline = Vec::with_capacity(samples.len());
    for (index, sample) in samples.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let angle = angle_slice * index as f64;
        axes.push(ChartAxis {
            name: sample.name.clone(),
            angle,
            line_end: radial_point(radius * AXIS_OVERSHOOT, angle),
            label_anchor: radial_point(radius * LABEL_OVERSHOOT, angle),
        });
        outline.push(radial_point(radius * sample.value, angle));
    }

    ChartGeometry { radius, angle_slice, grid_radii, axes, outline }
}

/// Point at `radius` along the spoke at `angle`, clockwise from twelve
/// o'clock around the origin.
fn radial_point(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.sin(), -radius * angle.cos())
}
