//! Radar plot geometry and deterministic blip layout.
//!
//! Splits an 800x800 plot into four quadrant sectors crossed with four ring
//! bands, then places each technology inside its cell by hashing a stable
//! identifier. No coordinates are stored anywhere; the same data always
//! renders the same picture. A small spider-chart module covers the
//! per-axis score view.

pub mod chart;
pub mod grid;
pub mod layout;

pub use chart::{AxisValue, ChartAxis, ChartGeometry, chart_geometry};
pub use grid::{PLOT_CENTER, PLOT_SIZE, Point, Quadrant, Ring};
pub use layout::{PlottedBlip, place_blips, stable_hash};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
