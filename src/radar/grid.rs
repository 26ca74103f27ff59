#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::f64::consts::FRAC_PI_4;

// ── Plot geometry ───────────────────────────────────────────────

/// Width and height of the square blip plot, in logical pixels.
pub const PLOT_SIZE: f64 = 800.0;

/// Plot center offset, applied to both axes.
pub const PLOT_CENTER: f64 = PLOT_SIZE / 2.0;

/// Outer radius of each ring, innermost ring first.
pub const RING_RADII: [f64; 4] = [100.0, 200.0, 300.0, 400.0];

/// Radial inset applied at both ends of a ring band so blips never sit on a
/// ring boundary or the plot center.
pub const BLIP_RING_MARGIN: f64 = 20.0;

// ── Quadrants ───────────────────────────────────────────────────

/// The four fixed topical categories, each owning a 90° angular sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    Techniques,
    Tools,
    Platforms,
    LanguagesAndFrameworks,
}

impl Quadrant {
    /// All quadrants in sector order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Techniques,
        Quadrant::Tools,
        Quadrant::Platforms,
        Quadrant::LanguagesAndFrameworks,
    ];

    /// Position in [`Quadrant::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label, as stored in a technology's `quadrant` field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::Techniques => "Techniques",
            Quadrant::Tools => "Tools",
            Quadrant::Platforms => "Platforms",
            Quadrant::LanguagesAndFrameworks => "Languages & Frameworks",
        }
    }

    /// Parse a stored label. Unknown labels are `None`, not an error.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.label() == label)
    }

    /// Angular sector `[start, end)` owned by this quadrant, in radians.
    ///
    /// Sectors are diagonal-aligned: Techniques spans -45°..45°, and each
    /// following quadrant advances by 90°.
    #[must_use]
    pub fn sector(self) -> (f64, f64) {
        match self {
            Quadrant::Techniques => (-FRAC_PI_4, FRAC_PI_4),
            Quadrant::Tools => (FRAC_PI_4, 3.0 * FRAC_PI_4),
            Quadrant::Platforms => (3.0 * FRAC_PI_4, 5.0 * FRAC_PI_4),
            Quadrant::LanguagesAndFrameworks => (5.0 * FRAC_PI_4, 7.0 * FRAC_PI_4),
        }
    }
}

// ── Rings ───────────────────────────────────────────────────────

/// The four fixed maturity bands. Adopt is innermost: the most proven
/// technologies sit closest to the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    Adopt,
    Trial,
    Assess,
    Hold,
}

impl Ring {
    /// All rings, innermost first.
    pub const ALL: [Ring; 4] = [Ring::Adopt, Ring::Trial, Ring::Assess, Ring::Hold];

    /// Position in [`Ring::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label, as stored in a technology's `ring` field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Ring::Adopt => "Adopt",
            Ring::Trial => "Trial",
            Ring::Assess => "Assess",
            Ring::Hold => "Hold",
        }
    }

    /// Parse a stored label. Unknown labels are `None`, not an error.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }

    /// Radial band `[inner, outer)` owned by this ring.
    #[must_use]
    pub fn band(self) -> (f64, f64) {
        let idx = self.index();
        let inner = if idx == 0 { 0.0 } else { RING_RADII[idx - 1] };
        (inner, RING_RADII[idx])
    }
}

// ── Coordinates ─────────────────────────────────────────────────

/// A point on the blip plot, y growing downward (SVG convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Convert plot-polar coordinates to cartesian, offset to the plot center.
#[must_use]
pub fn polar_to_cartesian(radius: f64, angle: f64) -> Point {
    Point {
        x: PLOT_CENTER + radius * angle.cos(),
        y: PLOT_CENTER + radius * angle.sin(),
    }
}
