//! Deterministic blip placement.
//!
//! Technologies carry no stored coordinates, so every render derives them
//! from scratch: a stable identifier is hashed, and the hash picks an angle
//! inside the quadrant's sector and a radius inside the ring's band. The
//! same input list always lands on the same pixels, and a blip only moves
//! when its own identity changes.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use tracing::warn;

use crate::api::types::Technology;

use super::grid::{BLIP_RING_MARGIN, Point, Quadrant, Ring, polar_to_cartesian};

// ── Blips ───────────────────────────────────────────────────────────────────

/// A technology pinned to plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedBlip {
    /// Record id, carried over verbatim from the source item.
    pub id: String,
    /// Display label, carried over verbatim from the source item.
    pub name: String,
    /// Horizontal plot coordinate.
    pub x: f64,
    /// Vertical plot coordinate. Grows downward, as on screen.
    pub y: f64,
}

/// Lay out every recognizable technology as a plotted blip.
///
/// Each blip lands inside its quadrant's sector and its ring's band, at
/// least [`BLIP_RING_MARGIN`] away from both band edges. Items whose
/// quadrant or ring label matches no known category are logged and skipped
/// rather than failing the whole layout. Hash collisions are tolerated;
/// two colliding items simply overlap.
#[must_use]
pub fn place_blips(items: &[Technology]) -> Vec<PlottedBlip> {
    let mut blips = Vec::with_capacity(items.len());
    for (position, tech) in items.iter().enumerate() {
        let (Some(quadrant), Some(ring)) =
            (Quadrant::from_label(&tech.quadrant), Ring::from_label(&tech.ring))
        else {
            warn!(
                name = %tech.name,
                quadrant = %tech.quadrant,
                ring = %tech.ring,
                "radar: unknown category, skipping blip"
            );
            continue;
        };
        let point = place_in(quadrant, ring, stable_hash(&hash_base(tech, quadrant, ring, position)));
        blips.push(PlottedBlip {
            id: tech.id.clone(),
            name: tech.name.clone(),
            x: point.x,
            y: point.y,
        });
    }
    blips
}

// ── Hashing ─────────────────────────────────────────────────────────────────

/// 31-based polynomial hash over UTF-16 code units, accumulated in a
/// wrapping `i32` and folded to its absolute value.
///
/// The exact arithmetic is load-bearing: anything rendering the same data
/// must reproduce these values to plot blips in the same places. Golden
/// tests pin `stable_hash("a") == 97` and `stable_hash("abc") == 96354`.
#[must_use]
pub fn stable_hash(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Hash base for one item: the record id when non-empty, else the name,
/// else a positional fallback built from the category indices.
fn hash_base(tech: &Technology, quadrant: Quadrant, ring: Ring, position: usize) -> String {
    if !tech.id.is_empty() {
        tech.id.clone()
    } else if !tech.name.is_empty() {
        tech.name.clone()
    } else {
        format!("{}-{}-{}", quadrant.index(), ring.index(), position)
    }
}

// ── Placement ───────────────────────────────────────────────────────────────

/// Map a hash to a point inside the quadrant's sector and the ring's band.
///
/// Two sub-values are carved out of the hash. `hash % 1000` spreads the
/// angle across the sector, and `(hash >> 10) % 1000` spreads the radius
/// across the band inset by the margin on both sides.
fn place_in(quadrant: Quadrant, ring: Ring, hash: u32) -> Point {
    let (start, end) = quadrant.sector();
    let angle = start + f64::from(hash % 1000) / 1000.0 * (end - start);

    let (inner, outer) = ring.band();
    let radius = inner
        + BLIP_RING_MARGIN
        + f64::from((hash >> 10) % 1000) / 1000.0 * (outer - inner - 2.0 * BLIP_RING_MARGIN);

    polar_to_cartesian(radius, angle)
}
