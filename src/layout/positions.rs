//! Wire placement within a single layer
//!
//! Small layers (1-4 wires) use closed-form arrangements; 5-8 wires are spread
//! on the layer circle with per-count phase offsets so their seams line up with
//! the layer inside them; larger layers start at angle 0.

use std::f64::consts::{PI, TAU};

use super::radius::RadiusTable;
use super::types::{LayerSpec, Paint, Point, WirePosition};

/// Positions of `count` wires of radius `wire_radius` on a layer of radius `layer_radius`.
///
/// Angles follow the standard convention (`x = r·cos θ`, `y = r·sin θ`).
/// Returns exactly `count` positions; a count of 0 yields none.
pub fn wire_positions(
    wire_radius: f64,
    count: usize,
    layer_radius: f64,
    color: &Paint,
    center: Point,
) -> Vec<WirePosition> {
    let at = |dx: f64, dy: f64| WirePosition::new(center.x + dx, center.y + dy, color.clone());

    match count {
        0 => Vec::new(),
        1 => vec![at(0.0, 0.0)],
        2 => vec![at(0.0, -wire_radius), at(0.0, wire_radius)],
        3 => {
            let h = 3f64.sqrt() * wire_radius;
            vec![
                at(-wire_radius, -h / 3.0),
                at(wire_radius, -h / 3.0),
                at(0.0, h / 1.5),
            ]
        }
        4 => {
            let h = 2f64.sqrt() * wire_radius;
            vec![at(0.0, -h), at(-h, 0.0), at(h, 0.0), at(0.0, h)]
        }
        5 => ring(5, layer_radius, PI / 10.0, color, center),
        6 => ring(6, layer_radius, PI / 6.0, color, center),
        7 => ring(7, layer_radius, PI / 15.0 + PI, color, center),
        8 => ring(8, layer_radius, PI, color, center),
        n => ring(n, layer_radius, 0.0, color, center),
    }
}

/// `count` evenly spaced positions starting at `phase`
pub(crate) fn ring(
    count: usize,
    radius: f64,
    phase: f64,
    color: &Paint,
    center: Point,
) -> Vec<WirePosition> {
    let step = TAU / count as f64;
    (0..count)
        .map(|i| {
            let angle = i as f64 * step + phase;
            WirePosition::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
                color.clone(),
            )
        })
        .collect()
}

/// Every wire of a round-wire strand, innermost layer first
#[derive(Debug, Clone, PartialEq)]
pub struct StrandLayout {
    pub positions: Vec<WirePosition>,
    pub radii: RadiusTable,
}

impl StrandLayout {
    /// Lay out the wires of `layers` with diameter `wire_diameter` around `center`
    pub fn compute(wire_diameter: f64, layers: &LayerSpec, color: &Paint, center: Point) -> Self {
        let wire_radius = wire_diameter / 2.0;
        let radii = RadiusTable::build(wire_radius, layers);
        let positions = layers
            .iter()
            .zip(radii.as_slice())
            .flat_map(|(count, &radius)| wire_positions(wire_radius, count, radius, color, center))
            .collect();

        Self { positions, radii }
    }

    /// Radius of the circle enclosing the outermost layer's wires, plus one wire radius
    pub fn insulated_radius(&self, wire_diameter: f64) -> f64 {
        self.radii.max() + wire_diameter
    }
}
