//! Packing radius of concentric wire layers

use std::f64::consts::PI;

use super::types::LayerSpec;

/// Radial pitch between successive layers, in wire radii.
///
/// Slightly under 2 so that adjacent layers touch without a visible gap.
pub const LAYER_PITCH: f64 = 1.98;

/// Radius of layer `layer_index` holding `wire_count` wires of radius `wire_radius`.
///
/// The innermost layer is sized so its wires are mutually tangent around the
/// center; every outer layer sits one pitch outside the previous one.
pub fn calculate_layer_radius(
    wire_radius: f64,
    layer_index: usize,
    wire_count: usize,
    previous_layer_radius: f64,
    _previous_layer_wire_count: usize,
) -> f64 {
    if layer_index == 0 {
        match wire_count {
            1 => 0.0,
            2 => wire_radius,
            n => wire_radius / (PI / n as f64).sin(),
        }
    } else {
        previous_layer_radius + LAYER_PITCH * wire_radius
    }
}

/// Per-layer radii, built innermost first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadiusTable {
    radii: Vec<f64>,
}

impl RadiusTable {
    /// Compute the radius of every layer in `layers`
    pub fn build(wire_radius: f64, layers: &LayerSpec) -> Self {
        let counts = layers.counts();
        let mut radii: Vec<f64> = Vec::with_capacity(counts.len());

        for (index, &count) in counts.iter().enumerate() {
            let (previous_radius, previous_count) = match index {
                0 => (0.0, 0),
                _ => (radii[index - 1], counts[index - 1]),
            };
            radii.push(calculate_layer_radius(
                wire_radius,
                index,
                count,
                previous_radius,
                previous_count,
            ));
        }

        Self { radii }
    }

    pub fn radius(&self, layer_index: usize) -> Option<f64> {
        self.radii.get(layer_index).copied()
    }

    /// Radius of the outermost layer
    pub fn outermost(&self) -> Option<f64> {
        self.radii.last().copied()
    }

    /// Largest layer radius (0 for an empty table)
    pub fn max(&self) -> f64 {
        self.radii.iter().copied().fold(0.0, f64::max)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.radii
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }
}
