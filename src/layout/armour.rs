//! Armour wire placement on the outermost ring

use std::f64::consts::PI;

use super::positions::ring;
use super::types::{Paint, Point, WirePosition};

/// Place `count` armour wires of diameter `wire_diameter` on a ring of radius `armour_radius`.
///
/// Up to four wires use fixed symmetric placements evaluated at `armour_radius`
/// (1: top; 2: top and bottom; 3: triangle from +π/2; 4: cross from −π/2).
/// Larger counts delegate to `solver` with a wire radius of `wire_diameter / 2`.
pub fn armouring_positions<F>(
    count: usize,
    wire_diameter: f64,
    armour_radius: f64,
    color: &Paint,
    center: Point,
    solver: F,
) -> Vec<WirePosition>
where
    F: Fn(f64, usize, f64, &Paint, Point) -> Vec<WirePosition>,
{
    let at = |dy: f64| WirePosition::new(center.x, center.y + dy, color.clone());

    match count {
        0 => Vec::new(),
        1 => vec![at(-armour_radius)],
        2 => vec![at(-armour_radius), at(armour_radius)],
        3 => ring(3, armour_radius, PI / 2.0, color, center),
        4 => ring(4, armour_radius, -PI / 2.0, color, center),
        n => solver(wire_diameter / 2.0, n, armour_radius, color, center),
    }
}
