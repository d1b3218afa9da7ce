//! Compacted conductors: solid sectors instead of discrete round wires

use std::f64::consts::{PI, TAU};

use super::types::{LayerSpec, Paint, Point, Primitive, Role, Style};

/// Outline width of sectors and the hexagonal center
pub const OUTLINE_WIDTH: f64 = 0.1;

/// Corner radius of the hexagonal center for a wire of diameter `wire_diameter`
pub fn hexagon_corner_radius(wire_diameter: f64) -> f64 {
    wire_diameter / (PI / 6.0).cos()
}

fn outlined(paint: &Paint) -> Style {
    Style::filled(paint.clone()).with_stroke(Paint::black(), OUTLINE_WIDTH)
}

/// The single compacted center wire, seen as a hexagon around `center`
pub fn hexagon_center(center: Point, wire_diameter: f64, paint: &Paint) -> Primitive {
    let corner_radius = hexagon_corner_radius(wire_diameter);
    let points = (0..6)
        .map(|i| {
            let angle = PI / 3.0 * i as f64 - PI / 6.0;
            Point::new(
                center.x + corner_radius * angle.cos(),
                center.y + corner_radius * angle.sin(),
            )
        })
        .collect();

    Primitive::polygon(points, Role::Hexagon, outlined(paint))
}

/// One ring of equal sectors per layer, translated to `center`.
///
/// Layer `k` spans radii `k·D ..= (k+1)·D`; every layer starts its sectors at
/// angle 0. A one-wire innermost layer is skipped (see [`hexagon_center`]).
pub fn compacted_sectors(
    layers: &LayerSpec,
    wire_diameter: f64,
    center: Point,
    paint: &Paint,
) -> Vec<Primitive> {
    let mut sectors = Vec::with_capacity(layers.total_wires());

    for (layer_index, count) in layers.iter().enumerate() {
        if (layer_index == 0 && count == 1) || count == 0 {
            continue;
        }

        let inner_radius = layer_index as f64 * wire_diameter;
        let outer_radius = (layer_index + 1) as f64 * wire_diameter;
        let step = TAU / count as f64;

        for i in 0..count {
            let start = i as f64 * step;
            sectors.push(Primitive::sector(
                inner_radius,
                outer_radius,
                start,
                start + step,
                center,
                Role::Sector,
                outlined(paint),
            ));
        }
    }

    sectors
}

/// Sectors followed by the hexagonal center when the innermost layer is one wire
pub fn compacted_bundle(
    layers: &LayerSpec,
    wire_diameter: f64,
    center: Point,
    paint: &Paint,
) -> Vec<Primitive> {
    let mut primitives = compacted_sectors(layers, wire_diameter, center, paint);
    if layers.has_single_center() {
        primitives.push(hexagon_center(center, wire_diameter, paint));
    }
    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::Shape;
    use approx::assert_relative_eq;

    fn copper() -> Paint {
        Paint::color("#b87333")
    }

    #[test]
    fn test_hexagon_corner_radius() {
        let hex = hexagon_center(Point::origin(), 2.0, &copper());
        let Shape::Polygon { points } = &hex.shape else {
            panic!("expected polygon, got {:?}", hex.shape);
        };
        assert_eq!(points.len(), 6);
        for p in points {
            assert_relative_eq!(p.magnitude(), 2.0 / (PI / 6.0).cos(), epsilon = 1e-12);
        }
        assert_eq!(hex.role, Role::Hexagon);
    }

    #[test]
    fn test_single_center_layer_has_no_sectors() {
        let layers = LayerSpec::from(vec![1, 6, 12]);
        let sectors = compacted_sectors(&layers, 2.0, Point::origin(), &copper());
        assert_eq!(sectors.len(), 18);
        assert!(sectors.iter().all(|s| match &s.shape {
            Shape::AnnularSector { inner_radius, .. } => *inner_radius >= 2.0,
            _ => false,
        }));
    }

    #[test]
    fn test_sector_radii_and_angles() {
        let layers = LayerSpec::from(vec![3, 8]);
        let sectors = compacted_sectors(&layers, 1.5, Point::new(2.0, 3.0), &copper());
        assert_eq!(sectors.len(), 11);

        let Shape::AnnularSector {
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            translate,
        } = &sectors[4].shape
        else {
            panic!("expected sector");
        };
        // second layer, second sector
        assert_eq!(*inner_radius, 1.5);
        assert_eq!(*outer_radius, 3.0);
        assert_relative_eq!(*start_angle, TAU / 8.0);
        assert_relative_eq!(*end_angle, 2.0 * TAU / 8.0);
        assert_eq!(*translate, Point::new(2.0, 3.0));

        // first layer starts at the axis
        let Shape::AnnularSector { inner_radius, .. } = &sectors[0].shape else {
            panic!("expected sector");
        };
        assert_eq!(*inner_radius, 0.0);
    }

    #[test]
    fn test_bundle_appends_hexagon_last() {
        let bundle = compacted_bundle(&LayerSpec::from(vec![1, 6]), 2.0, Point::origin(), &copper());
        assert_eq!(bundle.len(), 7);
        assert_eq!(bundle.last().map(|p| p.role), Some(Role::Hexagon));

        let no_center = compacted_bundle(&LayerSpec::from(vec![2, 8]), 2.0, Point::origin(), &copper());
        assert!(no_center.iter().all(|p| p.role == Role::Sector));
    }
}
