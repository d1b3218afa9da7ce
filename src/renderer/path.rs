//! Annular sector path generation
//!
//! Converts ring sectors into SVG path `d` attribute strings. Angles are in
//! radians, 0 at 12 o'clock and increasing clockwise (`x = r·sin θ`,
//! `y = −r·cos θ`).

use std::f64::consts::{PI, TAU};

use crate::layout::Point;

/// Sweeps at least this close to a full turn are drawn as closed rings
const FULL_TURN_EPSILON: f64 = 1e-9;

/// A segment in a resolved path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Arc to point with radius and flags
    ArcTo {
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool, // true = clockwise in SVG coordinates (y-down)
    },
    /// Close path back to start
    Close,
}

/// A resolved path ready for SVG rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    /// Convert to SVG path `d` attribute string with `precision` decimals
    pub fn to_svg_d(&self, precision: usize) -> String {
        let num = |value: f64| num(value, precision);
        let mut parts = Vec::with_capacity(self.segments.len());

        for seg in &self.segments {
            parts.push(match seg {
                PathSegment::MoveTo(p) => format!("M{} {}", num(p.x), num(p.y)),
                PathSegment::LineTo(p) => format!("L{} {}", num(p.x), num(p.y)),
                PathSegment::ArcTo {
                    end,
                    radius,
                    large_arc,
                    sweep,
                } => {
                    let large = if *large_arc { 1 } else { 0 };
                    let sw = if *sweep { 1 } else { 0 };
                    // SVG arc: A rx ry x-axis-rotation large-arc-flag sweep-flag x y
                    format!(
                        "A{} {} 0 {} {} {} {}",
                        num(*radius),
                        num(*radius),
                        large,
                        sw,
                        num(end.x),
                        num(end.y)
                    )
                }
                PathSegment::Close => "Z".to_string(),
            });
        }

        parts.join(" ")
    }
}

/// Format a coordinate with `precision` decimals, never as a negative zero
pub fn num(value: f64, precision: usize) -> String {
    let half_step = 0.5 * 10f64.powi(-(precision as i32));
    let value = if value.abs() < half_step { 0.0 } else { value };
    format!("{:.*}", precision, value)
}

/// Point at `angle` on a circle of `radius` around the origin
pub fn arc_point(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.sin(), -radius * angle.cos())
}

/// Ring sector between `inner_radius` and `outer_radius` from `start` to `end`.
///
/// A full turn becomes a closed ring: each circle is two half arcs, the
/// inner one wound the other way so it cuts a hole under the nonzero fill
/// rule. A zero inner radius yields a pie slice or a disc.
pub fn annular_sector(inner_radius: f64, outer_radius: f64, start: f64, end: f64) -> ResolvedPath {
    let sweep_angle = end - start;
    let mut segments = Vec::new();

    if sweep_angle >= TAU - FULL_TURN_EPSILON {
        push_circle(&mut segments, outer_radius, start, true);
        if inner_radius > 0.0 {
            push_circle(&mut segments, inner_radius, start, false);
        }
        return ResolvedPath { segments };
    }

    let large_arc = sweep_angle > PI;
    segments.push(PathSegment::MoveTo(arc_point(outer_radius, start)));
    segments.push(PathSegment::ArcTo {
        end: arc_point(outer_radius, end),
        radius: outer_radius,
        large_arc,
        sweep: true,
    });
    if inner_radius > 0.0 {
        segments.push(PathSegment::LineTo(arc_point(inner_radius, end)));
        segments.push(PathSegment::ArcTo {
            end: arc_point(inner_radius, start),
            radius: inner_radius,
            large_arc,
            sweep: false,
        });
    } else {
        segments.push(PathSegment::LineTo(Point::origin()));
    }
    segments.push(PathSegment::Close);

    ResolvedPath { segments }
}

fn push_circle(segments: &mut Vec<PathSegment>, radius: f64, start: f64, clockwise: bool) {
    let half = if clockwise { PI } else { -PI };
    segments.push(PathSegment::MoveTo(arc_point(radius, start)));
    for end in [start + half, start + 2.0 * half] {
        segments.push(PathSegment::ArcTo {
            end: arc_point(radius, end),
            radius,
            large_arc: false,
            sweep: clockwise,
        });
    }
    segments.push(PathSegment::Close);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arc_convention() {
        let top = arc_point(2.0, 0.0);
        assert_relative_eq!(top.x, 0.0);
        assert_relative_eq!(top.y, -2.0);

        let right = arc_point(2.0, PI / 2.0);
        assert_relative_eq!(right.x, 2.0);
        assert_relative_eq!(right.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_sector_path() {
        let path = annular_sector(1.0, 2.0, 0.0, PI / 2.0);
        insta::assert_snapshot!(
            path.to_svg_d(3),
            @"M0.000 -2.000 A2.000 2.000 0 0 1 2.000 0.000 L1.000 0.000 A1.000 1.000 0 0 0 0.000 -1.000 Z"
        );
    }

    #[test]
    fn test_large_arc_flag() {
        let path = annular_sector(1.0, 2.0, 0.0, 1.5 * PI);
        let PathSegment::ArcTo { large_arc, .. } = &path.segments[1] else {
            panic!("expected arc");
        };
        assert!(large_arc);
    }

    #[test]
    fn test_full_ring_has_two_subpaths() {
        let path = annular_sector(3.0, 4.0, 0.0, TAU);
        let d = path.to_svg_d(3);
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('A').count(), 4);
        assert!(d.starts_with("M0.000 -4.000 A4.000 4.000 0 0 1 0.000 4.000"));
        assert!(d.contains("M0.000 -3.000 A3.000 3.000 0 0 0 0.000 3.000"));
    }

    #[test]
    fn test_pie_slice_from_axis() {
        let path = annular_sector(0.0, 1.0, 0.0, PI / 3.0);
        assert_eq!(path.segments[2], PathSegment::LineTo(Point::origin()));
        assert_eq!(path.segments.len(), 4);
    }

    #[test]
    fn test_negative_zero_is_formatted_as_zero() {
        assert_eq!(num(-0.0, 3), "0.000");
        assert_eq!(num(-1e-12, 3), "0.000");
        assert_eq!(num(-1.25, 3), "-1.250");
        assert_eq!(num(-0.04, 1), "0.0");
    }

    #[test]
    fn test_precision_applies_to_every_segment() {
        let path = annular_sector(1.0, 2.0, 0.0, PI / 2.0);
        assert_eq!(
            path.to_svg_d(1),
            "M0.0 -2.0 A2.0 2.0 0 0 1 2.0 0.0 L1.0 0.0 A1.0 1.0 0 0 0 0.0 -1.0 Z"
        );
    }
}
