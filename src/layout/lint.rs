//! Lint engine for detecting layout defects in cable drawings.
//!
//! Runs after assembly to check for mechanical issues: wires of the same
//! bundle overlapping beyond the packing tolerance, and primitives reaching
//! outside the viewport.

use std::collections::BTreeMap;
use std::fmt;

use super::types::{CableLayout, Point, Primitive, Role, Shape};

/// A lint warning about a layout defect
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Overlap,
    Bounds,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Bounds => write!(f, "bounds"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Run all lint checks on a completed layout.
///
/// `overlap_tolerance` is the overlap allowed between two wires, as a
/// fraction of the smaller radius.
pub fn check(layout: &CableLayout, overlap_tolerance: f64) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_overlaps(layout, overlap_tolerance, &mut warnings);
    check_bounds(layout, &mut warnings);
    warnings
}

/// Display name for a primitive: its role, bundle and position in draw order
fn display_name(index: usize, primitive: &Primitive) -> String {
    match primitive.unit {
        Some(unit) => format!("{} #{} of core {}", primitive.role, index, unit),
        None => format!("{} #{}", primitive.role, index),
    }
}

// ── Overlap detection ─────────────────────────────────────────────

fn is_wire(role: Role) -> bool {
    matches!(role, Role::Wire | Role::Armour)
}

fn check_overlaps(layout: &CableLayout, tolerance: f64, warnings: &mut Vec<LintWarning>) {
    // wires are only compared within their own bundle
    let mut bundles: BTreeMap<(Option<usize>, &'static str), Vec<(usize, Point, f64)>> =
        BTreeMap::new();

    for (index, primitive) in layout.primitives.iter().enumerate() {
        if !is_wire(primitive.role) {
            continue;
        }
        if let Shape::Circle { center, radius } = &primitive.shape {
            bundles
                .entry((primitive.unit, primitive.role.as_str()))
                .or_default()
                .push((index, *center, *radius));
        }
    }

    for circles in bundles.values() {
        for (i, &(index_a, center_a, radius_a)) in circles.iter().enumerate() {
            for &(index_b, center_b, radius_b) in &circles[i + 1..] {
                let overlap = radius_a + radius_b - center_a.distance_to(center_b);
                if overlap > tolerance * radius_a.min(radius_b) {
                    let name_a = display_name(index_a, &layout.primitives[index_a]);
                    let name_b = display_name(index_b, &layout.primitives[index_b]);
                    warnings.push(LintWarning {
                        category: LintCategory::Overlap,
                        message: format!("{} and {} overlap by {:.3}", name_a, name_b, overlap),
                    });
                }
            }
        }
    }
}

// ── Viewport bounds ───────────────────────────────────────────────

/// Farthest extent of a primitive including half its stroke
fn painted_reach(primitive: &Primitive) -> f64 {
    let stroke = primitive.style.stroke.as_ref().map_or(0.0, |s| s.width / 2.0);
    primitive.shape.reach() + stroke
}

fn check_bounds(layout: &CableLayout, warnings: &mut Vec<LintWarning>) {
    let half = layout.bounds.width.min(layout.bounds.height) / 2.0;

    for (index, primitive) in layout.primitives.iter().enumerate() {
        let reach = painted_reach(primitive);
        if reach > half + 1e-9 {
            warnings.push(LintWarning {
                category: LintCategory::Bounds,
                message: format!(
                    "{} reaches {:.3} from the axis, outside the viewport half-width {:.3}",
                    display_name(index, primitive),
                    reach,
                    half
                ),
            });
        }
    }
}
