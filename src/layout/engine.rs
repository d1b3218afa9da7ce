//! Composite layer assembly
//!
//! Walks a cable construction from the innermost wire outward: conductor
//! wires, the insulated core bundle, laid-up cores, bedding, armour and
//! sheath. Each nesting level derives its outer radius and feeds it to the
//! next one. Everything is computed around the origin; the viewport is a
//! centered square.

use tracing::{debug, debug_span};

use crate::palette::Palette;

use super::armour::armouring_positions;
use super::compacted::compacted_bundle;
use super::config::LayoutConfig;
use super::error::LayoutError;
use super::positions::{wire_positions, StrandLayout};
use super::radius::calculate_layer_radius;
use super::stripes::stripe_segments;
use super::structure::{InsulationSpec, Process, StructuralConfig, Subtype};
use super::types::{CableLayout, Paint, Point, Primitive, Role, Style, WirePosition};

/// Growth of a compacted core's insulation over the round-wire estimate
pub const COMPACTED_CORE_GROWTH: f64 = 1.1;

/// Core layer spacing per unit of insulation thickness, compacted cores
const COMPACTED_THICKNESS_SPACING: f64 = 1.8;

/// Extra spacing between compacted cores
const COMPACTED_CORE_SPACING: f64 = 1.11;

/// Outward shift of the bedding ring around compacted cores
const COMPACTED_BEDDING_SHIFT: f64 = 2.5;

/// Compute the layout of a structural description
pub fn compute(
    structure: &StructuralConfig,
    config: &LayoutConfig,
    palette: &Palette,
) -> Result<CableLayout, LayoutError> {
    structure.validate()?;

    let _span = debug_span!("layout", process = %structure.process).entered();
    let assembler = Assembler::new(structure, config, palette);

    let layout = match structure.process {
        Process::WireDrawing => assembler.wire_drawing(),
        _ if structure.layers.is_empty() => {
            debug!("no wire layers, nothing to draw");
            CableLayout::new()
        }
        process if process.lays_cores() => assembler.laid_up(),
        Process::Stranding => assembler.stranding(),
        _ => assembler.insulating(),
    };

    debug!(primitives = layout.len(), size = layout.bounds.width, "layout complete");
    Ok(layout)
}

/// An insulated core: conductor wires around the origin plus its outer radius
#[derive(Debug, Clone)]
struct CoreBundle {
    strand: StrandLayout,
    /// Outer radius of the insulated core
    radius: f64,
}

/// Placement of the core bundles at the laying level
#[derive(Debug, Clone, Default)]
struct CoreLayup {
    centers: Vec<Point>,
    layer_radii: Vec<f64>,
}

impl CoreLayup {
    /// Distance of the last placed core from the axis
    fn core_distance(&self) -> f64 {
        self.centers.last().map(Point::magnitude).unwrap_or(0.0)
    }
}

struct Assembler<'a> {
    structure: &'a StructuralConfig,
    config: &'a LayoutConfig,
    palette: &'a Palette,
    wire_paint: Paint,
}

impl<'a> Assembler<'a> {
    fn new(structure: &'a StructuralConfig, config: &'a LayoutConfig, palette: &'a Palette) -> Self {
        Self {
            structure,
            config,
            palette,
            wire_paint: palette.resolve(&structure.wire_color),
        }
    }

    fn diameter(&self) -> f64 {
        self.structure.wire_diameter
    }

    fn wire_radius(&self) -> f64 {
        self.structure.wire_diameter / 2.0
    }

    fn compacted(&self) -> bool {
        self.structure.subtype.is_compacted()
    }

    fn strand(&self) -> StrandLayout {
        StrandLayout::compute(
            self.diameter(),
            &self.structure.layers,
            &self.wire_paint,
            Point::origin(),
        )
    }

    fn round_wires<'w>(
        &self,
        wires: &'w [WirePosition],
        offset: Point,
    ) -> impl Iterator<Item = Primitive> + 'w {
        let radius = self.wire_radius();
        wires.iter().map(move |w| {
            Primitive::circle(
                w.center().offset_by(offset),
                radius,
                Role::Wire,
                Style::filled(w.color.clone()),
            )
        })
    }

    fn stripes(&self, center: Point, radius: f64, insulation: &InsulationSpec) -> Vec<Primitive> {
        if !insulation.striped {
            return Vec::new();
        }
        let base = self.palette.resolve(&insulation.default_color);
        let stripe = insulation.stripe_color().map(|c| self.palette.resolve(c));
        stripe_segments(
            center,
            radius,
            insulation.stripe_kind_name(),
            &base,
            stripe.as_ref(),
        )
    }

    fn wire_drawing(&self) -> CableLayout {
        let mut layout = CableLayout::new();
        let diameter = self.structure.outer_diameter;
        if diameter > 0.0 {
            layout.push(Primitive::circle(
                Point::origin(),
                diameter / 2.0,
                Role::Rod,
                Style::filled(self.wire_paint.clone()),
            ));
        }
        layout.set_viewport(diameter + self.config.conductor_padding);
        layout
    }

    fn stranding(&self) -> CableLayout {
        let layers = &self.structure.layers;
        let mut layout = CableLayout::new();

        if self.compacted() {
            layout.extend(compacted_bundle(
                layers,
                self.diameter(),
                Point::origin(),
                &self.wire_paint,
            ));
        } else {
            let strand = self.strand();
            debug!(radii = ?strand.radii.as_slice(), wires = strand.positions.len(), "stranded conductor");
            layout.extend(self.round_wires(&strand.positions, Point::origin()));
        }

        let size = 2.0 * (layers.len() + 1) as f64 * self.diameter();
        layout.set_viewport(size + self.config.conductor_padding);
        layout
    }

    fn insulating(&self) -> CableLayout {
        let structure = self.structure;
        let thickness = structure.thickness;
        let strand = self.strand();
        let outer_radius = strand.insulated_radius(self.diameter());
        let main = structure.insulation_for(0);
        let origin = Point::origin();
        let mut layout = CableLayout::new();

        debug!(radii = ?strand.radii.as_slice(), outer_radius, subtype = ?structure.subtype, "insulated conductor");

        match structure.subtype {
            Subtype::Compacted => {
                let outermost_wire = strand.radii.outermost().unwrap_or(0.0) + self.wire_radius();
                let padding = if thickness > 0.0 {
                    thickness * 1.2
                } else {
                    self.wire_radius() * 1.5
                };
                layout.extend(compacted_bundle(
                    &structure.layers,
                    self.diameter(),
                    origin,
                    &self.wire_paint,
                ));
                layout.extend(self.stripes(origin, (outermost_wire + padding) * 1.27, &main));
            }
            Subtype::Filled => {
                layout.extend(self.insulation_ring(outer_radius - thickness));
                layout.push(Primitive::circle(
                    origin,
                    outer_radius,
                    Role::Insulation,
                    Style::filled(self.palette.resolve(&structure.filled_color)),
                ));
                layout.push(self.cavity(origin, outer_radius - self.diameter() - 0.25));
                for info in &structure.insulation {
                    layout.extend(self.stripes(origin, outer_radius + 0.5, info));
                }
            }
            Subtype::Blank => {
                let adjusted = strand.radii.max() + self.wire_radius();
                layout.extend(self.insulation_ring(adjusted));
                for info in &structure.insulation {
                    layout.extend(self.stripes(origin, adjusted + thickness + 0.5, info));
                }
            }
            Subtype::Round => {}
        }

        if !self.compacted() {
            layout.extend(self.round_wires(&strand.positions, origin));
        }

        let size = 2.0 * structure.layers.len() as f64 * self.diameter();
        layout.set_viewport(size + self.config.conductor_padding);
        layout
    }

    /// Insulation annulus of the first descriptor's color from `inner` outward by the thickness
    fn insulation_ring(&self, inner: f64) -> Option<Primitive> {
        let thickness = self.structure.thickness;
        let color = self
            .structure
            .insulation
            .first()
            .map(|i| i.default_color.as_str())
            .filter(|c| !c.is_empty())?;
        if thickness <= 0.0 {
            return None;
        }
        Some(Primitive::ring(
            Point::origin(),
            inner,
            inner + thickness,
            Role::Insulation,
            Style::filled(self.palette.resolve(color)),
        ))
    }

    fn cavity(&self, center: Point, radius: f64) -> Primitive {
        Primitive::circle(center, radius, Role::Cavity, Style::filled(Paint::white()))
    }

    fn core_bundle(&self) -> CoreBundle {
        let strand = self.strand();
        let radius = strand.insulated_radius(self.diameter());
        debug!(radii = ?strand.radii.as_slice(), radius, "core bundle");
        CoreBundle { strand, radius }
    }

    /// Place every core bundle, treating each core as one wire of the bundle's radius
    fn lay_up(&self, bundle: &CoreBundle) -> CoreLayup {
        let core_layers = self.structure.core_layers.counts();
        let thickness = self.structure.thickness;
        let mut layup = CoreLayup::default();

        for (index, &count) in core_layers.iter().enumerate() {
            let (previous_radius, previous_count) = match index {
                0 => (0.0, 0),
                _ => (layup.layer_radii[index - 1], core_layers[index - 1]),
            };

            let (layer_radius, spacing) = if self.compacted() {
                let adjusted = bundle.radius * COMPACTED_CORE_GROWTH;
                let unit = adjusted + thickness * COMPACTED_THICKNESS_SPACING;
                let single = if count > 1 { 1.0 } else { 0.8 };
                (
                    calculate_layer_radius(unit, index, count, previous_radius, previous_count),
                    bundle
                        .radius
                        .max((adjusted + thickness) * COMPACTED_CORE_SPACING * single),
                )
            } else {
                (
                    calculate_layer_radius(bundle.radius, index, count, previous_radius, previous_count),
                    bundle.radius,
                )
            };

            debug!(layer = index, cores = count, layer_radius, spacing, "core layer");
            layup.layer_radii.push(layer_radius);
            layup.centers.extend(
                wire_positions(spacing, count, layer_radius, &Paint::none(), Point::origin())
                    .iter()
                    .map(WirePosition::center),
            );
        }

        layup
    }

    /// Laying, bedding, armouring and sheathing views
    fn laid_up(&self) -> CableLayout {
        let structure = self.structure;
        let process = structure.process;
        let bundle = self.core_bundle();
        let layup = self.lay_up(&bundle);
        let mut layout = CableLayout::new();

        if process == Process::Laying {
            self.draw_cores(&bundle, &layup, None, &mut layout);
            let layout_radius = match layup.layer_radii.last() {
                Some(&radius) => radius,
                None => bundle.radius + self.config.unlaid_core_margin,
            };
            layout.set_viewport(layout_radius * 2.0 + self.config.laying_padding);
            return layout;
        }

        let bedding_thickness = structure.bedding.thickness;
        let bedding_radius = layup.core_distance() + bundle.radius + bedding_thickness / 2.0;
        let bedding_end = bedding_radius + bedding_thickness / 2.0;
        let ring_radius = if self.compacted() {
            bedding_radius + COMPACTED_BEDDING_SHIFT
        } else {
            bedding_radius
        };
        let bedding = (bedding_thickness > 0.0).then(|| {
            Primitive::circle(
                Point::origin(),
                ring_radius,
                Role::Bedding,
                Style::outlined(self.palette.resolve(&structure.bedding.color), bedding_thickness),
            )
        });
        debug!(bedding_radius, bedding_end, "bedding");

        self.draw_cores(&bundle, &layup, bedding, &mut layout);

        // outer edge of the last drawn feature, and the radius the viewport encloses
        let mut outermost = ring_radius + bedding_thickness / 2.0;
        let mut view_radius = outermost;

        let armoured = match process {
            Process::Armouring => true,
            Process::Sheathing => structure.armour.count > 0,
            _ => false,
        };
        if armoured {
            let diameter = structure.armour.wire_diameter;
            let armour_radius = self.draw_armour(bedding_end, &mut layout);
            outermost = armour_radius + diameter;
            view_radius = armour_radius + diameter * 2.0;
        }

        if process == Process::Sheathing {
            let thickness = structure.sheath.thickness;
            if thickness > 0.0 {
                layout.push(Primitive::circle(
                    Point::origin(),
                    outermost + thickness / 2.0,
                    Role::Sheath,
                    Style::outlined(self.palette.resolve(&structure.sheath.color), thickness),
                ));
            }
            view_radius = view_radius.max(outermost + thickness);
        }

        layout.set_viewport(view_radius * 2.0 + self.config.outer_padding);
        layout
    }

    /// Draw the armour wires outside `bedding_end`; returns the armour ring radius
    fn draw_armour(&self, bedding_end: f64, layout: &mut CableLayout) -> f64 {
        let armour = &self.structure.armour;
        let diameter = armour.wire_diameter;
        // Compacted cores are not perfectly round and need the wider clearance
        let clearance = if self.compacted() {
            diameter * diameter
        } else {
            diameter * 0.0
        };
        let armour_radius = bedding_end + clearance + diameter;
        let paint = self.palette.resolve(&armour.color);

        let positions = armouring_positions(
            armour.count,
            diameter,
            armour_radius,
            &paint,
            Point::origin(),
            wire_positions,
        );
        debug!(armour_radius, wires = positions.len(), "armour");

        layout.extend(positions.iter().map(|w| {
            Primitive::circle(w.center(), diameter, Role::Armour, Style::filled(w.color.clone()))
        }));

        armour_radius
    }

    /// Draw every core: insulation disc, bedding (once, after the first disc),
    /// stripes, then the conductor
    fn draw_cores(
        &self,
        bundle: &CoreBundle,
        layup: &CoreLayup,
        mut bedding: Option<Primitive>,
        layout: &mut CableLayout,
    ) {
        let structure = self.structure;
        let thickness = structure.thickness;
        let diameter = self.diameter();

        for (index, &center) in layup.centers.iter().enumerate() {
            let insulation = structure.insulation_for(index);
            let base = self.palette.resolve(&insulation.default_color);
            let mut core = Vec::new();

            if self.compacted() {
                let adjusted = bundle.radius * COMPACTED_CORE_GROWTH;
                core.push(Primitive::circle(
                    center,
                    adjusted + thickness,
                    Role::Insulation,
                    Style::filled(base.clone()).with_stroke(base, thickness * 1.5),
                ));
                core.extend(bedding.take());
                core.extend(self.stripes(center, adjusted + thickness + 0.7, &insulation));
                core.extend(compacted_bundle(
                    &structure.layers,
                    diameter,
                    center,
                    &self.wire_paint,
                ));
            } else {
                core.push(Primitive::circle(
                    center,
                    bundle.radius,
                    Role::Insulation,
                    Style::filled(base),
                ));
                core.extend(bedding.take());
                core.extend(self.stripes(center, bundle.radius, &insulation));
                let cavity = if structure.insulation_type == "blank" {
                    bundle.radius - diameter + 1.3
                } else {
                    bundle.radius - diameter - 0.25
                };
                core.push(self.cavity(center, cavity));
                core.extend(self.round_wires(&bundle.strand.positions, center));
            }

            layout.extend(core.into_iter().map(|p| match p.role {
                Role::Bedding => p,
                _ => p.in_unit(index),
            }));
        }

        // no cores to follow
        layout.extend(bedding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::Shape;
    use approx::assert_relative_eq;

    fn compute_default(structure: &StructuralConfig) -> CableLayout {
        compute(structure, &LayoutConfig::default(), &Palette::default()).expect("layout")
    }

    fn circle_of(p: &Primitive) -> (Point, f64) {
        match &p.shape {
            Shape::Circle { center, radius } => (*center, *radius),
            other => panic!("expected circle, got {:?}", other),
        }
    }

    #[test]
    fn test_round_stranding_nineteen_wires() {
        let structure = StructuralConfig::new(Process::Stranding)
            .with_wires(2.62, vec![1, 6, 12])
            .with_wire_color("copperGradient");
        let layout = compute_default(&structure);

        assert_eq!(layout.count_role(Role::Wire), 19);
        let outer = layout
            .with_role(Role::Wire)
            .map(|p| circle_of(p).0.magnitude())
            .fold(0.0, f64::max);
        assert_relative_eq!(outer, 1.98 * 1.31 + 1.98 * 1.31, epsilon = 1e-9);
        // viewport: 2 * (layers + 1) * D + padding
        assert_relative_eq!(layout.bounds.width, 2.0 * 4.0 * 2.62 + 10.0);
        assert_eq!(
            layout.primitives[0].style.fill,
            Some(Paint::Gradient("radial-copper-gradient".to_string()))
        );
    }

    #[test]
    fn test_compacted_stranding_has_hexagon_and_sectors() {
        let structure = StructuralConfig::new(Process::Stranding)
            .with_subtype(Subtype::Compacted)
            .with_wires(2.0, vec![1, 6, 12]);
        let layout = compute_default(&structure);

        assert_eq!(layout.count_role(Role::Sector), 18);
        assert_eq!(layout.count_role(Role::Hexagon), 1);
        assert_eq!(layout.count_role(Role::Wire), 0);
    }

    #[test]
    fn test_empty_layers_produce_no_primitives() {
        for process in [Process::Stranding, Process::Insulating, Process::Armouring] {
            let layout = compute_default(&StructuralConfig::new(process));
            assert!(layout.is_empty(), "{} should be empty", process);
        }
    }

    #[test]
    fn test_wire_drawing_rod() {
        let mut structure = StructuralConfig::new(Process::WireDrawing).with_wire_color("red");
        structure.outer_diameter = 7.86;
        let layout = compute_default(&structure);
        assert_eq!(layout.len(), 1);
        let (center, radius) = circle_of(&layout.primitives[0]);
        assert_eq!(center, Point::origin());
        assert_relative_eq!(radius, 3.93);
        assert_relative_eq!(layout.bounds.width, 17.86);
    }

    #[test]
    fn test_blank_insulation_draw_order() {
        let structure = StructuralConfig::new(Process::Insulating)
            .with_subtype(Subtype::Blank)
            .with_wires(2.0, vec![1, 6])
            .with_thickness(0.8)
            .with_insulation(vec![InsulationSpec {
                default_color: "red".to_string(),
                striped: true,
                stripe_kind: Some("stripe".to_string()),
                stripe_color: Some("yellow".to_string()),
            }]);
        let layout = compute_default(&structure);
        let roles: Vec<Role> = layout.primitives.iter().map(|p| p.role).collect();

        // the ring sits under the stripes
        assert_eq!(roles[0], Role::Insulation);
        assert_eq!(&roles[1..13], &[Role::Stripe; 12]);
        assert_eq!(&roles[13..], &[Role::Wire; 7]);

        let Shape::AnnularSector {
            inner_radius,
            outer_radius,
            ..
        } = &layout.primitives[0].shape
        else {
            panic!("expected ring");
        };
        let adjusted = 1.98 + 1.0;
        assert_relative_eq!(*inner_radius, adjusted);
        assert_relative_eq!(*outer_radius, adjusted + 0.8);
    }

    #[test]
    fn test_filled_insulation_layers() {
        let mut structure = StructuralConfig::new(Process::Insulating)
            .with_subtype(Subtype::Filled)
            .with_wires(2.0, vec![1, 6])
            .with_thickness(0.5)
            .with_insulation(vec![InsulationSpec::plain("blue")]);
        structure.filled_color = "gray".to_string();
        let layout = compute_default(&structure);

        let outer_radius = 1.98 + 2.0;
        let roles: Vec<Role> = layout.primitives.iter().map(|p| p.role).collect();
        assert_eq!(
            &roles[..3],
            &[Role::Insulation, Role::Insulation, Role::Cavity]
        );
        // insulation ring first, hidden under the filled disc
        let Shape::AnnularSector { inner_radius, .. } = &layout.primitives[0].shape else {
            panic!("expected ring");
        };
        assert_relative_eq!(*inner_radius, outer_radius - 0.5);
        let (_, disc) = circle_of(&layout.primitives[1]);
        assert_relative_eq!(disc, outer_radius);
        let (_, cavity) = circle_of(&layout.primitives[2]);
        assert_relative_eq!(cavity, outer_radius - 2.0 - 0.25);
        assert_eq!(layout.count_role(Role::Wire), 7);
        assert_eq!(layout.count_role(Role::Stripe), 0);
    }

    #[test]
    fn test_compacted_insulation_stripes_scaled() {
        let structure = StructuralConfig::new(Process::Insulating)
            .with_subtype(Subtype::Compacted)
            .with_wires(2.0, vec![1, 6])
            .with_thickness(1.0)
            .with_insulation(vec![InsulationSpec {
                default_color: "black".to_string(),
                striped: true,
                stripe_kind: Some("bistripe".to_string()),
                stripe_color: Some("green".to_string()),
            }]);
        let layout = compute_default(&structure);
        assert_eq!(layout.count_role(Role::Stripe), 12);

        let final_outer = 1.98 + 1.0 + 1.2;
        let stripe = layout.with_role(Role::Stripe).next().expect("stripe");
        let Shape::AnnularSector { outer_radius, .. } = &stripe.shape else {
            panic!("expected sector");
        };
        assert_relative_eq!(*outer_radius, final_outer * 1.27);
    }

    #[test]
    fn test_laying_seven_cores() {
        let structure = StructuralConfig::new(Process::Laying)
            .with_wires(2.62, vec![1, 6])
            .with_core_layers(vec![1, 6])
            .with_thickness(1.2);
        let layout = compute_default(&structure);

        let bundle_radius = 1.98 * 1.31 + 2.62;
        let insulation: Vec<(Point, f64)> = layout.with_role(Role::Insulation).map(circle_of).collect();
        assert_eq!(insulation.len(), 7);
        assert_eq!(insulation[0].0, Point::origin());
        for (center, radius) in &insulation[1..] {
            assert_relative_eq!(center.magnitude(), 1.98 * bundle_radius, epsilon = 1e-9);
            assert_relative_eq!(*radius, bundle_radius);
        }
        assert_eq!(layout.count_role(Role::Wire), 49);
        assert_eq!(layout.count_role(Role::Cavity), 7);
        assert_eq!(layout.count_role(Role::Bedding), 0);
        assert_relative_eq!(layout.bounds.width, 2.0 * 1.98 * bundle_radius + 70.0, epsilon = 1e-9);

        // missing descriptors default to black
        assert_eq!(layout.primitives[0].style.fill, Some(Paint::black()));
        assert!(layout
            .primitives
            .iter()
            .filter(|p| p.role == Role::Wire)
            .all(|p| p.unit.is_some()));
    }

    #[test]
    fn test_only_core_processes_lay_up_cores() {
        for process in Process::ALL {
            let structure = StructuralConfig::new(process)
                .with_wires(1.0, vec![1])
                .with_core_layers(vec![3])
                .with_thickness(0.5);
            let layout = compute_default(&structure);
            let wires = layout.count_role(Role::Wire);
            match process {
                Process::WireDrawing => assert_eq!(wires, 0, "{}", process),
                process if process.lays_cores() => {
                    assert_eq!(wires, 3, "{}", process);
                    assert_eq!(layout.count_role(Role::Insulation), 3, "{}", process);
                }
                _ => assert_eq!(wires, 1, "{}", process),
            }
        }
    }

    #[test]
    fn test_armouring_round_cores() {
        let structure = StructuralConfig::new(Process::Armouring)
            .with_wires(2.0, vec![1, 6])
            .with_core_layers(vec![3])
            .with_bedding("gray", 1.0)
            .with_armour(20, 1.5, "silver");
        let layout = compute_default(&structure);

        let bundle_radius = 1.98 + 2.0;
        let core_distance = bundle_radius / (std::f64::consts::PI / 3.0).sin();
        let bedding_radius = core_distance + bundle_radius + 0.5;
        let armour_radius = bedding_radius + 0.5 + 1.5;

        let bedding: Vec<&Primitive> = layout.with_role(Role::Bedding).collect();
        assert_eq!(bedding.len(), 1);
        assert_relative_eq!(circle_of(bedding[0]).1, bedding_radius, epsilon = 1e-9);
        assert_eq!(bedding[0].style.fill, None);
        assert_eq!(bedding[0].unit, None);

        let armour: Vec<(Point, f64)> = layout.with_role(Role::Armour).map(circle_of).collect();
        assert_eq!(armour.len(), 20);
        for (center, radius) in &armour {
            assert_relative_eq!(center.magnitude(), armour_radius, epsilon = 1e-9);
            assert_eq!(*radius, 1.5);
        }
        assert_relative_eq!(
            layout.bounds.width,
            2.0 * (armour_radius + 3.0) + 40.0,
            epsilon = 1e-9
        );

        // bedding follows the first core's insulation disc
        assert_eq!(layout.primitives[0].role, Role::Insulation);
        assert_eq!(layout.primitives[1].role, Role::Bedding);
    }

    #[test]
    fn test_armouring_compacted_clearance() {
        let structure = StructuralConfig::new(Process::Armouring)
            .with_subtype(Subtype::Compacted)
            .with_wires(2.0, vec![1, 6])
            .with_core_layers(vec![1])
            .with_thickness(0.2)
            .with_bedding("gray", 1.0)
            .with_armour(3, 2.0, "silver");
        let layout = compute_default(&structure);

        let bundle_radius = 1.98 + 2.0;
        let bedding_end = bundle_radius + 1.0;
        let armour_radius = bedding_end + 4.0 + 2.0;
        for (center, _) in layout.with_role(Role::Armour).map(circle_of) {
            assert_relative_eq!(center.magnitude(), armour_radius, epsilon = 1e-9);
        }

        let bedding = layout.with_role(Role::Bedding).next().expect("bedding");
        assert_relative_eq!(circle_of(bedding).1, bundle_radius + 0.5 + 2.5, epsilon = 1e-9);

        let disc = layout.with_role(Role::Insulation).next().expect("insulation");
        let (_, radius) = circle_of(disc);
        assert_relative_eq!(radius, bundle_radius * 1.1 + 0.2);
        assert_eq!(disc.style.stroke.as_ref().map(|s| s.width), Some(0.2 * 1.5));
        assert_eq!(layout.count_role(Role::Hexagon), 1);
        assert_eq!(layout.count_role(Role::Sector), 6);
    }

    #[test]
    fn test_sheathing_encloses_armour() {
        let structure = StructuralConfig::new(Process::Sheathing)
            .with_wires(1.0, vec![1, 6])
            .with_core_layers(vec![1, 6])
            .with_bedding("gray", 0.5)
            .with_armour(30, 0.8, "silver")
            .with_sheath("black", 2.0);
        let layout = compute_default(&structure);

        let sheath = layout.with_role(Role::Sheath).next().expect("sheath");
        let (_, ring_radius) = circle_of(sheath);
        let armour_reach = layout
            .with_role(Role::Armour)
            .map(|p| p.shape.reach())
            .fold(0.0, f64::max);
        // inner edge of the sheath touches the armour
        assert_relative_eq!(ring_radius - 1.0, armour_reach, epsilon = 1e-9);
        assert_eq!(layout.primitives.last().map(|p| p.role), Some(Role::Sheath));
    }

    #[test]
    fn test_sheathing_without_armour_wraps_bedding() {
        let structure = StructuralConfig::new(Process::Sheathing)
            .with_wires(1.0, vec![1, 6])
            .with_core_layers(vec![3])
            .with_bedding("gray", 0.5)
            .with_sheath("black", 2.0);
        let layout = compute_default(&structure);

        assert_eq!(layout.count_role(Role::Armour), 0);
        let bedding = layout.with_role(Role::Bedding).next().expect("bedding");
        let (_, bedding_radius) = circle_of(bedding);
        let sheath = layout.with_role(Role::Sheath).next().expect("sheath");
        let (_, sheath_radius) = circle_of(sheath);
        assert_relative_eq!(sheath_radius - 1.0, bedding_radius + 0.25, epsilon = 1e-9);
        assert_relative_eq!(layout.bounds.width, 2.0 * (bedding_radius + 0.25 + 2.0) + 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bedding_without_cores_is_still_drawn() {
        let structure = StructuralConfig::new(Process::Bedding)
            .with_wires(1.0, vec![1, 6])
            .with_bedding("gray", 1.0);
        let layout = compute_default(&structure);
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.primitives[0].role, Role::Bedding);
    }

    #[test]
    fn test_zero_wire_layer_is_rejected() {
        let structure = StructuralConfig::new(Process::Stranding).with_wires(1.0, vec![1, 0]);
        let result = compute(&structure, &LayoutConfig::default(), &Palette::default());
        assert!(matches!(result, Err(LayoutError::EmptyLayer { layer: 1, .. })));
    }
}
