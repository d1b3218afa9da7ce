//! SVG generation from cable layouts

use std::collections::BTreeSet;

use tracing::warn;

use crate::layout::{BoundingBox, CableLayout, Point, Primitive, Shape, Style};
use crate::palette::{Gradient, Palette};

use super::path::{annular_sector, num};
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn num(&self, value: f64) -> String {
        num(value, self.config.precision)
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn class_list(&self, kind: &str, classes: &[String]) -> String {
        std::iter::once(kind)
            .chain(classes.iter().map(String::as_str))
            .map(|c| self.config.class_name(c))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Add a radial gradient definition
    pub fn add_gradient(&mut self, gradient: &Gradient) {
        let stops: String = gradient
            .stops
            .iter()
            .map(|s| {
                format!(
                    r#"<stop offset="{}" stop-color="{}"/>"#,
                    escape_xml(&s.offset),
                    escape_xml(&s.color)
                )
            })
            .collect();
        self.defs.push(format!(
            r#"<radialGradient id="{}" cx="{}" cy="{}" r="{}">{}</radialGradient>"#,
            escape_xml(&gradient.id),
            escape_xml(&gradient.cx),
            escape_xml(&gradient.cy),
            escape_xml(&gradient.r),
            stops
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64, classes: &[String], styles: &str) {
        self.elements.push(format!(
            r#"{}<circle class="{}" cx="{}" cy="{}" r="{}"{}/>"#,
            self.indent_str(),
            self.class_list("circle", classes),
            self.num(cx),
            self.num(cy),
            self.num(r),
            styles
        ));
    }

    /// Add a path element, optionally translated
    pub fn add_path(&mut self, d: &str, translate: Point, classes: &[String], styles: &str) {
        let transform = if translate == Point::origin() {
            String::new()
        } else {
            format!(
                r#" transform="translate({}, {})""#,
                self.num(translate.x),
                self.num(translate.y)
            )
        };
        self.elements.push(format!(
            r#"{}<path class="{}" d="{}"{}{}/>"#,
            self.indent_str(),
            self.class_list("path", classes),
            d,
            transform,
            styles
        ));
    }

    /// Add a polygon element
    pub fn add_polygon(&mut self, points: &[Point], classes: &[String], styles: &str) {
        let points_str: String = points
            .iter()
            .map(|p| format!("{},{}", self.num(p.x), self.num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<polygon class="{}" points="{}"{}/>"#,
            self.indent_str(),
            self.class_list("polygon", classes),
            points_str,
            styles
        ));
    }

    /// Add a group element with optional ID and classes
    pub fn start_group(&mut self, id: Option<&str>, classes: &[String]) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            let list: Vec<String> = classes.iter().map(|c| self.config.class_name(c)).collect();
            format!(r#" class="{}""#, list.join(" "))
        };

        self.elements
            .push(format!("{}<g{}{}>", self.indent_str(), id_attr, class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        // SVG root element
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" preserveAspectRatio="xMidYMid meet">"#,
            self.num(vb_x),
            self.num(vb_y),
            self.num(vb_w),
            self.num(vb_h)
        ));
        svg.push_str(nl);

        // Defs section if needed
        if !self.defs.is_empty() {
            let inner = if self.config.pretty_print { "    " } else { "" };
            let outer = if self.config.pretty_print { "  " } else { "" };
            svg.push_str(outer);
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(inner);
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(outer);
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        // Elements
        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a CableLayout to an SVG string
pub fn render_svg(layout: &CableLayout, config: &SvgConfig, palette: &Palette) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    // Gradient definitions, only for the ones actually referenced
    let referenced: BTreeSet<&str> = layout
        .primitives
        .iter()
        .flat_map(|p| p.style.paints())
        .filter_map(|paint| paint.gradient_id())
        .collect();
    for id in referenced {
        match palette.gradient_by_id(id) {
            Some(gradient) => builder.add_gradient(gradient),
            None => warn!(gradient = id, "referenced gradient has no definition"),
        }
    }

    // Consecutive primitives of one core bundle share a group. A shared
    // primitive drawn between two parts of the same core stays inside it.
    let primitives = &layout.primitives;
    let mut open_unit: Option<usize> = None;
    for (index, primitive) in primitives.iter().enumerate() {
        let unit = if config.group_cores {
            primitive
                .unit
                .or_else(|| open_unit.filter(|&open| resumes(&primitives[index + 1..], open)))
        } else {
            None
        };
        if unit != open_unit {
            if open_unit.is_some() {
                builder.end_group();
            }
            if let Some(unit) = unit {
                builder.start_group(Some(&format!("core-{}", unit)), &["core".to_string()]);
            }
            open_unit = unit;
        }
        render_primitive(primitive, config.precision, &mut builder);
    }
    if open_unit.is_some() {
        builder.end_group();
    }

    builder.build(layout.bounds)
}

/// Whether the next primitive that belongs to a core belongs to `unit`
fn resumes(rest: &[Primitive], unit: usize) -> bool {
    rest.iter().find_map(|p| p.unit) == Some(unit)
}

/// Render a single primitive to the builder
fn render_primitive(primitive: &Primitive, precision: usize, builder: &mut SvgBuilder) {
    let styles = format_styles(&primitive.style, precision);
    let classes = vec![primitive.role.as_str().to_string()];

    match &primitive.shape {
        Shape::Circle { center, radius } => {
            builder.add_circle(center.x, center.y, *radius, &classes, &styles);
        }
        Shape::AnnularSector {
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            translate,
        } => {
            let d = annular_sector(*inner_radius, *outer_radius, *start_angle, *end_angle)
                .to_svg_d(precision);
            builder.add_path(&d, *translate, &classes, &styles);
        }
        Shape::Polygon { points } => {
            builder.add_polygon(points, &classes, &styles);
        }
    }
}

/// Convert a style to presentation attributes; a missing fill is `fill="none"`
fn format_styles(style: &Style, precision: usize) -> String {
    let mut parts = vec![];
    match &style.fill {
        Some(fill) => parts.push(format!(r#" fill="{}""#, escape_xml(&fill.to_string()))),
        None => parts.push(r#" fill="none""#.to_string()),
    }
    if let Some(stroke) = &style.stroke {
        parts.push(format!(
            r#" stroke="{}""#,
            escape_xml(&stroke.paint.to_string())
        ));
        parts.push(format!(r#" stroke-width="{}""#, num(stroke.width, precision)));
    }
    parts.join("")
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
