//! Core types for the geometry engine

use std::fmt;

use serde::Serialize;

/// A 2D point in the diagram's local coordinate system (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The cable axis
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Distance from the origin
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Shift this point by the coordinates of `offset`
    pub fn offset_by(&self, offset: Point) -> Point {
        Point::new(self.x + offset.x, self.y + offset.y)
    }
}

/// A bounding box representing the spatial extent of the diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Square viewport of side `size` centered on the origin
    pub fn centered_square(size: f64) -> Self {
        Self::new(-size / 2.0, -size / 2.0, size, size)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// A resolved paint: either a literal CSS color or a reference to a
/// gradient definition emitted by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Paint {
    Color(String),
    Gradient(String),
}

impl Paint {
    pub fn color(value: impl Into<String>) -> Self {
        Self::Color(value.into())
    }

    pub fn white() -> Self {
        Self::color("white")
    }

    pub fn black() -> Self {
        Self::color("black")
    }

    /// Transparent paint, used for placement-only positions
    pub fn none() -> Self {
        Self::color("none")
    }

    /// Gradient id when this paint references one
    pub fn gradient_id(&self) -> Option<&str> {
        match self {
            Paint::Gradient(id) => Some(id),
            Paint::Color(_) => None,
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Color(c) => write!(f, "{}", c),
            Paint::Gradient(id) => write!(f, "url(#{})", id),
        }
    }
}

/// Ordered wire counts per concentric layer, index 0 = innermost
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LayerSpec(Vec<usize>);

impl LayerSpec {
    pub fn new(counts: Vec<usize>) -> Self {
        Self(counts)
    }

    pub fn counts(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wire count of the innermost layer
    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// True when the innermost layer is one wire (drawn as a hexagon when compacted)
    pub fn has_single_center(&self) -> bool {
        self.first() == Some(1)
    }

    pub fn total_wires(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<usize>> for LayerSpec {
    fn from(counts: Vec<usize>) -> Self {
        Self::new(counts)
    }
}

/// The center and paint of one drawable wire
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WirePosition {
    pub x: f64,
    pub y: f64,
    pub color: Paint,
}

impl WirePosition {
    pub fn new(x: f64, y: f64, color: Paint) -> Self {
        Self { x, y, color }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Stroke paint and width
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
}

/// Fill and stroke of a primitive. A missing fill renders as `fill="none"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Style {
    pub fill: Option<Paint>,
    pub stroke: Option<Stroke>,
}

impl Style {
    pub fn filled(paint: Paint) -> Self {
        Self {
            fill: Some(paint),
            stroke: None,
        }
    }

    pub fn outlined(paint: Paint, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke { paint, width }),
        }
    }

    pub fn with_stroke(mut self, paint: Paint, width: f64) -> Self {
        self.stroke = Some(Stroke { paint, width });
        self
    }

    /// Every paint this style references
    pub fn paints(&self) -> impl Iterator<Item = &Paint> {
        self.fill
            .iter()
            .chain(self.stroke.as_ref().map(|s| &s.paint))
    }
}

/// What a primitive depicts in the cable construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Drawn rod of the wire drawing stage
    Rod,
    /// Round conductor wire
    Wire,
    /// One flattened wire of a compacted layer
    Sector,
    /// Single compacted center wire
    Hexagon,
    Insulation,
    /// White fill between insulation and conductor
    Cavity,
    Stripe,
    Bedding,
    Armour,
    Sheath,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Rod => "rod",
            Role::Wire => "wire",
            Role::Sector => "sector",
            Role::Hexagon => "hexagon",
            Role::Insulation => "insulation",
            Role::Cavity => "cavity",
            Role::Stripe => "stripe",
            Role::Bedding => "bedding",
            Role::Armour => "armour",
            Role::Sheath => "sheath",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry of a drawable primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
    },
    /// Ring sector between two radii. Angles are in radians, measured
    /// clockwise from 12 o'clock, around the local `translate` origin.
    AnnularSector {
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        translate: Point,
    },
    Polygon {
        points: Vec<Point>,
    },
}

impl Shape {
    /// Distance from the origin to the farthest point of the shape
    pub fn reach(&self) -> f64 {
        match self {
            Shape::Circle { center, radius } => center.magnitude() + radius,
            Shape::AnnularSector {
                outer_radius,
                translate,
                ..
            } => translate.magnitude() + outer_radius,
            Shape::Polygon { points } => points
                .iter()
                .map(Point::magnitude)
                .fold(0.0, f64::max),
        }
    }
}

/// The sole output unit of the layout engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primitive {
    pub shape: Shape,
    pub style: Style,
    pub role: Role,
    /// Index of the core bundle this primitive belongs to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<usize>,
}

impl Primitive {
    pub fn circle(center: Point, radius: f64, role: Role, style: Style) -> Self {
        Self {
            shape: Shape::Circle { center, radius },
            style,
            role,
            unit: None,
        }
    }

    pub fn sector(
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        translate: Point,
        role: Role,
        style: Style,
    ) -> Self {
        Self {
            shape: Shape::AnnularSector {
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                translate,
            },
            style,
            role,
            unit: None,
        }
    }

    /// A closed ring between two radii around `center`
    pub fn ring(center: Point, inner_radius: f64, outer_radius: f64, role: Role, style: Style) -> Self {
        Self::sector(
            inner_radius,
            outer_radius,
            0.0,
            std::f64::consts::TAU,
            center,
            role,
            style,
        )
    }

    pub fn polygon(points: Vec<Point>, role: Role, style: Style) -> Self {
        Self {
            shape: Shape::Polygon { points },
            style,
            role,
            unit: None,
        }
    }

    /// Tag this primitive as part of core bundle `unit`
    pub fn in_unit(mut self, unit: usize) -> Self {
        self.unit = Some(unit);
        self
    }
}

/// The complete layout of one cable cross-section
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CableLayout {
    /// Primitives in draw order
    pub primitives: Vec<Primitive>,
    /// Square viewport centered on the cable axis
    pub bounds: BoundingBox,
}

impl CableLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn extend(&mut self, primitives: impl IntoIterator<Item = Primitive>) {
        self.primitives.extend(primitives);
    }

    /// Set a square viewport of side `size` centered on the origin
    pub fn set_viewport(&mut self, size: f64) {
        self.bounds = BoundingBox::centered_square(size);
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Primitives depicting `role`, in draw order
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.role == role)
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.with_role(role).count()
    }
}
