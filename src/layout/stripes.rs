//! Longitudinal color stripes on insulation rings

use std::f64::consts::TAU;

use super::types::{Paint, Point, Primitive, Role, Style};

/// Number of angular segments a striped ring is divided into
pub const STRIPE_SEGMENTS: usize = 12;

/// Inner edge of the stripe ring, as a fraction of its outer radius
pub const STRIPE_RING_INNER: f64 = 0.8;

/// Stripe pattern named by an insulation descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeKind {
    Stripe,
    Bistripe,
    Tristripe,
    Quadstripe,
}

impl StripeKind {
    /// Parse a stripe kind name, ignoring case. `"none"` and unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "stripe" => Some(Self::Stripe),
            "bistripe" => Some(Self::Bistripe),
            "tristripe" => Some(Self::Tristripe),
            "quadstripe" => Some(Self::Quadstripe),
            _ => None,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Stripe => 1,
            Self::Bistripe => 2,
            Self::Tristripe => 3,
            Self::Quadstripe => 4,
        }
    }

    /// Whether segment `index` carries the stripe color.
    ///
    /// Marks repeat every `12 / count` segments; this spaces them evenly
    /// rather than drawing `count` contiguous bands.
    pub fn is_stripe_segment(&self, index: usize) -> bool {
        index % (STRIPE_SEGMENTS / self.count()) == 0
    }
}

/// Ring segments from `0.8·radius` to `radius` around `center`, alternating
/// `base` and `stripe` paint.
///
/// Produces nothing when `stripe` is absent or `kind` is not a known stripe kind.
pub fn stripe_segments(
    center: Point,
    radius: f64,
    kind: &str,
    base: &Paint,
    stripe: Option<&Paint>,
) -> Vec<Primitive> {
    let (Some(stripe), Some(kind)) = (stripe, StripeKind::parse(kind)) else {
        return Vec::new();
    };

    let step = TAU / STRIPE_SEGMENTS as f64;
    (0..STRIPE_SEGMENTS)
        .map(|i| {
            let paint = if kind.is_stripe_segment(i) { stripe } else { base };
            Primitive::sector(
                radius * STRIPE_RING_INNER,
                radius,
                i as f64 * step,
                (i + 1) as f64 * step,
                center,
                Role::Stripe,
                Style::filled(paint.clone()),
            )
        })
        .collect()
}
