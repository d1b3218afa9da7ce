//! Layout engine for computing cable cross-section geometry
//!
//! This module takes a structural description and computes the drawing,
//! producing a CableLayout with positioned primitives in draw order.

pub mod armour;
pub mod compacted;
pub mod config;
pub mod engine;
pub mod error;
pub mod lint;
pub mod positions;
pub mod radius;
pub mod stripes;
pub mod structure;
pub mod types;

pub use armour::armouring_positions;
pub use compacted::{compacted_bundle, compacted_sectors, hexagon_center};
pub use config::LayoutConfig;
pub use engine::compute;
pub use error::LayoutError;
pub use lint::{LintCategory, LintWarning};
pub use positions::{wire_positions, StrandLayout};
pub use radius::{calculate_layer_radius, RadiusTable, LAYER_PITCH};
pub use stripes::{stripe_segments, StripeKind};
pub use structure::{ArmourSpec, InsulationSpec, Process, RingSpec, StructuralConfig, Subtype};
pub use types::*;
