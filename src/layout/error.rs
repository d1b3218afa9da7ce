//! Error types for the layout engine

use thiserror::Error;

/// Inputs the geometry cannot be computed for
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A layer with no wires would divide the circle by zero
    #[error("layer {layer} of '{field}' has no wires")]
    EmptyLayer { field: &'static str, layer: usize },

    /// A diameter or thickness that is negative, zero where it must not be, or not finite
    #[error("invalid value {value} for '{field}'")]
    InvalidDimension { field: &'static str, value: f64 },
}

impl LayoutError {
    pub fn empty_layer(field: &'static str, layer: usize) -> Self {
        Self::EmptyLayer { field, layer }
    }

    pub fn invalid_dimension(field: &'static str, value: f64) -> Self {
        Self::InvalidDimension { field, value }
    }

    /// Name of the input field at fault
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyLayer { field, .. } | Self::InvalidDimension { field, .. } => field,
        }
    }
}
