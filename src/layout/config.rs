//! Configuration for the layout engine

/// Viewport margins and lint tolerances
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Added to the diameter of wire drawing, stranding and insulating views
    pub conductor_padding: f64,

    /// Added to the diameter of laid-up core views
    pub laying_padding: f64,

    /// Added to the diameter of bedding, armouring and sheathing views
    pub outer_padding: f64,

    /// Viewport radius beyond the core when no core layers are given
    pub unlaid_core_margin: f64,

    /// Overlap between two wires tolerated by lint, as a fraction of the smaller radius
    pub overlap_tolerance: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            conductor_padding: 10.0,
            laying_padding: 70.0,
            outer_padding: 40.0,
            unlaid_core_margin: 50.0,
            overlap_tolerance: 0.05,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the conductor view padding
    pub fn with_conductor_padding(mut self, padding: f64) -> Self {
        self.conductor_padding = padding;
        self
    }

    /// Set the laid-up view padding
    pub fn with_laying_padding(mut self, padding: f64) -> Self {
        self.laying_padding = padding;
        self
    }

    /// Set the bedding/armouring/sheathing view padding
    pub fn with_outer_padding(mut self, padding: f64) -> Self {
        self.outer_padding = padding;
        self
    }

    /// Set the lint overlap tolerance
    pub fn with_overlap_tolerance(mut self, tolerance: f64) -> Self {
        self.overlap_tolerance = tolerance;
        self
    }
}
