//! Cable Section - cross-section drawings of electrical cable constructions
//!
//! This library provides a parser, geometry engine, and renderer for cable
//! structural descriptions: wire drawing, stranding, insulating, laying,
//! bedding, armouring and sheathing.
//!
//! # Example
//!
//! ```rust
//! use cable_section::render;
//!
//! let svg = render(r#"{"processName": "Stranding", "wirediameter": 2.62, "wirelayers": [1, 6, 12]}"#).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod layout;
pub mod palette;
pub mod parser;
pub mod renderer;

pub use error::ParseError;
pub use layout::{
    CableLayout, LayoutConfig, LayoutError, LintCategory, LintWarning, Process, StructuralConfig,
};
pub use palette::{resolve_color, Palette, PaletteError};
pub use parser::parse;
pub use renderer::{render_svg, Renderer, SvgConfig, SvgRenderer};

use thiserror::Error;
use tracing::warn;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while reading the description
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Palette for color resolution
    pub palette: Palette,
    /// Log lint warnings while rendering
    pub lint: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the palette for color resolution
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Enable or disable lint logging
    pub fn with_lint(mut self, lint: bool) -> Self {
        self.lint = lint;
        self
    }
}

/// Parse a description and compute its layout without rendering
pub fn compute_layout(source: &str, config: &RenderConfig) -> Result<CableLayout, RenderError> {
    let structure = parse(source)?;
    layout_structure(&structure, config)
}

/// Compute the layout of an already built structural description
pub fn layout_structure(
    structure: &StructuralConfig,
    config: &RenderConfig,
) -> Result<CableLayout, RenderError> {
    Ok(layout::compute(structure, &config.layout, &config.palette)?)
}

/// Render a JSON description to SVG with default configuration
///
/// This is the main entry point for the library. It parses the source,
/// computes layout, and generates SVG output.
///
/// # Example
///
/// ```rust
/// use cable_section::render;
///
/// let svg = render(r#"{
///     "processName": "Armouring",
///     "wirediameter": 2.0,
///     "wirelayers": [1, 6],
///     "coreLayers": [3],
///     "insulationColor": ["red", "yellow", "blue"],
///     "beddingColor": "gray",
///     "beddingThickness": 1.0,
///     "ArmouringNoofWires": 24,
///     "ArmouringWireDiam": 1.2,
///     "ArmouringColour": "silver"
/// }"#).unwrap();
///
/// assert!(svg.contains("cs-armour"));
/// assert!(svg.contains("cs-bedding"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a JSON description to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use cable_section::{render_with_config, RenderConfig, LayoutConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_conductor_padding(4.0))
///     .with_svg(SvgConfig::default().with_standalone(false));
///
/// let svg = render_with_config(r#"{"processName": "WireDrawing", "outerdiameter": 8.0}"#, config).unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let result = compute_layout(source, &config)?;
    if config.lint {
        for warning in layout::lint::check(&result, config.layout.overlap_tolerance) {
            warn!(category = %warning.category, "{}", warning.message);
        }
    }
    Ok(SvgRenderer::new(config.svg).render(&result, &config.palette))
}

/// Render a JSON description to SVG and run lint checks on the layout
pub fn render_with_lint(
    source: &str,
    config: RenderConfig,
) -> Result<(String, Vec<LintWarning>), RenderError> {
    let result = compute_layout(source, &config)?;
    let warnings = layout::lint::check(&result, config.layout.overlap_tolerance);
    let svg = SvgRenderer::new(config.svg).render(&result, &config.palette);
    Ok((svg, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stranding() {
        let svg = render(
            r#"{"processName": "Stranding", "wirediameter": 2.62, "wirelayers": [1, 6, 12], "drawcolour1": "copperGradient"}"#,
        )
        .unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert_eq!(svg.matches("cs-wire").count(), 19);
        assert!(svg.contains("<radialGradient id=\"radial-copper-gradient\""));
    }

    #[test]
    fn test_render_empty_layers() {
        let svg = render(r#"{"processName": "Insulating", "wirelayers": []}"#).unwrap();
        assert!(svg.contains("<svg"));
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_render_missing_process_name() {
        let err = render(r#"{"wirelayers": [1]}"#).unwrap_err();
        assert!(matches!(err, RenderError::Parse(ParseError::MissingProcessName)));
        assert_eq!(
            err.to_string(),
            "parse error: missing required field: processName"
        );
    }

    #[test]
    fn test_render_zero_wire_layer_error() {
        let err = render(r#"{"processName": "Stranding", "wirediameter": 1, "wirelayers": [1, 0]}"#)
            .unwrap_err();
        assert!(matches!(err, RenderError::Layout(_)));
    }

    #[test]
    fn test_render_with_custom_palette() {
        let palette = Palette::default()
            .merge(Palette::from_str("[colors]\ncopper = \"#b87333\"").unwrap());
        let config = RenderConfig::new().with_palette(palette);
        let svg = render_with_config(
            r#"{"processName": "WireDrawing", "outerdiameter": 4.0, "drawcolour1": "copper"}"#,
            config,
        )
        .unwrap();
        assert!(svg.contains(r##"fill="#b87333""##));
        assert!(svg.contains("cs-rod"));
    }

    #[test]
    fn test_render_with_lint_clean_stranding() {
        let (svg, warnings) = render_with_lint(
            r#"{"processName": "Stranding", "wirediameter": 1.0, "wirelayers": [1, 6, 12, 18]}"#,
            RenderConfig::default(),
        )
        .unwrap();
        assert!(svg.contains("<svg"));
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
    }

    #[test]
    fn test_render_with_config_matches_linted_output() {
        // armour ring with overlapping neighbours
        let source = include_str!("../demos/armouring_round.json");
        let (linted, warnings) = render_with_lint(source, RenderConfig::default()).unwrap();
        assert!(!warnings.is_empty());
        for lint in [false, true] {
            let svg = render_with_config(source, RenderConfig::new().with_lint(lint)).unwrap();
            assert_eq!(svg, linted);
        }
    }

    #[test]
    fn test_layout_structure_direct() {
        let structure = StructuralConfig::new(Process::Stranding).with_wires(1.0, vec![3]);
        let result = layout_structure(&structure, &RenderConfig::default()).unwrap();
        assert_eq!(result.len(), 3);
    }
}
