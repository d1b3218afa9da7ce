//! Renderers for cable layouts
//!
//! The layout engine only produces primitives; a [`Renderer`] turns them
//! into an output document. [`SvgRenderer`] produces SVG with CSS classes
//! per primitive role for styling.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;

use crate::layout::CableLayout;
use crate::palette::Palette;

/// Turns a computed layout into an output document
pub trait Renderer {
    type Output;

    fn render(&self, layout: &CableLayout, palette: &Palette) -> Self::Output;
}

/// SVG string renderer
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    pub config: SvgConfig,
}

impl SvgRenderer {
    pub fn new(config: SvgConfig) -> Self {
        Self { config }
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&self, layout: &CableLayout, palette: &Palette) -> String {
        render_svg(layout, &self.config, palette)
    }
}
