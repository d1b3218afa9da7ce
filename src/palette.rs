//! Paint resolution for conductor, insulation and armour colors
//!
//! Color names from a cable description are resolved in order: palette
//! aliases, literal CSS colors, named gradients, and finally opaque white.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::layout::Paint;

/// Paint used for names that resolve to nothing
pub const FALLBACK_PAINT: &str = "rgb(255, 255, 255)";

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// One color stop of a gradient
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradientStop {
    pub offset: String,
    pub color: String,
}

/// A radial gradient definition
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Gradient {
    /// Element id referenced by `url(#id)`
    pub id: String,
    #[serde(default = "Gradient::default_extent")]
    pub cx: String,
    #[serde(default = "Gradient::default_extent")]
    pub cy: String,
    #[serde(default = "Gradient::default_extent")]
    pub r: String,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    fn default_extent() -> String {
        "50%".to_string()
    }
}

/// Named colors and gradients available to cable descriptions
#[derive(Debug, Clone)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Aliases: name -> color or gradient name
    pub colors: HashMap<String, String>,
    /// Gradients by the name descriptions use (e.g. `copperGradient`)
    pub gradients: BTreeMap<String, Gradient>,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
    #[serde(default)]
    gradients: BTreeMap<String, Gradient>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Built-in palette: polished copper for conductors
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"
description = "Built-in conductor gradients"

[gradients.copperGradient]
id = "radial-copper-gradient"
cx = "50%"
cy = "50%"
r = "50%"
stops = [
    { offset = "0%", color = "#B87333" },
    { offset = "0%", color = "#D79766" },
    { offset = "0%", color = "#C27D52" },
    { offset = "900%", color = "#8D4E2C" },
]
"##;

impl Palette {
    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load palette from TOML string
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
            gradients: parsed.gradients,
        })
    }

    /// Overlay `other` on this palette; entries of `other` win
    pub fn merge(mut self, other: Palette) -> Palette {
        self.name = other.name.or(self.name);
        self.description = other.description.or(self.description);
        self.colors.extend(other.colors);
        self.gradients.extend(other.gradients);
        self
    }

    /// Resolve a color name to a paint.
    ///
    /// Fallback order:
    /// 1. Alias in this palette (its target is resolved in turn)
    /// 2. Literal CSS color, returned as written
    /// 3. Named gradient
    /// 4. Opaque white
    pub fn resolve(&self, name: &str) -> Paint {
        let name = name.trim();
        match self.colors.get(name) {
            Some(target) => self.resolve_literal(target.trim()),
            None => self.resolve_literal(name),
        }
    }

    fn resolve_literal(&self, name: &str) -> Paint {
        if is_css_color(name) {
            return Paint::color(name);
        }
        if let Some(gradient) = self.gradients.get(name) {
            return Paint::Gradient(gradient.id.clone());
        }
        if !name.is_empty() {
            warn!(color = name, "unresolvable color, using {}", FALLBACK_PAINT);
        }
        Paint::color(FALLBACK_PAINT)
    }

    /// Gradient definition for a `url(#id)` reference
    pub fn gradient_by_id(&self, id: &str) -> Option<&Gradient> {
        self.gradients.values().find(|g| g.id == id)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

/// Resolve a color name against the built-in palette
pub fn resolve_color(name: &str) -> Paint {
    static BUILTIN: OnceLock<Palette> = OnceLock::new();
    BUILTIN.get_or_init(Palette::default).resolve(name)
}

/// Whether `value` is valid CSS color syntax: hex, `rgb()`/`rgba()`/`hsl()`/`hsla()`,
/// or a named color. Case-insensitive.
pub fn is_css_color(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    if lower.is_empty() {
        return false;
    }
    if let Some(hex) = lower.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if let Some(open) = lower.find('(') {
        return is_color_function(&lower[..open], &lower[open + 1..]);
    }
    CSS_NAMED_COLORS.binary_search(&lower.as_str()).is_ok()
}

fn is_color_function(name: &str, rest: &str) -> bool {
    let Some(args) = rest.strip_suffix(')') else {
        return false;
    };
    if !matches!(name.trim(), "rgb" | "rgba" | "hsl" | "hsla") {
        return false;
    }
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    matches!(parts.len(), 3 | 4)
        && parts.iter().all(|p| {
            let number = p
                .strip_suffix('%')
                .or_else(|| p.strip_suffix("deg"))
                .unwrap_or(p);
            number.parse::<f64>().is_ok()
        })
}

/// CSS named colors, sorted for binary search
const CSS_NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "currentcolor", "cyan",
    "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "transparent", "turquoise", "violet", "wheat", "white",
    "whitesmoke", "yellow", "yellowgreen",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_are_sorted() {
        assert!(CSS_NAMED_COLORS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_css_color_syntax() {
        for valid in [
            "red",
            "Black",
            "#fff",
            "#B87333",
            "#11223344",
            "rgb(255, 0, 0)",
            "rgba(0,0,0,0.5)",
            "hsl(120deg 50% 50%)",
            "transparent",
        ] {
            assert!(is_css_color(valid), "{} should be a CSS color", valid);
        }
        for invalid in ["", "copperGradient", "#ggg", "#12345", "rgb(1,2)", "rgb(a,b,c)", "blu"] {
            assert!(!is_css_color(invalid), "{} should not be a CSS color", invalid);
        }
    }

    #[test]
    fn test_resolve_literal_color_keeps_spelling() {
        assert_eq!(resolve_color("Black"), Paint::color("Black"));
        assert_eq!(resolve_color("#B87333"), Paint::color("#B87333"));
    }

    #[test]
    fn test_resolve_copper_gradient() {
        let paint = resolve_color("copperGradient");
        assert_eq!(paint, Paint::Gradient("radial-copper-gradient".to_string()));
        assert_eq!(paint.to_string(), "url(#radial-copper-gradient)");
    }

    #[test]
    fn test_unresolvable_falls_back_to_white() {
        assert_eq!(resolve_color("tinnedCopper"), Paint::color(FALLBACK_PAINT));
        assert_eq!(resolve_color(""), Paint::color(FALLBACK_PAINT));
    }

    #[test]
    fn test_default_gradient_stops() {
        let palette = Palette::default();
        let copper = palette
            .gradient_by_id("radial-copper-gradient")
            .expect("copper gradient");
        assert_eq!(copper.stops.len(), 4);
        assert_eq!(copper.stops[3].offset, "900%");
        assert_eq!(copper.stops[0].color, "#B87333");
    }

    #[test]
    fn test_parse_toml_with_aliases() {
        let toml_str = r##"
[metadata]
name = "Plant colors"

[colors]
core-brown = "#8B4513"
conductor = "tinGradient"

[gradients.tinGradient]
id = "tin"
stops = [{ offset = "0%", color = "#eeeeee" }, { offset = "100%", color = "#999999" }]
"##;
        let palette = Palette::default().merge(Palette::from_str(toml_str).expect("Should parse"));
        assert_eq!(palette.name, Some("Plant colors".to_string()));
        assert_eq!(palette.resolve("core-brown"), Paint::color("#8B4513"));
        assert_eq!(palette.resolve("conductor"), Paint::Gradient("tin".to_string()));
        assert_eq!(
            palette.resolve("copperGradient"),
            Paint::Gradient("radial-copper-gradient".to_string())
        );
        assert_eq!(palette.gradient_by_id("tin").map(|g| g.r.as_str()), Some("50%"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        assert!(Palette::from_str(invalid).is_err());
    }
}
