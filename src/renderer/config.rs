//! Output options of the SVG renderer

/// Decimal places of emitted coordinates unless configured otherwise
pub const DEFAULT_PRECISION: usize = 3;

/// How a cable layout is written out as SVG
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Margin added around the layout's square viewport
    pub viewbox_padding: f64,

    /// Emit the XML declaration
    pub standalone: bool,

    /// One element per line, indented by group depth
    pub pretty_print: bool,

    /// Prefix of every role class (`cs-wire`, `cs-armour`, ...)
    pub class_prefix: Option<String>,

    /// Decimal places of coordinates, radii and stroke widths
    pub precision: usize,

    /// Wrap the primitives of each core in `<g id="core-i" class="core">`
    pub group_cores: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 0.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("cs-".to_string()),
            precision: DEFAULT_PRECISION,
            group_cores: true,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line output without XML declaration, for embedding in other documents
    pub fn compact() -> Self {
        Self::default().with_standalone(false).with_pretty_print(false)
    }

    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Bare role classes (`wire`, `armour`, ...)
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Emit every primitive at top level instead of per-core groups
    pub fn without_core_groups(mut self) -> Self {
        self.group_cores = false;
        self
    }

    /// Class attribute value for a role or group name
    pub fn class_name(&self, name: &str) -> String {
        match &self.class_prefix {
            Some(prefix) => format!("{}{}", prefix, name),
            None => name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_group_cores_at_three_decimals() {
        let config = SvgConfig::default();
        assert_eq!(config.precision, 3);
        assert!(config.group_cores);
        assert_eq!(config.class_name("sheath"), "cs-sheath");
    }

    #[test]
    fn test_compact_keeps_geometry_options() {
        let config = SvgConfig::compact().with_precision(1).without_class_prefix();
        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.precision, 1);
        assert_eq!(config.class_name("armour"), "armour");
    }
}
