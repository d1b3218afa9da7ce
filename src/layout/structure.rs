//! Structural description of the cable stage to draw

use std::fmt;

use super::error::LayoutError;
use super::types::LayerSpec;

/// Manufacturing stage whose cross-section is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Process {
    WireDrawing,
    Stranding,
    Insulating,
    Laying,
    Bedding,
    Armouring,
    Sheathing,
}

impl Process {
    pub const ALL: [Process; 7] = [
        Process::WireDrawing,
        Process::Stranding,
        Process::Insulating,
        Process::Laying,
        Process::Bedding,
        Process::Armouring,
        Process::Sheathing,
    ];

    /// Look up a process by its request name. `Extrusion` is accepted for `Insulating`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Extrusion" => Some(Process::Insulating),
            _ => Self::ALL.into_iter().find(|p| p.name() == name),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Process::WireDrawing => "WireDrawing",
            Process::Stranding => "Stranding",
            Process::Insulating => "Insulating",
            Process::Laying => "Laying",
            Process::Bedding => "Bedding",
            Process::Armouring => "Armouring",
            Process::Sheathing => "Sheathing",
        }
    }

    /// Whether the drawing shows laid-up cores
    pub fn lays_cores(&self) -> bool {
        matches!(
            self,
            Process::Laying | Process::Bedding | Process::Armouring | Process::Sheathing
        )
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conductor construction variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subtype {
    /// Discrete round wires
    #[default]
    Round,
    /// Wires flattened into solid rings
    Compacted,
    /// Insulation ring with a visible gap to the conductor
    Blank,
    /// Insulation filling the conductor interstices
    Filled,
}

impl Subtype {
    /// Unrecognized names fall through to [`Subtype::Round`]
    pub fn parse(name: &str) -> Self {
        let lower = name.trim().to_ascii_lowercase();
        if lower.starts_with("compacted") {
            Subtype::Compacted
        } else if lower == "filled" || lower == "solid" {
            Subtype::Filled
        } else if lower == "blank" {
            Subtype::Blank
        } else {
            Subtype::Round
        }
    }

    pub fn is_compacted(&self) -> bool {
        matches!(self, Subtype::Compacted)
    }
}

/// Color and stripe marking of one insulated core
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InsulationSpec {
    pub default_color: String,
    /// True when the descriptor asks for stripes (`stripe: "yes"`)
    pub striped: bool,
    pub stripe_kind: Option<String>,
    pub stripe_color: Option<String>,
}

impl InsulationSpec {
    /// Plain insulation of a single color
    pub fn plain(color: impl Into<String>) -> Self {
        Self {
            default_color: color.into(),
            ..Self::default()
        }
    }

    /// Stripe kind name, `"none"` when unset
    pub fn stripe_kind_name(&self) -> &str {
        self.stripe_kind.as_deref().unwrap_or("none")
    }

    /// Stripe color when one is set and non-empty
    pub fn stripe_color(&self) -> Option<&str> {
        self.stripe_color.as_deref().filter(|c| !c.is_empty())
    }
}

/// A stroked ring (bedding, sheath)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RingSpec {
    pub color: String,
    pub thickness: f64,
}

/// Outermost wire ring
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArmourSpec {
    pub count: usize,
    pub wire_diameter: f64,
    pub color: String,
}

/// Full input to one layout computation
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralConfig {
    pub process: Process,
    pub subtype: Subtype,
    pub wire_diameter: f64,
    pub layers: LayerSpec,
    /// Core bundles per laying layer
    pub core_layers: LayerSpec,
    /// Conductor paint name
    pub wire_color: String,
    /// Rod diameter of the wire drawing stage
    pub outer_diameter: f64,
    /// Insulation thickness
    pub thickness: f64,
    /// Fill of a filled insulation
    pub filled_color: String,
    /// One descriptor per core; the first one styles single-core insulation
    pub insulation: Vec<InsulationSpec>,
    /// `"blank"` widens the cavity of laid round cores
    pub insulation_type: String,
    pub bedding: RingSpec,
    pub armour: ArmourSpec,
    pub sheath: RingSpec,
}

impl StructuralConfig {
    pub fn new(process: Process) -> Self {
        Self {
            process,
            subtype: Subtype::Round,
            wire_diameter: 0.0,
            layers: LayerSpec::default(),
            core_layers: LayerSpec::default(),
            wire_color: String::new(),
            outer_diameter: 0.0,
            thickness: 0.0,
            filled_color: String::new(),
            insulation: Vec::new(),
            insulation_type: String::new(),
            bedding: RingSpec::default(),
            armour: ArmourSpec::default(),
            sheath: RingSpec::default(),
        }
    }

    pub fn with_subtype(mut self, subtype: Subtype) -> Self {
        self.subtype = subtype;
        self
    }

    pub fn with_wires(mut self, wire_diameter: f64, layers: impl Into<LayerSpec>) -> Self {
        self.wire_diameter = wire_diameter;
        self.layers = layers.into();
        self
    }

    pub fn with_core_layers(mut self, core_layers: impl Into<LayerSpec>) -> Self {
        self.core_layers = core_layers.into();
        self
    }

    pub fn with_wire_color(mut self, color: impl Into<String>) -> Self {
        self.wire_color = color.into();
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_insulation(mut self, insulation: Vec<InsulationSpec>) -> Self {
        self.insulation = insulation;
        self
    }

    pub fn with_bedding(mut self, color: impl Into<String>, thickness: f64) -> Self {
        self.bedding = RingSpec {
            color: color.into(),
            thickness,
        };
        self
    }

    pub fn with_armour(mut self, count: usize, wire_diameter: f64, color: impl Into<String>) -> Self {
        self.armour = ArmourSpec {
            count,
            wire_diameter,
            color: color.into(),
        };
        self
    }

    pub fn with_sheath(mut self, color: impl Into<String>, thickness: f64) -> Self {
        self.sheath = RingSpec {
            color: color.into(),
            thickness,
        };
        self
    }

    /// Insulation of core `index`; cores without a descriptor are plain black
    pub fn insulation_for(&self, index: usize) -> InsulationSpec {
        self.insulation
            .get(index)
            .cloned()
            .unwrap_or_else(|| InsulationSpec::plain("black"))
    }

    /// Reject inputs the geometry formulas cannot handle
    pub fn validate(&self) -> Result<(), LayoutError> {
        if let Some(layer) = self.layers.iter().position(|n| n == 0) {
            return Err(LayoutError::empty_layer("wirelayers", layer));
        }
        if let Some(layer) = self.core_layers.iter().position(|n| n == 0) {
            return Err(LayoutError::empty_layer("coreLayers", layer));
        }
        if !self.layers.is_empty() && !is_positive(self.wire_diameter) {
            return Err(LayoutError::invalid_dimension(
                "wirediameter",
                self.wire_diameter,
            ));
        }
        if self.armour.count > 0 && !is_positive(self.armour.wire_diameter) {
            return Err(LayoutError::invalid_dimension(
                "ArmouringWireDiam",
                self.armour.wire_diameter,
            ));
        }
        for (field, value) in [
            ("thickness", self.thickness),
            ("beddingThickness", self.bedding.thickness),
            ("sheathThickness", self.sheath.thickness),
            ("outerdiameter", self.outer_diameter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::invalid_dimension(field, value));
            }
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
