//! Wire format of a structural description

use serde::Deserialize;

use crate::layout::{
    ArmourSpec, InsulationSpec, LayerSpec, Process, RingSpec, StructuralConfig, Subtype,
};

/// Insulation thickness of the armouring stage when none is given
pub const ARMOURING_DEFAULT_THICKNESS: f64 = 0.2;

/// One process layer as submitted by a client. Field names follow the
/// request object verbatim; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayerDescription {
    #[serde(rename = "processName")]
    pub process_name: Option<String>,
    #[serde(default)]
    pub drawtype: Option<String>,
    #[serde(default)]
    pub wirediameter: Option<f64>,
    #[serde(default)]
    pub outerdiameter: Option<f64>,
    #[serde(default)]
    pub wirelayers: Vec<usize>,
    #[serde(rename = "coreLayers", default)]
    pub core_layers: Vec<usize>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub drawcolour1: Option<String>,
    #[serde(rename = "filledColor", default)]
    pub filled_color: Option<String>,
    #[serde(default)]
    pub thickness: Option<f64>,
    #[serde(rename = "insulationColor", default)]
    pub insulation_color: Vec<InsulationEntry>,
    #[serde(rename = "insulationType", default)]
    pub insulation_type: Option<String>,
    #[serde(rename = "beddingColor", default)]
    pub bedding_color: Option<String>,
    #[serde(rename = "beddingThickness", default)]
    pub bedding_thickness: Option<f64>,
    #[serde(rename = "ArmouringNoofWires", default)]
    pub armouring_wire_count: Option<usize>,
    #[serde(rename = "ArmouringWireDiam", default)]
    pub armouring_wire_diameter: Option<f64>,
    #[serde(rename = "ArmouringColour", default)]
    pub armouring_colour: Option<String>,
    #[serde(rename = "sheathColor", default)]
    pub sheath_color: Option<String>,
    #[serde(rename = "sheathThickness", default)]
    pub sheath_thickness: Option<f64>,
}

/// An insulation descriptor: a bare color or a marked insulation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InsulationEntry {
    Color(String),
    Marked(MarkedInsulation),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MarkedInsulation {
    #[serde(rename = "defaultColor", default)]
    pub default_color: Option<String>,
    /// `"yes"` turns the stripe overlay on
    #[serde(default)]
    pub stripe: Option<String>,
    #[serde(rename = "stripeType", default)]
    pub stripe_type: Option<String>,
    #[serde(rename = "stripeColor", default)]
    pub stripe_color: Option<String>,
}

impl From<InsulationEntry> for InsulationSpec {
    fn from(entry: InsulationEntry) -> Self {
        match entry {
            InsulationEntry::Color(color) => InsulationSpec::plain(color),
            InsulationEntry::Marked(marked) => InsulationSpec {
                default_color: marked.default_color.unwrap_or_default(),
                striped: marked
                    .stripe
                    .as_deref()
                    .is_some_and(|s| s.trim().eq_ignore_ascii_case("yes")),
                stripe_kind: marked.stripe_type,
                stripe_color: marked.stripe_color,
            },
        }
    }
}

impl LayerDescription {
    /// Convert into the layout input for an already validated `process`
    pub fn into_structure(self, process: Process) -> StructuralConfig {
        let thickness = self.thickness.unwrap_or(match process {
            Process::Armouring => ARMOURING_DEFAULT_THICKNESS,
            _ => 0.0,
        });

        StructuralConfig {
            process,
            subtype: self
                .subtype
                .as_deref()
                .map(Subtype::parse)
                .unwrap_or_default(),
            wire_diameter: self.wirediameter.unwrap_or(0.0),
            layers: LayerSpec::new(self.wirelayers),
            core_layers: LayerSpec::new(self.core_layers),
            wire_color: self.drawcolour1.unwrap_or_default(),
            outer_diameter: self.outerdiameter.unwrap_or(0.0),
            thickness,
            filled_color: self.filled_color.unwrap_or_default(),
            insulation: self
                .insulation_color
                .into_iter()
                .map(InsulationSpec::from)
                .collect(),
            insulation_type: self
                .insulation_type
                .map(|t| t.trim().to_ascii_lowercase())
                .unwrap_or_default(),
            bedding: RingSpec {
                color: self.bedding_color.unwrap_or_default(),
                thickness: self.bedding_thickness.unwrap_or(0.0),
            },
            armour: ArmourSpec {
                count: self.armouring_wire_count.unwrap_or(0),
                wire_diameter: self.armouring_wire_diameter.unwrap_or(0.0),
                color: self.armouring_colour.unwrap_or_default(),
            },
            sheath: RingSpec {
                color: self.sheath_color.unwrap_or_default(),
                thickness: self.sheath_thickness.unwrap_or(0.0),
            },
        }
    }
}
