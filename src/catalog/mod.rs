//! Catalog document rendering

use crate::models::{ComponentEntry, Definition};
use crate::{CatalogError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Signal-type code -> human label, emitted verbatim
pub const LOGIC_TYPES: &[(&str, &str)] = &[
    ("bool", "On/Off"),
    ("number", "Number"),
    ("composite", "Composite"),
    ("video", "Video"),
    ("audio", "Audio"),
    ("electric", "Electric"),
    ("fluid", "Fluid"),
    ("torque", "Torque"),
    ("rope", "Rope"),
];

/// Summary-field key -> human label, emitted verbatim
pub const GENERAL_STATS: &[(&str, &str)] = &[
    ("mass", "Mass"),
    ("cost", "Cost"),
    ("voxels", "Voxels"),
    ("tags", "Tags"),
];

/// The complete output document
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub components: Map<String, Value>,
    pub logics: Map<String, Value>,
    pub general_stats: Map<String, Value>,
}

impl Catalog {
    /// Build the document from reconciled definitions, keeping loader order
    pub fn build(definitions: &[Definition]) -> Result<Self> {
        let mut components = Map::new();
        for def in definitions {
            let entry = serde_json::to_value(ComponentEntry::from(def))
                .map_err(|e| CatalogError::Parse(e.to_string()))?;
            components.insert(def.id.clone(), entry);
        }
        Ok(Self {
            components,
            logics: label_map(LOGIC_TYPES),
            general_stats: label_map(GENERAL_STATS),
        })
    }

    /// Pretty-print with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

/// Render definitions straight to the final JSON document
pub fn render(definitions: &[Definition]) -> Result<String> {
    Catalog::build(definitions)?.to_json()
}

fn label_map(pairs: &[(&str, &str)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(key, label)| (key.to_string(), Value::String(label.to_string())))
        .collect()
}
