//! Data models for the component catalog

use serde::{Serialize, Serializer};

/// One component definition, parsed from a single game file
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    /// Canonical identifier, derived from the file stem
    pub id: String,
    /// Display name from the definition's `name` attribute
    pub name: String,
    /// Mass from the definition's `mass` attribute
    pub mass: f64,
    /// Representative image, attached during reconciliation
    pub image_url: Option<String>,
}

impl Definition {
    /// Display name folded into the wiki anchor space: lower-cased, with
    /// spaces and hyphens turned into underscores
    pub fn normalized_name(&self) -> String {
        self.name.to_lowercase().replace([' ', '-'], "_")
    }
}

/// One `components` entry of the output document
#[derive(Debug, Clone, Serialize)]
pub struct ComponentEntry {
    pub label: String,
    pub image: String,
    #[serde(serialize_with = "serialize_mass")]
    pub mass: f64,
}

impl From<&Definition> for ComponentEntry {
    fn from(def: &Definition) -> Self {
        Self {
            label: def.name.clone(),
            image: def.image_url.clone().unwrap_or_default(),
            mass: def.mass,
        }
    }
}

/// Whole masses serialize as JSON integers, fractional ones as reals
fn serialize_mass<S: Serializer>(mass: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if mass.fract() == 0.0 {
        serializer.serialize_i64(*mass as i64)
    } else {
        serializer.serialize_f64(*mass)
    }
}
