//! Harvest configuration
//!
//! All settings have built-in defaults; a YAML file only needs to name the
//! fields it wants to change.

use crate::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Definition directory of a default Steam install, relative to home
const STEAM_DEFINITIONS_DIR: &str =
    ".steam/steam/steamapps/common/Stormworks/rom/data/definitions";

/// Harvest settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Directory containing the game's component definition files
    #[serde(default = "default_definitions_dir")]
    pub definitions_dir: PathBuf,

    /// Base URL the wiki page suffixes are appended to
    #[serde(default = "default_wiki_base")]
    pub wiki_base: String,

    /// Category pages to scrape, in fetch order
    #[serde(default = "default_wiki_pages")]
    pub wiki_pages: Vec<String>,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            definitions_dir: default_definitions_dir(),
            wiki_base: default_wiki_base(),
            wiki_pages: default_wiki_pages(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl HarvestConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| CatalogError::Config(format!("Failed to parse YAML: {}", e)))
    }
}

fn default_definitions_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(STEAM_DEFINITIONS_DIR))
        .unwrap_or_else(|| PathBuf::from(STEAM_DEFINITIONS_DIR))
}

fn default_wiki_base() -> String {
    "https://stormworks.fandom.com/wiki/Wiki/Building/Components/".to_string()
}

fn default_wiki_pages() -> Vec<String> {
    [
        "Blocks",
        "Vehicle_Control",
        "Mechanics",
        "Propulsion",
        "Person_Operations",
        "Radio",
        "Fluids",
        "Logic",
        "User_Input",
        "Electricity",
        "Displays",
        "Sound",
        "Sensors",
        "Decorative",
        "Video/Monitors",
        "Video/Cameras",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("sw-catalog/{}", crate::VERSION)
}
