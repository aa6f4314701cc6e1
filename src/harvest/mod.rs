//! Catalog harvesting: definition loading, wiki scraping, reconciliation

pub mod parsers;

use crate::aliases;
use crate::config::HarvestConfig;
use crate::models::Definition;
use crate::{CatalogError, Result};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// Merged image index: normalized (alias-translated) name -> image URL
pub type ImageIndex = BTreeMap<String, String>;

/// Harvester for collecting component metadata from all sources
pub struct Harvester {
    config: HarvestConfig,
    client: reqwest::blocking::Client,
}

impl Harvester {
    /// Create a harvester with the given configuration
    pub fn new(config: HarvestConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Load every definition file, in lexical file-name order
    pub fn load_definitions(&self) -> Result<Vec<Definition>> {
        load_definitions_from(&self.config.definitions_dir)
    }

    /// Fetch and index every configured wiki page, in order
    ///
    /// Later pages overwrite earlier ones on name collision.
    pub fn scrape_image_index(&self) -> Result<ImageIndex> {
        let mut index = ImageIndex::new();
        for page in &self.config.wiki_pages {
            let url = format!("{}{}", self.config.wiki_base, page);
            let body = self.fetch_page(&url)?;
            index_entries(&mut index, parsers::wiki::extract_image_entries(&body)?);
        }
        Ok(index)
    }

    /// Fetch one page; any non-success status aborts the run
    fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.config.user_agent)
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                url
            )));
        }

        response
            .text()
            .map_err(|e| CatalogError::Network(e.to_string()))
    }
}

/// Load definitions from a directory: one record per regular file
pub fn load_definitions_from(dir: &Path) -> Result<Vec<Definition>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();

    let mut definitions = Vec::with_capacity(files.len());
    for file in &files {
        let content = std::fs::read_to_string(file)?;
        let id = file
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                CatalogError::Parse(format!("unusable file name: {}", file.display()))
            })?;
        definitions.push(parsers::definition::parse_definition(&content, id)?);
    }
    Ok(definitions)
}

/// Merge scraped entries into the index, translating known aliases
pub fn index_entries(index: &mut ImageIndex, entries: Vec<(String, String)>) {
    for (name, image) in entries {
        let key = match aliases::canonical_id(&name) {
            Some(id) => id.to_string(),
            None => name,
        };
        index.insert(key, image);
    }
}

/// Attach scraped image URLs to the definition records
///
/// A name matches the first record whose identifier equals it, or failing
/// that, whose normalized display name equals it; at most one record is
/// updated per name. Unmatched names are reported on stderr and skipped.
pub fn reconcile(definitions: &mut [Definition], images: &ImageIndex) {
    for (name, url) in images {
        let matched = definitions
            .iter_mut()
            .find(|def| *name == def.id || *name == def.normalized_name());
        match matched {
            Some(def) => def.image_url = Some(url.clone()),
            None => eprintln!("Could not find match for {}", name),
        }
    }
}

/// Apply the static image overrides, replacing any earlier match
pub fn apply_overrides(definitions: &mut [Definition]) {
    for def in definitions.iter_mut() {
        if let Some(url) = aliases::override_url(&def.id) {
            def.image_url = Some(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(id: &str, name: &str) -> Definition {
        Definition {
            id: id.to_string(),
            name: name.to_string(),
            mass: 1.0,
            image_url: None,
        }
    }

    fn index_of(pairs: &[(&str, &str)]) -> ImageIndex {
        pairs
            .iter()
            .map(|(name, url)| (name.to_string(), url.to_string()))
            .collect()
    }

    #[test]
    fn test_reconcile_by_identifier() {
        let mut defs = vec![definition("handle", "Handle")];
        reconcile(&mut defs, &index_of(&[("handle", "https://img.example/h.png")]));
        assert_eq!(defs[0].image_url.as_deref(), Some("https://img.example/h.png"));
    }

    #[test]
    fn test_reconcile_by_normalized_display_name() {
        let mut defs = vec![definition("seat_pilot", "Pilot Seat")];
        reconcile(&mut defs, &index_of(&[("pilot_seat", "https://img.example/s.png")]));
        assert_eq!(defs[0].image_url.as_deref(), Some("https://img.example/s.png"));
    }

    #[test]
    fn test_reconcile_updates_at_most_one_record() {
        // Identifier match on the first record shadows the display-name
        // match on the second
        let mut defs = vec![
            definition("block", "Old Block"),
            definition("block_2", "Block"),
        ];
        reconcile(&mut defs, &index_of(&[("block", "https://img.example/b.png")]));
        assert_eq!(defs[0].image_url.as_deref(), Some("https://img.example/b.png"));
        assert_eq!(defs[1].image_url, None);
    }

    #[test]
    fn test_reconcile_unmatched_name_changes_nothing() {
        let mut defs = vec![definition("handle", "Handle")];
        reconcile(&mut defs, &index_of(&[("no_such_thing", "https://img.example/x.png")]));
        assert_eq!(defs[0].image_url, None);
    }

    #[test]
    fn test_index_entries_translates_aliases() {
        let mut index = ImageIndex::new();
        index_entries(
            &mut index,
            vec![(
                "window_1x1_inverted_pyramid".to_string(),
                "https://img.example/w.png".to_string(),
            )],
        );
        assert_eq!(
            index.get("window_1x1_inv_pyramid").map(String::as_str),
            Some("https://img.example/w.png")
        );
        assert!(!index.contains_key("window_1x1_inverted_pyramid"));
    }

    #[test]
    fn test_index_entries_later_page_wins() {
        let mut index = ImageIndex::new();
        index_entries(
            &mut index,
            vec![("block".to_string(), "https://img.example/first.png".to_string())],
        );
        index_entries(
            &mut index,
            vec![("block".to_string(), "https://img.example/second.png".to_string())],
        );
        assert_eq!(
            index.get("block").map(String::as_str),
            Some("https://img.example/second.png")
        );
    }

    #[test]
    fn test_apply_overrides_wins_over_wiki_match() {
        let mut defs = vec![definition("large_rotor", "Large Rotor")];
        defs[0].image_url = Some("https://img.example/wrong.png".to_string());

        apply_overrides(&mut defs);
        assert_eq!(defs[0].image_url, crate::aliases::override_url("large_rotor"));
    }

    #[test]
    fn test_apply_overrides_sets_missing_image() {
        let mut defs = vec![definition("large_rotor", "Large Rotor")];
        apply_overrides(&mut defs);
        assert!(defs[0].image_url.is_some());
    }
}
