//! Parser for the game's XML component definition files

use crate::models::Definition;
use crate::{CatalogError, Result};
use regex::Regex;
use roxmltree::Document;

/// Parse the content of a single definition file
///
/// `id` is the file stem. The root element must be `definition` and carry
/// `name` and `mass` attributes; anything else aborts the run.
pub fn parse_definition(content: &str, id: &str) -> Result<Definition> {
    let escaped = escape_digit_attributes(content)?;
    let doc = Document::parse(&escaped)
        .map_err(|e| CatalogError::Parse(format!("{}: XML parse error: {}", id, e)))?;

    let root = doc.root_element();
    if root.tag_name().name() != "definition" {
        return Err(CatalogError::Parse(format!(
            "{}: unexpected root element <{}>",
            id,
            root.tag_name().name()
        )));
    }

    let name = root
        .attribute("name")
        .ok_or_else(|| CatalogError::Parse(format!("{}: missing name attribute", id)))?;

    let mass_attr = root
        .attribute("mass")
        .ok_or_else(|| CatalogError::Parse(format!("{}: missing mass attribute", id)))?;
    let mass: f64 = mass_attr
        .parse()
        .map_err(|_| CatalogError::Parse(format!("{}: invalid mass '{}'", id, mass_attr)))?;
    if !mass.is_finite() || mass < 0.0 {
        return Err(CatalogError::Parse(format!(
            "{}: mass must be non-negative, got '{}'",
            id, mass_attr
        )));
    }

    Ok(Definition {
        id: id.to_string(),
        name: name.to_string(),
        mass,
        image_url: None,
    })
}

/// Prefix digit-leading attribute names with an underscore
///
/// Some shipped definition files use purely numeric attribute names, which
/// are invalid XML and would fail to parse otherwise.
fn escape_digit_attributes(content: &str) -> Result<String> {
    let digit_attr =
        Regex::new(r"([0-9]+=)").map_err(|e| CatalogError::Parse(e.to_string()))?;
    Ok(digit_attr.replace_all(content, "_$1").into_owned())
}
