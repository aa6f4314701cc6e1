//! Parser for rendered wiki category pages
//!
//! Each category page lists components inside the last block of the main
//! content container; the first two children of that block are layout
//! artifacts, every following child is one catalog entry.

use crate::{CatalogError, Result};
use scraper::{ElementRef, Html, Selector};

/// Leading children of the component list that carry no entries
const LAYOUT_CHILDREN: usize = 2;

/// Extensions a direct image asset URL is expected to carry
const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".webp"];

/// Extract `(normalized name, image URL)` pairs from one page, in document
/// order
pub fn extract_image_entries(html: &str) -> Result<Vec<(String, String)>> {
    let document = Html::parse_document(html);

    let content_selector = Selector::parse("div.mw-parser-output")
        .map_err(|e| CatalogError::Parse(e.to_string()))?;
    let content = document
        .select(&content_selector)
        .next()
        .ok_or_else(|| CatalogError::Parse("missing mw-parser-output container".into()))?;

    let list = direct_divs(content)
        .into_iter()
        .last()
        .ok_or_else(|| CatalogError::Parse("content container has no child blocks".into()))?;

    let link_selector =
        Selector::parse("a").map_err(|e| CatalogError::Parse(e.to_string()))?;

    let mut entries = Vec::new();
    for item in direct_divs(list).into_iter().skip(LAYOUT_CHILDREN) {
        let anchor = item
            .value()
            .attr("id")
            .ok_or_else(|| CatalogError::Parse("catalog entry has no id attribute".into()))?;
        let name = normalize_anchor(anchor);

        let mut links = item.select(&link_selector);
        let first = links
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| CatalogError::Parse(format!("no image link for {}", name)))?;
        let second = links.next().and_then(|a| a.value().attr("href"));

        // Some entries link the component page first and the image second
        let href = if is_image_asset(first) {
            first
        } else {
            second.unwrap_or(first)
        };

        entries.push((name, strip_revision(href).to_string()));
    }

    Ok(entries)
}

/// Direct `<div>` children of an element, in document order
fn direct_divs(parent: ElementRef) -> Vec<ElementRef> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "div")
        .collect()
}

/// Fold a wiki anchor into the normalized name space: lower-cased, bracket
/// characters stripped, cut at the first pipe
fn normalize_anchor(anchor: &str) -> String {
    let lowered = anchor.to_lowercase().replace(['[', ']'], "");
    match lowered.split_once('|') {
        Some((head, _)) => head.to_string(),
        None => lowered,
    }
}

/// Whether a URL points straight at an image file
fn is_image_asset(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url).to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| path.contains(ext))
}

/// Drop fandom's `/revision/latest?cb=...` suffix from an image URL
fn strip_revision(url: &str) -> &str {
    match url.find("/revision") {
        Some(idx) => &url[..idx],
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(list_items: &str) -> String {
        format!(
            r#"<html><body>
            <div class="mw-parser-output">
              <div><p>Intro paragraph</p></div>
              <div>
                <div>header</div>
                <div>toolbar</div>
                {}
              </div>
            </div>
            </body></html>"#,
            list_items
        )
    }

    #[test]
    fn test_extract_basic_entry() {
        let html = page(
            r#"<div id="Handle">
                 <a href="https://static.wikia.nocookie.net/stormworks/images/1/11/Handle.png/revision/latest?cb=123"><img/></a>
               </div>"#,
        );

        let entries = extract_image_entries(&html).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "handle");
        assert_eq!(
            entries[0].1,
            "https://static.wikia.nocookie.net/stormworks/images/1/11/Handle.png"
        );
    }

    #[test]
    fn test_anchor_normalization() {
        let html = page(
            r#"<div id="[Window_Large_(3x3)|Window]">
                 <a href="https://img.example/Window.png"><img/></a>
               </div>"#,
        );

        let entries = extract_image_entries(&html).unwrap();
        assert_eq!(entries[0].0, "window_large_(3x3)");
    }

    #[test]
    fn test_prefers_second_link_when_first_is_not_an_image() {
        let html = page(
            r#"<div id="Paddle">
                 <a href="/wiki/Paddle">Paddle</a>
                 <a href="https://img.example/Paddle.png/revision/latest"><img/></a>
               </div>"#,
        );

        let entries = extract_image_entries(&html).unwrap();
        assert_eq!(entries[0].1, "https://img.example/Paddle.png");
    }

    #[test]
    fn test_keeps_first_link_without_second() {
        let html = page(
            r#"<div id="Paddle">
                 <a href="/wiki/Paddle">Paddle</a>
               </div>"#,
        );

        let entries = extract_image_entries(&html).unwrap();
        assert_eq!(entries[0].1, "/wiki/Paddle");
    }

    #[test]
    fn test_skips_layout_children() {
        let html = page(
            r#"<div id="Block"><a href="https://img.example/Block.png"><img/></a></div>
               <div id="Wedge"><a href="https://img.example/Wedge.png"><img/></a></div>"#,
        );

        let entries = extract_image_entries(&html).unwrap();
        let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["block", "wedge"]);
    }

    #[test]
    fn test_missing_content_container() {
        let result = extract_image_entries("<html><body><div>nope</div></body></html>");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("mw-parser-output"));
    }

    #[test]
    fn test_entry_without_id_is_fatal() {
        let html = page(r#"<div><a href="https://img.example/x.png"></a></div>"#);
        assert!(extract_image_entries(&html).is_err());
    }

    #[test]
    fn test_entry_without_link_is_fatal() {
        let html = page(r#"<div id="Block"><span>no link</span></div>"#);
        assert!(extract_image_entries(&html).is_err());
    }

    #[test]
    fn test_is_image_asset() {
        assert!(is_image_asset("https://img.example/a/b/Foo.PNG"));
        assert!(is_image_asset("https://img.example/Foo.png/revision/latest?cb=1"));
        assert!(!is_image_asset("/wiki/Foo"));
        assert!(!is_image_asset("https://example.com/page?img=.png"));
    }

    #[test]
    fn test_strip_revision() {
        assert_eq!(
            strip_revision("https://img.example/Foo.png/revision/latest?cb=1"),
            "https://img.example/Foo.png"
        );
        assert_eq!(strip_revision("https://img.example/Foo.png"), "https://img.example/Foo.png");
    }
}
