//! Reference extraction from the entry document
//!
//! Finds the scripts and stylesheets the entry HTML loads directly. Those are
//! needed before the app can start, so they seed `CRITICAL` classifications.
//!
//! Matching is regex based and deliberately lenient: malformed markup simply
//! yields fewer references, never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::AssetPath;

static SCRIPT_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script\b[^>]*?\ssrc\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});

static LINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link\b[^>]*>").expect("valid regex"));

static REL_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\srel\s*=\s*["']([^"']*)["']"#).expect("valid regex")
});

static HREF_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\shref\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});

static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid regex"));

/// Extract root-relative script and stylesheet references.
///
/// Scripts are listed before stylesheets, each in document order, without
/// duplicates.
pub fn extract_references(html: &str) -> Vec<AssetPath> {
    let scripts = SCRIPT_SRC
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()));

    let stylesheets = LINK_TAG.find_iter(html).filter_map(|tag| {
        let tag = tag.as_str();
        let rel = REL_ATTR.captures(tag)?.get(1)?.as_str();
        let is_stylesheet = rel
            .split_ascii_whitespace()
            .any(|token| token.eq_ignore_ascii_case("stylesheet"));
        if !is_stylesheet {
            return None;
        }
        HREF_ATTR.captures(tag)?.get(1).map(|m| m.as_str())
    });

    let mut references: Vec<AssetPath> = Vec::new();
    for reference in scripts.chain(stylesheets) {
        if is_absolute_url(reference) {
            continue;
        }
        if let Some(path) = AssetPath::from_reference(reference) {
            if !references.contains(&path) {
                references.push(path);
            }
        }
    }
    references
}

/// True for references the service worker must not treat as local files
pub fn is_absolute_url(reference: &str) -> bool {
    let reference = reference.trim();
    reference.starts_with("//") || URL_SCHEME.is_match(reference)
}
