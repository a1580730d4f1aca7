//! Inline manifest embedding into the entry document
//!
//! The manifest goes into a `<script type="application/json">` block placed
//! right before `</head>`, falling back to `</body>`, then `</html>`, then the
//! end of the document. A block left by a previous run is removed first, so
//! embedding the same manifest twice gives the same document.

use std::sync::LazyLock;

use regex::Regex;

/// `id` of the inline manifest script tag
pub const MANIFEST_SCRIPT_ID: &str = "pwa-asset-manifest";

const ANCHORS: &[&str] = &["</head>", "</body>", "</html>"];

static EMBEDDED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"(?s)<script type="application/json" id="{}">.*?</script>\n[ \t]*"#,
        MANIFEST_SCRIPT_ID
    ))
    .expect("valid regex")
});

/// The script tag carrying `manifest_json`
pub fn manifest_script_tag(manifest_json: &str) -> String {
    format!(
        r#"<script type="application/json" id="{}">{}</script>"#,
        MANIFEST_SCRIPT_ID,
        // keeps a "</script" inside the payload from closing the tag early
        manifest_json.replace("</", "<\\/")
    )
}

/// Remove a manifest block inserted by [`embed_manifest`]
pub fn strip_embedded_manifest(html: &str) -> String {
    EMBEDDED_BLOCK.replace_all(html, "").into_owned()
}

/// Embed `manifest_json` into `html`, replacing any earlier copy
pub fn embed_manifest(html: &str, manifest_json: &str) -> String {
    let html = strip_embedded_manifest(html);
    let tag = manifest_script_tag(manifest_json);

    let Some(anchor) = ANCHORS.iter().find_map(|anchor| find_ignore_ascii_case(&html, anchor))
    else {
        let mut out = html;
        out.push_str(&tag);
        out.push('\n');
        return out;
    };

    // Reuse the anchor's indentation so the anchor line keeps its layout
    let line_start = html[..anchor].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let indent = &html[line_start..anchor];
    let indent = if indent.chars().all(|c| c == ' ' || c == '\t') {
        indent
    } else {
        ""
    };

    let mut out = String::with_capacity(html.len() + tag.len() + indent.len() + 1);
    out.push_str(&html[..anchor]);
    out.push_str(&tag);
    out.push('\n');
    out.push_str(indent);
    out.push_str(&html[anchor..]);
    out
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
