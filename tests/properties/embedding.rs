//! Property tests for inline manifest embedding.

use proptest::prelude::*;

use pwa_gen::domain::services::{embed_manifest, strip_embedded_manifest, MANIFEST_SCRIPT_ID};

fn document() -> impl Strategy<Value = String> {
    let text = "[a-zA-Z0-9 <>/=\"\n]{0,40}";
    (text, prop_oneof![Just(""), Just("</head>"), Just("</body>"), Just("</html>")], text)
        .prop_map(|(before, anchor, after)| format!("{}{}{}", before, anchor, after))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Embedding twice gives the same document as embedding once.
    #[test]
    fn property_embedding_idempotent(html in document(), value in "[a-z0-9]{0,12}") {
        let manifest = format!("{{\"/a.js\": \"{}\"}}", value);
        let once = embed_manifest(&html, &manifest);
        let twice = embed_manifest(&once, &manifest);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.matches(MANIFEST_SCRIPT_ID).count(), 1);
    }

    /// PROPERTY: Stripping an embedded manifest restores the document.
    #[test]
    fn property_strip_restores_document(html in document()) {
        prop_assume!(!html.contains(MANIFEST_SCRIPT_ID));
        let embedded = embed_manifest(&html, "{}");

        prop_assert_eq!(strip_embedded_manifest(&embedded), html);
    }
}
