//! Service worker template instantiation

/// Placeholder replaced by the build timestamp
pub const TIMESTAMP_PLACEHOLDER: &str = "{{buildTimestamp}}";

/// Placeholder replaced by the manifest JSON
pub const MANIFEST_PLACEHOLDER: &str = "{{assetManifest}}";

const PWA_ON_TEMPLATE: &str = include_str!("../../templates/pwa-service-worker-on.js");
const PWA_OFF_TEMPLATE: &str = include_str!("../../templates/pwa-service-worker-off.js");

/// Service worker script template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceWorkerTemplate {
    source: String,
}

impl ServiceWorkerTemplate {
    /// Built-in template for the given PWA mode.
    ///
    /// The "on" template precaches and serves assets from the manifest; the
    /// "off" template unregisters itself and clears every cache.
    pub fn builtin(pwa_enabled: bool) -> Self {
        let source = if pwa_enabled {
            PWA_ON_TEMPLATE
        } else {
            PWA_OFF_TEMPLATE
        };
        Self::from_source(source)
    }

    /// Template from user-provided source
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitute both placeholders.
    ///
    /// The timestamp is inserted as the body of a JavaScript string literal,
    /// the manifest as a raw JSON expression.
    pub fn render(&self, build_timestamp: &str, manifest_json: &str) -> String {
        let timestamp = js_string_body(build_timestamp);
        self.source
            .replace(TIMESTAMP_PLACEHOLDER, &timestamp)
            .replace(MANIFEST_PLACEHOLDER, manifest_json)
    }
}

/// Escape `s` for use between double quotes in JavaScript
fn js_string_body(s: &str) -> String {
    let quoted = serde_json::Value::String(s.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}
