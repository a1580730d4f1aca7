//! Output tree scanner
//!
//! Walks the compiled application directory and lists the files that belong
//! in the manifest. Problems never abort the scan: an unreadable root gives an
//! empty list, an unreadable entry is skipped, both with a warning.

use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::value_objects::AssetPath;

/// File suffixes never worth caching offline
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[".map", ".txt"];

/// Eligibility rules for scanned files
#[derive(Debug, Clone)]
pub struct ScanRules {
    /// Lower-case suffixes to skip (".map", ".txt", ...)
    excluded_extensions: Vec<String>,
    /// Root-relative paths to skip: the entry document and generated files
    excluded_paths: Vec<AssetPath>,
}

impl ScanRules {
    pub fn new(extra_extensions: &[String], excluded_paths: Vec<AssetPath>) -> Self {
        let excluded_extensions = DEFAULT_EXCLUDED_EXTENSIONS
            .iter()
            .map(|s| s.to_string())
            .chain(extra_extensions.iter().map(|ext| normalize_extension(ext)))
            .collect();
        Self {
            excluded_extensions,
            excluded_paths,
        }
    }

    /// Whether a file may appear in the manifest
    pub fn is_eligible(&self, path: &AssetPath) -> bool {
        let name = path.file_name().to_ascii_lowercase();
        if name.starts_with('.') {
            return false;
        }
        if self.excluded_extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
            return false;
        }
        !self.excluded_paths.contains(path)
    }
}

impl Default for ScanRules {
    fn default() -> Self {
        Self::new(&[], Vec::new())
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_ascii_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Result of scanning the output tree
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Eligible files, sorted and unique
    pub paths: Vec<AssetPath>,
    pub warnings: Vec<String>,
}

/// List eligible files under `root` in byte order of their manifest key
pub fn scan_output_tree(root: &Path, rules: &ScanRules) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    if !root.is_dir() {
        let message = format!("output directory not found: {}", root.display());
        tracing::warn!("{}", message);
        outcome.warnings.push(message);
        return outcome;
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let message = format!("skipping unreadable entry: {}", err);
                tracing::warn!("{}", message);
                outcome.warnings.push(message);
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let Some(path) = AssetPath::from_relative(relative) else {
            let message = format!("skipping file with unusable name: {}", entry.path().display());
            tracing::warn!("{}", message);
            outcome.warnings.push(message);
            continue;
        };

        if rules.is_eligible(&path) {
            outcome.paths.push(path);
        } else {
            tracing::trace!(asset = %path, "excluded from manifest");
        }
    }

    outcome.paths.sort();
    outcome.paths.dedup();
    tracing::debug!(count = outcome.paths.len(), root = %root.display(), "scanned output tree");
    outcome
}
