//! Configuration loading

use std::fs;
use std::path::Path;

use crate::domain::value_objects::{ConfigWarning, ManifestEmbedding};
use crate::error::{PwaError, PwaResult};
use crate::infrastructure::fs::user_config_dir;

use super::types::Config;

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "pwa-gen.toml";

/// User-level configuration file name, inside the user config directory
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PwaResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PwaError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                key_path: path_str.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    Ok((config, warnings))
}

/// Load from an explicit file, project config, user config, or defaults.
///
/// The first file found wins; environment overrides apply on top. An explicit
/// file must exist. A file that exists but does not parse is an error.
pub fn load_layered(
    project_root: &Path,
    explicit: Option<&Path>,
) -> PwaResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        tracing::debug!(path = %project_config.display(), "using project config");
        let (config, warnings) = load_with_warnings(&project_config)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(dir) = user_config_dir() {
        let user_config = dir.join(USER_CONFIG_FILE);
        if user_config.is_file() {
            tracing::debug!(path = %user_config.display(), "using user config");
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (PWA_GEN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // PWA_GEN_EMBEDDING
    if let Some(value) = var("PWA_GEN_EMBEDDING") {
        match ManifestEmbedding::parse(&value) {
            Some(embedding) => config.output.embedding = embedding,
            None => tracing::warn!(value = %value, "ignoring invalid PWA_GEN_EMBEDDING"),
        }
    }

    // PWA_GEN_PARALLEL
    if let Some(value) = var("PWA_GEN_PARALLEL") {
        config.scan.parallel = value.to_lowercase() != "false" && value != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "service_worker",
        "manifest",
        "entry_document",
        "embedding",
        "scan",
        "exclude_extensions",
        "parallel",
        "strategy",
        "critical_suffixes",
        "sources",
        "build_properties",
        "project_file",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
