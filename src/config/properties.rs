//! Build properties
//!
//! The compile phase leaves a Java-style `.properties` file behind with the
//! PWA switch and the build timestamp. This module reads it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{PwaError, PwaResult};

/// Default file name, inside `target/classes`
pub const DEFAULT_PROPERTIES_FILE: &str = "pwa-build.properties";

/// Key holding the PWA switch
pub const PWA_KEY: &str = "pwa";

/// Timestamp keys, preferred first
pub const TIMESTAMP_KEYS: &[&str] = &["buildTimestamp", "mavenBuildTimestamp"];

/// Parsed build properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildProperties {
    file: PathBuf,
    values: HashMap<String, String>,
}

impl BuildProperties {
    /// Load from `path`; a missing file is fatal
    pub fn load(path: &Path) -> PwaResult<Self> {
        if !path.is_file() {
            return Err(PwaError::MissingBuildProperties {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let mut properties = Self::parse(&content);
        properties.file = path.to_path_buf();
        tracing::debug!(path = %path.display(), keys = properties.values.len(), "loaded build properties");
        Ok(properties)
    }

    /// Parse `.properties` text. Later keys override earlier ones.
    pub fn parse(content: &str) -> Self {
        let values = logical_lines(content)
            .iter()
            .map(|line| split_entry(line))
            .collect();
        Self {
            file: PathBuf::new(),
            values,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Only the exact value `true` turns PWA mode on; anything else, or no key, is off
    pub fn pwa_enabled(&self) -> bool {
        self.get(PWA_KEY) == Some("true")
    }

    /// The build timestamp, if any timestamp key is present
    pub fn build_timestamp(&self) -> Option<&str> {
        TIMESTAMP_KEYS.iter().find_map(|key| self.get(key))
    }

    /// The build timestamp, or a [`PwaError::MissingProperty`] naming the preferred key
    pub fn require_build_timestamp(&self) -> PwaResult<&str> {
        self.build_timestamp().ok_or_else(|| PwaError::MissingProperty {
            key: TIMESTAMP_KEYS[0].to_string(),
            file: self.file.clone(),
        })
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Join continuation lines and drop comments and blank lines
fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for raw in content.lines() {
        let line = raw.trim_start_matches(is_blank);

        if current.is_none() && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
        let continues = trailing % 2 == 1;
        let body = if continues { &line[..line.len() - 1] } else { line };

        let buffer = current.get_or_insert_with(String::new);
        buffer.push_str(body);

        if !continues {
            if let Some(done) = current.take() {
                lines.push(done);
            }
        }
    }

    if let Some(rest) = current {
        lines.push(rest);
    }
    lines
}

/// Split a logical line into an unescaped key and value
fn split_entry(line: &str) -> (String, String) {
    let chars: Vec<char> = line.chars().collect();
    let mut key_end = chars.len();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == '=' || c == ':' || is_blank(c) => {
                key_end = i;
                break;
            }
            _ => i += 1,
        }
    }
    let key_end = key_end.min(chars.len());

    let mut value_start = key_end;
    while value_start < chars.len() && is_blank(chars[value_start]) {
        value_start += 1;
    }
    if value_start < chars.len() && matches!(chars[value_start], '=' | ':') {
        value_start += 1;
        while value_start < chars.len() && is_blank(chars[value_start]) {
            value_start += 1;
        }
    }

    let key: String = chars[..key_end].iter().collect();
    let value: String = chars[value_start..].iter().collect();
    (unescape(&key), unescape(&value))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => out.push(decoded),
                    _ => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
