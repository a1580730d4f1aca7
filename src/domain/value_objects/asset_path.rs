//! Asset Path Value Object
//!
//! Root-relative, POSIX-style path of an asset inside the output directory,
//! e.g. `/app/app.nocache.js`. This is the manifest key and the form the
//! service worker sees in request URLs.

use std::fmt;
use std::path::{Component, Path};

/// A root-relative asset path
///
/// Always starts with a single `/` and uses `/` as separator regardless of
/// platform. Ordering is plain byte order of that string, which is what
/// keeps the manifest stable across platforms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetPath(String);

impl AssetPath {
    /// Build from a path relative to the output root.
    ///
    /// Returns `None` for paths that are absolute, empty, contain `..`,
    /// or are not valid UTF-8.
    pub fn from_relative(relative: &Path) -> Option<Self> {
        let mut key = String::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    key.push('/');
                    key.push_str(part.to_str()?);
                }
                Component::CurDir => {}
                _ => return None,
            }
        }
        if key.is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// Normalize a reference found in HTML or declared in project files.
    ///
    /// `./app.js` and `app.js` become `/app.js`; `/app.js` is kept.
    /// Query strings and fragments are dropped. Returns `None` when nothing
    /// is left after trimming.
    pub fn from_reference(reference: &str) -> Option<Self> {
        let trimmed = reference.trim();
        let end = trimmed.find(['?', '#']).unwrap_or(trimmed.len());
        let mut path = &trimmed[..end];

        while let Some(rest) = path.strip_prefix("./") {
            path = rest;
        }
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return None;
        }

        Some(Self(format!("/{}", path.replace('\\', "/"))))
    }

    /// The root-relative key, with leading `/`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path relative to the output root, without leading `/`
    pub fn relative(&self) -> &str {
        &self.0[1..]
    }

    /// Final path segment
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Case-sensitive suffix test on the whole key
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
