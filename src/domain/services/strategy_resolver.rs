//! Strategy resolution
//!
//! Several sources can classify the same path. They are applied in a fixed
//! order against a table that only accepts the first claim for each path, so
//! an earlier source always wins:
//!
//! 1. [`DeclaredStrategies`] - explicit entries from the project file
//! 2. [`ReferencedAssets`] - scripts/stylesheets loaded by the entry document
//! 3. [`FilenameHeuristic`] - compiled bootstrap scripts
//!
//! Paths nobody claims carry no strategy.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::value_objects::{AssetPath, CacheStrategy};

/// Which source decided a path's strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyOrigin {
    Declared,
    Referenced,
    Heuristic,
}

impl fmt::Display for StrategyOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyOrigin::Declared => write!(f, "declared"),
            StrategyOrigin::Referenced => write!(f, "referenced"),
            StrategyOrigin::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// A resolved classification and who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub strategy: CacheStrategy,
    pub origin: StrategyOrigin,
}

/// Path → strategy table that is writable only while sources run
#[derive(Debug, Default)]
pub struct StrategyTable {
    entries: BTreeMap<AssetPath, Resolution>,
}

impl StrategyTable {
    /// Record a classification unless the path is already claimed.
    ///
    /// Returns `true` when the claim was accepted.
    pub fn claim(&mut self, path: AssetPath, strategy: CacheStrategy, origin: StrategyOrigin) -> bool {
        if self.entries.contains_key(&path) {
            return false;
        }
        self.entries.insert(path, Resolution { strategy, origin });
        true
    }

    /// Stop accepting claims
    pub fn freeze(self) -> ResolvedStrategies {
        ResolvedStrategies {
            entries: self.entries,
        }
    }
}

/// Read-only result of strategy resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStrategies {
    entries: BTreeMap<AssetPath, Resolution>,
}

impl ResolvedStrategies {
    pub fn get(&self, path: &AssetPath) -> Option<CacheStrategy> {
        self.entries.get(path).map(|r| r.strategy)
    }

    pub fn resolution(&self, path: &AssetPath) -> Option<Resolution> {
        self.entries.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssetPath, &Resolution)> {
        self.entries.iter()
    }
}

/// One classification source
///
/// `candidates` is the scanned asset list; sources that classify by name
/// look at it, sources with their own path lists may ignore it.
pub trait StrategySource {
    fn origin(&self) -> StrategyOrigin;

    fn classify(&self, candidates: &[AssetPath], table: &mut StrategyTable);
}

/// Strategies declared explicitly by the project
#[derive(Debug, Clone, Default)]
pub struct DeclaredStrategies {
    entries: BTreeMap<AssetPath, CacheStrategy>,
}

/// A declaration as read from configuration, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDeclaration {
    pub path: String,
    pub strategy: Option<String>,
}

impl AssetDeclaration {
    pub fn new(path: impl Into<String>, strategy: Option<&str>) -> Self {
        Self {
            path: path.into(),
            strategy: strategy.map(str::to_string),
        }
    }
}

impl DeclaredStrategies {
    /// Validate raw declarations.
    ///
    /// A missing or blank strategy means [`CacheStrategy::DECLARED_DEFAULT`].
    /// Unknown strategy values also fall back to it and produce a warning.
    /// When a path is declared twice the last declaration wins.
    pub fn from_declarations(declarations: &[AssetDeclaration]) -> (Self, Vec<String>) {
        let mut entries = BTreeMap::new();
        let mut warnings = Vec::new();

        for declaration in declarations {
            let Some(path) = AssetPath::from_reference(&declaration.path) else {
                warnings.push(format!("ignoring declared asset with empty path '{}'", declaration.path));
                continue;
            };

            let strategy = match declaration.strategy.as_deref().map(str::trim) {
                None | Some("") => CacheStrategy::DECLARED_DEFAULT,
                Some(raw) => raw.parse().unwrap_or_else(|err| {
                    warnings.push(format!(
                        "{} for declared asset {}, using {}",
                        err,
                        path,
                        CacheStrategy::DECLARED_DEFAULT
                    ));
                    CacheStrategy::DECLARED_DEFAULT
                }),
            };
            entries.insert(path, strategy);
        }

        (Self { entries }, warnings)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StrategySource for DeclaredStrategies {
    fn origin(&self) -> StrategyOrigin {
        StrategyOrigin::Declared
    }

    fn classify(&self, _candidates: &[AssetPath], table: &mut StrategyTable) {
        for (path, strategy) in &self.entries {
            table.claim(path.clone(), *strategy, self.origin());
        }
    }
}

/// Assets the entry document loads directly
#[derive(Debug, Clone, Default)]
pub struct ReferencedAssets {
    paths: Vec<AssetPath>,
}

impl ReferencedAssets {
    pub fn new(paths: Vec<AssetPath>) -> Self {
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl StrategySource for ReferencedAssets {
    fn origin(&self) -> StrategyOrigin {
        StrategyOrigin::Referenced
    }

    fn classify(&self, _candidates: &[AssetPath], table: &mut StrategyTable) {
        for path in &self.paths {
            if table.claim(path.clone(), CacheStrategy::Critical, self.origin()) {
                tracing::debug!(asset = %path, "auto-detected critical asset");
            }
        }
    }
}

/// Marks compiled bootstrap scripts as critical by file name suffix
#[derive(Debug, Clone)]
pub struct FilenameHeuristic {
    suffixes: Vec<String>,
}

impl FilenameHeuristic {
    /// Suffixes of the generated bootstrap scripts
    pub const DEFAULT_SUFFIXES: &'static [&'static str] = &[".cache.js", ".nocache.js"];

    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    pub fn matches(&self, path: &AssetPath) -> bool {
        self.suffixes.iter().any(|suffix| path.ends_with(suffix))
    }
}

impl Default for FilenameHeuristic {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect())
    }
}

impl StrategySource for FilenameHeuristic {
    fn origin(&self) -> StrategyOrigin {
        StrategyOrigin::Heuristic
    }

    fn classify(&self, candidates: &[AssetPath], table: &mut StrategyTable) {
        for path in candidates.iter().filter(|p| self.matches(p)) {
            table.claim(path.clone(), CacheStrategy::Critical, self.origin());
        }
    }
}

/// Applies sources in order
#[derive(Default)]
pub struct StrategyResolver {
    sources: Vec<Box<dyn StrategySource>>,
}

impl StrategyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source; it ranks below every source added before it
    pub fn with_source(mut self, source: impl StrategySource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn resolve(&self, candidates: &[AssetPath]) -> ResolvedStrategies {
        let mut table = StrategyTable::default();
        for source in &self.sources {
            source.classify(candidates, &mut table);
        }
        table.freeze()
    }
}
