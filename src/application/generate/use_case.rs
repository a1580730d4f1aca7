//! Generate Use Case
//!
//! Orchestrates one generator run:
//! 1. Read the build properties and fix the build context
//! 2. Collect declared strategies and entry document references
//! 3. Scan the output tree
//! 4. Resolve strategies, fingerprint, assemble the manifest
//! 5. Emit the service worker and the manifest copy
//!
//! All rules live in domain services; this file only wires them together.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{BuildProperties, ProjectId};
use crate::domain::entities::{BuildContext, Manifest};
use crate::domain::ports::{
    FileSystem, FsError, GenerateEvent, GenerateEventSink, NoopEventSink, WriteOutcome,
};
use crate::domain::services::{
    build_manifest, embed_manifest, extract_references, AssetDeclaration, DeclaredStrategies,
    FilenameHeuristic, ReferencedAssets, ServiceWorkerTemplate, StrategyOrigin, StrategyResolver,
};
use crate::domain::value_objects::{AssetPath, CacheStrategy, ManifestEmbedding};
use crate::error::{PwaError, PwaResult};
use crate::infrastructure::{fingerprint_assets, load_declarations, scan_output_tree, ScanRules};

use super::options::GenerateOptions;
use super::result::{EmittedFile, GenerateResult, ManifestReport};

/// Warnings collected during a run, mirrored to the event sink
struct Warnings<'a> {
    messages: Vec<String>,
    sink: &'a dyn GenerateEventSink,
}

impl<'a> Warnings<'a> {
    fn new(sink: &'a dyn GenerateEventSink) -> Self {
        Self {
            messages: Vec::new(),
            sink,
        }
    }

    /// Log and record a warning raised here
    fn push(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.record(message);
    }

    /// Record warnings already logged where they were raised
    fn extend(&mut self, messages: impl IntoIterator<Item = String>) {
        for message in messages {
            self.record(message);
        }
    }

    fn record(&mut self, message: String) {
        self.sink.on_event(GenerateEvent::Warning {
            message: message.clone(),
        });
        self.messages.push(message);
    }
}

/// Manifest plus what emission needs to know about the entry document
struct Collected {
    manifest: Manifest,
    /// Entry document content, when it could be read
    entry_html: Option<String>,
}

/// Generate use case - orchestrates the generator pipeline
///
/// Parameterized by its file system port so tests can run it in memory.
pub struct GenerateUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
}

impl<FS> GenerateUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    /// Execute the generate use case
    pub fn execute(&self, options: &GenerateOptions) -> PwaResult<GenerateResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the generate use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &GenerateOptions,
        event_sink: Arc<dyn GenerateEventSink>,
    ) -> PwaResult<GenerateResult> {
        let properties = self.load_properties(options)?;
        let context = self.build_context(options, &properties)?;
        let sink = event_sink.as_ref();

        sink.on_event(GenerateEvent::Started {
            output_root: context.output_root().to_path_buf(),
            pwa_enabled: context.pwa_enabled(),
        });

        let mut warnings = Warnings::new(sink);
        let mut result = GenerateResult::new(context.output_root(), context.pwa_enabled());
        result.dry_run = options.dry_run;

        let output = &options.config.output;
        let template = ServiceWorkerTemplate::builtin(context.pwa_enabled());
        let sw_path = context.output_root().join(&output.service_worker);

        if !context.pwa_enabled() {
            // Off: only the kill-switch worker; manifest and entry document stay as they are
            let script = template.render(context.build_timestamp(), "{}");
            result.files.push(self.emit(&sw_path, &script, options.dry_run, sink)?);
        } else {
            let collected = self.collect(&context, options, &mut warnings)?;
            let manifest_json = collected.manifest.to_json();

            let script = template.render(context.build_timestamp(), &manifest_json);
            result.files.push(self.emit(&sw_path, &script, options.dry_run, sink)?);

            match output.embedding {
                ManifestEmbedding::File => {
                    let path = context.output_root().join(&output.manifest);
                    result.files.push(self.emit(&path, &manifest_json, options.dry_run, sink)?);
                }
                ManifestEmbedding::Inline => match &collected.entry_html {
                    Some(html) => {
                        let document = embed_manifest(html, &manifest_json);
                        let path = context.entry_document_path();
                        result.files.push(self.emit(&path, &document, options.dry_run, sink)?);
                    }
                    None => warnings.push(format!(
                        "entry document {} not found, manifest not embedded",
                        context.entry_document_path().display()
                    )),
                },
            }

            result.manifest_entries = collected.manifest.len();
            result.critical_count = collected.manifest.count_with(CacheStrategy::Critical);
            result.background_count = collected.manifest.count_with(CacheStrategy::Background);
        }

        result.warnings = warnings.messages;

        sink.on_event(GenerateEvent::Completed {
            manifest_entries: result.manifest_entries,
            written_count: result.written().count(),
            unchanged_count: result.unchanged().count(),
        });

        tracing::debug!(
            root = %context.output_root().display(),
            entries = result.manifest_entries,
            written = result.written().count(),
            "generation finished"
        );

        Ok(result)
    }

    /// Compute the manifest without writing anything.
    ///
    /// The PWA switch is ignored; the build properties are only needed when
    /// the output root has to be derived from them.
    pub fn build_manifest(&self, options: &GenerateOptions) -> PwaResult<ManifestReport> {
        let properties = if options.output_root.is_some() {
            BuildProperties::default()
        } else {
            self.load_properties(options)?
        };
        let output_root = self.resolve_output_root(options, &properties)?;
        let context = BuildContext::new(
            true,
            properties.build_timestamp().unwrap_or_default(),
            output_root,
            options.config.output.entry_document.clone(),
        );

        let sink = NoopEventSink;
        let mut warnings = Warnings::new(&sink);
        let collected = self.collect(&context, options, &mut warnings)?;

        Ok(ManifestReport {
            context,
            manifest: collected.manifest,
            warnings: warnings.messages,
        })
    }

    fn load_properties(&self, options: &GenerateOptions) -> PwaResult<BuildProperties> {
        let path = options
            .config
            .build_properties_path(&options.project_root);
        BuildProperties::load(&path)
    }

    fn build_context(
        &self,
        options: &GenerateOptions,
        properties: &BuildProperties,
    ) -> PwaResult<BuildContext> {
        let pwa_enabled = properties.pwa_enabled();
        let timestamp = if pwa_enabled {
            properties.require_build_timestamp()?
        } else {
            properties.build_timestamp().unwrap_or_default()
        };
        let output_root = self.resolve_output_root(options, properties)?;

        Ok(BuildContext::new(
            pwa_enabled,
            timestamp,
            output_root,
            options.config.output.entry_document.clone(),
        ))
    }

    fn resolve_output_root(
        &self,
        options: &GenerateOptions,
        properties: &BuildProperties,
    ) -> PwaResult<PathBuf> {
        if let Some(root) = &options.output_root {
            return Ok(options.project_root.join(root));
        }
        ProjectId::resolve(
            options.artifact_id.as_deref(),
            options.version.as_deref(),
            properties,
        )
        .ok_or_else(|| PwaError::UnresolvedOutputDir {
            reason: "no artifact id and version given, and none recorded in the build properties"
                .to_string(),
        })?
        .output_root(&options.project_root)
    }

    /// Declared + referenced strategies, scan, resolve, fingerprint, assemble
    fn collect(
        &self,
        context: &BuildContext,
        options: &GenerateOptions,
        warnings: &mut Warnings<'_>,
    ) -> PwaResult<Collected> {
        let config = &options.config;
        let sink = warnings.sink;

        // Declared strategies degrade to none when the descriptor is unusable
        let project_file = config.project_file_path(&options.project_root);
        let declarations: Vec<AssetDeclaration> = match load_declarations(&project_file) {
            Ok(declarations) => declarations,
            Err(err) => {
                warnings.push(err.to_string());
                Vec::new()
            }
        };
        let (declared, declared_warnings) = DeclaredStrategies::from_declarations(&declarations);
        for message in declared_warnings {
            warnings.push(message);
        }
        sink.on_event(GenerateEvent::DeclaredLoaded {
            count: declared.len(),
        });

        let entry_path = context.entry_document_path();
        let entry_html = match self.file_system.read(&entry_path) {
            Ok(html) => Some(html),
            Err(FsError::NotFound(_)) => {
                warnings.push(format!(
                    "entry document {} not found, no references detected",
                    entry_path.display()
                ));
                None
            }
            Err(err) => {
                warnings.push(format!("cannot read entry document: {}", err));
                None
            }
        };
        let references = entry_html
            .as_deref()
            .map(extract_references)
            .unwrap_or_default();
        sink.on_event(GenerateEvent::ReferencesDetected {
            count: references.len(),
        });

        let rules = ScanRules::new(
            &config.scan.exclude_extensions,
            [
                context.entry_document(),
                config.output.service_worker.as_str(),
                config.output.manifest.as_str(),
            ]
            .iter()
            .filter_map(|name| AssetPath::from_reference(name))
            .collect(),
        );
        let scan = scan_output_tree(context.output_root(), &rules);
        warnings.extend(scan.warnings);
        sink.on_event(GenerateEvent::Scanned {
            candidate_count: scan.paths.len(),
        });

        let resolver = StrategyResolver::new()
            .with_source(declared)
            .with_source(ReferencedAssets::new(references))
            .with_source(FilenameHeuristic::new(config.strategy.critical_suffixes.clone()));
        let strategies = resolver.resolve(&scan.paths);

        for (path, resolution) in strategies.iter() {
            if scan.paths.binary_search(path).is_ok() {
                continue;
            }
            if resolution.origin == StrategyOrigin::Declared {
                warnings.push(format!("declared asset {} not found in output tree", path));
            } else {
                tracing::debug!(
                    asset = %path,
                    origin = %resolution.origin,
                    "classified asset is not in the output tree"
                );
            }
        }

        let fingerprints =
            fingerprint_assets(context.output_root(), &scan.paths, &strategies, config.scan.parallel);
        warnings.extend(fingerprints.warnings);
        sink.on_event(GenerateEvent::Fingerprinted {
            asset_count: fingerprints.assets.len(),
            dropped_count: fingerprints.dropped.len(),
        });

        Ok(Collected {
            manifest: build_manifest(&fingerprints.assets, &strategies),
            entry_html,
        })
    }

    /// Write `content` to `path` unless it is already there
    fn emit(
        &self,
        path: &Path,
        content: &str,
        dry_run: bool,
        sink: &dyn GenerateEventSink,
    ) -> PwaResult<EmittedFile> {
        let file = if dry_run {
            self.plan_write(path, content)
        } else {
            let outcome = self
                .file_system
                .write_if_changed(path, content)
                .map_err(|e| PwaError::WriteFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            EmittedFile {
                path: path.to_path_buf(),
                outcome,
                diff: None,
            }
        };

        if sink.wants_detailed_events() {
            sink.on_event(GenerateEvent::FileEmitted {
                path: file.path.clone(),
                outcome: file.outcome,
            });
        }
        Ok(file)
    }

    /// What a write would do, with a diff against the current content
    fn plan_write(&self, path: &Path, content: &str) -> EmittedFile {
        let current = if self.file_system.exists(path) {
            self.file_system.read(path).ok()
        } else {
            None
        };

        let outcome = match &current {
            Some(old) if old == content => WriteOutcome::Unchanged,
            Some(_) => WriteOutcome::Updated,
            None => WriteOutcome::Created,
        };
        let diff = outcome
            .is_change()
            .then(|| generate_diff(path, current.as_deref().unwrap_or(""), content));

        EmittedFile {
            path: path.to_path_buf(),
            outcome,
            diff,
        }
    }
}

/// Generate a unified diff between old and new content
fn generate_diff(path: &Path, old: &str, new: &str) -> String {
    use similar::TextDiff;
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(
            &format!("a/{}", path.display()),
            &format!("b/{}", path.display()),
        )
        .to_string()
}
