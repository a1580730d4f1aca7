//! Output Rendering
//!
//! Provides a unified interface for rendering output to different formats.

use crate::application::GenerateResult;
use crate::domain::ports::WriteOutcome;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    write: &'static str,
    skip: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            write: "→",
            skip: "○",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            write: "->",
            skip: "[ ]",
            warn: "[!]",
        }
    }
}

/// Trait for rendering generate results
pub trait GenerateResultRenderer {
    /// Render the generate result to a string
    fn render(&self, result: &GenerateResult) -> String;
}

/// Text renderer for generate results
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl GenerateResultRenderer for TextRenderer {
    fn render(&self, result: &GenerateResult) -> String {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };
        let mut out = Vec::new();

        let title = match (result.dry_run, result.has_changes()) {
            (true, _) => "Dry Run",
            (false, true) => "Generation Complete",
            (false, false) => "Already Up-to-date",
        };
        out.push(format!("{} {}", icons.check, title));
        out.push(String::new());
        out.push(format!("  Output: {}", result.output_root.display()));
        if result.pwa_enabled {
            out.push(format!(
                "  {} assets ({} critical, {} background)",
                result.manifest_entries, result.critical_count, result.background_count
            ));
        } else {
            out.push("  PWA disabled: service worker unregisters itself".to_string());
        }

        let written: Vec<_> = result.written().collect();
        if !written.is_empty() {
            let label = if result.dry_run { "Would write" } else { "Written" };
            out.push(String::new());
            out.push(format!("  {} ({}):", label, written.len()));
            for file in &written {
                let created = if file.outcome == WriteOutcome::Created {
                    " (new)"
                } else {
                    ""
                };
                out.push(format!("    {} {}{}", icons.write, file.path.display(), created));
                if let Some(diff) = &file.diff {
                    for line in diff.lines() {
                        out.push(format!("      {}", line));
                    }
                }
            }
        }

        let unchanged: Vec<_> = result.unchanged().collect();
        if !unchanged.is_empty() && (self.verbose > 0 || written.is_empty()) {
            out.push(String::new());
            out.push(format!("  Unchanged ({}):", unchanged.len()));
            for file in &unchanged {
                out.push(format!("    {} {}", icons.skip, file.path.display()));
            }
        }

        if !result.warnings.is_empty() {
            out.push(String::new());
            out.push(format!("  Warnings ({}):", result.warnings.len()));
            for warning in &result.warnings {
                out.push(format!("    {} {}", icons.warn, warning));
            }
        }

        out.join("\n")
    }
}

/// JSON renderer for generate results
pub struct JsonRenderer;

impl GenerateResultRenderer for JsonRenderer {
    fn render(&self, result: &GenerateResult) -> String {
        let paths = |files: Vec<&crate::application::EmittedFile>| {
            files
                .iter()
                .map(|f| f.path.display().to_string())
                .collect::<Vec<_>>()
        };
        let json = serde_json::json!({
            "success": true,
            "output_root": result.output_root.display().to_string(),
            "pwa": result.pwa_enabled,
            "dry_run": result.dry_run,
            "manifest_entries": result.manifest_entries,
            "critical": result.critical_count,
            "background": result.background_count,
            "written": paths(result.written().collect()),
            "unchanged": paths(result.unchanged().collect()),
            "warnings": result.warnings,
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}

/// Create a renderer based on format
pub fn create_renderer(
    format: OutputFormat,
    unicode: bool,
    verbose: u8,
) -> Box<dyn GenerateResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Whether stdout can take unicode icons
pub fn supports_unicode() -> bool {
    use is_terminal::IsTerminal;
    std::io::stdout().is_terminal() && std::env::var_os("NO_UNICODE").is_none()
}
