//! Test environment builder for isolated pwa-gen testing.
//!
//! Provides `TestEnv` - a temp project laid out the way a build leaves it
//! (`target/classes/pwa-build.properties` plus `target/app-1.0/app/`), and
//! helpers to run the CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::SystemTime;

use tempfile::TempDir;

/// Timestamp written into the default build properties
pub const BUILD_TIMESTAMP: &str = "2024-05-01T12:00:00Z";

/// Output root of the default `app` 1.0 module, relative to the project
pub const OUTPUT_DIR: &str = "target/app-1.0/app";

/// Result of running a pwa-gen CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Isolated test environment.
///
/// The user config directory is redirected to a separate temp dir so a
/// developer's own `config.toml` never leaks into the tests.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory standing in for the user config directory
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to the output root
    pub fn output_path(&self, relative: &str) -> PathBuf {
        self.project_path(OUTPUT_DIR).join(relative)
    }

    /// Run pwa-gen in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run pwa-gen from project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("PWA_GEN_CONFIG_HOME", self.config_home.path())
            .env("NO_UNICODE", "1")
            .env_remove("PWA_GEN_EMBEDDING")
            .env_remove("PWA_GEN_PARALLEL")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute pwa-gen");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write a file into the compiled output tree
    pub fn write_output_file(&self, relative_path: &str, content: &str) {
        write_file(&self.output_path(relative_path), content);
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, content: &str) {
        write_file(&self.config_home.path().join("config.toml"), content);
    }

    /// Read a file from the output tree
    pub fn read_output_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.output_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read output file {}: {}", relative_path, e))
    }

    /// Parse the written `pwa-asset.json`
    pub fn read_manifest(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_output_file("pwa-asset.json"))
            .expect("pwa-asset.json is valid JSON")
    }

    /// Modification time of an output file
    pub fn output_mtime(&self, relative_path: &str) -> SystemTime {
        std::fs::metadata(self.output_path(relative_path))
            .and_then(|m| m.modified())
            .unwrap_or_else(|e| panic!("Failed to stat {}: {}", relative_path, e))
    }

    /// Replace the build properties with the given content
    pub fn write_properties(&self, content: &str) {
        self.write_project_file("target/classes/pwa-build.properties", content);
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Build properties for module `app` 1.0 with the given PWA switch
pub fn default_properties(pwa: bool) -> String {
    format!(
        "pwa={}\nbuildTimestamp={}\nartifactId=app\nversion=1.0\n",
        pwa, BUILD_TIMESTAMP
    )
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    properties: Option<String>,
    output_files: Vec<(String, String)>,
    project_file: Option<String>,
    project_config: Option<String>,
}

impl TestEnvBuilder {
    /// PWA on, no output files, no project file
    pub fn new() -> Self {
        Self {
            properties: Some(default_properties(true)),
            output_files: Vec::new(),
            project_file: None,
            project_config: None,
        }
    }

    /// Switch the PWA property
    pub fn with_pwa(mut self, enabled: bool) -> Self {
        self.properties = Some(default_properties(enabled));
        self
    }

    /// Raw build properties content
    pub fn with_properties(mut self, content: &str) -> Self {
        self.properties = Some(content.to_string());
        self
    }

    /// Do not create a build properties file
    pub fn without_properties(mut self) -> Self {
        self.properties = None;
        self
    }

    /// Add a file to the compiled output tree
    pub fn with_output_file(mut self, relative_path: &str, content: &str) -> Self {
        self.output_files
            .push((relative_path.to_string(), content.to_string()));
        self
    }

    /// Project descriptor (`webfx.xml`)
    pub fn with_project_file(mut self, xml: &str) -> Self {
        self.project_file = Some(xml.to_string());
        self
    }

    /// Project-level `pwa-gen.toml`
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pwa-gen")),
        };

        std::fs::create_dir_all(env.project_path(OUTPUT_DIR))
            .expect("Failed to create output dir");
        if let Some(properties) = &self.properties {
            env.write_properties(properties);
        }
        for (path, content) in &self.output_files {
            env.write_output_file(path, content);
        }
        if let Some(xml) = &self.project_file {
            env.write_project_file("webfx.xml", xml);
        }
        if let Some(toml) = &self.project_config {
            env.write_project_file("pwa-gen.toml", toml);
        }
        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
