//! User configuration directory resolution with test isolation support.
//!
//! `dirs::config_dir()` ignores environment variables on some platforms, so
//! tests that need an isolated user config set `PWA_GEN_CONFIG_HOME` instead.

use std::path::PathBuf;

/// Environment variable overriding the user configuration directory.
pub const CONFIG_HOME_VAR: &str = "PWA_GEN_CONFIG_HOME";

/// Directory holding the user-level `config.toml`.
///
/// - `$PWA_GEN_CONFIG_HOME` when set
/// - otherwise `<platform config dir>/pwa-gen`
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_HOME_VAR)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("pwa-gen")))
}
