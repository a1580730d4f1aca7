//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod config_home;
mod local;

pub use config_home::{user_config_dir, CONFIG_HOME_VAR};
pub use local::LocalFs;
