//! Launcher configuration: option spellings and expansion settings,
//! loaded from TOML.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LauncherConfig, LauncherMode, OptionsConfig, MAX_ARGFILE_SIZE};
