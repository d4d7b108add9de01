use serde::{Deserialize, Serialize};

/// Hard cap on argfile size. Downstream indices and counters are bounded.
pub const MAX_ARGFILE_SIZE: u64 = 0x7FFF_FFFF;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub launcher: LauncherConfig,
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Which kind of program the launcher is driving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LauncherMode {
    /// Application launcher: has a main class, so the application
    /// boundary is searched for and ends expansion.
    #[default]
    Application,
    /// Generic tool: no application arguments, expansion never stops early.
    Tool,
}

/// Launcher behaviour settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default)]
    pub mode: LauncherMode,
    /// Environment variable holding extra launcher arguments.
    #[serde(default = "default_env_var")]
    pub env_var: String,
    /// Disable `@argfile` expansion from the start.
    #[serde(default)]
    pub disable_argfiles: bool,
    /// Bytes read per chunk when expanding an argfile (default: 4096).
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Largest accepted argfile in bytes (default: 0x7FFFFFFF).
    #[serde(default = "default_max_argfile_size")]
    pub max_argfile_size: u64,
    /// End an open quote at an unescaped line break (default: false).
    #[serde(default)]
    pub quotes_end_at_eol: bool,
}

/// Option spellings used by classification and environment ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Options that take the following argument as their value.
    #[serde(default = "default_whitespace_options")]
    pub whitespace: Vec<String>,
    /// Value-taking options whose value is the application entry point.
    #[serde(default = "default_entry_points")]
    pub entry_points: Vec<String>,
    /// Options that end argument interpretation.
    #[serde(default = "default_terminal_options")]
    pub terminal: Vec<String>,
    /// Flag that switches argfile expansion off for the rest of the line.
    #[serde(default = "default_disable_flag")]
    pub disable_argfiles_flag: String,
    /// Prefixes of dash arguments that carry the entry point inline.
    #[serde(default = "default_inline_entry_prefixes")]
    pub inline_entry_prefixes: Vec<String>,
}

fn default_env_var() -> String {
    "JDK_JAVA_OPTIONS".to_string()
}

fn default_chunk_size() -> usize {
    4096
}

fn default_max_argfile_size() -> u64 {
    MAX_ARGFILE_SIZE
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_whitespace_options() -> Vec<String> {
    strings(&[
        "-cp",
        "-classpath",
        "--class-path",
        "--module-path",
        "-p",
        "--upgrade-module-path",
        "--add-modules",
        "--limit-modules",
        "--add-exports",
        "--add-opens",
        "--add-reads",
        "--patch-module",
        "--describe-module",
        "-d",
        "--module",
        "-m",
        "-jar",
    ])
}

fn default_entry_points() -> Vec<String> {
    strings(&["-jar", "-m", "--module"])
}

fn default_terminal_options() -> Vec<String> {
    strings(&[
        "-jar",
        "-m",
        "--module",
        "--dry-run",
        "-h",
        "-?",
        "-help",
        "--help",
        "-X",
        "--help-extra",
        "-version",
        "--version",
        "-fullversion",
        "--full-version",
    ])
}

fn default_disable_flag() -> String {
    "--disable-@files".to_string()
}

/// Off by default: a dash argument never sets the boundary unless a
/// prefix is configured.
fn default_inline_entry_prefixes() -> Vec<String> {
    Vec::new()
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            mode: LauncherMode::default(),
            env_var: default_env_var(),
            disable_argfiles: false,
            chunk_size: default_chunk_size(),
            max_argfile_size: default_max_argfile_size(),
            quotes_end_at_eol: false,
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            whitespace: default_whitespace_options(),
            entry_points: default_entry_points(),
            terminal: default_terminal_options(),
            disable_argfiles_flag: default_disable_flag(),
            inline_entry_prefixes: default_inline_entry_prefixes(),
        }
    }
}
