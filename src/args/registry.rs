//! Option registry — single source of truth for the option spellings the
//! classifier and the environment ingestor care about.

use crate::config::OptionsConfig;

/// What an option means to argument preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagBehavior {
    /// Only consumes its value.
    Plain,
    /// Introduces the application entry point (`-jar`, `-m`). Its value is
    /// the main-class indicator.
    EntryPoint,
}

/// A value-taking option (e.g., `-cp <path>`). Options that stand alone
/// are not registered: the classifier only needs to know which dash
/// arguments consume the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDef {
    pub name: String,
    pub behavior: FlagBehavior,
}

/// The option sets consumed by classification and environment ingestion.
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    defs: Vec<FlagDef>,
    terminal: Vec<String>,
    disable_flag: String,
    inline_entry_prefixes: Vec<String>,
}

impl OptionRegistry {
    /// Build the registry from the `[options]` configuration table.
    ///
    /// Entry points are value-taking even when the whitespace list omits them.
    pub fn from_config(options: &OptionsConfig) -> Self {
        let mut defs: Vec<FlagDef> = options
            .whitespace
            .iter()
            .map(|name| FlagDef {
                name: name.clone(),
                behavior: FlagBehavior::Plain,
            })
            .collect();

        for entry in &options.entry_points {
            match defs.iter_mut().find(|d| &d.name == entry) {
                Some(def) => def.behavior = FlagBehavior::EntryPoint,
                None => defs.push(FlagDef {
                    name: entry.clone(),
                    behavior: FlagBehavior::EntryPoint,
                }),
            }
        }

        Self {
            defs,
            terminal: options.terminal.clone(),
            disable_flag: options.disable_argfiles_flag.clone(),
            inline_entry_prefixes: options.inline_entry_prefixes.clone(),
        }
    }

    pub fn lookup(&self, arg: &str) -> Option<&FlagDef> {
        self.defs.iter().find(|d| d.name == arg)
    }

    /// True for options that consume the following argument.
    pub fn is_whitespace_option(&self, arg: &str) -> bool {
        self.lookup(arg).is_some()
    }

    pub fn is_entry_point(&self, arg: &str) -> bool {
        self.lookup(arg)
            .is_some_and(|d| d.behavior == FlagBehavior::EntryPoint)
    }

    /// True for `--module=app/Main` style arguments that carry the entry
    /// point inline.
    pub fn is_inline_entry(&self, arg: &str) -> bool {
        self.inline_entry_prefixes
            .iter()
            .any(|prefix| arg.starts_with(prefix.as_str()))
    }

    /// Options that end argument interpretation and may not come from the
    /// environment.
    pub fn is_terminal(&self, arg: &str) -> bool {
        self.terminal.iter().any(|t| t == arg)
    }

    pub fn is_disable_flag(&self, arg: &str) -> bool {
        arg == self.disable_flag
    }
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::from_config(&OptionsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_defaults() {
        let reg = OptionRegistry::default();
        assert!(reg.is_whitespace_option("-cp"));
        assert!(reg.is_whitespace_option("--add-modules"));
        assert!(!reg.is_whitespace_option("-verbose"));
        assert!(reg.is_entry_point("-jar"));
        assert!(reg.is_whitespace_option("-jar"));
        assert!(!reg.is_entry_point("-cp"));
        assert!(reg.is_terminal("--dry-run"));
        assert!(reg.is_terminal("-?"));
        assert!(!reg.is_terminal("-cp"));
        assert!(reg.is_disable_flag("--disable-@files"));
        assert!(!reg.is_disable_flag("--disable-@files=yes"));
        assert!(!reg.is_inline_entry("--module=app/app.Main"));
    }

    #[test]
    fn inline_entry_prefix_is_opt_in() {
        let options = OptionsConfig {
            inline_entry_prefixes: vec!["--module=".into()],
            ..OptionsConfig::default()
        };
        let reg = OptionRegistry::from_config(&options);
        assert!(reg.is_inline_entry("--module=app/app.Main"));
        assert!(!reg.is_inline_entry("--module"));
    }

    #[test]
    fn entry_point_missing_from_whitespace_list_is_added() {
        let options = OptionsConfig {
            whitespace: vec!["--lib".into()],
            entry_points: vec!["--run".into()],
            ..OptionsConfig::default()
        };
        let reg = OptionRegistry::from_config(&options);
        assert!(reg.is_whitespace_option("--run"));
        assert!(reg.is_entry_point("--run"));
        assert_eq!(
            reg.lookup("--lib").map(|d| d.behavior),
            Some(FlagBehavior::Plain)
        );
    }
}
