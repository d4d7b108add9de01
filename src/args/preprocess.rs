//! Argument preprocessor — one raw argument → literal, escaped `@@`, or
//! expanded argfile.

use std::path::Path;

use crate::args::error::ArgError;
use crate::args::expander::ArgfileExpander;
use crate::args::reader::ChunkedReader;
use crate::args::registry::OptionRegistry;
use crate::args::state::LauncherArgState;
use crate::config::{Config, LauncherMode};

/// Outcome of preprocessing one raw argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// Use the raw argument unchanged.
    NotExpanded,
    /// Use this argument instead (an `@@` escape with one `@` stripped).
    Literal(String),
    /// Replace the argument with the contents of an argfile.
    Expanded(Vec<String>),
}

impl Expansion {
    /// The final arguments this expansion contributes for `raw`.
    pub fn into_args(self, raw: &str) -> Vec<String> {
        match self {
            Expansion::NotExpanded => vec![raw.to_string()],
            Expansion::Literal(arg) => vec![arg],
            Expansion::Expanded(args) => args,
        }
    }
}

/// Owns the classification state and drives preprocessing for one launch.
#[derive(Debug, Clone)]
pub struct ArgProcessor {
    pub(super) state: LauncherArgState,
    pub(super) registry: OptionRegistry,
    pub(super) expander: ArgfileExpander,
}

impl ArgProcessor {
    pub fn new(registry: OptionRegistry, expander: ArgfileExpander) -> Self {
        Self {
            state: LauncherArgState::new(),
            registry,
            expander,
        }
    }

    /// Build a processor from configuration (option sets and reader settings).
    pub fn from_config(config: &Config) -> Self {
        let reader = ChunkedReader::new(config.launcher.chunk_size)
            .with_quotes_end_at_eol(config.launcher.quotes_end_at_eol);
        let expander =
            ArgfileExpander::new(reader).with_size_limit(config.launcher.max_argfile_size);
        Self::new(OptionRegistry::from_config(&config.options), expander)
    }

    /// Start (or restart) a run. See [`LauncherArgState::init`].
    pub fn init(&mut self, mode: LauncherMode, disable_argfiles: bool) {
        self.state.init(mode, disable_argfiles);
    }

    pub fn state(&self) -> &LauncherArgState {
        &self.state
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    pub fn app_arg_index(&self) -> Option<usize> {
        self.state.app_arg_index()
    }

    /// Preprocess one raw argument, classifying whatever it contributes.
    pub fn preprocess(&mut self, arg: &str) -> Result<Expansion, ArgError> {
        if self.state.in_application_args() {
            return Ok(Expansion::NotExpanded);
        }

        if self.state.expansion_disabled() {
            self.state.classify(arg, &self.registry);
            return Ok(Expansion::NotExpanded);
        }

        let Some(rest) = arg.strip_prefix('@') else {
            self.state.classify(arg, &self.registry);
            return Ok(Expansion::NotExpanded);
        };

        if rest.is_empty() {
            // A lone `@` is an ordinary argument.
            self.state.classify(arg, &self.registry);
            return Ok(Expansion::NotExpanded);
        }

        if rest.starts_with('@') {
            self.state.classify(rest, &self.registry);
            return Ok(Expansion::Literal(rest.to_string()));
        }

        let state = &mut self.state;
        let registry = &self.registry;
        let tokens = self
            .expander
            .expand(Path::new(rest), |token| state.classify(token, registry))?;
        Ok(Expansion::Expanded(tokens))
    }
}

impl Default for ArgProcessor {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
