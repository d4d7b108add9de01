//! Launcher argument state — the sequential classifier that finds where the
//! application's own arguments begin.
//!
//! Every final argument must pass through [`LauncherArgState::classify`]
//! exactly once, in the order the launcher will use it. The result depends
//! on that order.

use crate::args::registry::OptionRegistry;
use crate::config::LauncherMode;

/// Classification state for one argument-processing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherArgState {
    /// Arguments seen so far, counting the program name.
    args_count: usize,
    expecting_value: bool,
    /// `None` until the boundary is found; `Some(0)` in tool mode.
    first_app_arg_index: Option<usize>,
    expansion_disabled: bool,
    relaunch: bool,
}

impl Default for LauncherArgState {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherArgState {
    /// Fresh state, as before the first `init` in a process.
    pub fn new() -> Self {
        Self {
            args_count: 1,
            expecting_value: false,
            first_app_arg_index: None,
            expansion_disabled: false,
            relaunch: false,
        }
    }

    /// Start an argument-processing run.
    ///
    /// A second run on the same state (any argument already classified) is a
    /// relaunch: argfile expansion is forced off and the counter restarts.
    pub fn init(&mut self, mode: LauncherMode, disable_argfiles: bool) {
        if self.args_count != 1 {
            self.relaunch = true;
            self.expansion_disabled = true;
            self.args_count = 1;
        } else {
            self.expansion_disabled = disable_argfiles;
        }

        self.expecting_value = false;

        self.first_app_arg_index = match mode {
            LauncherMode::Application => None,
            LauncherMode::Tool => Some(0),
        };
    }

    /// Observe one final argument.
    pub fn classify(&mut self, arg: &str, registry: &OptionRegistry) {
        let mut boundary = None;
        self.args_count += 1;

        if arg.starts_with('-') {
            self.expecting_value = false;
            if registry.is_whitespace_option(arg) {
                // The value of an entry-point option is the main-class
                // indicator itself, so it must still be seen as no-dash.
                self.expecting_value = !registry.is_entry_point(arg);
            } else if registry.is_disable_flag(arg) {
                self.expansion_disabled = true;
            } else if registry.is_inline_entry(arg) {
                boundary = Some(self.args_count);
            }
        } else {
            if !self.expecting_value {
                // Main class: the count is the index of the next argument.
                boundary = Some(self.args_count);
            }
            self.expecting_value = false;
        }

        if self.first_app_arg_index.is_none() {
            if let Some(index) = boundary {
                tracing::trace!(arg, index, "application boundary found");
                self.first_app_arg_index = Some(index);
            }
        }
    }

    /// Index of the first application argument in the final argv
    /// (program name at 0). `Some(0)` in tool mode, `None` if not yet found.
    pub fn app_arg_index(&self) -> Option<usize> {
        self.first_app_arg_index
    }

    /// True once the boundary sits at a positive index: later arguments
    /// belong to the application and are left untouched.
    pub fn in_application_args(&self) -> bool {
        self.first_app_arg_index.is_some_and(|i| i > 0)
    }

    pub fn args_count(&self) -> usize {
        self.args_count
    }

    pub fn expecting_value(&self) -> bool {
        self.expecting_value
    }

    pub fn expansion_disabled(&self) -> bool {
        self.expansion_disabled
    }

    pub fn is_relaunch(&self) -> bool {
        self.relaunch
    }

    pub fn is_tool_mode(&self) -> bool {
        self.first_app_arg_index == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptionsConfig;

    fn run(args: &[&str]) -> LauncherArgState {
        let registry = OptionRegistry::default();
        let mut state = LauncherArgState::new();
        state.init(LauncherMode::Application, false);
        for arg in args {
            state.classify(arg, &registry);
        }
        state
    }

    #[test]
    fn jar_boundary_is_after_jar_file() {
        let state = run(&["-jar", "app.jar", "arg1"]);
        // argv: [prog, -jar, app.jar, arg1]
        assert_eq!(state.app_arg_index(), Some(3));
        assert_eq!(state.args_count(), 4);
    }

    #[test]
    fn value_of_whitespace_option_is_not_main_class() {
        let state = run(&["-cp", "lib.jar", "Main", "x"]);
        assert_eq!(state.app_arg_index(), Some(4));
    }

    #[test]
    fn dash_argument_never_sets_boundary_by_default() {
        let state = run(&["--module=app/app.Main", "x"]);
        assert_eq!(state.app_arg_index(), Some(3));

        let state = run(&["--module=app/app.Main"]);
        assert_eq!(state.app_arg_index(), None);
    }

    #[test]
    fn configured_inline_prefix_is_entry() {
        let registry = OptionRegistry::from_config(&OptionsConfig {
            inline_entry_prefixes: vec!["--module=".into()],
            ..OptionsConfig::default()
        });
        let mut state = LauncherArgState::new();
        state.init(LauncherMode::Application, false);
        state.classify("--module=app/app.Main", &registry);
        state.classify("x", &registry);
        assert_eq!(state.app_arg_index(), Some(2));
    }

    #[test]
    fn first_boundary_wins() {
        let state = run(&["Main", "Other", "x"]);
        assert_eq!(state.app_arg_index(), Some(2));
    }

    #[test]
    fn order_matters() {
        let a = run(&["-cp", "Main", "lib"]);
        let b = run(&["Main", "-cp", "lib"]);
        assert_eq!(a.app_arg_index(), Some(4));
        assert_eq!(b.app_arg_index(), Some(2));
    }

    #[test]
    fn disable_flag_stops_expansion() {
        let state = run(&["--disable-@files"]);
        assert!(state.expansion_disabled());
        assert_eq!(state.app_arg_index(), None);
    }

    #[test]
    fn tool_mode_pins_index_to_zero() {
        let registry = OptionRegistry::default();
        let mut state = LauncherArgState::new();
        state.init(LauncherMode::Tool, false);
        state.classify("Main", &registry);
        assert_eq!(state.app_arg_index(), Some(0));
        assert!(state.is_tool_mode());
        assert!(!state.in_application_args());
    }

    #[test]
    fn second_init_is_relaunch() {
        let registry = OptionRegistry::default();
        let mut state = LauncherArgState::new();
        state.init(LauncherMode::Application, false);
        state.classify("-verbose", &registry);
        state.init(LauncherMode::Application, false);
        assert!(state.is_relaunch());
        assert!(state.expansion_disabled());
        assert_eq!(state.args_count(), 1);
        assert_eq!(state.app_arg_index(), None);
    }

    #[test]
    fn same_order_after_reset_gives_same_result() {
        let first = run(&["-cp", "a", "Main"]).app_arg_index();
        let second = run(&["-cp", "a", "Main"]).app_arg_index();
        assert_eq!(first, second);
    }
}
