//! Environment ingestion — launcher arguments from an environment variable.

use crate::args::error::ArgError;
use crate::args::preprocess::{ArgProcessor, Expansion};

/// C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_env_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Read `var` from the process environment. A value that is not valid
/// UTF-8 is still picked up, decoded lossily like argfile tokens.
pub(super) fn read_env_var(var: &str) -> Option<String> {
    std::env::var_os(var).map(|value| value.to_string_lossy().into_owned())
}

/// Split an environment value into raw arguments.
///
/// Whitespace separates arguments. Inside `'...'` or `"..."` everything up
/// to the matching quote is copied as is; there are no escapes. Quoted and
/// unquoted runs glue together, so `a"b c"d` is one argument.
pub fn split_env_value(value: &str, var: &str) -> Result<Vec<String>, ArgError> {
    let mut args = Vec::new();
    let mut chars = value.chars().peekable();

    loop {
        while chars.next_if(|&c| is_env_space(c)).is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let mut arg = String::new();
        while let Some(ch) = chars.next_if(|&c| !is_env_space(c)) {
            if ch == '"' || ch == '\'' {
                loop {
                    match chars.next() {
                        Some(c) if c == ch => break,
                        Some(c) => arg.push(c),
                        None => {
                            return Err(ArgError::UnmatchedQuoteInEnv {
                                var: var.to_string(),
                            })
                        }
                    }
                }
            } else {
                arg.push(ch);
            }
        }
        args.push(arg);
    }

    Ok(args)
}

impl ArgProcessor {
    /// Append the arguments held by environment variable `var` to `target`.
    ///
    /// Returns `Ok(false)` without touching anything when the variable is
    /// unset, in tool mode, or on a relaunch.
    pub fn add_args_from_env(
        &mut self,
        target: &mut Vec<String>,
        var: &str,
    ) -> Result<bool, ArgError> {
        let value = read_env_var(var);
        self.add_args_from_env_value(target, var, value.as_deref())
    }

    /// Like [`ArgProcessor::add_args_from_env`], with the value supplied by
    /// the caller.
    pub fn add_args_from_env_value(
        &mut self,
        target: &mut Vec<String>,
        var: &str,
        value: Option<&str>,
    ) -> Result<bool, ArgError> {
        self.ingest_env(target, &mut Vec::new(), var, value)
    }

    pub(super) fn ingest_env(
        &mut self,
        target: &mut Vec<String>,
        notes: &mut Vec<String>,
        var: &str,
        value: Option<&str>,
    ) -> Result<bool, ArgError> {
        if self.state.is_tool_mode() || self.state.is_relaunch() {
            return Ok(false);
        }

        let Some(value) = value else {
            return Ok(false);
        };

        tracing::info!(var, value, "picked up launcher arguments from environment");
        notes.push(format!("NOTE: Picked up {}: {}", var, value));

        let mut staged = Vec::new();
        for raw in split_env_value(value, var)? {
            let had_boundary = self.state.app_arg_index().is_some();

            match self.preprocess(&raw)? {
                Expansion::NotExpanded => {
                    self.reject_terminal(&raw, None, var)?;
                    staged.push(raw);
                }
                Expansion::Literal(arg) => {
                    self.reject_terminal(&arg, None, var)?;
                    staged.push(arg);
                }
                Expansion::Expanded(args) => {
                    for arg in &args {
                        self.reject_terminal(arg, Some(&raw), var)?;
                    }
                    staged.extend(args);
                }
            }

            // Checked after expansion: an argfile can smuggle in a main class.
            if !had_boundary && self.state.app_arg_index().is_some() {
                return Err(ArgError::MainClassInEnv {
                    var: var.to_string(),
                });
            }
        }

        target.extend(staged);
        Ok(true)
    }

    fn reject_terminal(&self, arg: &str, argfile: Option<&str>, var: &str) -> Result<(), ArgError> {
        if !self.registry.is_terminal(arg) {
            return Ok(());
        }
        Err(match argfile {
            None => ArgError::TerminalOptionInEnv {
                option: arg.to_string(),
                var: var.to_string(),
            },
            Some(argfile) => ArgError::TerminalOptionInEnvArgfile {
                option: arg.to_string(),
                argfile: argfile.to_string(),
                var: var.to_string(),
            },
        })
    }
}
