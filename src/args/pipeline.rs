//! Pipeline — ties all argument processing stages together.

use serde::Serialize;

use crate::args::env_ingest::read_env_var;
use crate::args::error::ArgError;
use crate::args::preprocess::ArgProcessor;
use crate::config::LauncherMode;

/// Where the environment-supplied arguments come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvSource<'a> {
    /// Read the named variable from the process environment.
    Process(&'a str),
    /// Use this value for the named variable (`None` = unset).
    Value(&'a str, Option<&'a str>),
    /// Skip environment ingestion.
    Disabled,
}

/// The final argument vector the launcher acts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedArgs {
    /// Program name, environment arguments, then command-line arguments.
    pub args: Vec<String>,
    /// Index into `args` where the application's own arguments begin.
    /// `Some(0)` in tool mode, `None` if no boundary was found.
    pub app_arg_index: Option<usize>,
    /// Messages for the user (e.g. environment pick-up notices).
    pub notes: Vec<String>,
}

/// Build the final argv from raw launcher input.
///
/// This is the main entry point for the argument pipeline.
///
/// # Arguments
///
/// * `processor` - Processor holding option sets and classification state
/// * `mode` - Application launcher or generic tool
/// * `disable_argfiles` - Start with argfile expansion switched off
/// * `program` - Program name, kept as `args[0]`
/// * `env` - Source of environment-supplied arguments
/// * `raw_args` - Command-line arguments after the program name
pub fn expand_command_line(
    processor: &mut ArgProcessor,
    mode: LauncherMode,
    disable_argfiles: bool,
    program: &str,
    env: EnvSource<'_>,
    raw_args: &[String],
) -> Result<ExpandedArgs, ArgError> {
    processor.init(mode, disable_argfiles);

    let mut args = vec![program.to_string()];
    let mut notes = Vec::new();

    // Stage 1: environment arguments, ahead of the command line
    match env {
        EnvSource::Process(var) => {
            let value = read_env_var(var);
            processor.ingest_env(&mut args, &mut notes, var, value.as_deref())?;
        }
        EnvSource::Value(var, value) => {
            processor.ingest_env(&mut args, &mut notes, var, value)?;
        }
        EnvSource::Disabled => {}
    }

    // Stage 2: command-line arguments, expanded in order
    for raw in raw_args {
        let expansion = processor.preprocess(raw)?;
        args.extend(expansion.into_args(raw));
    }

    Ok(ExpandedArgs {
        args,
        app_arg_index: processor.app_arg_index(),
        notes,
    })
}
