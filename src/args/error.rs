//! Fatal argument-processing errors.
//!
//! Every variant ends argument processing: callers report it once and exit
//! with status 1. There is no partial result to continue from.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while expanding argfiles or ingesting the environment.
#[derive(Debug, Error)]
pub enum ArgError {
    /// The argfile could not be stat'ed.
    #[error("Error: could not open `{}'", path.display())]
    ArgfileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The argfile exceeds the size cap.
    #[error("Error: Argument file size should not be larger than {limit}.")]
    ArgfileTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// The argfile exists but could not be opened for reading.
    #[error("Error: could not open `{}'", path.display())]
    ArgfileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the argfile failed part way.
    #[error("Error: loading: {}", path.display())]
    ArgfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: Unmatched quote in environment variable {var}")]
    UnmatchedQuoteInEnv { var: String },

    #[error("Error: Option {option} is not allowed in environment variable {var}")]
    TerminalOptionInEnv { option: String, var: String },

    #[error("Error: Option {option} in {argfile} is not allowed in environment variable {var}")]
    TerminalOptionInEnvArgfile {
        option: String,
        argfile: String,
        var: String,
    },

    #[error("Error: Cannot specify main class in environment variable {var}")]
    MainClassInEnv { var: String },
}

impl ArgError {
    /// Stable diagnostic identifier, independent of the message text.
    pub fn diagnostic_id(&self) -> &'static str {
        match self {
            ArgError::ArgfileNotFound { .. } => "argfile_not_found",
            ArgError::ArgfileTooLarge { .. } => "argfile_too_large",
            ArgError::ArgfileOpen { .. } => "argfile_open_failed",
            ArgError::ArgfileRead { .. } => "argfile_read_failed",
            ArgError::UnmatchedQuoteInEnv { .. } => "env_unmatched_quote",
            ArgError::TerminalOptionInEnv { .. } => "env_terminal_option",
            ArgError::TerminalOptionInEnvArgfile { .. } => "env_argfile_terminal_option",
            ArgError::MainClassInEnv { .. } => "env_main_class",
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
