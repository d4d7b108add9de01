//! Argument preprocessing pipeline for the launcher.
//!
//! ```text
//! Env string ─┐
//!             ├→ Preprocess → (@argfile → Reader → Lexer) → Classify → argv
//! Raw args  ──┘
//! ```
//!
//! Every argument that ends up in the final argv is classified exactly once,
//! in final order, so the application boundary can be found.

mod env_ingest;
mod error;
mod expander;
mod lexer;
mod pipeline;
mod preprocess;
mod reader;
mod registry;
mod state;

pub use env_ingest::split_env_value;
pub use error::ArgError;
pub use expander::ArgfileExpander;
pub use lexer::{tokenize, tokenize_with, Chunk, LexState, Lexed, LexerContext};
pub use pipeline::{expand_command_line, EnvSource, ExpandedArgs};
pub use preprocess::{ArgProcessor, Expansion};
pub use reader::ChunkedReader;
pub use registry::{FlagBehavior, FlagDef, OptionRegistry};
pub use state::LauncherArgState;
