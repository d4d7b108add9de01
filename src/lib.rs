//! Argument preprocessing for a native program launcher: `@argfile`
//! expansion, environment-supplied options and detection of where the
//! application's own arguments begin.

pub mod args;
pub mod config;
pub mod logging;
