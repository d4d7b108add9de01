//! Opt-in file logging for argument expansion.
//!
//! Nothing is written unless `LAUNCHARGS_LOG` names a file: the launcher's
//! own stdout/stderr carry the expanded argv and diagnostics.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "LAUNCHARGS_LOG";

/// Filter used when `RUST_LOG` is unset: argfile expansions and environment
/// pick-ups from this crate only.
pub const DEFAULT_FILTER: &str = "launchargs=debug";

/// Initialize tracing if `LAUNCHARGS_LOG` is set.
///
/// The file actually written is `{path}.{timestamp}.{pid}`, so concurrent
/// launches never share one. Returns that path, or `None` when logging
/// stays off.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV_VAR).filter(|v| !v.is_empty())?;
    let path = unique_log_path(Path::new(&base));

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}

fn unique_log_path(base: &Path) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = OsString::from(base.as_os_str());
    name.push(format!(".{}.{}", timestamp, std::process::id()));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_is_suffixed_with_timestamp_and_pid() {
        let path = unique_log_path(Path::new("/tmp/launchargs.log"));
        let name = path.to_string_lossy();
        assert!(name.starts_with("/tmp/launchargs.log."));
        assert!(name.ends_with(&format!(".{}", std::process::id())));
        assert_eq!(name.matches('.').count(), 3);
    }

    #[test]
    fn default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
