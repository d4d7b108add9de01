//! Argfile expander — `@path` → tokens.

use std::fs::{self, File};
use std::path::Path;

use crate::args::error::ArgError;
use crate::args::reader::ChunkedReader;
use crate::config::MAX_ARGFILE_SIZE;

/// Validates an argfile and lexes its contents.
#[derive(Debug, Clone, Copy)]
pub struct ArgfileExpander {
    reader: ChunkedReader,
    size_limit: u64,
}

impl ArgfileExpander {
    pub fn new(reader: ChunkedReader) -> Self {
        Self {
            reader,
            size_limit: MAX_ARGFILE_SIZE,
        }
    }

    /// Override the size cap. Values above the hard cap are clamped to it.
    pub fn with_size_limit(mut self, limit: u64) -> Self {
        self.size_limit = limit.min(MAX_ARGFILE_SIZE);
        self
    }

    pub fn size_limit(&self) -> u64 {
        self.size_limit
    }

    /// Expand the argfile at `path`, passing each token to `observe` as it
    /// is produced.
    pub fn expand<F>(&self, path: &Path, observe: F) -> Result<Vec<String>, ArgError>
    where
        F: FnMut(&str),
    {
        let metadata = fs::metadata(path).map_err(|e| ArgError::ArgfileNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;

        let size = metadata.len();
        if size > self.size_limit {
            return Err(ArgError::ArgfileTooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.size_limit,
            });
        }

        let file = File::open(path).map_err(|e| ArgError::ArgfileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

        // `file` is dropped when read_all returns, on success or failure.
        let tokens = self
            .reader
            .read_all(file, observe)
            .map_err(|e| ArgError::ArgfileRead {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::debug!(
            path = %path.display(),
            size,
            tokens = tokens.len(),
            "expanded argfile"
        );
        Ok(tokens)
    }
}

impl Default for ArgfileExpander {
    fn default() -> Self {
        Self::new(ChunkedReader::default())
    }
}
