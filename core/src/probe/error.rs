//! Error types for probe execution

use crate::runner::ExecError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures inside a probe's fallible section
///
/// These never cross the probe boundary as errors; the top-level `execute`
/// folds them into the returned verdict.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The configured service URL could not be parsed
    #[error("invalid service URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// No kinit executable in any of the searched directories
    #[error("kinit was not found in the search path {dirs:?}")]
    KinitNotFound { dirs: Vec<PathBuf> },

    /// An external command failed
    #[error(transparent)]
    Exec(#[from] ExecError),
}
