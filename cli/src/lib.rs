//! Support library for the Altair CLI
//!
//! Turns command-line flags and an optional TOML file into the parameter
//! set a probe expects.

pub mod error;

pub use error::{CliError, Result};

use altair_core::params::{self, ParameterSet};
use std::path::Path;

/// Parse a single `KEY=VALUE` parameter flag
pub fn parse_param(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(CliError::InvalidArgument(format!(
            "parameter '{}' is not in KEY=VALUE form",
            arg
        ))),
    }
}

/// Build the probe parameter set from an optional file plus per-flag overrides
///
/// File entries are loaded first; `--param` flags override them.
pub fn build_parameters(file: Option<&Path>, overrides: &[String]) -> Result<ParameterSet> {
    let mut set = match file {
        Some(path) => params::load_params_from_toml_path(path)?,
        None => ParameterSet::new(),
    };
    for arg in overrides {
        let (key, value) = parse_param(arg)?;
        set.insert(key, value);
    }
    Ok(set)
}
