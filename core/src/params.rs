//! Alert parameter handling
//!
//! The scheduling framework resolves configuration properties before each
//! probe invocation and hands them over as a flat map of template token
//! (`{{site/property}}`) to string value. This module wraps that map and
//! provides the TOML loader used by the CLI front-end.

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Resolved configuration parameters for a single probe invocation
///
/// Immutable within a call; probes look keys up but never modify the set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ParameterSet {
    values: HashMap<String, String>,
}

impl ParameterSet {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the parameter is present
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Whether the set holds no parameters at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of parameters in the set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True iff the parameter is present and equals "true" ignoring case
    ///
    /// An absent key is false; the check stays default-permissive.
    pub fn flag_enabled(&self, key: &str) -> bool {
        self.get(key)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}

impl From<HashMap<String, String>> for ParameterSet {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, String)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Load parameters from a TOML file path
pub fn load_params_from_toml_path(path: impl AsRef<Path>) -> Result<ParameterSet> {
    let data = fs::read_to_string(&path).map_err(|e| {
        CoreError::ConfigurationError(format!("Failed to read params {:?}: {}", path.as_ref(), e))
    })?;
    load_params_from_toml_str(&data)
}

/// Load parameters from a TOML string
///
/// The input is a flat table of key -> string value; template-token keys
/// must be quoted in TOML (`"{{oozie-site/oozie.base.url}}" = "..."`).
pub fn load_params_from_toml_str(input: &str) -> Result<ParameterSet> {
    let table: HashMap<String, toml::Value> = toml::from_str(input)
        .map_err(|e| CoreError::ConfigurationError(format!("TOML parse error: {}", e)))?;

    let mut params = ParameterSet::new();
    for (key, value) in table {
        match value {
            toml::Value::String(s) => params.insert(key, s),
            other => {
                return Err(CoreError::ValidationError(format!(
                    "parameter '{}' must be a string, found {}",
                    key,
                    other.type_str()
                )));
            }
        }
    }
    Ok(params)
}
