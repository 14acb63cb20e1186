//! Schema definitions for Altair
//!
//! This crate contains the shared data structures exchanged between the
//! alert probes and the scheduling framework that consumes their verdicts.
//! All types here implement JSON Schema generation for external consumption.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state verdict of an alert probe
///
/// Distinct from a boolean pass/fail: `Unknown` reports that the check could
/// not be performed at all (usually a configuration problem), while
/// `Critical` reports that the check ran and the service failed it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertState {
    /// The service is reachable and responsive
    Ok,
    /// The check ran and the service failed it
    Critical,
    /// The check could not be performed
    Unknown,
}

impl AlertState {
    /// Framework string for this state
    pub fn as_str(self) -> &'static str {
        match self {
            AlertState::Ok => "OK",
            AlertState::Critical => "CRITICAL",
            AlertState::Unknown => "UNKNOWN",
        }
    }

    /// Conventional monitoring exit code for this state
    pub fn exit_code(self) -> u8 {
        match self {
            AlertState::Ok => 0,
            AlertState::Critical => 2,
            AlertState::Unknown => 3,
        }
    }
}

impl fmt::Display for AlertState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict plus pre-formatted result text
///
/// Produced once per probe invocation and handed back to the scheduling
/// framework; the probe itself never returns an error to its caller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertResult {
    /// Overall verdict
    pub state: AlertState,
    /// Ordered result messages; probes produce exactly one
    pub text: Vec<String>,
}

impl AlertResult {
    /// OK verdict with a single message
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            state: AlertState::Ok,
            text: vec![message.into()],
        }
    }

    /// CRITICAL verdict with a single message
    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            state: AlertState::Critical,
            text: vec![message.into()],
        }
    }

    /// UNKNOWN verdict with a single message
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            state: AlertState::Unknown,
            text: vec![message.into()],
        }
    }

    /// First message line, or empty if there is none
    pub fn message(&self) -> &str {
        self.text.first().map(String::as_str).unwrap_or("")
    }
}
