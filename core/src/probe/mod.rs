//! Alert probes
//!
//! This module defines the [`AlertProbe`] trait and the concrete probe
//! implementations run by the alerting framework.
//!
//! ## Types
//!
//! - [`AlertProbe`]: the main trait for alert check implementations
//! - [`OozieServerStatusProbe`]: workflow-scheduler reachability check
//! - [`ProbeError`]: error types for a probe's fallible section
//!
//! ## Contract
//!
//! Probes never fail outright: every internal error is folded into the
//! returned [`AlertResult`] so the scheduling framework always receives a
//! verdict. Missing or invalid configuration maps to UNKNOWN, operational
//! failures map to CRITICAL.

pub mod error;
pub mod oozie;

pub use error::ProbeError;
pub use oozie::OozieServerStatusProbe;

use crate::params::ParameterSet;
use async_trait::async_trait;
use schema::AlertResult;

/// A single health check that yields an alert verdict
#[async_trait]
pub trait AlertProbe {
    /// Short identifier for the probe
    fn name(&self) -> &'static str;

    /// Configuration keys the framework must resolve before invocation
    fn tokens(&self) -> &'static [&'static str];

    /// Run the check and produce a verdict
    ///
    /// `host_name` identifies the host the alert runs on and is used for
    /// kerberos principal substitution.
    async fn execute(&self, parameters: Option<&ParameterSet>, host_name: &str) -> AlertResult;
}
