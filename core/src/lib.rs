//! Core functionality for the Altair alert probes
//!
//! This crate contains the probe implementations together with the shared
//! plumbing they sit on: parameter handling, platform detection, URL
//! rewriting, kerberos helpers, and external command execution.

pub mod error;
pub mod kerberos;
pub mod net;
pub mod params;
pub mod platform;
pub mod probe;
pub mod runner;

// Re-export schema types for convenience
pub use schema::*;

pub use error::{CoreError, Result};
pub use params::ParameterSet;
pub use platform::OsFamily;
pub use probe::{AlertProbe, OozieServerStatusProbe, ProbeError};
pub use runner::{CommandRunner, ExecError, ShellRunner};

/// Core utilities and helper functions
pub mod utils {
    use tracing::info;

    /// Initialize tracing for the application
    pub fn init_tracing(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| crate::CoreError::InitializationError(e.to_string()))?;

        info!("Tracing initialized with level: {}", level);
        Ok(())
    }
}
