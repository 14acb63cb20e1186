//! Oozie server status probe
//!
//! Checks that the local Oozie workflow-scheduler instance is reachable by
//! running the admin client's status subcommand against it, authenticating
//! through kerberos first when the cluster enforces security.

use crate::kerberos::{self, KerberosLogin, KINIT_SEARCH_PATHS};
use crate::net;
use crate::params::ParameterSet;
use crate::platform::OsFamily;
use crate::probe::{AlertProbe, ProbeError};
use crate::runner::{CommandRunner, ShellRunner};
use async_trait::async_trait;
use schema::AlertResult;
use std::path::PathBuf;
use tracing::debug;

/// Parameter key for the Oozie base URL
pub const OOZIE_URL_KEY: &str = "{{oozie-site/oozie.base.url}}";
/// Parameter key for the cluster security flag
pub const SECURITY_ENABLED_KEY: &str = "{{cluster-env/security_enabled}}";
/// Parameter key for the Oozie kerberos principal
pub const OOZIE_PRINCIPAL_KEY: &str =
    "{{oozie-site/oozie.authentication.kerberos.principal}}";
/// Parameter key for the Oozie kerberos keytab
pub const OOZIE_KEYTAB_KEY: &str = "{{oozie-site/oozie.authentication.kerberos.keytab}}";

/// Environment script sourced before the admin client runs
const OOZIE_ENV_SCRIPT: &str = "/etc/oozie/conf/oozie-env.sh";

const TOKENS: &[&str] = &[
    OOZIE_URL_KEY,
    OOZIE_PRINCIPAL_KEY,
    SECURITY_ENABLED_KEY,
    OOZIE_KEYTAB_KEY,
];

/// Reachability check for the local Oozie server
///
/// The platform, command runner, and kinit search path are injected so the
/// decision procedure can be exercised without touching the host.
#[derive(Debug)]
pub struct OozieServerStatusProbe<R = ShellRunner> {
    platform: OsFamily,
    runner: R,
    kinit_dirs: Vec<PathBuf>,
}

impl OozieServerStatusProbe<ShellRunner> {
    /// Probe for the current host using the real shell
    pub fn new() -> Self {
        Self::with_runner(OsFamily::current(), ShellRunner::new())
    }
}

impl Default for OozieServerStatusProbe<ShellRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner + Send + Sync> OozieServerStatusProbe<R> {
    /// Probe with an explicit platform and command runner
    pub fn with_runner(platform: OsFamily, runner: R) -> Self {
        Self {
            platform,
            runner,
            kinit_dirs: KINIT_SEARCH_PATHS.iter().map(PathBuf::from).collect(),
        }
    }

    /// Override the directories searched for the kinit binary
    pub fn with_kinit_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.kinit_dirs = dirs;
        self
    }

    /// Authenticate if required, then run the admin status command
    async fn check_status(
        &self,
        login: Option<KerberosLogin>,
        oozie_url: &str,
    ) -> Result<(), ProbeError> {
        // kinit first so the env script's web request is authenticated
        if let Some(login) = login {
            let kinit = kerberos::locate_executable("kinit", &self.kinit_dirs).ok_or_else(|| {
                ProbeError::KinitNotFound {
                    dirs: self.kinit_dirs.clone(),
                }
            })?;
            self.runner
                .run(&kerberos::kinit_command(&kinit, &login))
                .await?;
        }

        let command = format!("source {OOZIE_ENV_SCRIPT} ; oozie admin -oozie {oozie_url} -status");
        self.runner.run(&command).await?;
        Ok(())
    }
}

#[async_trait]
impl<R: CommandRunner + Send + Sync> AlertProbe for OozieServerStatusProbe<R> {
    fn name(&self) -> &'static str {
        "oozie_server_status"
    }

    fn tokens(&self) -> &'static [&'static str] {
        TOKENS
    }

    async fn execute(&self, parameters: Option<&ParameterSet>, host_name: &str) -> AlertResult {
        let parameters = match parameters {
            Some(p) if !p.is_empty() => p,
            _ => {
                return AlertResult::unknown("There were no parameters supplied to the script.")
            }
        };

        let Some(base_url) = parameters.get(OOZIE_URL_KEY) else {
            return AlertResult::unknown("The Oozie URL is a required parameter.");
        };

        // target the local instance regardless of the advertised hostname
        let local_address = self.platform.local_bind_address();
        let oozie_url = match net::rewrite_host(base_url, local_address) {
            Ok(url) => url,
            Err(source) => {
                let err = ProbeError::InvalidUrl {
                    url: base_url.to_string(),
                    source,
                };
                return AlertResult::unknown(err.to_string());
            }
        };

        let security_enabled = parameters.flag_enabled(SECURITY_ENABLED_KEY);
        debug!(
            "Checking Oozie server at {} (security_enabled: {})",
            oozie_url, security_enabled
        );

        let login = if security_enabled {
            match (
                parameters.get(OOZIE_KEYTAB_KEY),
                parameters.get(OOZIE_PRINCIPAL_KEY),
            ) {
                (Some(keytab), Some(principal)) => Some(KerberosLogin {
                    keytab: keytab.to_string(),
                    principal: kerberos::substitute_host(principal, host_name),
                }),
                _ => {
                    return AlertResult::unknown(
                        "The Oozie keytab and principal are required parameters when security is enabled.",
                    )
                }
            }
        } else {
            None
        };

        match self.check_status(login, &oozie_url).await {
            Ok(()) => AlertResult::ok(format!("Successful connection to {oozie_url}")),
            Err(e) => AlertResult::critical(e.to_string()),
        }
    }
}
