//! Kerberos authentication helpers
//!
//! When the cluster enforces security a probe must obtain a ticket before
//! the admin client can make its web request. The helpers here locate the
//! ticket-granting tool, substitute the host placeholder in service
//! principals, and build the login command line.

use std::path::{Path, PathBuf};

/// Directories searched for the kinit binary, in order
pub const KINIT_SEARCH_PATHS: &[&str] = &["/usr/bin", "/usr/kerberos/bin", "/usr/sbin"];

/// Placeholder replaced with the actual fqdn in service principals
pub const HOST_PLACEHOLDER: &str = "_HOST";

/// Resolved credentials for a kinit login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KerberosLogin {
    /// Path to the keytab file
    pub keytab: String,
    /// Principal, with the host placeholder already substituted
    pub principal: String,
}

/// Find `name` in the first candidate directory that contains it
pub fn locate_executable<P: AsRef<Path>>(name: &str, candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|dir| dir.as_ref().join(name))
        .find(|path| path.is_file())
}

/// Substitute the `_HOST` placeholder in a principal with the host's fqdn
pub fn substitute_host(principal: &str, host_name: &str) -> String {
    principal.replace(HOST_PLACEHOLDER, host_name)
}

/// Shell line that obtains a ticket for `login`
pub fn kinit_command(kinit_path: &Path, login: &KerberosLogin) -> String {
    format!(
        "{} -kt {} {}; ",
        kinit_path.display(),
        login.keytab,
        login.principal
    )
}
