//! Integration tests for the Oozie server status probe
//!
//! These tests drive the full decision procedure with a scripted command
//! runner, so both platform branches and every verdict path are exercised
//! without spawning real processes.

use altair_core::params::ParameterSet;
use altair_core::platform::OsFamily;
use altair_core::probe::oozie::{
    OozieServerStatusProbe, OOZIE_KEYTAB_KEY, OOZIE_PRINCIPAL_KEY, OOZIE_URL_KEY,
    SECURITY_ENABLED_KEY,
};
use altair_core::probe::AlertProbe;
use altair_core::runner::{CommandRunner, ExecError};
use altair_core::AlertState;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

/// Runner that replays scripted results and records every command it sees
#[derive(Default)]
struct ScriptedRunner {
    replies: Mutex<VecDeque<Result<(), ExecError>>>,
    commands: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    /// Runner whose every command succeeds
    fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Runner that replays the given results in order, then succeeds
    fn with_replies(replies: Vec<Result<(), ExecError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            commands: Mutex::new(Vec::new()),
        })
    }

    fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, command: &str) -> Result<(), ExecError> {
        self.commands.lock().unwrap().push(command.to_string());
        self.replies.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

/// Directory containing a fake kinit binary
fn fake_kinit_dir() -> (TempDir, Vec<PathBuf>) {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("kinit"), "").expect("write kinit");
    let dirs = vec![dir.path().to_path_buf()];
    (dir, dirs)
}

fn base_params() -> ParameterSet {
    let mut params = ParameterSet::new();
    params.insert(OOZIE_URL_KEY, "http://myhost.example.com:11000/oozie");
    params
}

fn secure_params(flag: &str) -> ParameterSet {
    let mut params = base_params();
    params.insert(SECURITY_ENABLED_KEY, flag);
    params.insert(OOZIE_KEYTAB_KEY, "/etc/security/keytabs/oozie.keytab");
    params.insert(OOZIE_PRINCIPAL_KEY, "oozie/_HOST@EXAMPLE.COM");
    params
}

#[tokio::test]
async fn no_parameters_is_unknown() {
    let runner = ScriptedRunner::succeeding();
    let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, Arc::clone(&runner));

    let result = probe.execute(None, "node1.example.com").await;
    assert_eq!(result.state, AlertState::Unknown);
    assert_eq!(
        result.text,
        vec!["There were no parameters supplied to the script.".to_string()]
    );
    assert!(runner.commands().is_empty());
}

#[tokio::test]
async fn empty_parameters_is_unknown() {
    let runner = ScriptedRunner::succeeding();
    let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, Arc::clone(&runner));

    let empty = ParameterSet::new();
    let result = probe.execute(Some(&empty), "node1.example.com").await;
    assert_eq!(result.state, AlertState::Unknown);
    assert!(runner.commands().is_empty());
}

#[tokio::test]
async fn missing_url_is_unknown() {
    let runner = ScriptedRunner::succeeding();
    let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, Arc::clone(&runner));

    let mut params = ParameterSet::new();
    params.insert(SECURITY_ENABLED_KEY, "false");
    let result = probe.execute(Some(&params), "node1.example.com").await;
    assert_eq!(result.state, AlertState::Unknown);
    assert_eq!(
        result.text,
        vec!["The Oozie URL is a required parameter.".to_string()]
    );
    assert!(runner.commands().is_empty());
}

#[tokio::test]
async fn unparseable_url_is_unknown() {
    let runner = ScriptedRunner::succeeding();
    let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, Arc::clone(&runner));

    let mut params = ParameterSet::new();
    params.insert(OOZIE_URL_KEY, "http://");
    let result = probe.execute(Some(&params), "node1.example.com").await;
    assert_eq!(result.state, AlertState::Unknown);
    assert!(result.message().contains("invalid service URL"));
    assert!(runner.commands().is_empty());
}

#[tokio::test]
async fn success_rewrites_host_for_unix() {
    let runner = ScriptedRunner::succeeding();
    let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, Arc::clone(&runner));

    let params = base_params();
    let result = probe.execute(Some(&params), "node1.example.com").await;
    assert_eq!(result.state, AlertState::Ok);
    assert_eq!(
        result.text,
        vec!["Successful connection to http://0.0.0.0:11000/oozie".to_string()]
    );

    let commands = runner.commands();
    assert_eq!(commands.len(), 1, "security disabled must not run kinit");
    assert!(commands[0].starts_with("source /etc/oozie/conf/oozie-env.sh ; "));
    assert!(commands[0].contains("oozie admin -oozie http://0.0.0.0:11000/oozie -status"));
}

#[tokio::test]
async fn success_rewrites_host_for_windows() {
    let runner = ScriptedRunner::succeeding();
    let probe = OozieServerStatusProbe::with_runner(OsFamily::Windows, Arc::clone(&runner));

    let params = base_params();
    let result = probe.execute(Some(&params), "node1.example.com").await;
    assert_eq!(result.state, AlertState::Ok);
    assert_eq!(
        result.text,
        vec!["Successful connection to http://localhost:11000/oozie".to_string()]
    );
}

#[tokio::test]
async fn status_failure_is_critical() {
    let runner = ScriptedRunner::with_replies(vec![Err(ExecError::Message(
        "connection refused".to_string(),
    ))]);
    let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, Arc::clone(&runner));

    let params = base_params();
    let result = probe.execute(Some(&params), "node1.example.com").await;
    assert_eq!(result.state, AlertState::Critical);
    assert_eq!(result.text, vec!["connection refused".to_string()]);
}

#[tokio::test]
async fn security_without_credentials_is_unknown() {
    let runner = ScriptedRunner::succeeding();
    let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, Arc::clone(&runner));

    let mut params = base_params();
    params.insert(SECURITY_ENABLED_KEY, "true");
    params.insert(OOZIE_KEYTAB_KEY, "/etc/security/keytabs/oozie.keytab");
    // principal missing
    let result = probe.execute(Some(&params), "node1.example.com").await;
    assert_eq!(result.state, AlertState::Unknown);
    assert_eq!(
        result.text,
        vec![
            "The Oozie keytab and principal are required parameters when security is enabled."
                .to_string()
        ]
    );
    assert!(runner.commands().is_empty(), "no process may be spawned");
}

#[tokio::test]
async fn security_enabled_runs_kinit_with_substituted_principal() {
    let (_guard, kinit_dirs) = fake_kinit_dir();
    let runner = ScriptedRunner::succeeding();
    let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, Arc::clone(&runner))
        .with_kinit_dirs(kinit_dirs.clone());

    // mixed-case flag value still counts as enabled
    let params = secure_params("True");
    let result = probe.execute(Some(&params), "node1.example.com").await;
    assert_eq!(result.state, AlertState::Ok);

    let commands = runner.commands();
    assert_eq!(commands.len(), 2);
    let kinit_path = kinit_dirs[0].join("kinit");
    assert_eq!(
        commands[0],
        format!(
            "{} -kt /etc/security/keytabs/oozie.keytab oozie/node1.example.com@EXAMPLE.COM; ",
            kinit_path.display()
        )
    );
    assert!(commands[1].contains("oozie admin -oozie http://0.0.0.0:11000/oozie -status"));
}

#[tokio::test]
async fn security_flag_other_values_disable_kinit() {
    for flag in ["false", "FALSE", "yes", ""] {
        let runner = ScriptedRunner::succeeding();
        let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, Arc::clone(&runner));

        let params = secure_params(flag);
        let result = probe.execute(Some(&params), "node1.example.com").await;
        assert_eq!(result.state, AlertState::Ok);
        assert_eq!(
            runner.commands().len(),
            1,
            "flag '{flag}' must not trigger kinit"
        );
    }
}

#[tokio::test]
async fn kinit_failure_is_critical_and_skips_status_command() {
    let (_guard, kinit_dirs) = fake_kinit_dir();
    let runner =
        ScriptedRunner::with_replies(vec![Err(ExecError::Message("kinit failed".to_string()))]);
    let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, Arc::clone(&runner))
        .with_kinit_dirs(kinit_dirs);

    let params = secure_params("true");
    let result = probe.execute(Some(&params), "node1.example.com").await;
    assert_eq!(result.state, AlertState::Critical);
    assert_eq!(result.text, vec!["kinit failed".to_string()]);
    assert_eq!(runner.commands().len(), 1, "status command must not run");
}

#[tokio::test]
async fn missing_kinit_binary_is_critical() {
    let empty = tempdir().expect("tempdir");
    let runner = ScriptedRunner::succeeding();
    let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, Arc::clone(&runner))
        .with_kinit_dirs(vec![empty.path().to_path_buf()]);

    let params = secure_params("true");
    let result = probe.execute(Some(&params), "node1.example.com").await;
    assert_eq!(result.state, AlertState::Critical);
    assert!(result.message().contains("kinit"));
    assert!(runner.commands().is_empty());
}

#[tokio::test]
async fn identical_invocations_yield_identical_results() {
    let params = base_params();

    let mut results = Vec::new();
    for _ in 0..2 {
        let runner = ScriptedRunner::succeeding();
        let probe = OozieServerStatusProbe::with_runner(OsFamily::Unix, runner);
        results.push(probe.execute(Some(&params), "node1.example.com").await);
    }
    assert_eq!(results[0], results[1]);
}
