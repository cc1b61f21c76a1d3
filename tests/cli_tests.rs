//! Integration tests for CLI functionality

use assert_cmd::Command as AssertCommand;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn sigmactl_bin() -> &'static Path {
    assert_cmd::cargo::cargo_bin!("sigmactl")
}

/// Command with an isolated config file and no inherited context selection
fn sigmactl(config: &Path) -> Command {
    let mut cmd = Command::new(sigmactl_bin());
    cmd.env_remove("SIGMACTL_CONTEXT")
        .env_remove("SIGMACTL_CONFIG")
        .arg("--config")
        .arg(config);
    cmd
}

fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config.yaml")
}

fn write_config(path: &Path, yaml: &str) {
    fs::write(path, yaml).unwrap();
}

/// Run the binary off the async runtime so the mock server keeps serving
async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

async fn mock_balance(status: u16) -> MockServer {
    let mock_server = MockServer::start().await;
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "balance": "42.00",
            "currency": "USD"
        }))
    } else {
        ResponseTemplate::new(status)
    };
    Mock::given(method("GET"))
        .and(path("/balance/"))
        .respond_with(template)
        .mount(&mock_server)
        .await;
    mock_server
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    let output = Command::new(sigmactl_bin()).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CloudSigma"));
    assert!(stdout.contains("auth"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    let output = Command::new(sigmactl_bin())
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sigmactl"));
}

/// Test invalid output argument
#[test]
fn test_invalid_output_format() {
    AssertCommand::new(sigmactl_bin())
        .args(["-o", "invalid", "balance", "get"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

/// Piped stdout is not a terminal: auth init must fail before any prompt or write
#[test]
fn test_auth_init_without_terminal() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);

    AssertCommand::from_std(sigmactl(&config))
        .args(["auth", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown terminal"));

    assert!(!config.exists());
}

#[test]
fn test_balance_without_password() {
    let dir = TempDir::new().unwrap();

    AssertCommand::from_std(sigmactl(&config_path(&dir)))
        .args(["--context", "staging", "balance", "get"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sigmactl auth init"));
}

#[test]
fn test_current_context_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    write_config(&config, "context: staging\nauth-contexts:\n  staging: xyz\n");

    AssertCommand::from_std(sigmactl(&config))
        .args(["config", "current-context"])
        .assert()
        .success()
        .stdout(predicate::str::contains("staging"));
}

#[test]
fn test_context_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    write_config(&config, "context: staging\n");

    AssertCommand::from_std(sigmactl(&config))
        .args(["--context", "prod", "config", "current-context"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prod"));
}

#[test]
fn test_config_view_masks_passwords() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    write_config(&config, "password: top-secret-pw\nauth-contexts: {}\n");

    AssertCommand::from_std(sigmactl(&config))
        .args(["config", "view"])
        .assert()
        .success()
        .stdout(predicate::str::contains("top-secret-pw").not());
}

/// Stored password for a named context is rejected: no prompt, file untouched
#[tokio::test]
async fn test_auth_init_rejected_stored_password() {
    let mock_server = mock_balance(401).await;
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    write_config(
        &config,
        &format!(
            "api-url: {}\nauth-contexts:\n  staging: xyz\n",
            mock_server.uri()
        ),
    );
    let before = fs::read(&config).unwrap();

    let mut cmd = sigmactl(&config);
    cmd.args(["--context", "staging", "auth", "init"]);
    let output = run(cmd).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unable to use supplied password"));
    assert!(!stderr.contains("unknown terminal"));
    assert_eq!(fs::read(&config).unwrap(), before);
}

/// Stored password accepted: config rewritten owner-only with the same password
#[tokio::test]
async fn test_auth_init_accepts_stored_password() {
    let mock_server = mock_balance(200).await;
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    write_config(
        &config,
        &format!("api-url: {}\npassword: abc123\n", mock_server.uri()),
    );

    let mut cmd = sigmactl(&config);
    cmd.args(["auth", "init"]);
    let output = run(cmd).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OK"));
    assert!(!stdout.contains("[abc123]"));

    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("password: abc123"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&config).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }
}

#[tokio::test]
async fn test_balance_get_json() {
    let mock_server = mock_balance(200).await;
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    write_config(
        &config,
        &format!("api-url: {}\npassword: abc123\n", mock_server.uri()),
    );

    let mut cmd = sigmactl(&config);
    cmd.args(["-q", "-o", "json", "balance", "get"]);
    let output = run(cmd).await;

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["balance"], "42.00");
    assert_eq!(parsed["currency"], "USD");
}
