//! CLI binary integration tests.
//!
//! These exercise the compiled `keytar` binary: command routing, help text,
//! exit codes per error kind, and password input handling. The memory
//! backend keeps them independent of any keyring daemon.

use std::io::Write;
use std::process::Stdio;

use keytar_integration_tests::keytar_cmd;
use tempfile::TempDir;

fn missing_config(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("keytar.json5")
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .arg("version")
        .output()
        .expect("failed to run keytar");
    assert!(output.status.success(), "version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("keytar"),
        "version output should contain 'keytar', got: {}",
        stdout
    );
}

#[test]
fn test_cli_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .arg("--help")
        .output()
        .expect("failed to run keytar");
    assert!(output.status.success(), "--help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["add", "get", "delete", "replace", "doctor"] {
        assert!(
            stdout.contains(command),
            "help output should mention '{}', got: {}",
            command,
            stdout
        );
    }
}

#[test]
fn test_cli_version_flag_exits_zero() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .arg("--version")
        .output()
        .expect("failed to run keytar");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_cli_unknown_command() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .arg("nonexistent-command")
        .output()
        .expect("failed to run keytar");
    assert_eq!(
        output.status.code(),
        Some(64),
        "unknown command should exit with the usage code"
    );
}

#[test]
fn test_cli_missing_argument_is_not_a_not_found() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .args(["--backend", "memory", "get", "mail"])
        .output()
        .expect("failed to run keytar get");
    assert_eq!(output.status.code(), Some(64));
}

#[cfg(unix)]
#[test]
fn test_cli_non_utf8_password_exits_invalid_value() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .args(["--backend", "memory", "add", "mail", "alice", "--password"])
        .arg(OsStr::from_bytes(&[0xff]))
        .output()
        .expect("failed to run keytar add");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_add_with_memory_backend() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .args(["--backend", "memory", "add", "mail", "alice", "--password", "s3cr3t"])
        .output()
        .expect("failed to run keytar add");
    assert!(output.status.success(), "add should succeed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mail@alice"));
    assert!(!stdout.contains("s3cr3t"), "password must not be echoed");
}

#[test]
fn test_cli_get_missing_exits_not_found() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .args(["--backend", "memory", "get", "mail", "alice"])
        .output()
        .expect("failed to run keytar get");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {}", stderr);
}

#[test]
fn test_cli_empty_service_exits_invalid_value() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .args(["--backend", "memory", "add", "", "alice", "--password", "pw"])
        .output()
        .expect("failed to run keytar add");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_no_backend_exits_unsupported() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .args(["--backend", "none", "delete", "mail", "alice"])
        .output()
        .expect("failed to run keytar delete");
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_no_backend_add_fails_without_prompting() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .args(["--backend", "none", "add", "mail", "alice"])
        .stdin(Stdio::null())
        .output()
        .expect("failed to run keytar add");
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Password for"), "stderr: {}", stderr);
}

#[test]
fn test_cli_no_backend_wins_over_invalid_value() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .args(["--backend", "none", "get", "", "alice"])
        .output()
        .expect("failed to run keytar get");
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_backend_from_env() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .env("KEYTAR_BACKEND", "none")
        .args(["get", "mail", "alice"])
        .output()
        .expect("failed to run keytar get");
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_password_from_stdin() {
    let dir = TempDir::new().unwrap();
    let mut child = keytar_cmd(&missing_config(&dir))
        .args(["--backend", "memory", "replace", "mail", "alice", "--password-stdin"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn keytar replace");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"from-stdin\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "replace should succeed: {:?}", output);
}

#[test]
fn test_cli_config_init_then_validate() {
    let dir = TempDir::new().unwrap();
    let path = missing_config(&dir);

    let output = keytar_cmd(&path)
        .args(["config", "init"])
        .output()
        .expect("failed to run keytar config init");
    assert!(output.status.success(), "config init should succeed: {:?}", output);
    assert!(path.exists());

    let output = keytar_cmd(&path)
        .args(["config", "validate"])
        .output()
        .expect("failed to run keytar config validate");
    assert!(output.status.success());

    let output = keytar_cmd(&path)
        .args(["config", "init"])
        .output()
        .expect("failed to run keytar config init");
    assert!(!output.status.success(), "second init without --force should fail");
}

#[test]
fn test_cli_config_path_honors_env() {
    let dir = TempDir::new().unwrap();
    let path = missing_config(&dir);
    let output = keytar_cmd(&path)
        .args(["config", "path"])
        .output()
        .expect("failed to run keytar config path");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), path.display().to_string());
}

#[test]
fn test_cli_invalid_config_fails_password_commands() {
    let dir = TempDir::new().unwrap();
    let path = missing_config(&dir);
    std::fs::write(&path, r#"{ keychain: { collection: "" } }"#).unwrap();

    let output = keytar_cmd(&path)
        .args(["--backend", "memory", "get", "mail", "alice"])
        .output()
        .expect("failed to run keytar get");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("collection"), "stderr: {}", stderr);
}

#[test]
fn test_cli_doctor_with_memory_backend() {
    let dir = TempDir::new().unwrap();
    let output = keytar_cmd(&missing_config(&dir))
        .args(["--backend", "memory", "doctor"])
        .output()
        .expect("failed to run keytar doctor");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("memory"), "stdout: {}", stdout);
}
