//! Tests that drive the compiled binary.

use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_api-heartbeat");

#[test]
fn test_banner_then_request_line_on_stdout() {
    let mut child = Command::new(BIN)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut first = String::new();
    let mut second = String::new();
    stdout.read_line(&mut first).unwrap();
    stdout.read_line(&mut second).unwrap();

    child.kill().unwrap();
    child.wait().unwrap();

    assert_eq!(first, "Starting API Server...\n");
    assert_eq!(second, "Handling API request\n");
}

#[test]
fn test_invalid_config_fails_before_any_output() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[interval]\nmin_secs = 0").unwrap();

    let output = Command::new(BIN)
        .arg("--config")
        .arg(file.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("interval.min_secs must be at least 1"), "stderr: {stderr}");
}

#[test]
fn test_logs_stay_off_stdout() {
    let mut child = Command::new(BIN)
        .args(["--seed", "7"])
        .env("RUST_LOG", "api_heartbeat=debug")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut banner = String::new();
    let mut request = String::new();
    stdout.read_line(&mut banner).unwrap();
    stdout.read_line(&mut request).unwrap();

    child.kill().unwrap();
    child.wait().unwrap();

    let mut stderr = String::new();
    child.stderr.take().unwrap().read_to_string(&mut stderr).unwrap();

    assert_eq!(banner, "Starting API Server...\n");
    assert_eq!(request, "Handling API request\n");
    assert!(stderr.contains("Random source seeded"), "stderr: {stderr}");
}

/// Start the binary, wait for the first request line, then signal it.
#[cfg(unix)]
fn signal_after_first_request(args: &[&str], signal: &str) -> (std::process::ExitStatus, String) {
    let mut child = Command::new(BIN)
        .args(args)
        .env("RUST_LOG", "api_heartbeat=info")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut line = String::new();
    stdout.read_line(&mut line).unwrap();
    assert_eq!(line, "Starting API Server...\n");
    line.clear();
    stdout.read_line(&mut line).unwrap();
    assert_eq!(line, "Handling API request\n");

    let sent = Command::new("kill")
        .arg(signal)
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(sent.success());

    let status = child.wait().unwrap();
    let mut stderr = String::new();
    child.stderr.take().unwrap().read_to_string(&mut stderr).unwrap();
    (status, stderr)
}

#[cfg(unix)]
#[test]
fn test_sigterm_exits_with_143() {
    let (status, stderr) = signal_after_first_request(&[], "-TERM");
    assert_eq!(status.code(), Some(143), "stderr: {stderr}");
    assert!(stderr.contains("Shutdown complete"), "stderr: {stderr}");
}

#[cfg(unix)]
#[test]
fn test_sigint_exits_with_130() {
    let (status, stderr) = signal_after_first_request(&[], "-INT");
    assert_eq!(status.code(), Some(130), "stderr: {stderr}");
}

#[cfg(unix)]
#[test]
fn test_seed_flag_overrides_config_file() {
    use api_heartbeat::IntervalPolicy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 3").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let (_, stderr) = signal_after_first_request(&["--config", &path, "--seed", "7"], "-TERM");

    let expected = IntervalPolicy::default().draw(&mut StdRng::seed_from_u64(7));
    assert!(stderr.contains("seed=7 "), "stderr: {stderr}");
    assert!(!stderr.contains("seed=3 "), "stderr: {stderr}");
    assert!(
        stderr.contains(&format!("interval_secs={} ", expected.secs())),
        "stderr: {stderr}"
    );
}

#[test]
fn test_startup_error_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(BIN)
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Failed to load configuration").count(), 1, "stderr: {stderr}");
    assert!(!stderr.contains("Error: "), "stderr: {stderr}");
}
