use std::process::Command;

#[test]
fn print_writes_only_json_to_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_flyq-client"))
        .args(["--client-id", "cli-test", "--print"])
        .env_remove("FLYQ_CLIENT_CONFIG")
        .output()
        .expect("failed to run flyq-client");
    assert!(output.status.success(), "exit status: {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let value: serde_json::Value =
        serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("not JSON ({}): {}", e, stdout));
    assert_eq!(value["client_id"], "cli-test");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration is valid"), "stderr: {}", stderr);
}

#[test]
fn invalid_config_exits_with_failure() {
    let dir = tempfile::Builder::new()
        .prefix("flyq_test_")
        .tempdir()
        .expect("failed to create temp dir");
    let path = dir.path().join("client.toml");
    std::fs::write(&path, "[net]\nmax_open_requests = 0\n").expect("failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_flyq-client"))
        .arg("--config")
        .arg(&path)
        .args(["--client-id", "cli-test", "--print"])
        .output()
        .expect("failed to run flyq-client");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Net.MaxOpenRequests must be > 0"));
}
