use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use flyq_client::{Advisory, Config, ConfigurationError};

/// Writes `contents` to a scratch `client.toml`. Keep the returned dir alive
/// for as long as the file is needed.
pub fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::Builder::new()
        .prefix("flyq_test_")
        .tempdir()
        .expect("failed to create temp dir");
    let path = dir.path().join("client.toml");
    fs::write(&path, contents).expect("failed to write config file");
    (dir, path)
}

/// Config with an application client id, so it raises no advisories.
pub fn quiet_config() -> Config {
    Config {
        client_id: "test-app".to_string(),
        ..Config::default()
    }
}

pub fn validate_collecting(config: &Config) -> (Result<(), ConfigurationError>, Vec<Advisory>) {
    let mut advisories = Vec::new();
    let result = config.validate_with(&mut advisories);
    (result, advisories)
}

#[track_caller]
pub fn assert_rejected(config: &Config, requirement: &str) {
    match config.validate() {
        Ok(()) => panic!("expected `{}` to be rejected", requirement),
        Err(e) => assert_eq!(e.message(), requirement),
    }
}

/// In-memory log writer shared between a test and its subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer poisoned")).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a plain-text subscriber that writes into the returned buffer.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, CapturedLogs) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs)
}
