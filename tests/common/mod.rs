//! Common test utilities for Quay integration tests.
//!
//! Provides `TestEnv`: an isolated project directory plus stub `aws` and
//! `npm` executables on a prepended PATH. Every stub invocation is appended
//! to a log file so tests can assert exactly which external commands ran,
//! and in which order, without touching the network.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Invalidation id the stub `aws cloudfront create-invalidation` returns.
pub const STUB_INVALIDATION_ID: &str = "ITESTSTUB123";

/// Config used by most tests.
pub const SAMPLE_CONFIG: &str = r#"{
  "environments": {
    "stag": { "bucket_url": "s3://example-bucket-stag", "cf_distro": "STAG123" },
    "prod": { "bucket_url": "s3://example-bucket", "cf_distro": "ABC123" }
  }
}"#;

const AWS_STUB: &str = r#"#!/bin/sh
printf 'aws %s\n' "$*" >> "$QUAY_TEST_LOG"
if [ -n "$QUAY_TEST_FAIL_AWS" ]; then
  echo "stub aws failure" >&2
  exit 1
fi
if [ "$1" = "cloudfront" ]; then
  printf '{"Invalidation":{"Id":"ITESTSTUB123","Status":"InProgress"}}\n'
fi
exit 0
"#;

const NPM_STUB: &str = r#"#!/bin/sh
printf 'npm %s cwd=%s\n' "$*" "$(pwd)" >> "$QUAY_TEST_LOG"
if [ -n "$QUAY_TEST_FAIL_BUILD" ]; then
  echo "npm ERR! build failed" >&2
  exit 1
fi
exit 0
"#;

/// Result of running the quay binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with a project dir, a deploy config, and stub
/// external tools.
pub struct TestEnv {
    pub project_root: TempDir,
    stub_bin: TempDir,
    log_path: PathBuf,
    config_path: PathBuf,
}

impl TestEnv {
    /// Project with `dist/index.html`, a fingerprinted asset, and the sample
    /// config written to `deploy.json`.
    pub fn new() -> Self {
        let env = Self::bare();
        env.write_project_file("dist/index.html", "<html>ok</html>");
        env.write_project_file("dist/assets/app.5f3a9c.js", "console.log('ok')");
        env.write_config(SAMPLE_CONFIG);
        env
    }

    /// Environment with stubs but no project files or config.
    pub fn bare() -> Self {
        let project_root = TempDir::new().expect("failed to create project temp dir");
        let stub_bin = TempDir::new().expect("failed to create stub bin temp dir");
        let log_path = stub_bin.path().join("invocations.log");
        let config_path = project_root.path().join("deploy.json");

        write_stub(stub_bin.path().join("aws"), AWS_STUB);
        write_stub(stub_bin.path().join("npm"), NPM_STUB);

        Self {
            project_root,
            stub_bin,
            log_path,
            config_path,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(&self.config_path, content).expect("failed to write config");
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let full = self.project_path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("failed to create directories");
        }
        std::fs::write(&full, content).expect("failed to write file");
    }

    /// Run quay with `args` and no extra environment.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run quay with `args` and extra environment variables for the stubs.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let path = format!(
            "{}:{}",
            self.stub_bin.path().display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_quay"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("PATH", path)
            .env("QUAY_TEST_LOG", &self.log_path)
            .env("QUAY_NO_COLOR", "1");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute quay");
        output_to_result(output)
    }

    /// Deploy `prod` without `--build`, the common case.
    pub fn deploy_prod(&self) -> TestResult {
        self.run(&[
            "--conf",
            &self.config_path.display().to_string(),
            "--env",
            "prod",
            "--proj_dir",
            &self.project_root.path().display().to_string(),
            "--profile",
            "default",
        ])
    }

    /// Lines the stubs recorded, in invocation order.
    pub fn invocations(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.log_path) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

fn write_stub(path: PathBuf, content: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(&path, content).expect("failed to write stub");
    let mut perms = std::fs::metadata(&path)
        .expect("failed to stat stub")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("failed to chmod stub");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
