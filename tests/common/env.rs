//! Isolated environment for running the segee binary.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

/// Result of running the segee binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Temp HOME so the user config directory is empty unless a test writes one.
pub struct TestEnv {
    pub home_dir: TempDir,
    segee_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().expect("create temp home"),
            segee_bin: PathBuf::from(env!("CARGO_BIN_EXE_segee")),
        }
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Write a file relative to the temp home and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    /// Run segee with `args`, feeding `stdin` and closing it afterwards.
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_with_env(args, stdin, &[])
    }

    pub fn run_with_env(&self, args: &[&str], stdin: &str, env_vars: &[(&str, &str)]) -> TestResult {
        let mut child = self.command(args, env_vars).spawn().expect("Failed to execute segee");
        {
            let mut pipe = child.stdin.take().expect("stdin piped");
            pipe.write_all(stdin.as_bytes()).expect("write stdin");
        }
        let output = child.wait_with_output().expect("wait for segee");
        to_result(output)
    }

    /// Feed `stdin` but keep the pipe open, send SIGINT after `delay`, and
    /// wait up to `timeout` for segee to exit. `None` if it is still running.
    #[cfg(unix)]
    pub fn run_interrupted(
        &self,
        args: &[&str],
        stdin: &str,
        delay: Duration,
        timeout: Duration,
    ) -> Option<TestResult> {
        let mut child = self.command(args, &[]).spawn().expect("Failed to execute segee");
        let mut pipe = child.stdin.take().expect("stdin piped");
        pipe.write_all(stdin.as_bytes()).expect("write stdin");
        pipe.flush().expect("flush stdin");

        thread::sleep(delay);
        let sent = Command::new("kill")
            .args(["-INT", &child.id().to_string()])
            .status()
            .expect("run kill");
        assert!(sent.success(), "kill -INT failed");

        let deadline = Instant::now() + timeout;
        while child.try_wait().expect("poll segee").is_none() {
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
            thread::sleep(Duration::from_millis(50));
        }

        drop(pipe);
        let output = child.wait_with_output().expect("collect segee output");
        Some(to_result(output))
    }

    fn command(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(&self.segee_bin);
        cmd.args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"))
            .env("APPDATA", self.home_path("AppData"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("SEGEE_CONFIG")
            .env_remove("SEGEE_VARIANT")
            .env_remove("SEGEE_COLOR")
            .env_remove("SEGEE_VERBOSITY")
            .env_remove("SEGEE_UNICODE")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
