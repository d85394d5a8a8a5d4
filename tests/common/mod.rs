#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TODAY: &str = "2024-07-01";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    cargo_home: PathBuf,
    rustup_home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let orig_home = std::env::var("HOME").unwrap_or_default();
        let cargo_home = PathBuf::from(&orig_home).join(".cargo");
        let rustup_home = PathBuf::from(&orig_home).join(".rustup");

        Self {
            _tmp: tmp,
            home,
            cargo_home,
            rustup_home,
        }
    }

    pub fn lease_file(&self) -> PathBuf {
        self.home.join(".config/milepace/lease.toml")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("milepace");
        cmd.env("HOME", &self.home)
            .env("CARGO_HOME", &self.cargo_home)
            .env("RUSTUP_HOME", &self.rustup_home)
            .env_remove("MILEPACE_TODAY")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json_on(&self, today: &str, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .args(["--json", "--today", today])
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        self.run_json_on(TODAY, args)
    }

    pub fn fail_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .args(["--json", "--today", TODAY])
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn configure_sample(&self) -> Value {
        self.run_json(&[
            "configure",
            "--annual-miles",
            "12000",
            "--start-date",
            "2024-01-01",
            "--start-odometer",
            "10000",
        ])
    }
}
