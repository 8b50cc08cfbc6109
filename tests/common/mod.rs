use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub workdir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let workdir = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&workdir).expect("create workdir");

        Self {
            _tmp: tmp,
            home,
            workdir,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tanuki").expect("binary under test");
        cmd.env("HOME", &self.home).current_dir(&self.workdir);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_config(&self, body: &str) {
        let dir = self.home.join(".config/tanuki");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), body).expect("write config");
    }
}
