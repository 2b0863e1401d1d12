use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.tmp.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn output(&self) -> PathBuf {
        self.tmp.path().join("output.xml")
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output()).expect("read report")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("violation-report").expect("binary built");
        cmd.current_dir(self.tmp.path())
            .env_remove("VIOLATION_REPORT_OUTPUT")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Parses `fine_amount` out of each `<violation />` line, in document order.
pub fn report_amounts(report: &str) -> Vec<(String, f64)> {
    report
        .lines()
        .filter(|line| line.trim_start().starts_with("<violation "))
        .map(|line| {
            let attr = |name: &str| {
                let key = format!("{name}=\"");
                let start = line.find(&key).expect("attribute present") + key.len();
                let end = start + line[start..].find('"').expect("closing quote");
                line[start..end].to_string()
            };
            let amount = attr("fine_amount").parse().expect("numeric amount");
            (attr("type"), amount)
        })
        .collect()
}
