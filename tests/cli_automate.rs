#![cfg(unix)]

use std::fs;
use std::io::{BufRead, BufReader};
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::{Duration, SystemTime};

use serde_json::Value;
use tempfile::{tempdir, TempDir};

/// Stand-in compiler: `tsc -m <module> -t <target> <source>`
const FAKE_TSC: &str = r#"#!/bin/sh
src="$5"
case "$src" in
  *Broken*)
    echo "$src(1,1): error TS1005: ';' expected."
    exit 2
    ;;
esac
printf 'define(["require", "exports"], function (require, exports) {\n});\n' > "${src%.ts}.js"
"#;

struct Site {
    dir: TempDir,
}

impl Site {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("www/js")).unwrap();
        fs::create_dir_all(dir.path().join("home")).unwrap();
        let tsc = dir.path().join("tsc");
        fs::write(&tsc, FAKE_TSC).unwrap();
        fs::set_permissions(&tsc, fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir }
    }

    fn root(&self) -> PathBuf {
        self.dir.path().join("www/js")
    }

    /// Write a source file dated in the past so fresh output is never equal
    fn source(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "export class X {}\n").unwrap();
        let past = SystemTime::now() - Duration::from_secs(60);
        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(past)
            .unwrap();
        path
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_plaisio"));
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path().join("home"))
            .env("XDG_CONFIG_HOME", self.dir.path().join("home"))
            .env("PLAISIO_TSC", self.dir.path().join("tsc"))
            .env_remove("PLAISIO_ASSET_ROOT")
            .env_remove("PLAISIO_VERBOSITY");
        cmd
    }
}

fn events(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_once_compiles_stale_sources_and_names_modules() {
    let site = Site::new();
    let source = site.source("Plaisio/Form/Form.ts");

    let output = site
        .command()
        .args(["automate", "--once", "--json", "-v"])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let compiled = fs::read_to_string(source.with_extension("js")).unwrap();
    assert!(
        compiled.starts_with("define(\"Plaisio/Form/Form\", "),
        "got:\n{compiled}"
    );

    let events = events(&output.stdout);
    assert!(events
        .iter()
        .all(|e| e["command"] == "type-script-automator"));
    assert!(events.iter().any(|e| e["event"] == "output_fixed"));
    let last = events.last().unwrap();
    assert_eq!(last["event"], "reconcile_complete");
    assert_eq!(last["scanned"], 1);
    assert_eq!(last["compiled"], 1);
    assert_eq!(last["failed"], 0);
}

#[test]
fn test_once_skips_fresh_output_unless_forced() {
    let site = Site::new();
    let source = site.source("App.ts");
    fs::write(source.with_extension("js"), "// already built\n").unwrap();

    let output = site
        .command()
        .args(["automate", "--once", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(events(&output.stdout).last().unwrap()["compiled"], 0);
    assert_eq!(
        fs::read_to_string(source.with_extension("js")).unwrap(),
        "// already built\n"
    );

    let output = site
        .command()
        .args(["automate", "--once", "--json", "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(events(&output.stdout).last().unwrap()["compiled"], 1);
}

#[test]
fn test_once_reports_compile_failure_and_removes_output() {
    let site = Site::new();
    let broken = site.source("Broken.ts");
    fs::write(broken.with_extension("js"), "stale").unwrap();
    fs::File::options()
        .write(true)
        .open(broken.with_extension("js"))
        .unwrap()
        .set_modified(SystemTime::now() - Duration::from_secs(120))
        .unwrap();

    let output = site
        .command()
        .args(["automate", "--once", "--color", "never"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!broken.with_extension("js").exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error TS1005"), "stderr:\n{stderr}");
    assert!(stderr.contains("1 of 1 TypeScript sources failed to compile"));
}

#[test]
fn test_missing_asset_root_fails() {
    let site = Site::new();

    let output = site
        .command()
        .args(["automate", "--once", "--path", "nope"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("directory not found"), "stderr:\n{stderr}");
}

#[test]
fn test_config_file_unknown_key_warns() {
    let site = Site::new();
    fs::write(
        site.dir.path().join("plaisio.toml"),
        "[typescript]\ncompilr = \"tsc\"\n",
    )
    .unwrap();

    let output = site
        .command()
        .args(["automate", "--once", "--color", "never"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown config key 'compilr'"), "stderr:\n{stderr}");
    assert!(stderr.contains("did you mean 'compiler'?"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_watch_compiles_saved_source() {
    let site = Site::new();
    let mut child = site
        .command()
        .args(["automate", "--json"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let (tx, rx) = mpsc::channel();
    let stdout = child.stdout.take().unwrap();
    std::thread::spawn(move || {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let started = wait_for(&rx, "started");
    let reconciled = wait_for(&rx, "reconcile_complete");

    let target = site.root().join("Main.ts");
    fs::write(&target, "export const main = 1;\n").unwrap();
    let compiled = wait_until(|| target.with_extension("js").exists());

    child.kill().unwrap();
    child.wait().unwrap();

    assert!(started && reconciled, "automator never came up");
    assert!(compiled, "Main.js was not produced");
    assert!(fs::read_to_string(target.with_extension("js"))
        .unwrap()
        .starts_with("define("));
}

fn wait_for(rx: &mpsc::Receiver<String>, event: &str) -> bool {
    while let Ok(line) = rx.recv_timeout(Duration::from_secs(10)) {
        let Ok(json) = serde_json::from_str::<Value>(&line) else {
            continue;
        };
        if json["event"] == event {
            return true;
        }
    }
    false
}

fn wait_until(check: impl Fn() -> bool) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(100));
    }
    false
}
