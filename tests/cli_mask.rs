use std::process::Command;

use serde_json::Value;

#[test]
fn test_mask_lists_flags() {
    let bin = env!("CARGO_BIN_EXE_plaisio");

    let output = Command::new(bin)
        .args(["mask", "0x40000100", "--color", "never"])
        .env("TERM", "dumb")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Event mask 1073742080"), "got:\n{stdout}");
    assert!(stdout.contains("IN_CREATE"));
    assert!(stdout.contains("IN_ISDIR"));
    assert!(!stdout.contains("\u{1b}["));
}

#[test]
fn test_mask_json_output() {
    let bin = env!("CARGO_BIN_EXE_plaisio");

    let output = Command::new(bin)
        .args(["--json", "mask", "24"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["mask"], 24);
    let names: Vec<&str> = json["flags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|flag| flag["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["IN_CLOSE_WRITE", "IN_CLOSE_NOWRITE"]);
}

#[test]
fn test_mask_rejects_garbage() {
    let bin = env!("CARGO_BIN_EXE_plaisio");

    let output = Command::new(bin).args(["mask", "close"]).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid mask 'close'"), "got:\n{stderr}");
}
