use std::process::Command;

#[test]
fn test_help_lists_commands() {
    let bin = env!("CARGO_BIN_EXE_plaisio");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("type-script-automator") && stdout.contains("mask"),
        "help output should list every command; got:\n{}",
        stdout
    );
}

#[test]
fn test_automate_help_documents_flags() {
    let bin = env!("CARGO_BIN_EXE_plaisio");

    let output = Command::new(bin)
        .args(["automate", "--help"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--path", "--force", "--once", "--json", "--config"] {
        assert!(stdout.contains(flag), "missing {flag} in:\n{stdout}");
    }
}

#[test]
fn test_missing_subcommand_is_an_error() {
    let bin = env!("CARGO_BIN_EXE_plaisio");

    let output = Command::new(bin).output().unwrap();

    assert!(!output.status.success());
}
