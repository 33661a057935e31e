use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    // Try to find the built binary
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("pushback-cli");

    if !path.exists() {
        // Try release build
        path.pop();
        path.pop();
        path.push("release");
        path.push("pushback-cli");
    }

    path
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_cli_binary())
        .args(["--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("path"), "Should list path command");
    assert!(stdout.contains("simulate"), "Should list simulate command");
    assert!(stdout.contains("info"), "Should list info command");
}

#[test]
fn test_cli_simulate_default_scenario() {
    let output = Command::new(get_cli_binary())
        .args(["simulate"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("PUSHBACK") || stdout.contains("Samples"),
        "Should contain simulation output: {}",
        stdout
    );
}

#[test]
fn test_cli_simulate_json_output() {
    let output = Command::new(get_cli_binary())
        .args(["simulate", "--output", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("{"), "Should be JSON format");
    assert!(stdout.contains("link_length"), "Should carry the link length");
}

#[test]
fn test_cli_simulate_csv_output() {
    let output = Command::new(get_cli_binary())
        .args(["simulate", "--output", "csv"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(","), "Should be CSV format");
    assert!(stdout.contains("drive_x"), "Should carry a header row");
}

#[test]
fn test_cli_path_command_writes_csv() {
    let dir = std::env::temp_dir().join("pushback_cli_path_test");
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let csv_file = dir.join("reference_path_data.csv");

    let output = Command::new(get_cli_binary())
        .args(["path", "--output-file"])
        .arg(&csv_file)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let contents = std::fs::read_to_string(&csv_file).expect("CSV should exist");
    assert!(contents.starts_with("X,Y"), "Should carry the X,Y header");
    // Default scenario: one segment, 100 samples -> 101 waypoints + header.
    assert_eq!(contents.lines().count(), 102);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_cli_invalid_command() {
    let output = Command::new(get_cli_binary())
        .args(["invalid-command"])
        .output()
        .expect("Failed to execute command");

    // Command should fail for invalid subcommand
    assert!(!output.status.success(), "Invalid command should fail");
}
