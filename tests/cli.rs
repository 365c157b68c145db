//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_taskdef(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_ecs-taskdef");
    Command::new(bin)
        .args(args)
        .env_remove("INPUT_REGION")
        .output()
        .expect("failed to run ecs-taskdef binary")
}

#[test]
fn missing_region_exits_with_error() {
    let output = run_taskdef(&[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("--region"));
}

#[test]
fn help_shows_all_inputs() {
    let output = run_taskdef(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--region"));
    assert!(stdout.contains("--cluster-name"));
    assert!(stdout.contains("--service-name"));
    assert!(stdout.contains("--task-name"));
    assert!(stdout.contains("--replacements"));
}

#[test]
fn unknown_flag_exits_with_error() {
    let output = run_taskdef(&["--region", "us-east-1", "--frobnicate"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unexpected argument"));
}

#[test]
fn version_flag_succeeds() {
    let output = run_taskdef(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("ecs-taskdef"));
}
