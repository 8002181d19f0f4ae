//! Integration tests for batch mode (--enter / --print / --dump)

use std::process::Command;

fn run(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_gridpad"))
        // Tests must be deterministic and not depend on a user's config.toml.
        .arg("--no-config")
        .args(args)
        .output()
        .expect("Failed to execute gridpad");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_literal_pass_through() {
    let (stdout, _, code) = run(&["-e", "C3=5", "-p", "C3"]);
    assert_eq!(stdout.trim(), "5");
    assert_eq!(code, 0);
}

#[test]
fn test_formula_with_reference() {
    let (stdout, _, code) = run(&["-e", "A1=3", "-e", "B1==A1+5", "-p", "B1"]);
    assert_eq!(stdout.trim(), "8");
    assert_eq!(code, 0);
}

#[test]
fn test_short_formula_not_evaluated() {
    let (stdout, _, code) = run(&["-e", "A1==1+2", "-p", "A1"]);
    assert_eq!(stdout.trim(), "=1+2");
    assert_eq!(code, 0);
}

#[test]
fn test_dump_lists_non_blank_cells() {
    let (stdout, _, code) = run(&["-e", "B2=1", "-e", "A3==B2+B2", "--dump"]);
    assert_eq!(stdout, "B2\t1\nA3\t2\n");
    assert_eq!(code, 0);
}

#[test]
fn test_unresolved_reference_exit_code() {
    let (stdout, _, code) = run(&["-e", "A1=apples", "-e", "B1==A1+1", "-p", "B1"]);
    assert_eq!(stdout.trim(), "#VALUE!");
    assert_eq!(code, 1);
}

#[test]
fn test_overflowing_sum_exit_code() {
    let (stdout, _, code) = run(&["-e", "A1==1e309+0", "-e", "B1==A1+1", "-p", "A1", "-p", "B1"]);
    assert_eq!(stdout, "#NUM!\n#VALUE!\n");
    assert_eq!(code, 1);
}

#[test]
fn test_off_grid_entry_is_an_error() {
    let (_, stderr, code) = run(&["-e", "A26=1", "-p", "A1"]);
    assert!(stderr.contains("A26"));
    assert_eq!(code, 1);
}

#[test]
fn test_zero_policy_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[evaluation]\nunresolved = \"zero\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_gridpad"))
        .arg("--config")
        .arg(&path)
        .args(["-e", "A1==Q99+7", "-p", "A1"])
        .output()
        .expect("Failed to execute gridpad");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "7");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_unknown_option() {
    let (_, stderr, code) = run(&["--bogus"]);
    assert!(stderr.contains("Unknown option: --bogus"));
    assert_eq!(code, 1);
}
