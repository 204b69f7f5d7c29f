//! End-to-end tests for the fibseq binary.

use assert_cmd::Command;

fn fibseq() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fibseq"))
}

fn stdout_of(args: &[&str]) -> String {
    let output = fibseq().args(args).output().unwrap();
    assert!(output.status.success(), "fibseq {:?} failed", args);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_no_argument_uses_default() {
    fibseq()
        .assert()
        .success()
        .stdout("Fibonacci sequence for count=10:\n0, 1, 1, 2, 3, 5, 8, 13, 21, 34\n");
}

#[test]
fn test_explicit_count() {
    assert_eq!(
        stdout_of(&["7"]),
        "Fibonacci sequence for count=7:\n0, 1, 1, 2, 3, 5, 8\n"
    );
}

#[test]
fn test_zero_prints_empty_line() {
    assert_eq!(stdout_of(&["0"]), "Fibonacci sequence for count=0:\n\n");
}

#[test]
fn test_non_numeric_falls_back() {
    assert_eq!(stdout_of(&["abc"]), stdout_of(&[]));
}

#[test]
fn test_negative_count_fails() {
    let output = fibseq().arg("-1").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be negative"), "stderr: {stderr}");
}

#[test]
fn test_overflowing_count_fails() {
    let output = fibseq().arg("94").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("overflow"));
}

#[test]
fn test_hyphenated_garbage_falls_back() {
    let default = stdout_of(&[]);
    for arg in ["-x", "--abc", "-1.5"] {
        assert_eq!(stdout_of(&[arg]), default, "arg {arg}");
    }
}

#[test]
fn test_extra_args_ignored() {
    assert_eq!(
        stdout_of(&["7", "8"]),
        "Fibonacci sequence for count=7:\n0, 1, 1, 2, 3, 5, 8\n"
    );
}
