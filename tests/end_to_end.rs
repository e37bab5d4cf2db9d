//! Runs the fibgen binary and checks its output.

use std::process::Command;

#[test]
fn test_prints_first_ten() {
    let output = Command::new(env!("CARGO_BIN_EXE_fibgen"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fibgen");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "[1, 1, 2, 3, 5, 8, 13, 21, 34, 55]\n"
    );
}

#[test]
fn test_logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_fibgen"))
        .env("RUST_LOG", "trace")
        .output()
        .expect("failed to run fibgen");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "[1, 1, 2, 3, 5, 8, 13, 21, 34, 55]\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("drawing values"));
}
