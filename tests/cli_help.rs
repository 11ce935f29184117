use std::process::Command;

#[test]
fn test_help_lists_file_flags() {
    let bin = env!("CARGO_BIN_EXE_odkx-init");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--env-file", "--progress-file", "--ldap-env-file", "--dry-run"] {
        assert!(
            stdout.contains(flag),
            "help output should mention {flag}; got:\n{}",
            stdout
        );
    }
    assert!(
        stdout.contains("an interrupted run can be resumed"),
        "help output should mention resuming; got:\n{}",
        stdout
    );
}

#[test]
fn test_unknown_flag_is_rejected() {
    let bin = env!("CARGO_BIN_EXE_odkx-init");

    let output = Command::new(bin).arg("--domain").output().unwrap();

    assert!(!output.status.success());
}
