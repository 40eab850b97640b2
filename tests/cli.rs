// Drives the compiled binary in its one-shot mode; no terminal needed.

use assert_cmd::Command;

fn genie() -> Command {
    let mut cmd = Command::cargo_bin("cgpa-genie").unwrap();
    cmd.arg("--no-config");
    cmd
}

#[test]
fn prints_sgpa_for_each_semester() {
    genie()
        .args(["--sgpa", "4:S,3:A", "--sgpa", "3:b"])
        .assert()
        .success()
        .stdout("SGPA (semester 1): 9.57\nSGPA (semester 2): 8.00\n");
}

#[test]
fn cgpa_prefers_this_runs_sgpas() {
    genie()
        .args([
            "--sgpa", "4:S,3:A", "--sgpa", "2:B", "--cgpa", "--history", "[1, 2]",
        ])
        .assert()
        .success()
        .stdout("SGPA (semester 1): 9.57\nSGPA (semester 2): 8.00\nCGPA (this session): 8.79\n");
}

#[test]
fn cgpa_from_manual_list() {
    genie()
        .args(["--history", "[8.5, 9.0, 8.0]"])
        .assert()
        .success()
        .stdout("CGPA (manual input): 8.50\n");
}

#[test]
fn malformed_list_is_rejected_not_evaluated() {
    genie()
        .args(["--history", "__import__('os').system('echo hi')"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn invalid_grade_fails() {
    let output = genie().args(["--sgpa", "4:Z"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid grade 'Z'"), "{}", stderr);
}

#[test]
fn zero_total_credits_fails() {
    let output = genie().args(["--sgpa", "0:S"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("total credits cannot be zero"));
}
