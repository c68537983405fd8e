use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_records(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("failed to write record");
    }
    file
}

fn tasklog() -> Command {
    Command::cargo_bin("tasklog").expect("binary not built")
}

#[test]
fn test_renders_status_lines_and_recap() {
    let file = write_records(&[
        r#"{"host": "web01", "status": "ok", "duration_ms": 150}"#,
        r#"{"host": "web01", "status": "failed", "result": {"rc": 1, "stdout": ""}}"#,
    ]);

    tasklog()
        .arg(file.path())
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web01 | SUCCESS | 150ms"))
        .stdout(predicate::str::contains("web01 | FAILED"))
        .stdout(predicate::str::contains("  - stdout: \"\""))
        .stdout(predicate::str::contains(
            "web01 : ok=1 changed=0 unreachable=0 failed=1 skipped=0",
        ));
}

#[test]
fn test_task_header_precedes_results() {
    let file = write_records(&[
        r#"{"host": "web01", "task": "Install nginx", "status": "changed"}"#,
    ]);

    tasklog()
        .arg(file.path())
        .args(["--color", "never", "--no-recap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("] Install nginx"))
        .stdout(predicate::str::contains("web01 | CHANGED"));
}

#[test]
fn test_redacted_result_never_leaks() {
    let file = write_records(&[
        r#"{"host": "db01", "status": "failed", "result": {"_ansible_no_log": true, "password": "hunter2"}}"#,
    ]);

    tasklog()
        .arg(file.path())
        .args(["--color", "never", "--no-recap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("censored"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_verbose_shows_successful_result_trees() {
    let file = write_records(&[
        r#"{"host": "web01", "status": "ok", "result": {"rc": 0, "stdout": "hello"}}"#,
    ]);

    tasklog()
        .arg(file.path())
        .args(["--color", "never", "--no-recap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stdout").not());

    tasklog()
        .arg(file.path())
        .args(["--color", "never", "--no-recap", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  - stdout: hello"))
        .stdout(predicate::str::contains("  - rc: 0"));
}

#[test]
fn test_malformed_record_reports_line_number() {
    let file = write_records(&[
        r#"{"host": "web01", "status": "ok"}"#,
        "not json at all",
    ]);

    tasklog()
        .arg(file.path())
        .args(["--color", "never"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_reads_from_stdin() {
    tasklog()
        .args(["--color", "never", "--no-recap"])
        .write_stdin(r#"{"host": "web01", "status": "skipped"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("web01 | SKIPPED"));
}
