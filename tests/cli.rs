use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn load_file_as_json() {
    let file = config_file("name demo\n<server web>\nport 80\nport 81\n</server web>\n");
    let mut cmd = cargo_bin_cmd!("config-general");
    cmd.arg(file.path());

    let output_pred = predicate::str::contains("\"name\": \"demo\"")
        .and(predicate::str::contains("\"81\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn load_stdin_as_yaml() {
    let mut cmd = cargo_bin_cmd!("config-general");
    cmd.arg("-").arg("--format").arg("yaml").write_stdin("<db>\nhost localhost\n</db>\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("db:\n  host: localhost\n"));
}

#[test]
fn raw_format_prints_parse_tree() {
    let file = config_file("a 1\na 2\n");
    let mut cmd = cargo_bin_cmd!("config-general");
    cmd.arg(file.path()).arg("--format").arg("raw");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("├─ Option: a = 1\n└─ Option: a = 2\n"));
}

#[test]
fn parse_error_exits_with_failure() {
    let file = config_file("<foo>\n</bar>\n");
    let mut cmd = cargo_bin_cmd!("config-general");
    cmd.arg(file.path());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: unexpected input at line 2 and column 3"));
}

#[test]
fn missing_file_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("config-general");
    cmd.arg(dir.path().join("nope.conf"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error: failed to read"));
}
