use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;

fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn stdout_path(output: &std::process::Output) -> PathBuf {
    PathBuf::from(String::from_utf8(output.stdout.clone()).unwrap().trim_end())
}

#[test]
fn version_flag_prints_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^mdp \d+\.\d+\.\d+\n$").unwrap());
}

#[rstest]
#[case("-f")]
#[case("-s")]
#[case("-t")]
#[case("-b")]
fn help_lists_short_flags(#[case] flag: &str) {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(flag));
}

#[test]
fn missing_file_flag_exits_with_one() {
    cmd()
        .arg("-s")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No input file given"));
}

#[test]
fn nonexistent_input_file_reports_file_access() {
    let temp = assert_fs::TempDir::new().unwrap();

    cmd()
        .arg("-f")
        .arg(temp.child("missing.md").path())
        .arg("-s")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to access input file"));
}

#[test]
fn nonexistent_template_reports_template_parsing() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("doc.md");
    input.write_str("# Doc\n").unwrap();

    cmd()
        .arg("-f")
        .arg(input.path())
        .arg("-t")
        .arg(temp.child("missing.html").path())
        .arg("-s")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse template"));
}

#[test]
fn skip_preview_keeps_sanitized_output() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("doc.md");
    input
        .write_str("# Greetings\n\nHello **world**.\n\n<script>alert('x')</script>\n")
        .unwrap();

    let output = cmd()
        .arg("-f")
        .arg(input.path())
        .arg("-s")
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = stdout_path(&output);
    let html = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Markdown Preview | "));
    assert!(html.contains("<h1>Greetings</h1>"));
    assert!(html.contains("<p>Hello <strong>world</strong>.</p>"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("alert("));
}

#[test]
fn alternate_template_is_used() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("doc.md");
    input.write_str("body text\n").unwrap();
    let template = temp.child("page.html");
    template
        .write_str("<section>{{ body | safe }}</section>")
        .unwrap();

    let output = cmd()
        .arg("--file")
        .arg(input.path())
        .arg("--template")
        .arg(template.path())
        .arg("--skip-preview")
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = stdout_path(&output);
    let html = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(html, "<section><p>body text</p>\n</section>");
}

#[cfg(unix)]
#[test]
fn preview_removes_temp_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("doc.md");
    input.write_str("# Doc\n").unwrap();

    let output = cmd()
        .arg("-f")
        .arg(input.path())
        .arg("-b")
        .arg("true")
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = stdout_path(&output);
    assert!(path.to_string_lossy().ends_with(".html"));
    assert!(!path.exists());
}

#[test]
fn unknown_browser_reports_path_lookup() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("doc.md");
    input.write_str("# Doc\n").unwrap();

    let output = cmd()
        .arg("-f")
        .arg(input.path())
        .arg("-b")
        .arg("mdp-no-such-browser-4f2a")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(stderr.contains("during $PATH lookup"), "stderr: {stderr}");
    assert!(!stdout_path(&output).exists());
}
