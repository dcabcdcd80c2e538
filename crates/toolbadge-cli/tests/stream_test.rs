mod common;
use common::{SAMPLE_STREAM, TestFixture};

use predicates::prelude::*;

#[test]
fn test_stream_echoes_updates_and_summarizes() {
    let fixture = TestFixture::new();
    let input = fixture.write_file("feed.jsonl", SAMPLE_STREAM);

    let output = fixture
        .command()
        .arg("stream")
        .arg(&input)
        .output()
        .expect("Failed to run stream");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    ⠋ Creating App.jsx
    ⠙ Deleting old.js
    ● Creating App.jsx
    1 complete, 1 pending
    ");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("skipping malformed record"),
        "expected a warning for the malformed line, got:\n{}",
        stderr
    );
}

#[test]
fn test_stream_final_only() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["stream", "--final-only"])
        .write_stdin(SAMPLE_STREAM)
        .assert()
        .success()
        .stdout("● Creating App.jsx\n⠋ Deleting old.js\n1 complete, 1 pending\n");
}

#[test]
fn test_stream_final_only_json() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["--format", "json", "stream", "--final-only", "-"])
        .write_stdin(SAMPLE_STREAM)
        .output()
        .expect("Failed to run stream");

    assert!(output.status.success());
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    assert_eq!(summary["complete"], 1);
    assert_eq!(summary["pending"], 1);
    assert_eq!(summary["badges"][0]["toolCallId"], "a");
    assert_eq!(summary["badges"][0]["isComplete"], true);
    assert_eq!(summary["badges"][1]["displayText"], "Deleting old.js");
}

#[test]
fn test_stream_json_lines() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["--format", "json", "stream"])
        .write_stdin(SAMPLE_STREAM)
        .output()
        .expect("Failed to run stream");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let updates: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be JSON"))
        .collect();

    assert_eq!(updates.len(), 4);
    assert_eq!(updates[0]["isComplete"], false);
    assert_eq!(updates[2]["toolCallId"], "a");
    assert_eq!(updates[2]["isComplete"], true);

    let summary = &updates[3];
    assert_eq!(summary["complete"], 1);
    assert_eq!(summary["pending"], 1);
    assert_eq!(summary["badges"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_stream_skips_invalid_utf8_line() {
    let fixture = TestFixture::new();
    let mut feed = Vec::new();
    feed.extend_from_slice(
        br#"{"toolCallId":"a","toolName":"str_replace_editor","args":{"command":"create","path":"/App.jsx"}}"#,
    );
    feed.push(b'\n');
    feed.extend_from_slice(&[0xff, 0xfe, b'\n']);
    feed.extend_from_slice(
        br#"{"toolCallId":"a","toolName":"str_replace_editor","args":{"command":"create","path":"/App.jsx"},"state":"result","result":"Success"}"#,
    );
    feed.push(b'\n');

    let output = fixture
        .command()
        .arg("stream")
        .write_stdin(feed)
        .output()
        .expect("Failed to run stream");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    ⠋ Creating App.jsx
    ● Creating App.jsx
    1 complete, 0 pending
    ");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("skipping malformed record"),
        "expected a warning for the undecodable line, got:\n{}",
        stderr
    );
}

#[test]
fn test_stream_quiet_at_error_level() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--log-level", "error", "stream", "--final-only"])
        .write_stdin(SAMPLE_STREAM)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
