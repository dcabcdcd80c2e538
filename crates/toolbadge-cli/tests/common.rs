//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Records covering every display state, one per line
pub const SAMPLE_RECORDS: &str = r#"{"toolCallId":"1","toolName":"str_replace_editor","args":{"command":"create","path":"/components/Card.jsx","file_text":"export default function Card() {}"},"state":"result","result":"Success"}
{"toolCallId":"2","toolName":"str_replace_editor","args":{"command":"view","path":"/config/app.config.js"},"state":"call"}
{"toolCallId":"3","toolName":"file_manager","args":{"command":"rename","path":"/components/OldCard.jsx","new_path":"/components/NewCard.jsx"},"state":"result","result":null}
{"toolCallId":"4","toolName":"unknown_tool","args":{"command":"x","path":"/App.jsx"},"state":"result","result":"ok"}
"#;

/// A JSON Lines feed where call `a` completes and call `b` never does
pub const SAMPLE_STREAM: &str = r#"{"toolCallId":"a","toolName":"str_replace_editor","args":{"command":"create","path":"/App.jsx"}}
{"toolCallId":"b","toolName":"file_manager","args":{"command":"delete","path":"/old.js"}}
not json

{"toolCallId":"a","toolName":"str_replace_editor","args":{"command":"create","path":"/App.jsx"},"state":"result","result":"Success"}
{"toolCallId":"a","toolName":"str_replace_editor","args":{"command":"create","path":"/App.jsx"},"state":"result","result":"Success"}
"#;

pub struct TestFixture {
    temp_dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Config path handed to the binary through TOOLBADGE_CONFIG
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config").join("config.toml")
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Binary isolated from the user's config and environment, colors off
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("toolbadge").expect("Failed to find binary");
        cmd.env("TOOLBADGE_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }
}
