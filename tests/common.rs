//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing history fixtures and running the binary.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Writes JSON history fixture into directory.
///
/// # Arguments
///
/// * `dir`: Directory receiving the fixture
/// * `json`: History document
///
/// # Returns
///
/// Path of the written file
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_history(dir: &Path, json: &str) -> Result<PathBuf> {
    let path = dir.join("history.json");
    fs::write(&path, json)?;
    Ok(path)
}

/// Runs the chatmark binary with arguments and optional stdin.
///
/// # Errors
///
/// Returns error if the process cannot be spawned or awaited
pub fn run_chatmark(args: &[&str], stdin: Option<&str>) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_chatmark"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    {
        let mut pipe = child
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("stdin not captured"))?;
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes())?;
        }
    }

    Ok(child.wait_with_output()?)
}

/// Sample history mixing both author fields and every block construct.
pub const SAMPLE_HISTORY: &str = r###"[
    {"role": "user", "content": "Show me <b>code</b>", "timestamp": "09:00"},
    {"role": "assistant", "content": "## Example\n\n```rust\nfn main() {}\n```\n\n- one\n- two\n\n> note", "timestamp": "09:01"},
    {"sender": "user", "content": "thanks **a lot**"}
]"###;
