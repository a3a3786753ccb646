// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the success path: faithful relay of whatever the process wrote.

use crate::prelude::*;

/// `echo hello` exits 0 with `hello\n` on stdout and nothing on stderr.
#[test]
fn echo_hello() {
    let streams = run(std::process::Command::new("echo").arg("hello")).unwrap();
    assert_eq!(streams.stdout(), b"hello\n");
    assert!(streams.stderr().is_empty());
}

/// Both streams are captured in full, independently.
#[test]
fn captures_both_streams() {
    let streams = run(&mut sh("echo to-out; echo to-err >&2")).unwrap();
    assert_eq!(streams.stdout(), b"to-out\n");
    assert_eq!(streams.stderr(), b"to-err\n");
}

/// Multi-line output with surrounding blank lines comes back exactly as
/// written; trimming only happens inside error rendering.
#[test]
fn preserves_surrounding_whitespace() {
    let streams = run(&mut sh("printf '\\n\\nline one\\nline two\\n\\n'")).unwrap();
    assert_eq!(streams.stdout(), b"\n\nline one\nline two\n\n");
}

/// Larger outputs are buffered fully in memory.
#[test]
fn buffers_large_output() {
    let streams = run(&mut sh("seq 1 5000")).unwrap();
    let text = streams.stdout_lossy();
    assert!(text.starts_with("1\n2\n"));
    assert!(text.ends_with("4999\n5000\n"));
}

/// The caller's working directory configuration is left untouched.
#[test]
fn honors_caller_working_directory() {
    let temp = tempfile::tempdir().unwrap();
    let mut cmd = sh("pwd");
    cmd.current_dir(temp.path());
    let streams = run(&mut cmd).unwrap();
    let expected = temp.path().canonicalize().unwrap();
    assert_eq!(streams.stdout_lossy().trim(), expected.to_string_lossy());
}
