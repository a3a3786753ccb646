// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking and async runners with full stream capture.

use std::ffi::OsStr;
use std::process::Stdio;
use std::time::Instant;

use crate::{CommandError, Streams};

// ---------------------------------------------------------------------------
// Blocking runner
// ---------------------------------------------------------------------------

/// Run a prepared command to completion, capturing stdout and stderr.
///
/// The command must not have been started; this attaches piped sinks for
/// both output streams and blocks until the process exits. Environment and
/// working directory stay whatever the caller configured on `cmd`.
///
/// On exit status zero the captured [`Streams`] are returned. On failure to
/// start, or a non-zero exit, the same capture travels inside the
/// [`CommandError`] instead, so diagnostic output is never lost. A command
/// must not be reused across calls.
pub fn run(cmd: &mut std::process::Command) -> Result<Streams, CommandError> {
    let full_command = full_command(cmd.get_program(), cmd.get_args());

    let span = tracing::info_span!(
        "runcmd.run",
        cmd = %full_command,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    // Pipe both streams for capture.
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let start = Instant::now();
    let output = match cmd.output() {
        Ok(output) => output,
        Err(source) => {
            tracing::debug!(cmd = %full_command, error = %source, "failed to start process");
            return Err(CommandError::new(full_command, Streams::default()));
        }
    };

    span.record("exit_code", output.status.code().unwrap_or(-1));
    span.record("duration_ms", start.elapsed().as_millis() as u64);

    finish(full_command, output)
}

// ---------------------------------------------------------------------------
// Async runner
// ---------------------------------------------------------------------------

/// Async twin of [`run`] over `tokio::process::Command`.
///
/// Same contract: piped capture, wait for exit, zero status returns the
/// streams, anything else returns a [`CommandError`] carrying them.
pub async fn run_async(cmd: &mut tokio::process::Command) -> Result<Streams, CommandError> {
    let full_command = {
        let std_cmd = cmd.as_std();
        full_command(std_cmd.get_program(), std_cmd.get_args())
    };

    let span = tracing::info_span!(
        "runcmd.run_async",
        cmd = %full_command,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let start = Instant::now();
    let output = match cmd.output().await {
        Ok(output) => output,
        Err(source) => {
            tracing::debug!(cmd = %full_command, error = %source, "failed to start process");
            return Err(CommandError::new(full_command, Streams::default()));
        }
    };

    span.record("exit_code", output.status.code().unwrap_or(-1));
    span.record("duration_ms", start.elapsed().as_millis() as u64);

    finish(full_command, output)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a finished process to the success/failure contract.
fn finish(full_command: String, output: std::process::Output) -> Result<Streams, CommandError> {
    let streams = Streams::new(output.stdout, output.stderr);
    if output.status.success() {
        Ok(streams)
    } else {
        Err(CommandError::new(full_command, streams))
    }
}

/// Render the program path and arguments as one space-joined line.
fn full_command<'a>(program: &OsStr, args: impl Iterator<Item = &'a OsStr>) -> String {
    let mut full = program.to_string_lossy().into_owned();
    for arg in args {
        full.push(' ');
        full.push_str(&arg.to_string_lossy());
    }
    full
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
