// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single error kind raised when a spawned process fails.

use crate::Streams;
use thiserror::Error;

/// Returned when a process fails to start or exits with non-zero status.
///
/// Carries the full invoked command line and the streams captured before the
/// failure, so the rendered text is self-contained and can be printed to a
/// diagnostic stream without additional context.
///
/// The error stream is rendered byte-for-byte; the output stream has its
/// surrounding whitespace trimmed. Stderr is the primary diagnostic signal,
/// stdout secondary context whose padding is noise.
#[derive(Debug, Error)]
#[error("error executing: {full_command}:\n{}\n{}", streams.stderr_lossy(), streams.stdout_lossy().trim())]
pub struct CommandError {
    full_command: String,
    streams: Streams,
}

impl CommandError {
    pub(crate) fn new(full_command: String, streams: Streams) -> Self {
        Self {
            full_command,
            streams,
        }
    }

    /// The program path and its space-joined arguments.
    pub fn full_command(&self) -> &str {
        &self.full_command
    }

    /// The streams captured before the failure.
    ///
    /// Both buffers are empty when the process never started.
    pub fn streams(&self) -> &Streams {
        &self.streams
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
