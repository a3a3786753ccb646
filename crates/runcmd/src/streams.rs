// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured output and error streams from a single run.

use std::borrow::Cow;

/// Everything a spawned process wrote to its output and error channels.
///
/// The buffers start empty, are written only by the running process, and are
/// read-only once returned. Each run owns its own pair exclusively;
/// `Streams` is deliberately not `Clone`, so a run's capture is never
/// duplicated.
#[derive(Debug, Default)]
pub struct Streams {
    out: Vec<u8>,
    err: Vec<u8>,
}

impl Streams {
    pub(crate) fn new(out: Vec<u8>, err: Vec<u8>) -> Self {
        Self { out, err }
    }

    /// Raw bytes of the captured output stream.
    pub fn stdout(&self) -> &[u8] {
        &self.out
    }

    /// Raw bytes of the captured error stream.
    pub fn stderr(&self) -> &[u8] {
        &self.err
    }

    /// Captured output stream as text, invalid UTF-8 replaced.
    pub fn stdout_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.out)
    }

    /// Captured error stream as text, invalid UTF-8 replaced.
    pub fn stderr_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.err)
    }
}

#[cfg(test)]
#[path = "streams_tests.rs"]
mod tests;
