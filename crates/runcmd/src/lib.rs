// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! runcmd: run an external command and capture its output streams.
//!
//! A thin convenience layer over a single process invocation: the caller
//! builds a command (program, arguments, environment, working directory),
//! [`run`] executes it to completion with stdout and stderr buffered in
//! memory, and a non-zero exit produces one [`CommandError`] whose rendered
//! text embeds the full command line plus both captured streams.

pub mod error;
pub mod run;
pub mod streams;

pub use error::CommandError;
pub use run::{run, run_async};
pub use streams::Streams;
