//! Two-stage pipelines: one program's stderr feeding another's stdin.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

use anyhow::anyhow;

use super::command::{describe, CommandResult};
use crate::error::{IwyuError, Result};

/// One stage of a pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Stage<'a> {
    /// Program to run.
    pub program: &'a str,
    /// Its arguments.
    pub args: &'a [String],
}

impl Stage<'_> {
    fn describe(&self) -> String {
        describe(self.program, self.args)
    }

    fn spawn_error(&self, source: std::io::Error) -> IwyuError {
        tracing::debug!("Failed to spawn {}: {}", self.program, source);
        IwyuError::SpawnFailed {
            command: self.describe(),
            source,
        }
    }
}

/// Run `producer`, connecting its stderr to the stdin of `consumer`.
///
/// The producer's stdout is discarded. The consumer's stdout is captured and
/// its stderr is passed through to the terminal. Both children are waited
/// for; the returned result describes the consumer.
pub fn execute_stderr_pipe(
    producer: Stage<'_>,
    consumer: Stage<'_>,
    cwd: &Path,
) -> Result<CommandResult> {
    let start = Instant::now();

    tracing::debug!(
        "Running {} 2>&1 >/dev/null | {}",
        producer.describe(),
        consumer.describe()
    );

    let mut first = Command::new(producer.program)
        .args(producer.args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| producer.spawn_error(e))?;

    let diagnostics = first
        .stderr
        .take()
        .ok_or_else(|| anyhow!("stderr of {} was not captured", producer.program))?;

    let second = Command::new(consumer.program)
        .args(consumer.args)
        .current_dir(cwd)
        .stdin(Stdio::from(diagnostics))
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn();

    let second = match second {
        Ok(child) => child,
        Err(e) => {
            // Don't leave the producer running with nobody reading its stderr.
            first.kill().ok();
            first.wait().ok();
            return Err(consumer.spawn_error(e));
        }
    };

    let output = second.wait_with_output()?;
    let producer_status = first.wait()?;
    tracing::debug!(
        "{} exited with {:?}",
        producer.program,
        producer_status.code()
    );

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

    if output.status.success() {
        Ok(CommandResult::success(stdout, String::new(), duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            String::new(),
            duration,
        ))
    }
}
