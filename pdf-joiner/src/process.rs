//! Running external programs with captured output.

use std::ffi::{OsStr, OsString};
use std::io::{self, Read};
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use crate::error::{JoinerError, Result};

/// Outcome of a finished child process.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// Exit status of the child.
    pub status: ExitStatus,
    /// Standard output and standard error as written, lossily decoded.
    pub combined: String,
}

impl CapturedOutput {
    /// Whether the child exited with status zero.
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run `program` with `args`, waiting for it to exit.
///
/// Standard input is closed. Standard output and standard error share one
/// pipe, so the captured text keeps the order the child wrote it in.
/// There is no timeout: a hung child blocks the caller.
pub async fn run_captured<P, I, S>(program: P, args: I) -> Result<CapturedOutput>
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let spawn_failed = |source: io::Error| JoinerError::SpawnFailed {
        program: program.to_string_lossy().into_owned(),
        source,
    };

    let (mut reader, writer) = io::pipe().map_err(spawn_failed)?;
    let stderr = writer.try_clone().map_err(spawn_failed)?;

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(stderr);
    let mut child = command.spawn().map_err(spawn_failed)?;
    // Release the parent's write ends so the reader sees EOF.
    drop(command);

    let collector = tokio::task::spawn_blocking(move || {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map(|_| bytes)
    });

    let status = child.wait().await.map_err(spawn_failed)?;
    let bytes = collector
        .await
        .map_err(io::Error::other)
        .and_then(|read| read)
        .map_err(spawn_failed)?;

    Ok(CapturedOutput {
        status,
        combined: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Render a command line for diagnostics.
pub fn display_command(program: &Path, args: &[OsString]) -> String {
    std::iter::once(program.as_os_str())
        .chain(args.iter().map(OsString::as_os_str))
        .map(|part| {
            let part = part.to_string_lossy();
            if part.contains(char::is_whitespace) {
                format!("'{part}'")
            } else {
                part.into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
