//! Tokio-based process runner

use super::traits::ProcessRunner;
use crate::error::Error;
use crate::types::ProcessOutcome;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, trace};

const CHUNK_SIZE: usize = 8 * 1024;

/// Process runner backed by `tokio::process`
///
/// Both pipes are drained concurrently with waiting on the child, so a
/// chatty engine can never block on a full pipe. The child is spawned with
/// `kill_on_drop`: dropping the returned future (for example under an
/// outer `tokio::time::timeout`) kills the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, program: &Path, args: &[String]) -> crate::Result<ProcessOutcome> {
        debug!(program = %program.display(), ?args, "spawning engine");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::EngineInvocation(format!("{}: {}", program.display(), e)))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::EngineInvocation("stdout was not captured".to_string()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| Error::EngineInvocation("stderr was not captured".to_string()))?;

        let (status, stdout, stderr) = tokio::try_join!(
            child.wait(),
            drain(stdout, "stdout"),
            drain(stderr, "stderr")
        )?;

        let exit_code = status.code().unwrap_or(-1);
        debug!(
            program = %program.display(),
            exit_code,
            stdout_bytes = stdout.len(),
            stderr_bytes = stderr.len(),
            "engine exited"
        );

        Ok(ProcessOutcome {
            exit_code,
            stdout,
            stderr,
        })
    }

    fn name(&self) -> &'static str {
        "tokio-process"
    }
}

/// Read a pipe to EOF chunk by chunk
///
/// Bytes are decoded once at the end so multi-byte characters split across
/// chunks survive.
async fn drain<R>(mut pipe: R, stream: &'static str) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = pipe.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        trace!(stream, bytes = n, "engine output chunk");
        buf.extend_from_slice(&chunk[..n]);
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
