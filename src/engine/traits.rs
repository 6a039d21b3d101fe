//! Trait for running the external engine

use crate::types::ProcessOutcome;
use async_trait::async_trait;
use std::path::Path;

/// Runs an external program and captures its output
///
/// A non-zero exit is not an error at this level: it is reported in
/// [`ProcessOutcome::exit_code`] and interpreted by the caller. Only a
/// failure to start the program is returned as `Err`.
///
/// # Examples
///
/// ```no_run
/// use ytdlp_bridge::engine::{ProcessRunner, TokioProcessRunner};
/// use std::path::Path;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let runner = TokioProcessRunner;
/// let outcome = runner
///     .run(Path::new("yt-dlp"), &["--version".to_string()])
///     .await?;
/// println!("exit {}: {}", outcome.exit_code, outcome.stdout.trim());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args` and wait for it to exit
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineInvocation`](crate::Error::EngineInvocation)
    /// if the program cannot be spawned, or [`Error::Io`](crate::Error::Io)
    /// if reading its output fails.
    async fn run(&self, program: &Path, args: &[String]) -> crate::Result<ProcessOutcome>;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}
