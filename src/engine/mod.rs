//! yt-dlp invocation
//!
//! Argument construction, process execution and output interpretation for
//! the external engine. Process execution sits behind the
//! [`ProcessRunner`] trait so the rest of the crate never spawns anything
//! directly:
//!
//! - [`TokioProcessRunner`]: spawns the real binary via `tokio::process`
//!
//! ```no_run
//! use ytdlp_bridge::engine::{build_info_args, parse_info_record, ProcessRunner, TokioProcessRunner};
//! use ytdlp_bridge::InfoRequest;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let args = build_info_args(&InfoRequest::new("https://youtube.com/watch?v=abc"))?;
//! let outcome = TokioProcessRunner.run(Path::new("yt-dlp"), &args).await?;
//! if outcome.success() {
//!     let info = parse_info_record(&outcome.stdout)?;
//!     println!("{:?}", info.title);
//! }
//! # Ok(())
//! # }
//! ```

mod args;
mod cli;
mod parser;
mod traits;

pub use args::{
    AUDIO_FORMATS, DEFAULT_VIDEO_CONTAINER, EXT_PLACEHOLDER, TITLE_PLACEHOLDER, URL_REQUIRED,
    build_download_args, build_info_args, output_template, require_url, resolve_output_dir,
};
pub use cli::TokioProcessRunner;
pub use parser::{extract_download_record, parse_info_record};
pub use traits::ProcessRunner;
