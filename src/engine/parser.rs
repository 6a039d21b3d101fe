//! Interpretation of yt-dlp stdout

use crate::error::{Error, Result};
use crate::types::{ArtifactRecord, VideoInfoRecord};
use serde_json::Value;
use tracing::trace;

/// Select the record describing the downloaded file
///
/// yt-dlp may print progress text and pre-flight JSON before the final
/// record, so lines are scanned from last to first and the first one that
/// decodes into a valid [`ArtifactRecord`] wins. Lines that are not JSON are
/// skipped.
///
/// # Errors
///
/// - [`Error::EmptyOutput`] if stdout holds nothing but whitespace
/// - [`Error::NoValidRecord`] if there is output but no line qualifies
pub fn extract_download_record(stdout: &str) -> Result<ArtifactRecord> {
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(Error::EmptyOutput);
    }

    for (index, line) in lines.iter().enumerate().rev() {
        let value = match serde_json::from_str::<Value>(line) {
            Ok(value) => value,
            Err(_) => {
                trace!(line = index, "skipping non-JSON output line");
                continue;
            }
        };

        if let Some(record) = ArtifactRecord::from_value(value) {
            return Ok(record);
        }
        trace!(line = index, "skipping JSON record without _filename/ext");
    }

    Err(Error::NoValidRecord)
}

/// Decode the single record printed by `--dump-json`
///
/// Fields of an unexpected type are left absent rather than failing the
/// whole record.
///
/// # Errors
///
/// Returns [`Error::MalformedOutput`] if stdout is not exactly one JSON
/// object.
pub fn parse_info_record(stdout: &str) -> Result<VideoInfoRecord> {
    let value: Value =
        serde_json::from_str(stdout).map_err(|e| Error::MalformedOutput(e.to_string()))?;
    if !value.is_object() {
        return Err(Error::MalformedOutput("expected a JSON object".to_string()));
    }
    Ok(VideoInfoRecord::from_value(&value))
}
