//! Configuration types for ytdlp-bridge

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the engine executable path
pub const ENV_YTDLP_PATH: &str = "YTDLP_PATH";
/// Environment variable holding the default output directory
pub const ENV_OUTPUT_DIR: &str = "YTDL_OUTPUT_DIR";
/// Environment variable holding the ffmpeg executable path
pub const ENV_FFMPEG_PATH: &str = "FFMPEG_PATH";

/// Main configuration for [`MediaDownloader`](crate::MediaDownloader)
///
/// Every field has a default, so `Config::default()` works as long as
/// `yt-dlp` is in PATH.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Path to the yt-dlp executable (default: "yt-dlp", resolved through PATH at spawn time)
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: PathBuf,

    /// Directory for downloads without an explicit output path
    ///
    /// Falls back to the system temporary directory when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Path to ffmpeg
    ///
    /// Carried for hosts that want to report it; yt-dlp locates ffmpeg on
    /// its own and the path is never passed on the command line.
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ytdlp_path: default_ytdlp_path(),
            output_dir: None,
            ffmpeg_path: None,
        }
    }
}

impl Config {
    /// Build a configuration from `YTDLP_PATH`, `YTDL_OUTPUT_DIR` and `FFMPEG_PATH`
    ///
    /// Unset or empty variables fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = non_empty_env(ENV_YTDLP_PATH) {
            config.ytdlp_path = PathBuf::from(path);
        }
        config.output_dir = non_empty_env(ENV_OUTPUT_DIR).map(PathBuf::from);
        config.ffmpeg_path = non_empty_env(ENV_FFMPEG_PATH).map(PathBuf::from);
        config
    }

    /// Check the configuration for values that can never work
    pub fn validate(&self) -> Result<()> {
        if self.ytdlp_path.as_os_str().is_empty() {
            return Err(Error::Config {
                message: "yt-dlp path must not be empty".to_string(),
                key: Some("ytdlp_path".to_string()),
            });
        }
        if let Some(dir) = &self.output_dir
            && dir.as_os_str().is_empty()
        {
            return Err(Error::Config {
                message: "output directory must not be empty when set".to_string(),
                key: Some("output_dir".to_string()),
            });
        }
        Ok(())
    }

    /// Directory used when a request names neither an output path nor a directory
    pub fn default_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Resolve the engine executable to an absolute path
    ///
    /// A bare program name is searched in PATH using the `which` crate; a
    /// path with a directory component is returned unchanged.
    pub fn locate_engine(&self) -> Result<PathBuf> {
        if is_bare_program_name(&self.ytdlp_path) {
            which::which(&self.ytdlp_path).map_err(|e| Error::Config {
                message: format!("{} not found in PATH: {}", self.ytdlp_path.display(), e),
                key: Some("ytdlp_path".to_string()),
            })
        } else {
            Ok(self.ytdlp_path.clone())
        }
    }
}

fn is_bare_program_name(path: &Path) -> bool {
    path.components().count() == 1 && !path.is_absolute()
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn default_ytdlp_path() -> PathBuf {
    PathBuf::from("yt-dlp")
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: tests touching the environment are serialized with #[serial]
        unsafe {
            std::env::remove_var(ENV_YTDLP_PATH);
            std::env::remove_var(ENV_OUTPUT_DIR);
            std::env::remove_var(ENV_FFMPEG_PATH);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ytdlp_path, PathBuf::from("yt-dlp"));
        assert!(config.output_dir.is_none());
        assert!(config.ffmpeg_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"output_dir": "/data/media"}"#).unwrap();
        assert_eq!(config.ytdlp_path, PathBuf::from("yt-dlp"));
        assert_eq!(config.output_dir, Some(PathBuf::from("/data/media")));
    }

    #[test]
    fn test_validate_rejects_empty_engine_path() {
        let config = Config {
            ytdlp_path: PathBuf::new(),
            ..Default::default()
        };
        match config.validate() {
            Err(Error::Config { key, .. }) => assert_eq!(key.as_deref(), Some("ytdlp_path")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_empty_output_dir() {
        let config = Config {
            output_dir: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_default_output_dir_falls_back_to_temp() {
        let config = Config::default();
        assert_eq!(config.default_output_dir(), std::env::temp_dir());

        let config = Config {
            output_dir: Some(PathBuf::from("/srv/downloads")),
            ..Default::default()
        };
        assert_eq!(config.default_output_dir(), PathBuf::from("/srv/downloads"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        clear_env();
        // SAFETY: serialized with other environment tests
        unsafe {
            std::env::set_var(ENV_YTDLP_PATH, "/opt/bin/yt-dlp");
            std::env::set_var(ENV_OUTPUT_DIR, "/srv/media");
            std::env::set_var(ENV_FFMPEG_PATH, "/opt/bin/ffmpeg");
        }

        let config = Config::from_env();
        assert_eq!(config.ytdlp_path, PathBuf::from("/opt/bin/yt-dlp"));
        assert_eq!(config.output_dir, Some(PathBuf::from("/srv/media")));
        assert_eq!(config.ffmpeg_path, Some(PathBuf::from("/opt/bin/ffmpeg")));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_treats_empty_as_unset() {
        clear_env();
        // SAFETY: serialized with other environment tests
        unsafe {
            std::env::set_var(ENV_YTDLP_PATH, "");
            std::env::set_var(ENV_OUTPUT_DIR, "  ");
        }

        let config = Config::from_env();
        assert_eq!(config, Config::default());

        clear_env();
    }

    #[test]
    fn test_locate_engine_keeps_explicit_paths() {
        let config = Config {
            ytdlp_path: PathBuf::from("/nonexistent/bin/yt-dlp"),
            ..Default::default()
        };
        assert_eq!(
            config.locate_engine().unwrap(),
            PathBuf::from("/nonexistent/bin/yt-dlp")
        );
    }

    #[test]
    fn test_locate_engine_consistent_with_which() {
        let config = Config {
            ytdlp_path: PathBuf::from("nonexistent-ytdlp-binary-xyz"),
            ..Default::default()
        };
        assert!(which::which("nonexistent-ytdlp-binary-xyz").is_err());
        assert!(matches!(
            config.locate_engine(),
            Err(Error::Config { .. })
        ));
    }
}
