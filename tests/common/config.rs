//! Test configuration helpers for creating downloaders over a fake engine

use super::fixtures::install_fake_engine;
use tempfile::TempDir;
use ytdlp_bridge::{Config, MediaDownloader};

/// A downloader wired to a fake engine, plus the directory holding both
pub struct FakeEngineSetup {
    /// Downloader under test
    pub downloader: MediaDownloader,
    /// Holds the fake engine and the download directory; dropped last
    pub temp_dir: TempDir,
}

impl FakeEngineSetup {
    /// Directory downloads land in when no output path is given
    pub fn output_dir(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("downloads")
    }
}

/// Build a config whose engine is the fake script in `temp_dir`
pub fn fake_engine_config(temp_dir: &TempDir) -> Config {
    let output_dir = temp_dir.path().join("downloads");
    std::fs::create_dir_all(&output_dir).expect("create download dir");

    Config {
        ytdlp_path: install_fake_engine(temp_dir.path()),
        output_dir: Some(output_dir),
        ffmpeg_path: None,
    }
}

/// Create a downloader that spawns the fake engine through the real runner
pub fn create_fake_engine_downloader() -> FakeEngineSetup {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let config = fake_engine_config(&temp_dir);
    let downloader = MediaDownloader::new(config).expect("valid config");
    FakeEngineSetup {
        downloader,
        temp_dir,
    }
}
