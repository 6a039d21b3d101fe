//! Shared test doubles for the engine and the artifact store.

use crate::artifact::ArtifactStore;
use crate::config::Config;
use crate::downloader::MediaDownloader;
use crate::engine::ProcessRunner;
use crate::error::{Error, Result};
use crate::types::ProcessOutcome;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Process runner returning a scripted outcome and recording every call.
pub(crate) struct ScriptedRunner {
    outcome: ProcessOutcome,
    unspawnable: bool,
    broken_pipe: bool,
    calls: Mutex<Vec<(PathBuf, Vec<String>)>>,
}

impl ScriptedRunner {
    pub(crate) fn exiting(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            outcome: ProcessOutcome {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
            unspawnable: false,
            broken_pipe: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn succeeding(stdout: &str) -> Self {
        Self::exiting(0, stdout, "")
    }

    /// Behaves like a binary that does not exist
    pub(crate) fn unspawnable() -> Self {
        Self {
            unspawnable: true,
            ..Self::exiting(0, "", "")
        }
    }

    /// Starts, then fails while reading the engine's output
    pub(crate) fn broken_pipe() -> Self {
        Self {
            broken_pipe: true,
            ..Self::exiting(0, "", "")
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn calls(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for ScriptedRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Result<ProcessOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_path_buf(), args.to_vec()));

        if self.unspawnable {
            return Err(Error::EngineInvocation(format!(
                "{}: No such file or directory (os error 2)",
                program.display()
            )));
        }
        if self.broken_pipe {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stdout pipe closed unexpectedly",
            )));
        }
        Ok(self.outcome.clone())
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// In-memory artifact store with a log of removals.
pub(crate) struct MemoryStore {
    files: Mutex<HashSet<PathBuf>>,
    removed: Mutex<Vec<PathBuf>>,
    fail_removal: bool,
}

impl MemoryStore {
    pub(crate) fn empty() -> Self {
        Self::with_files(Vec::<PathBuf>::new())
    }

    pub(crate) fn with_files<P: Into<PathBuf>>(files: impl IntoIterator<Item = P>) -> Self {
        Self {
            files: Mutex::new(files.into_iter().map(Into::into).collect()),
            removed: Mutex::new(Vec::new()),
            fail_removal: false,
        }
    }

    /// Every removal attempt fails with a permission error
    pub(crate) fn failing_removal(mut self) -> Self {
        self.fail_removal = true;
        self
    }

    pub(crate) fn removed(&self) -> Vec<PathBuf> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtifactStore for MemoryStore {
    async fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains(path)
    }

    async fn remove(&self, path: &Path) -> std::io::Result<()> {
        self.removed.lock().unwrap().push(path.to_path_buf());
        if self.fail_removal {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            ));
        }
        self.files.lock().unwrap().remove(path);
        Ok(())
    }
}

/// Build a downloader over the given doubles, keeping handles for assertions.
pub(crate) fn create_test_downloader(
    runner: ScriptedRunner,
    store: MemoryStore,
) -> (MediaDownloader, Arc<ScriptedRunner>, Arc<MemoryStore>) {
    let runner = Arc::new(runner);
    let store = Arc::new(store);
    let config = Config {
        output_dir: Some(PathBuf::from("/srv/media")),
        ..Default::default()
    };
    let downloader =
        MediaDownloader::with_components(config, runner.clone(), store.clone()).unwrap();
    (downloader, runner, store)
}
