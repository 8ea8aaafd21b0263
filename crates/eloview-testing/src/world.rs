//! Isolated on-disk environment for runtime and CLI tests.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::MatchFixture;

/// Paths of one match's input files inside a `TestWorld`.
#[derive(Debug, Clone)]
pub struct MatchFiles {
    pub elo_path: PathBuf,
    pub match_details_path: PathBuf,
}

/// Temporary directory that is removed when dropped.
pub struct TestWorld {
    temp_dir: TempDir,
}

impl TestWorld {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a fixture's log and match detail under `inputs/`.
    pub fn write_match(&self, fixture: &MatchFixture) -> Result<MatchFiles> {
        let dir = self.root().join("inputs");
        std::fs::create_dir_all(&dir)?;

        let stem = format!("{}-{}", fixture.match_id, fixture.platform_id);
        let files = MatchFiles {
            elo_path: dir.join(format!("{}.elo", stem)),
            match_details_path: dir.join(format!("{}.json", stem)),
        };
        std::fs::write(&files.elo_path, fixture.log_text())?;
        std::fs::write(&files.match_details_path, fixture.match_detail_json())?;
        Ok(files)
    }

    /// Relative path of `path` under the world root, as a string.
    pub fn relative(&self, path: &Path) -> String {
        path.strip_prefix(self.root())
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}
