use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::AppError;

/// Changes the process working directory and restores it when dropped.
#[derive(Debug)]
pub struct WorkingDirGuard {
    original: PathBuf,
}

impl WorkingDirGuard {
    pub fn enter(dir: &Path) -> Result<Self, AppError> {
        let original = env::current_dir()?;
        env::set_current_dir(dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to change to directory {}: {e}", dir.display()),
            ))
        })?;
        debug!(from = %original.display(), to = %dir.display(), "changed working directory");
        Ok(Self { original })
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.original) {
            warn!(path = %self.original.display(), error = %err, "failed to restore working directory");
        }
    }
}
