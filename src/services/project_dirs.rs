use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::domain::project_layout::{
    OBJECTS_CANDIDATES, SUITESCRIPTS_CANDIDATES, default_objects_root, default_suitescripts_root,
};

/// Find the SuiteScripts root under `project_root`, creating the conventional one if absent.
pub fn suitescripts_root(project_root: &Path) -> Result<PathBuf, AppError> {
    if let Some(existing) = first_existing_dir(project_root, &SUITESCRIPTS_CANDIDATES) {
        return Ok(existing);
    }

    let relative = default_suitescripts_root(
        project_root.join("src/FileCabinet").exists(),
        project_root.join("src").exists(),
    );
    create_root(project_root, relative, "SuiteScripts")
}

/// Find the Objects root under `project_root`, creating the conventional one if absent.
pub fn objects_root(project_root: &Path) -> Result<PathBuf, AppError> {
    if let Some(existing) = first_existing_dir(project_root, &OBJECTS_CANDIDATES) {
        return Ok(existing);
    }

    let relative = default_objects_root(project_root.join("src").exists());
    create_root(project_root, relative, "Objects")
}

fn first_existing_dir(project_root: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates.iter().map(|candidate| project_root.join(candidate)).find(|path| path.is_dir())
}

fn create_root(project_root: &Path, relative: &str, label: &str) -> Result<PathBuf, AppError> {
    let path = project_root.join(relative);
    debug!(path = %path.display(), "creating {label} directory");
    fs::create_dir_all(&path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to create {label} directory {}: {e}", path.display()),
        ))
    })?;
    Ok(path)
}
