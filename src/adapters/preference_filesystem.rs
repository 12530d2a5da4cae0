use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::project_layout::PREFERENCES_FILE;
use crate::domain::{AppError, ProjectPreferences, UserPreferences};
use crate::ports::PreferenceStore;

/// Preference store backed by pretty-printed JSON files.
#[derive(Debug, Clone)]
pub struct FilesystemPreferenceStore {
    project_dir: PathBuf,
    home_dir: Option<PathBuf>,
}

impl FilesystemPreferenceStore {
    /// Create a store for the given project and home directories.
    pub fn new(project_dir: PathBuf, home_dir: Option<PathBuf>) -> Self {
        Self { project_dir, home_dir }
    }

    /// Create a store for the current directory and the user's home directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd, dirs::home_dir()))
    }

    pub fn project_file(&self) -> PathBuf {
        self.project_dir.join(PREFERENCES_FILE)
    }

    pub fn user_file(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|home| home.join(PREFERENCES_FILE))
    }
}

impl PreferenceStore for FilesystemPreferenceStore {
    fn load_project(&self) -> Result<ProjectPreferences, AppError> {
        let path = self.project_file();
        if !path.exists() {
            return Err(AppError::ConfigNotFound(PREFERENCES_FILE.to_string()));
        }
        read_json(&path)
    }

    fn save_project(&self, prefs: &ProjectPreferences, dir: &Path) -> Result<(), AppError> {
        write_json(&dir.join(PREFERENCES_FILE), prefs)
    }

    fn load_user(&self) -> Result<Option<UserPreferences>, AppError> {
        let Some(path) = self.user_file() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        read_json(&path).map(Some)
    }

    fn save_user(&self, prefs: &UserPreferences) -> Result<(), AppError> {
        let path = self.user_file().ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, "home directory not found"))
        })?;
        write_json(&path, prefs)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    debug!(path = %path.display(), "reading preferences");
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::parse_error(path.display().to_string(), e))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    debug!(path = %path.display(), "writing preferences");
    let content = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::parse_error(path.display().to_string(), e))?;
    fs::write(path, content)?;
    Ok(())
}
