use std::path::Path;

use crate::domain::{AppError, ProjectPreferences, UserPreferences};

/// Port for reading and writing the project and user preference records.
///
/// Saves replace the whole record; there is no field-level merge.
pub trait PreferenceStore {
    /// Load the project record from the project directory.
    ///
    /// Fails with `ConfigNotFound` when the directory is not a project.
    fn load_project(&self) -> Result<ProjectPreferences, AppError>;

    /// Overwrite the project record in `dir`.
    fn save_project(&self, prefs: &ProjectPreferences, dir: &Path) -> Result<(), AppError>;

    /// Load the user record from the home directory. Absence is `None`.
    fn load_user(&self) -> Result<Option<UserPreferences>, AppError>;

    /// Overwrite the user record in the home directory.
    fn save_user(&self, prefs: &UserPreferences) -> Result<(), AppError>;
}
