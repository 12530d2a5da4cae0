use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ProjectPreferences, UserPreferences};
use crate::ports::PreferenceStore;

/// In-memory preference store for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockPreferenceStore {
    pub project: RefCell<Option<ProjectPreferences>>,
    pub user: RefCell<Option<UserPreferences>>,
    pub saved_project_dirs: RefCell<Vec<PathBuf>>,
    pub fail_user_load: bool,
}

#[allow(dead_code)]
impl MockPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(self, prefs: ProjectPreferences) -> Self {
        *self.project.borrow_mut() = Some(prefs);
        self
    }

    pub fn with_user(self, prefs: UserPreferences) -> Self {
        *self.user.borrow_mut() = Some(prefs);
        self
    }

    pub fn with_failing_user_load(mut self) -> Self {
        self.fail_user_load = true;
        self
    }

    pub fn saved_project(&self) -> Option<ProjectPreferences> {
        self.project.borrow().clone()
    }

    pub fn saved_user(&self) -> Option<UserPreferences> {
        self.user.borrow().clone()
    }
}

impl PreferenceStore for MockPreferenceStore {
    fn load_project(&self) -> Result<ProjectPreferences, AppError> {
        self.project.borrow().clone().ok_or_else(|| AppError::ConfigNotFound(".tool-config".into()))
    }

    fn save_project(&self, prefs: &ProjectPreferences, dir: &Path) -> Result<(), AppError> {
        *self.project.borrow_mut() = Some(prefs.clone());
        self.saved_project_dirs.borrow_mut().push(dir.to_path_buf());
        Ok(())
    }

    fn load_user(&self) -> Result<Option<UserPreferences>, AppError> {
        if self.fail_user_load {
            return Err(AppError::parse_error("user preferences", "mock parse failure"));
        }
        Ok(self.user.borrow().clone())
    }

    fn save_user(&self, prefs: &UserPreferences) -> Result<(), AppError> {
        *self.user.borrow_mut() = Some(prefs.clone());
        Ok(())
    }
}
