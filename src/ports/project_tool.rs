use std::path::Path;

use crate::domain::AppError;

/// Port for the external SuiteCloud project tool.
pub trait ProjectTool {
    /// Executable name, for diagnostics.
    fn name(&self) -> &str;

    /// Create a project named `project_name` inside the current working directory.
    fn create_project(&self, project_name: &str, project_type: &str) -> Result<(), AppError>;

    /// Run the interactive account setup inside `project_dir`.
    fn setup_account(&self, project_dir: &Path) -> Result<(), AppError>;
}
