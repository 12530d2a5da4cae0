//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{
    EmbeddedTemplateCatalog, FilesystemPreferenceStore, SuiteCloudCommand, TerminalConsole,
};
use crate::app::commands::{add, create};
use crate::app::{AppContext, Reporter};
use crate::ports::{Console, ProjectTool};

pub use crate::app::commands::add::{AddOptions, AddOutcome};
pub use crate::app::commands::create::{AccountSetup, CreateOptions, CreateOutcome};
pub use crate::domain::{AppError, ScriptCategory};

/// Create an `AppContext` for a project directory and home directory.
fn create_context(
    project_dir: PathBuf,
    home_dir: Option<PathBuf>,
    reporter: Reporter,
) -> AppContext<FilesystemPreferenceStore, EmbeddedTemplateCatalog> {
    let preferences = FilesystemPreferenceStore::new(project_dir, home_dir);
    AppContext::new(preferences, EmbeddedTemplateCatalog::new(), reporter)
}

// =============================================================================
// Add Command API
// =============================================================================

/// Generate a script in the project in the current directory, prompting on the terminal.
pub fn add_script(options: AddOptions, reporter: Reporter) -> Result<AddOutcome, AppError> {
    let root = std::env::current_dir()?;
    add_script_at(&root, options, &mut TerminalConsole::new(), reporter)
}

/// Generate a script in the project at `root`.
pub fn add_script_at(
    root: &Path,
    options: AddOptions,
    console: &mut dyn Console,
    reporter: Reporter,
) -> Result<AddOutcome, AppError> {
    let ctx = create_context(root.to_path_buf(), dirs::home_dir(), reporter);
    add::execute(&ctx, root, console, options)
}

// =============================================================================
// Create Command API
// =============================================================================

/// Create a project under the current directory using the `suitecloud` CLI on `PATH`.
pub fn create_project(
    options: CreateOptions,
    reporter: Reporter,
) -> Result<CreateOutcome, AppError> {
    let tool = SuiteCloudCommand::locate()?;
    let cwd = std::env::current_dir()?;
    create_project_at(&cwd, dirs::home_dir(), options, &mut TerminalConsole::new(), &tool, reporter)
}

/// Create a project under `cwd`, remembering user preferences in `home`.
pub fn create_project_at(
    cwd: &Path,
    home: Option<PathBuf>,
    options: CreateOptions,
    console: &mut dyn Console,
    tool: &dyn ProjectTool,
    reporter: Reporter,
) -> Result<CreateOutcome, AppError> {
    let ctx = create_context(cwd.to_path_buf(), home, reporter);
    create::execute(&ctx, cwd, console, tool, options)
}
