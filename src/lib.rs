//! suitegen: scaffold SuiteCloud account-customization projects and SuiteScript files.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AccountSetup, AddOptions, AddOutcome, CreateOptions, CreateOutcome, add_script,
    add_script_at, create_project, create_project_at,
};
pub use app::{Reporter, Verbosity};
pub use domain::{AppError, FolderEntry, ProjectPreferences, ScriptCategory, UserPreferences};
pub use ports::{Console, ProjectTool};
