use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ProjectTool;

/// Executable names tried in order when locating the SuiteCloud CLI.
const EXECUTABLE_CANDIDATES: [&str; 2] = ["suitecloud", "suitecloud.cmd"];

/// `suitecloud` subprocess adapter. Child processes inherit stdio.
#[derive(Debug, Clone)]
pub struct SuiteCloudCommand {
    program: PathBuf,
}

impl SuiteCloudCommand {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Locate the SuiteCloud CLI on `PATH`.
    pub fn locate() -> Result<Self, AppError> {
        EXECUTABLE_CANDIDATES
            .iter()
            .find_map(|name| which::which(name).ok())
            .map(Self::new)
            .ok_or_else(|| AppError::ToolNotInstalled(EXECUTABLE_CANDIDATES[0].to_string()))
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<(), AppError> {
        let command_line = format!("{} {}", self.name(), args.join(" "));
        debug!(command = %command_line, "running");

        let mut command = Command::new(&self.program);
        command.args(args).stdin(Stdio::inherit()).stdout(Stdio::inherit()).stderr(Stdio::inherit());
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|e| AppError::ExternalTool {
            command: command_line.clone(),
            details: e.to_string(),
        })?;

        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_string(),
            };
            return Err(AppError::ExternalTool { command: command_line, details });
        }
        Ok(())
    }
}

impl ProjectTool for SuiteCloudCommand {
    fn name(&self) -> &str {
        self.program.file_name().and_then(|name| name.to_str()).unwrap_or(EXECUTABLE_CANDIDATES[0])
    }

    fn create_project(&self, project_name: &str, project_type: &str) -> Result<(), AppError> {
        self.run(&["project:create", "--type", project_type, "--projectname", project_name], None)
    }

    fn setup_account(&self, project_dir: &Path) -> Result<(), AppError> {
        self.run(&["account:setup"], Some(project_dir))
    }
}
