//! `create`: bootstrap a SuiteCloud account-customization project.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::AppContext;
use crate::app::commands::prompts::{ask, ask_required};
use crate::domain::project_layout::{PROJECT_TYPE, has_invalid_project_name_chars};
use crate::domain::{AppError, ProjectPreferences, ProjectTemplateData, UserPreferences};
use crate::ports::{Console, PreferenceStore, ProjectTool, TemplateCatalog};
use crate::services::{WorkingDirGuard, template_renderer};

/// Inputs for `create`.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Project name; prompted for when absent.
    pub name: Option<String>,
    pub skip_setup: bool,
    /// Parent directory of the new project, relative to the working directory.
    pub output: PathBuf,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self { name: None, skip_setup: false, output: PathBuf::from(".") }
    }
}

/// What happened to the account setup step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountSetup {
    Completed,
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub project_dir: PathBuf,
    pub preferences: ProjectPreferences,
    pub account_setup: AccountSetup,
}

pub fn execute<P, T, C, X>(
    ctx: &AppContext<P, T>,
    cwd: &Path,
    console: &mut C,
    tool: &X,
    options: CreateOptions,
) -> Result<CreateOutcome, AppError>
where
    P: PreferenceStore,
    T: TemplateCatalog,
    C: Console + ?Sized,
    X: ProjectTool + ?Sized,
{
    let reporter = ctx.reporter();

    let saved = match ctx.preferences().load_user() {
        Ok(prefs) => prefs.unwrap_or_default(),
        Err(err) => {
            reporter.warn(format!("Failed to load user configuration: {err}"));
            UserPreferences::default()
        }
    };

    let project_name = match options.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => ask(console, "Enter project name", None)?,
    };
    if project_name.is_empty() {
        return Err(AppError::validation(
            "Project name cannot be empty. Use --name to specify it, or provide it interactively.",
        ));
    }

    let company_name =
        ask_required(console, "Enter company name", Some(&saved.company_name), "Company name")?;

    let default_user = if saved.user_name.trim().is_empty() {
        os_user_name().unwrap_or_default()
    } else {
        saved.user_name.clone()
    };
    let user_name = ask_required(console, "Enter user name", Some(&default_user), "User name")?;
    let user_email =
        ask_required(console, "Enter user email", Some(&saved.user_email), "User email")?;

    if has_invalid_project_name_chars(&project_name) {
        return Err(AppError::validation("Project name contains invalid characters."));
    }

    let output_dir = cwd.join(&options.output);
    let project_dir = output_dir.join(&project_name);
    if project_dir.exists() {
        return Err(AppError::validation(format!(
            "Project directory '{}' already exists.",
            project_dir.display()
        )));
    }

    reporter.info(format!("Creating project '{project_name}' (type: {PROJECT_TYPE})..."));
    {
        let _guard = WorkingDirGuard::enter(&output_dir)?;
        tool.create_project(&project_name, PROJECT_TYPE)?;
    }
    if !project_dir.is_dir() {
        return Err(AppError::ExternalTool {
            command: format!("{} project:create", tool.name()),
            details: format!("project directory '{}' was not created", project_dir.display()),
        });
    }

    for folder in [
        project_dir.join("src/FileCabinet/SuiteScripts").join(&project_name),
        project_dir.join("src/Objects").join(&project_name),
    ] {
        match fs::create_dir_all(&folder) {
            Ok(()) => reporter.info(format!("Created project folder: {}", folder.display())),
            Err(err) => reporter.warn(format!(
                "Failed to create project folder {}: {err}",
                folder.display()
            )),
        }
    }

    reporter.info("Generating configuration files...");
    let data = ProjectTemplateData { project_name: project_name.clone() };
    for file in ctx.templates().project_files() {
        let content = template_renderer::render(&file.file_name, &file.body, &data)?;
        let path = project_dir.join(&file.file_name);
        fs::write(&path, content)?;
        debug!(path = %path.display(), "wrote project file");
    }

    let account_setup = if options.skip_setup {
        reporter.info("Skipping account setup (--skip-setup flag used).");
        AccountSetup::Skipped
    } else {
        reporter.info("Setting up account...");
        match tool.setup_account(&project_dir) {
            Ok(()) => {
                reporter.info("Account setup completed successfully.");
                AccountSetup::Completed
            }
            Err(err) => {
                reporter.warn(format!("Account setup encountered an error: {err}"));
                reporter.warn(format!(
                    "You can run '{} account:setup' manually in the project directory.",
                    tool.name()
                ));
                AccountSetup::Failed(err.to_string())
            }
        }
    };

    let preferences = ProjectPreferences { project_name, company_name, user_name, user_email };
    match ctx.preferences().save_project(&preferences, &project_dir) {
        Ok(()) => reporter.detail("Project configuration saved"),
        Err(err) => reporter.warn(format!("Failed to save configuration: {err}")),
    }
    match ctx.preferences().save_user(&UserPreferences::from(&preferences)) {
        Ok(()) => reporter.detail("User configuration saved"),
        Err(err) => reporter.warn(format!("Failed to save user configuration: {err}")),
    }

    reporter.success("Initialization complete!");
    reporter.info(format!("Project created at: {}", project_dir.display()));
    reporter.info(format!("To get started, run: cd {}", project_dir.display()));

    Ok(CreateOutcome { project_dir, preferences, account_setup })
}

/// Login name of the current OS user, without any `DOMAIN\` prefix.
fn os_user_name() -> Option<String> {
    strip_domain(env::var("USER").ok().or_else(|| env::var("USERNAME").ok()))
}

fn strip_domain(name: Option<String>) -> Option<String> {
    let name = name?;
    let name = name.rsplit('\\').next().unwrap_or_default().trim();
    if name.is_empty() { None } else { Some(name.to_string()) }
}
