//! `add`: generate a SuiteScript source file and its SDF definition.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::AppContext;
use crate::app::commands::folder_select::select_folder;
use crate::app::commands::prompts::ask;
use crate::domain::identifiers::{
    company_prefix, deployment_id, prefixed_file_name, script_id, script_record_id, to_snake_case,
};
use crate::domain::project_layout::{
    compiled_script_path, has_invalid_project_name_chars, script_path,
};
use crate::domain::{AppError, ScriptCategory, ScriptTemplateData, Selection};
use crate::ports::{Console, PreferenceStore, TemplateCatalog};
use crate::services::{folder_catalog, project_dirs, template_renderer};

/// Inputs for `add`.
#[derive(Debug, Clone)]
pub struct AddOptions {
    pub category: ScriptCategory,
    /// Script name from the command line; prompted for when absent.
    pub name: Option<String>,
    /// Date stamped into generated files, `YYYY-MM-DD`. Defaults to today.
    pub date: Option<String>,
}

impl AddOptions {
    pub fn new(category: ScriptCategory, name: Option<String>) -> Self {
        Self { category, name, date: None }
    }
}

/// Files and identifiers produced by `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub script_name: String,
    /// `my_report` for `My Report`.
    pub script_id: String,
    pub deployment_id: String,
    pub company_prefix: String,
    /// Path recorded in the rendered files, e.g. `SuiteScripts/acm_x_suitelet.ts`.
    pub script_path: String,
    pub primary_path: PathBuf,
    pub secondary_path: Option<PathBuf>,
}

impl AddOutcome {
    pub fn written_files(&self) -> Vec<&Path> {
        std::iter::once(self.primary_path.as_path())
            .chain(self.secondary_path.as_deref())
            .collect()
    }
}

pub fn execute<P, T, C>(
    ctx: &AppContext<P, T>,
    project_root: &Path,
    console: &mut C,
    options: AddOptions,
) -> Result<AddOutcome, AppError>
where
    P: PreferenceStore,
    T: TemplateCatalog,
    C: Console + ?Sized,
{
    let category = options.category;
    let prefs = ctx.preferences().load_project()?;

    let script_name = match options.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => {
            let default = to_snake_case(&prefs.project_name);
            ask(console, "Enter script name", Some(&default))?
        }
    };
    if script_name.is_empty() {
        return Err(AppError::validation("Script name is required"));
    }
    if has_invalid_project_name_chars(&script_name) {
        return Err(AppError::validation(format!(
            "Script name '{script_name}' contains invalid characters"
        )));
    }

    let default_description = format!("{script_name} description");
    let description = ask(console, "Enter script description", Some(&default_description))?;

    let record_type = if category.requires_record_type() {
        let value = ask(console, "Enter record type (e.g., CUSTOMER, SALESORDER, INVOICE)", None)?;
        if value.is_empty() {
            return Err(AppError::validation(format!(
                "Record type is required for {category} scripts"
            )));
        }
        value
    } else {
        String::new()
    };

    let id = script_id(&script_name);
    let deployment = deployment_id(&id);
    let prefix = company_prefix(&prefs.company_name);
    let file_base = prefixed_file_name(&prefix, &script_name);
    let source_file = format!("{file_base}_{category}.ts");
    debug!(script_id = %id, prefix = %prefix, "derived identifiers");

    let templates = ctx.templates().script_templates(category);

    let suitescripts = project_dirs::suitescripts_root(project_root)?;
    let folders = folder_catalog::enumerate(&suitescripts);
    let selected = match select_folder(console, &folders)? {
        Selection::Root => None,
        Selection::Entry(index) => Some(&folders[index]),
    };

    let target_dir = selected.map(|entry| entry.absolute_path.clone()).unwrap_or(suitescripts);
    fs::create_dir_all(&target_dir)?;

    let script_path = script_path(selected.map(|entry| entry.relative_path.as_str()), &source_file);
    let data = ScriptTemplateData {
        project: prefs.project_name.clone(),
        project_name: prefs.project_name.clone(),
        description,
        date: options.date.unwrap_or_else(today),
        company_name: prefs.company_name.clone(),
        user_name: prefs.user_name.clone(),
        user_email: prefs.user_email.clone(),
        script_name: script_name.clone(),
        script_id: script_record_id(&id),
        script_path: script_path.clone(),
        js_path: compiled_script_path(&script_path),
        deployment_id: deployment.clone(),
        record_type,
    };

    let primary_path = target_dir.join(&source_file);
    render_to_file(&primary_path, &format!("{category}.ts"), &templates.primary, &data)?;
    ctx.reporter().info(format!("Created {}", primary_path.display()));

    let secondary_path = if templates.secondary.is_empty() || category == ScriptCategory::Common {
        None
    } else {
        match category.record_type_tag() {
            Some(tag) => {
                let objects = project_dirs::objects_root(project_root)?;
                let xml_dir = objects.join(&prefs.project_name).join(tag);
                fs::create_dir_all(&xml_dir)?;

                let xml_path = xml_dir.join(format!("{file_base}.xml"));
                render_to_file(&xml_path, &format!("{category}.xml"), &templates.secondary, &data)?;
                ctx.reporter().info(format!("Created {}", xml_path.display()));
                Some(xml_path)
            }
            None => {
                ctx.reporter().warn(format!(
                    "No record type found for script type '{category}'. XML file not created."
                ));
                None
            }
        }
    };

    Ok(AddOutcome {
        script_name,
        script_id: id,
        deployment_id: deployment,
        company_prefix: prefix,
        script_path,
        primary_path,
        secondary_path,
    })
}

fn render_to_file(
    path: &Path,
    name: &str,
    body: &str,
    data: &ScriptTemplateData,
) -> Result<(), AppError> {
    let content = template_renderer::render(name, body, data)?;
    fs::write(path, content).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to write {}: {e}", path.display()),
        ))
    })
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
