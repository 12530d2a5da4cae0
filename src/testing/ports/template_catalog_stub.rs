use crate::domain::ScriptCategory;
use crate::ports::{ProjectFileTemplate, ScriptTemplates, TemplateCatalog};

/// Template catalog with fixed bodies for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockTemplateCatalog {
    templates: ScriptTemplates,
    project_files: Vec<ProjectFileTemplate>,
}

#[allow(dead_code)]
impl MockTemplateCatalog {
    pub fn new(primary: &str, secondary: &str) -> Self {
        Self {
            templates: ScriptTemplates {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
            },
            project_files: Vec::new(),
        }
    }

    pub fn with_project_file(mut self, file_name: &str, body: &str) -> Self {
        self.project_files
            .push(ProjectFileTemplate { file_name: file_name.to_string(), body: body.to_string() });
        self
    }
}

impl TemplateCatalog for MockTemplateCatalog {
    fn script_templates(&self, _category: ScriptCategory) -> ScriptTemplates {
        self.templates.clone()
    }

    fn project_files(&self) -> Vec<ProjectFileTemplate> {
        self.project_files.clone()
    }
}
