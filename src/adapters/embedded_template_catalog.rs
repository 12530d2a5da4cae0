use include_dir::{Dir, include_dir};
use tracing::warn;

use crate::domain::ScriptCategory;
use crate::ports::{ProjectFileTemplate, ScriptTemplates, TemplateCatalog};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Project configuration files: (target file name, template path).
const PROJECT_FILES: [(&str, &str); 4] = [
    ("package.json", "project/package.json.j2"),
    ("suitecloud.config.js", "project/suitecloud.config.js.j2"),
    ("tsconfig.json", "project/tsconfig.json.j2"),
    (".gitignore", "project/gitignore.j2"),
];

/// Template catalog compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateCatalog;

impl EmbeddedTemplateCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCatalog for EmbeddedTemplateCatalog {
    fn script_templates(&self, category: ScriptCategory) -> ScriptTemplates {
        let primary = read_template(&format!("scripts/{}.ts.j2", category.name()));
        if primary.is_none() {
            warn!(category = category.name(), "no source template embedded");
        }
        let secondary = read_template(&format!("scripts/{}.xml.j2", category.name()));

        ScriptTemplates {
            primary: primary.unwrap_or_default(),
            secondary: secondary.unwrap_or_default(),
        }
    }

    fn project_files(&self) -> Vec<ProjectFileTemplate> {
        PROJECT_FILES
            .iter()
            .map(|(file_name, template)| ProjectFileTemplate {
                file_name: (*file_name).to_string(),
                body: read_template(template).unwrap_or_default(),
            })
            .collect()
    }
}

fn read_template(path: &str) -> Option<String> {
    TEMPLATES_DIR.get_file(path).and_then(|file| file.contents_utf8()).map(str::to_string)
}
