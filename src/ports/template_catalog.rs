use crate::domain::ScriptCategory;

/// Template pair for one script category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptTemplates {
    /// SuiteScript source template (`.ts`).
    pub primary: String,
    /// SDF object definition template (`.xml`); empty when the category has none.
    pub secondary: String,
}

/// A configuration file written into a freshly created project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFileTemplate {
    /// File name relative to the project directory.
    pub file_name: String,
    pub body: String,
}

/// Port for looking up template bodies.
pub trait TemplateCatalog {
    fn script_templates(&self, category: ScriptCategory) -> ScriptTemplates;

    /// Configuration files generated by `create`, in write order.
    fn project_files(&self) -> Vec<ProjectFileTemplate>;
}
