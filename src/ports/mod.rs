mod console;
mod preference_store;
mod project_tool;
mod template_catalog;

pub use console::Console;
pub use preference_store::PreferenceStore;
pub use project_tool::ProjectTool;
pub use template_catalog::{ProjectFileTemplate, ScriptTemplates, TemplateCatalog};
