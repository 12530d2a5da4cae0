mod preference_store_stub;
mod template_catalog_stub;

pub use self::preference_store_stub::MockPreferenceStore;
pub use self::project_tool_stub::FakeProjectTool;
pub use self::scripted_console::ScriptedConsole;
pub use self::template_catalog_stub::MockTemplateCatalog;
