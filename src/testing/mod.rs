pub mod ports;

#[allow(unused_imports)]
pub use ports::FakeProjectTool;
#[allow(unused_imports)]
pub use ports::MockPreferenceStore;
#[allow(unused_imports)]
pub use ports::MockTemplateCatalog;
#[allow(unused_imports)]
pub use ports::ScriptedConsole;
