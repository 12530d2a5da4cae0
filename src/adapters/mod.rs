pub mod embedded_template_catalog;
pub mod preference_filesystem;
pub mod suitecloud_command;
pub mod terminal_console;

pub use embedded_template_catalog::EmbeddedTemplateCatalog;
pub use preference_filesystem::FilesystemPreferenceStore;
pub use suitecloud_command::SuiteCloudCommand;
pub use terminal_console::TerminalConsole;
