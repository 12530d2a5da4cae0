pub mod category;
pub mod error;
pub mod folder;
pub mod identifiers;
pub mod pager;
pub mod preferences;
pub mod project_layout;
pub mod template_data;

pub use category::ScriptCategory;
pub use error::AppError;
pub use folder::FolderEntry;
pub use pager::{FolderPager, MenuInput, MenuRejection, MenuStep, PAGE_SIZE, Selection};
pub use preferences::{ProjectPreferences, UserPreferences};
pub use template_data::{ProjectTemplateData, ScriptTemplateData};
