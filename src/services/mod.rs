pub mod folder_catalog;
pub mod project_dirs;
pub mod template_renderer;
pub mod working_dir;

pub use working_dir::WorkingDirGuard;
