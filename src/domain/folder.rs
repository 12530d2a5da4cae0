use std::path::PathBuf;

/// A selectable destination folder below the SuiteScripts root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    /// Slash-separated path relative to the root, independent of the OS separator.
    pub relative_path: String,
    /// Menu label: indented by depth, annotated with the relative path when nested.
    pub display_label: String,
    pub absolute_path: PathBuf,
}

impl FolderEntry {
    /// Build an entry from the path components below the root.
    pub fn new(components: &[&str], absolute_path: PathBuf) -> Self {
        let relative_path = components.join("/");
        let depth = components.len().saturating_sub(1);
        let name = components.last().copied().unwrap_or_default();

        let mut display_label = format!("{}{}", "  ".repeat(depth), name);
        if depth > 0 {
            display_label.push_str(&format!(" ({relative_path})"));
        }

        Self { relative_path, display_label, absolute_path }
    }
}
