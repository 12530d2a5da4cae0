use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::FolderEntry;

/// List every directory below `root` in pre-order, parents before children.
///
/// Siblings are ordered by name. Unreadable directories contribute no
/// children. Symbolic links are not followed.
pub fn enumerate(root: &Path) -> Vec<FolderEntry> {
    let mut entries = Vec::new();
    let mut components = Vec::new();
    walk(root, &mut components, &mut entries);
    entries
}

fn walk(dir: &Path, components: &mut Vec<String>, out: &mut Vec<FolderEntry>) {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            debug!(path = %dir.display(), error = %err, "skipping unreadable directory");
            return;
        }
    };

    let mut children: Vec<(String, std::path::PathBuf)> = read_dir
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|kind| kind.is_dir()).unwrap_or(false))
        .map(|entry| (entry.file_name().to_string_lossy().into_owned(), entry.path()))
        .collect();
    children.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, path) in children {
        components.push(name);
        let parts: Vec<&str> = components.iter().map(String::as_str).collect();
        out.push(FolderEntry::new(&parts, path.clone()));
        walk(&path, components, out);
        components.pop();
    }
}
