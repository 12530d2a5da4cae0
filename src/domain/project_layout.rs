//! Filesystem conventions of a SuiteCloud account-customization project.

/// Preference file name, used both in the project root and in `$HOME`.
pub const PREFERENCES_FILE: &str = ".tool-config";

/// Project type passed to `suitecloud project:create`.
pub const PROJECT_TYPE: &str = "ACCOUNTCUSTOMIZATION";

/// File cabinet prefix recorded in the rendered script path.
pub const SCRIPT_PATH_PREFIX: &str = "SuiteScripts/";

/// Display name of the selector's root option.
pub const SUITESCRIPTS_LABEL: &str = "SuiteScripts";

/// Candidate SuiteScripts roots, checked in order.
pub const SUITESCRIPTS_CANDIDATES: [&str; 3] =
    ["src/FileCabinet/SuiteScripts", "src/SuiteScripts", "SuiteScripts"];

/// Candidate Objects roots, checked in order.
pub const OBJECTS_CANDIDATES: [&str; 2] = ["src/Objects", "Objects"];

/// Characters rejected in project names.
pub const INVALID_PROJECT_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Relative SuiteScripts root to create when none of the candidates exist.
pub fn default_suitescripts_root(has_file_cabinet: bool, has_src: bool) -> &'static str {
    if has_file_cabinet {
        SUITESCRIPTS_CANDIDATES[0]
    } else if has_src {
        SUITESCRIPTS_CANDIDATES[1]
    } else {
        SUITESCRIPTS_CANDIDATES[2]
    }
}

/// Relative Objects root to create when none of the candidates exist.
pub fn default_objects_root(has_src: bool) -> &'static str {
    if has_src { OBJECTS_CANDIDATES[0] } else { OBJECTS_CANDIDATES[1] }
}

/// Path recorded inside generated files: `SuiteScripts/[folder/]file`.
pub fn script_path(selected_folder: Option<&str>, file_name: &str) -> String {
    match selected_folder {
        Some(folder) if !folder.is_empty() => {
            format!("{SCRIPT_PATH_PREFIX}{folder}/{file_name}")
        }
        _ => format!("{SCRIPT_PATH_PREFIX}{file_name}"),
    }
}

/// Path of the compiled script: only the trailing `.ts` becomes `.js`.
pub fn compiled_script_path(script_path: &str) -> String {
    match script_path.strip_suffix(".ts") {
        Some(stem) => format!("{stem}.js"),
        None => script_path.to_string(),
    }
}

pub fn has_invalid_project_name_chars(name: &str) -> bool {
    name.contains(INVALID_PROJECT_NAME_CHARS)
}
