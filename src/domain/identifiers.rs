//! Names and identifiers derived from user-supplied script and company names.

/// Prefix used when the company name is blank.
pub const FALLBACK_COMPANY_PREFIX: &str = "com";

/// Number of characters taken from the company name for file prefixes.
pub const COMPANY_PREFIX_LEN: usize = 3;

const DEPLOYMENT_ID_PREFIX: &str = "customdeploy_";
const SCRIPT_RECORD_ID_PREFIX: &str = "customscript_";

/// `My Report` -> `my_report`.
pub fn script_id(script_name: &str) -> String {
    script_name.to_lowercase().replace(' ', "_")
}

pub fn deployment_id(script_id: &str) -> String {
    format!("{DEPLOYMENT_ID_PREFIX}{script_id}")
}

/// Record id of the script object, as referenced from SDF XML.
pub fn script_record_id(script_id: &str) -> String {
    format!("{SCRIPT_RECORD_ID_PREFIX}{script_id}")
}

/// First three characters of the lowercased company name.
pub fn company_prefix(company_name: &str) -> String {
    let trimmed = company_name.trim();
    if trimmed.is_empty() {
        return FALLBACK_COMPANY_PREFIX.to_string();
    }
    trimmed.to_lowercase().chars().take(COMPANY_PREFIX_LEN).collect()
}

/// `acm` + `My Report` -> `acm_My Report`; used for the definition file name.
pub fn prefixed_file_name(prefix: &str, script_name: &str) -> String {
    format!("{prefix}_{script_name}")
}

/// Convert a free-form name to snake_case, splitting camelCase boundaries.
pub fn to_snake_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_lower = false;

    for ch in value.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else if ch.is_lowercase() || ch.is_numeric() {
            out.push(ch);
            prev_lower = true;
        } else {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        }
    }

    let mut collapsed = String::with_capacity(out.len());
    for ch in out.chars() {
        if ch == '_' && collapsed.ends_with('_') {
            continue;
        }
        collapsed.push(ch);
    }

    collapsed.trim_matches('_').to_lowercase()
}
