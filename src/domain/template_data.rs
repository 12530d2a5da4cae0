use serde::Serialize;

/// Fields available to script templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptTemplateData {
    pub project: String,
    pub project_name: String,
    pub description: String,
    /// Generation date, `YYYY-MM-DD`.
    pub date: String,
    pub company_name: String,
    pub user_name: String,
    pub user_email: String,
    pub script_name: String,
    /// Script record id, `customscript_<id>`.
    pub script_id: String,
    /// File cabinet path of the generated source file.
    pub script_path: String,
    /// `script_path` with the `.ts` extension replaced by `.js`.
    pub js_path: String,
    pub deployment_id: String,
    /// Record the deployment applies to; empty unless the category needs one.
    pub record_type: String,
}

/// Fields available to project configuration templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTemplateData {
    pub project_name: String,
}
