use serde::{Deserialize, Serialize};

/// Identity and naming recorded in a project's preference file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPreferences {
    pub project_name: String,
    pub company_name: String,
    pub user_name: String,
    pub user_email: String,
}

/// Identity remembered in the home directory and offered as defaults by `create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub company_name: String,
    pub user_name: String,
    pub user_email: String,
}

impl From<&ProjectPreferences> for UserPreferences {
    fn from(project: &ProjectPreferences) -> Self {
        Self {
            company_name: project.company_name.clone(),
            user_name: project.user_name.clone(),
            user_email: project.user_email.clone(),
        }
    }
}
