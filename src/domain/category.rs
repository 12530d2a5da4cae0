use std::fmt;

/// The fixed set of SuiteScript kinds that `add` can scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptCategory {
    Bundle,
    Client,
    FormClient,
    MapReduce,
    MassUpdate,
    Portlet,
    Restlet,
    Scheduled,
    Suitelet,
    UserEvent,
    WorkflowAction,
    Common,
}

impl ScriptCategory {
    /// All categories in CLI listing order.
    pub const ALL: [ScriptCategory; 12] = [
        ScriptCategory::Bundle,
        ScriptCategory::Client,
        ScriptCategory::FormClient,
        ScriptCategory::MapReduce,
        ScriptCategory::MassUpdate,
        ScriptCategory::Portlet,
        ScriptCategory::Restlet,
        ScriptCategory::Scheduled,
        ScriptCategory::Suitelet,
        ScriptCategory::UserEvent,
        ScriptCategory::WorkflowAction,
        ScriptCategory::Common,
    ];

    /// Name used on the command line, in file names and template file names.
    pub fn name(&self) -> &'static str {
        match self {
            ScriptCategory::Bundle => "bundle",
            ScriptCategory::Client => "client",
            ScriptCategory::FormClient => "formclient",
            ScriptCategory::MapReduce => "mapreduce",
            ScriptCategory::MassUpdate => "massupdate",
            ScriptCategory::Portlet => "portlet",
            ScriptCategory::Restlet => "restlet",
            ScriptCategory::Scheduled => "scheduled",
            ScriptCategory::Suitelet => "suitelet",
            ScriptCategory::UserEvent => "userevent",
            ScriptCategory::WorkflowAction => "workflowaction",
            ScriptCategory::Common => "common",
        }
    }

    /// One-line summary listed under `add --help`.
    pub fn description(&self) -> &'static str {
        match self {
            ScriptCategory::Bundle => {
                "Bundle scripts can be of type customization or configuration, allowing you to group related scripts together"
            }
            ScriptCategory::Client => {
                "Client scripts are executed by predefined event triggers in the client browser, enabling you to customize the user interface"
            }
            ScriptCategory::FormClient => {
                "Form Client scripts are attached to forms, allowing you to add custom logic and functionality to form submissions"
            }
            ScriptCategory::MapReduce => {
                "Map/Reduce scripts are designed to handle large amounts of data, making them ideal for data processing and analysis tasks"
            }
            ScriptCategory::MassUpdate => {
                "Mass update scripts allow you to programmatically perform custom updates to fields that are not available through general mass updates"
            }
            ScriptCategory::Portlet => {
                "Portlet scripts are run on the server and are rendered in the NetSuite dashboard"
            }
            ScriptCategory::Restlet => {
                "RESTlets are SuiteScripts made available for other applications to call, enabling integration with external systems"
            }
            ScriptCategory::Scheduled => {
                "Scheduled scripts are processed with SuiteCloud Processors, automating tasks at specific times or intervals"
            }
            ScriptCategory::Suitelet => {
                "Suitelets are extensions of the SuiteScript API that allow you to build custom NetSuite pages and backend logic"
            }
            ScriptCategory::UserEvent => {
                "User event scripts are executed when users perform actions on records, such as create, load, update, copy, delete, or submit"
            }
            ScriptCategory::WorkflowAction => {
                "Workflow action scripts are good for custom logic or managing sublist fields which are not available in workflows"
            }
            ScriptCategory::Common => {
                "Holds TypeScript definitions shared by your scripts"
            }
        }
    }

    /// SDF object type directory for the script record, if the category has one.
    pub fn record_type_tag(&self) -> Option<&'static str> {
        match self {
            ScriptCategory::Client => Some("clientscript"),
            ScriptCategory::MapReduce => Some("mapreducescript"),
            ScriptCategory::MassUpdate => Some("massupdatescript"),
            ScriptCategory::Portlet => Some("portlet"),
            ScriptCategory::Restlet => Some("restlet"),
            ScriptCategory::Scheduled => Some("scheduledscript"),
            ScriptCategory::Suitelet => Some("suitelet"),
            ScriptCategory::UserEvent => Some("usereventscript"),
            ScriptCategory::WorkflowAction => Some("workflowactionscript"),
            ScriptCategory::Bundle | ScriptCategory::FormClient | ScriptCategory::Common => None,
        }
    }

    /// Whether the deployment must name the record type it is attached to.
    pub fn requires_record_type(&self) -> bool {
        matches!(self, ScriptCategory::UserEvent | ScriptCategory::WorkflowAction)
    }
}

impl fmt::Display for ScriptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
