use std::collections::VecDeque;
use std::fs;

use suitegen::{
    AddOptions, AppError, Console, Reporter, ScriptCategory, Verbosity, add_script_at,
};
use tempfile::TempDir;

struct Answers(VecDeque<&'static str>);

impl Console for Answers {
    fn show(&mut self, _line: &str) {}

    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        self.0.pop_front().map(str::to_string).ok_or_else(|| {
            AppError::Io(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, prompt.to_string()))
        })
    }

    fn pause(&mut self) {}
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".tool-config"),
        r#"{"projectName":"acme-proj","companyName":"Acme","userName":"jdoe","userEmail":"jdoe@x.com"}"#,
    )
    .unwrap();
    fs::create_dir_all(temp.path().join("src/FileCabinet/SuiteScripts/lib")).unwrap();
    temp
}

#[test]
fn add_script_at_reports_identifiers_and_paths() {
    let temp = project();
    let root = temp.path();
    let mut console = Answers(VecDeque::from(["", "0"]));

    let outcome = add_script_at(
        root,
        AddOptions::new(ScriptCategory::Suitelet, Some("My Report".into())),
        &mut console,
        Reporter::new(Verbosity::Quiet),
    )
    .expect("add failed");

    assert_eq!(outcome.script_id, "my_report");
    assert_eq!(outcome.deployment_id, "customdeploy_my_report");
    assert_eq!(outcome.company_prefix, "acm");
    assert_eq!(outcome.script_path, "SuiteScripts/acm_My Report_suitelet.ts");
    assert_eq!(outcome.written_files().len(), 2);
    assert!(root.join("src/FileCabinet/SuiteScripts/acm_My Report_suitelet.ts").is_file());
    assert!(root.join("src/Objects/acme-proj/suitelet/acm_My Report.xml").is_file());
}

#[test]
fn add_script_at_surfaces_cancellation() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".tool-config"),
        r#"{"projectName":"p","companyName":"","userName":"u","userEmail":"e"}"#,
    )
    .unwrap();
    let mut console = Answers(VecDeque::from(["", "no"]));

    let err = add_script_at(
        temp.path(),
        AddOptions::new(ScriptCategory::Portlet, Some("Dash".into())),
        &mut console,
        Reporter::new(Verbosity::Quiet),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::UserCancelled));
    assert_eq!(err.exit_code(), 0);
    // SuiteScripts root is created on demand even when nothing is written into it.
    assert!(temp.path().join("SuiteScripts").is_dir());
}
