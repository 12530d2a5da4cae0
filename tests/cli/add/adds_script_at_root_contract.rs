use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_writes_source_and_definition_at_root() {
    let ctx = TestContext::with_project("acme-proj", "Acme");
    ctx.create_folder("lib");

    ctx.cli()
        .args(["add", "suitelet", "My Report"])
        .write_stdin("\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available folders under SuiteScripts:"))
        .stdout(predicate::str::contains("  1. lib"))
        .stdout(predicate::str::contains("suitelet script created"));

    let source = ctx.read_file(ctx.suitescripts_root().join("acm_My Report_suitelet.ts"));
    assert!(source.contains("My Report description"));
    assert!(source.contains("Path: SuiteScripts/acm_My Report_suitelet.ts"));

    let xml = ctx.read_file(ctx.objects_root().join("acme-proj/suitelet/acm_My Report.xml"));
    assert!(xml.contains(r#"scriptid="customscript_my_report""#));
    assert!(xml.contains(r#"scriptid="customdeploy_my_report""#));
}

#[test]
fn add_keeps_dots_inside_script_name_in_definition_path() {
    let ctx = TestContext::with_project("acme-proj", "Acme");
    ctx.create_folder("lib");

    ctx.cli().args(["add", "suitelet", "Export.tsv Feed"]).write_stdin("\n0\n").assert().success();

    assert!(ctx.suitescripts_root().join("acm_Export.tsv Feed_suitelet.ts").is_file());
    let xml = ctx.read_file(ctx.objects_root().join("acme-proj/suitelet/acm_Export.tsv Feed.xml"));
    assert!(xml.contains("<scriptfile>[/SuiteScripts/acm_Export.tsv Feed_suitelet.js]</scriptfile>"));
}
