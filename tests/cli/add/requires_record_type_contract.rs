use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn user_event_without_record_type_fails() {
    let ctx = TestContext::with_project("acme-proj", "Acme");

    ctx.cli()
        .args(["add", "userevent", "Audit"])
        .write_stdin("\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record type is required for userevent scripts"));

    assert_eq!(fs::read_dir(ctx.suitescripts_root()).unwrap().count(), 0);
}

#[test]
fn user_event_record_type_is_written_to_definition() {
    let ctx = TestContext::with_project("acme-proj", "Acme");

    ctx.cli()
        .args(["add", "userevent", "Audit"])
        .write_stdin("\nSALESORDER\ny\n")
        .assert()
        .success();

    let xml = ctx.read_file(ctx.objects_root().join("acme-proj/usereventscript/acm_Audit.xml"));
    assert!(xml.contains("<recordtype>SALESORDER</recordtype>"));
}
