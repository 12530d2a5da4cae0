use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn declining_root_placement_exits_cleanly_without_files() {
    let ctx = TestContext::with_project("acme-proj", "Acme");

    ctx.cli()
        .args(["add", "restlet", "Sync"])
        .write_stdin("\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No folders found under SuiteScripts"))
        .stdout(predicate::str::contains("Cancelled. Script not created."));

    assert_eq!(fs::read_dir(ctx.suitescripts_root()).unwrap().count(), 0);
    assert!(!ctx.objects_root().exists());
}
