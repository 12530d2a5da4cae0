use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn quiet_flag_hides_status_lines() {
    let ctx = TestContext::with_project("acme-proj", "Acme");

    ctx.cli()
        .args(["-q", "add", "bundle", "Setup"])
        .write_stdin("\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not())
        .stdout(predicate::str::contains("script created").not());

    assert!(ctx.suitescripts_root().join("acm_Setup_bundle.ts").is_file());
}

#[test]
fn verbose_and_quiet_are_mutually_exclusive() {
    let ctx = TestContext::with_project("acme-proj", "Acme");

    ctx.cli().args(["-v", "-q", "add", "bundle", "Setup"]).assert().code(2);
}
