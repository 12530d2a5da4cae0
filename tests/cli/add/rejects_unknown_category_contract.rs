use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_rejects_unknown_category_and_lists_valid_ones() {
    let ctx = TestContext::with_project("acme-proj", "Acme");

    ctx.cli()
        .args(["add", "widget", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'widget'"))
        .stderr(predicate::str::contains("mapreduce"));
}

#[test]
fn add_help_lists_category_descriptions() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("suitelet"))
        .stdout(predicate::str::contains("Suitelets are"))
        .stdout(predicate::str::contains("Map/Reduce"));
}
