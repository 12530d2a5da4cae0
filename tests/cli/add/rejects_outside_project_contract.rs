use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_fails_without_project_config() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["add", "suitelet", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".tool-config file not found"));
}
