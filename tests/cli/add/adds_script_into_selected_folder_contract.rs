use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_places_script_in_selected_nested_folder() {
    let ctx = TestContext::with_project("acme-proj", "Acme");
    ctx.create_folder("billing/jobs");
    ctx.create_folder("shared");

    // Folders are listed pre-order: billing, billing/jobs, shared.
    ctx.cli()
        .args(["a", "scheduled", "Nightly"])
        .write_stdin("Nightly billing run\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("  2.   jobs (billing/jobs)"));

    let source =
        ctx.read_file(ctx.suitescripts_root().join("billing/jobs/acm_Nightly_scheduled.ts"));
    assert!(source.contains("Nightly billing run"));
    assert!(source.contains("Path: SuiteScripts/billing/jobs/acm_Nightly_scheduled.ts"));

    let xml =
        ctx.read_file(ctx.objects_root().join("acme-proj/scheduledscript/acm_Nightly.xml"));
    assert!(xml.contains("[/SuiteScripts/billing/jobs/acm_Nightly_scheduled.js]"));
}
