use crate::harness::{Assertion, Scenario};
use ucd_core::NavRequest;

#[test]
fn test_missing_target_falls_back_to_parent() {
    Scenario::new("fallback_to_parent")
        .from_fixture("home")
        .with_parent_fallback()
        .cd("projectX/missing")
        .assert_cwd("projectX")
        .assert(Assertion::FellBackFrom("projectX/missing".into()))
        .assert_history(&["projectX"])
        .run()
        .expect("parent should be entered");
}

#[test]
fn test_fallback_disabled_by_default() {
    Scenario::new("fallback_disabled")
        .from_fixture("home")
        .cd_fails("projectX/missing", "path `projectX/missing` is not a valid path")
        .assert(Assertion::NoStoreFile)
        .run()
        .unwrap();
}

#[test]
fn test_bare_name_falls_back_to_current_directory() {
    Scenario::new("bare_name_fallback")
        .from_fixture("home")
        .with_parent_fallback()
        .shell_cd("notes")
        .cd("missing")
        .assert_cwd("notes")
        .run()
        .unwrap();
}

#[test]
fn test_parent_also_missing() {
    Scenario::new("parent_also_missing")
        .from_fixture("home")
        .with_parent_fallback()
        .cd_fails("nope/missing", "neither is its parent")
        .assert(Assertion::NoStoreFile)
        .run()
        .unwrap();
}

#[test]
fn test_stale_history_entry_falls_back() {
    Scenario::new("stale_history_fallback")
        .from_fixture("home")
        .with_parent_fallback()
        .cd("projectX/src")
        .shell_cd("~")
        .cd("notes")
        .remove_dir("projectX/src")
        .navigate(NavRequest::history(2))
        .assert_cwd("projectX")
        .assert(Assertion::FellBackFrom("projectX/src".into()))
        .assert_history(&["projectX", "notes", "projectX/src"])
        .run()
        .unwrap();
}
