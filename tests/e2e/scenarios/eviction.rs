use crate::harness::{Assertion, Scenario};

fn six_dirs() -> Scenario {
    Scenario::new("six_dirs").with_dirs(&["d1", "d2", "d3", "d4", "d5", "d6"])
}

#[test]
fn test_history_is_trimmed_after_each_visit() {
    six_dirs()
        .with_history_limit(3)
        .cd("d1")
        .cd("../d2")
        .cd("../d3")
        .cd("../d4")
        .assert_history(&["d4", "d3", "d2"])
        .cd("../d5")
        .assert_history(&["d5", "d4", "d3"])
        .assert(Assertion::NotInHistory("d1".into()))
        .run()
        .expect("oldest visits should be evicted");
}

#[test]
fn test_revisit_protects_from_eviction() {
    six_dirs()
        .with_history_limit(2)
        .cd("d1")
        .cd("../d2")
        .cd("../d1")
        .cd("../d3")
        .assert_history(&["d3", "d1"])
        .assert_visits("d1", 2)
        .run()
        .unwrap();
}

#[test]
fn test_zero_limit_keeps_nothing() {
    six_dirs()
        .with_history_limit(0)
        .cd("d1")
        .assert_cwd("d1")
        .assert(Assertion::HistoryLen(0))
        .run()
        .unwrap();
}

#[test]
fn test_negative_limit_is_unbounded() {
    six_dirs()
        .with_history_limit(-1)
        .cd("d1")
        .cd("../d2")
        .cd("../d3")
        .cd("../d4")
        .cd("../d5")
        .cd("../d6")
        .assert(Assertion::HistoryLen(6))
        .run()
        .unwrap();
}

#[test]
fn test_stash_is_never_evicted() {
    six_dirs()
        .with_history_limit(1)
        .stash("d1", "one")
        .cd("../d2")
        .cd("../d3")
        .assert_history(&["d3"])
        .assert_stash(&["d1"])
        .assert_alias("one", "d1")
        .run()
        .unwrap();
}

#[test]
fn test_clear_to_limit_after_limit_shrinks() {
    six_dirs()
        .with_history_limit(-1)
        .cd("d1")
        .cd("../d2")
        .cd("../d3")
        .cd("../d4")
        .with_history_limit(2)
        .clear_to_limit()
        .assert_history(&["d4", "d3"])
        .run()
        .unwrap();
}

#[test]
fn test_clear_history_keeps_stash() {
    six_dirs()
        .stash("d1", "")
        .cd("../d2")
        .clear_history()
        .assert(Assertion::HistoryLen(0))
        .assert_stash(&["d1"])
        .run()
        .unwrap();
}
