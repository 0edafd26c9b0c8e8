// End-to-end query construction tests
//
// Base query -> limit -> cluster filter -> selector filter, as the metrics
// provider applies them.

#[macro_use]
mod common;

mod integration;

use integration::QUERY_CASES;
use rusty_nrql_query::{MetricConfig, ProviderConfig, Query};

#[test]
fn test_query_cases() {
    for (base, cluster, enabled, selector, expected) in QUERY_CASES {
        let selector = assert_selector_parses!(*selector);
        let query = Query::new(*base)
            .add_limit()
            .add_cluster_filter(cluster, *enabled)
            .add_match_filter(Some(&selector));
        assert_nrql!(query, *expected);
    }
}

#[test]
fn test_query_cases_through_config() {
    for (i, (base, cluster, enabled, selector, expected)) in QUERY_CASES.iter().enumerate() {
        let name = format!("metric_{}", i);
        let config = ProviderConfig {
            cluster_name: cluster.to_string(),
            ..Default::default()
        }
        .with_metric(
            name.as_str(),
            MetricConfig::new(*base).with_cluster_filter(*enabled),
        );
        let selector = assert_selector_parses!(*selector);
        let query = config.query_for(&name, Some(&selector)).unwrap();
        assert_nrql!(query, *expected);
    }
}

#[test]
fn test_end_to_end_steps() {
    let step1 = Query::new("SELECT average(cpu) FROM Metric").add_limit();
    assert_nrql!(step1, "SELECT average(cpu) FROM Metric limit 1");

    let step2 = step1.add_cluster_filter("prod-1", true);
    assert_nrql!(
        step2,
        "SELECT average(cpu) FROM Metric limit 1 where clusterName='prod-1'"
    );

    let selector = assert_selector_parses!("app=api");
    let step3 = step2.add_match_filter(Some(&selector));
    // One `where`, conditions joined with `and`
    assert_nrql!(
        step3,
        "SELECT average(cpu) FROM Metric limit 1 where clusterName='prod-1' and app = 'api'"
    );
}

#[test]
fn test_independent_chains_from_one_base() {
    let base = Query::new("SELECT max(memory) FROM Metric");
    let a = base.clone().add_cluster_filter("a", true);
    let b = base.clone().add_limit();
    assert_nrql!(base, "SELECT max(memory) FROM Metric");
    assert_nrql!(a, "SELECT max(memory) FROM Metric where clusterName='a'");
    assert_nrql!(b, "SELECT max(memory) FROM Metric limit 1");
}
