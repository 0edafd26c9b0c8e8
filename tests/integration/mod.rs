// End-to-end query cases
//
// Each case starts from a configured base query and applies, in order:
// limit, cluster filter, selector filter.

/// Format: (base, cluster_name, add_cluster_filter, selector, expected NRQL)
pub const QUERY_CASES: &[(&str, &str, bool, &str, &str)] = &[
    (
        "SELECT average(cpu) FROM Metric",
        "prod-1",
        true,
        "app=api",
        "SELECT average(cpu) FROM Metric limit 1 where clusterName='prod-1' and app = 'api'",
    ),
    (
        "SELECT average(cpu) FROM Metric",
        "prod-1",
        false,
        "app=api",
        "SELECT average(cpu) FROM Metric limit 1 where app = 'api'",
    ),
    (
        "SELECT average(cpu) FROM Metric",
        "prod-1",
        true,
        "",
        "SELECT average(cpu) FROM Metric limit 1 where clusterName='prod-1'",
    ),
    (
        "SELECT average(cpu) FROM Metric",
        "prod-1",
        false,
        "",
        "SELECT average(cpu) FROM Metric limit 1",
    ),
    // Existing limits are kept
    (
        "SELECT latest(queueDepth) FROM QueueSample LIMIT 5",
        "c",
        true,
        "queue in (orders, 7)",
        "SELECT latest(queueDepth) FROM QueueSample LIMIT 5 where clusterName='c' and queue IN ('orders', 7)",
    ),
    (
        "FROM K8sContainerSample SELECT max(cpuUsedCores) Limit 1",
        "c",
        false,
        "containerName=nginx,!podName",
        "FROM K8sContainerSample SELECT max(cpuUsedCores) Limit 1 where containerName = 'nginx' and podName IS NULL",
    ),
    (
        "SELECT sum(errors) FROM Transaction SINCE 5 minutes ago",
        "prod",
        true,
        "http.statusCode>499,http.statusCode<600",
        "SELECT sum(errors) FROM Transaction SINCE 5 minutes ago limit 1 where clusterName='prod' and http.statusCode > 499 and http.statusCode < 600",
    ),
    // Numeric cluster names are still quoted
    (
        "SELECT count(*) FROM K8sPodSample",
        "42",
        true,
        "namespace notin (kube-system)",
        "SELECT count(*) FROM K8sPodSample limit 1 where clusterName='42' and namespace NOT IN ('kube-system')",
    ),
];
