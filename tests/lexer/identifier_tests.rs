// Label identifier test cases
//
// Keys and values follow Kubernetes label syntax:
// - name:  [A-Za-z0-9]([-A-Za-z0-9_.]*[A-Za-z0-9])?, at most 63 characters
// - key:   optional lowercase DNS subdomain prefix and '/', then a name
// - value: like a name, but may be empty

/// Valid label keys
pub const VALID_LABEL_KEYS: &[&str] = &[
    "app",
    "App",
    "a",
    "1",
    "tier_1",
    "kube-state",
    "http.statusCode",
    "app.kubernetes.io/name",
    "example.com/tier",
    "k8s.io/component",
];

/// Keys that do not fully parse
pub const INVALID_LABEL_KEYS: &[&str] = &[
    "",
    "-app",
    "app-",
    "_app",
    ".app",
    "/app",
    "Example.com/app",
    "example.com/",
    "app key",
];

/// Valid label values
pub const VALID_LABEL_VALUES: &[&str] = &["", "api", "1", "1.5", "v1.2.3", "prod-east_1"];

/// Values that do not fully parse
pub const INVALID_LABEL_VALUES: &[&str] = &["-api", "api-", "a b", "it's", "10%"];
