// Label selector test cases
//
// These test cases cover:
// - Equality and inequality
// - Integer comparison
// - Set membership
// - Existence
// - Multiple requirements and whitespace
// - Rejected syntax

/// Valid selectors and the NRQL conditions they produce
/// Format: (selector, conditions joined by " and ")
pub const VALID_SELECTORS: &[(&str, &str)] = &[
    // Equality
    ("app=api", "app = 'api'"),
    ("app==api", "app = 'api'"),
    ("app!=api", "app != 'api'"),
    ("app=", "app = ''"),
    // Numeric values are emitted bare
    ("code=200", "code = 200"),
    ("ratio=0.75", "ratio = 0.75"),
    ("x=1e3", "x = 1e3"),
    ("version=1.2.3", "version = '1.2.3'"),
    ("bytes=1_000", "bytes = 1_000"),
    ("v=0x0p3000", "v = 0x0p3000"),
    ("v=0x1p3000", "v = '0x1p3000'"),
    // Integer comparison
    ("replicas>2", "replicas > 2"),
    ("replicas<10", "replicas < 10"),
    ("offset > -1", "offset > -1"),
    // Sets
    ("tier in (web)", "tier IN ('web')"),
    ("tier in (web, api)", "tier IN ('web', 'api')"),
    ("app in (a, 1)", "app IN ('a', 1)"),
    ("tier notin (web,api)", "tier NOT IN ('web', 'api')"),
    ("tier notin(web)", "tier NOT IN ('web')"),
    ("shard in (1, 1, 2)", "shard IN (1, 2)"),
    // Existence
    ("partition", "partition IS NOT NULL"),
    ("!legacy", "legacy IS NULL"),
    ("! legacy", "legacy IS NULL"),
    // Prefixed keys
    ("app.kubernetes.io/name=api", "app.kubernetes.io/name = 'api'"),
    // Multiple requirements keep their order
    ("app=api,env!=dev", "app = 'api' and env != 'dev'"),
    ("z=1,a=2,m=3", "z = 1 and a = 2 and m = 3"),
    (
        "  app = api ,  tier in ( web , worker )  ",
        "app = 'api' and tier IN ('web', 'worker')",
    ),
    (
        "app=api,tier in (web, 1),partition,!legacy,replicas>2",
        "app = 'api' and tier IN ('web', 1) and partition IS NOT NULL and legacy IS NULL and replicas > 2",
    ),
];

/// Selectors that must be rejected
pub const INVALID_SELECTORS: &[&str] = &[
    // Dangling separators
    "app=api,",
    ",app=api",
    "app=api,,env=dev",
    // Broken sets
    "app in (a",
    "app in a",
    "app in (a b)",
    "appin (a)",
    // Unsupported or malformed operators
    "app=~api",
    "app=a b",
    "=api",
    "!",
    "app=-api",
    // Comparisons need integers
    "app>",
    "app>1.5",
    "app<x",
    "n>99999999999999999999",
    // Keys
    "Example.com/app=api",
];
