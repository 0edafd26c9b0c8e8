use afl::fuzz;
use rusty_nrql_query::{Query, parse_selector};

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data) {
            if let Ok(selector) = parse_selector(s) {
                let _ = Query::new("SELECT count(*) FROM Metric")
                    .add_limit()
                    .add_cluster_filter("fuzz", true)
                    .add_match_filter(Some(&selector))
                    .to_string();
            }
        }
    });
}
