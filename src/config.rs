//! External metric configuration.
//!
//! Each external metric exposed to the metrics API is backed by a
//! user-written NRQL query. The configuration is read from a TOML file and
//! `NRQL__`-prefixed environment variables:
//!
//! ```toml
//! cluster_name = "prod-1"
//!
//! [external_metrics.cpu_average]
//! query = "SELECT average(cpuPercent) FROM SystemSample"
//! add_cluster_filter = true
//! ```
//!
//! Environment variables nest with `__`, e.g.
//! `NRQL__EXTERNAL_METRICS__CPU_AVERAGE__ADD_CLUSTER_FILTER=true`.

use std::collections::BTreeMap;
use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::parser::selector::Selector;
use crate::query::Query;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "NRQL__";

/// Query configuration of one external metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Base NRQL query
    pub query: String,
    /// Restrict results to the configured cluster
    #[serde(default)]
    pub add_cluster_filter: bool,
}

impl MetricConfig {
    /// Create a metric config for a base query, without cluster filter
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            add_cluster_filter: false,
        }
    }

    /// Enable or disable the cluster filter
    #[must_use]
    pub fn with_cluster_filter(mut self, enabled: bool) -> Self {
        self.add_cluster_filter = enabled;
        self
    }

    /// Build the query for a request: limit, then cluster, then selector
    pub fn build(&self, cluster_name: &str, selector: Option<&Selector>) -> Query {
        Query::new(self.query.as_str())
            .add_limit()
            .add_cluster_filter(cluster_name, self.add_cluster_filter)
            .add_match_filter(selector)
    }
}

/// Configuration of all external metrics served for one cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Name of the cluster, matched against the `clusterName` attribute
    #[serde(default)]
    pub cluster_name: String,
    /// Queries keyed by external metric name
    #[serde(default)]
    pub external_metrics: BTreeMap<String, MetricConfig>,
}

impl ProviderConfig {
    /// Figment reading `path` and then the environment
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration from a TOML file, overridden by the environment
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(path))
    }

    /// Extract configuration from any figment
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        debug!(
            cluster = %config.cluster_name,
            metrics = config.external_metrics.len(),
            "loaded external metric configuration"
        );
        Ok(config)
    }

    /// Add a metric
    #[must_use]
    pub fn with_metric(mut self, name: impl Into<String>, metric: MetricConfig) -> Self {
        self.external_metrics.insert(name.into(), metric);
        self
    }

    /// Names of all configured external metrics, sorted
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.external_metrics.keys().map(String::as_str)
    }

    /// Get the configuration of one metric
    pub fn metric(&self, name: &str) -> Option<&MetricConfig> {
        self.external_metrics.get(name)
    }

    /// Build the query for `metric` filtered by `selector`
    ///
    /// # Examples
    ///
    /// ```
    /// use rusty_nrql_query::{MetricConfig, ProviderConfig, parse_selector};
    ///
    /// let config = ProviderConfig {
    ///     cluster_name: "prod-1".to_string(),
    ///     ..Default::default()
    /// }
    /// .with_metric(
    ///     "cpu",
    ///     MetricConfig::new("SELECT average(cpu) FROM Metric").with_cluster_filter(true),
    /// );
    ///
    /// let selector = parse_selector("app=api").unwrap();
    /// let query = config.query_for("cpu", Some(&selector)).unwrap();
    /// assert_eq!(
    ///     query.to_string(),
    ///     "SELECT average(cpu) FROM Metric limit 1 where clusterName='prod-1' and app = 'api'"
    /// );
    /// assert!(config.query_for("memory", None).is_err());
    /// ```
    pub fn query_for(
        &self,
        metric: &str,
        selector: Option<&Selector>,
    ) -> Result<Query, ConfigError> {
        let Some(config) = self.metric(metric) else {
            warn!(metric, "no query configured for external metric");
            return Err(ConfigError::UnknownMetric(metric.to_string()));
        };
        let query = config.build(&self.cluster_name, selector);
        debug!(metric, nrql = %query, "built NRQL query");
        Ok(query)
    }
}
