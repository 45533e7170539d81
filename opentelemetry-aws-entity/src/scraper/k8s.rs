use opentelemetry_semantic_conventions as semconv;

use crate::relabel::relabel_prometheus;
use crate::scraper::{scrape_with, AttributeMap, AttributeScraper, EntityIdentity};

const NAMESPACE_ALLOWLIST: [&str; 1] = [semconv::resource::K8S_NAMESPACE_NAME];

const WORKLOAD_ALLOWLIST: [&str; 5] = [
    semconv::resource::K8S_DEPLOYMENT_NAME,
    semconv::resource::K8S_DAEMONSET_NAME,
    semconv::resource::K8S_STATEFULSET_NAME,
    semconv::resource::K8S_REPLICASET_NAME,
    semconv::resource::K8S_CONTAINER_NAME,
];

const NODE_ALLOWLIST: [&str; 1] = [semconv::resource::K8S_NODE_NAME];

/// Scraper for resources produced by the Prometheus scraper.
///
/// Prometheus `pod`, `namespace` and `node` labels are moved to their
/// semantic-convention keys with [`relabel_prometheus`] before resolving.
/// Container Insights keys are not consulted.
#[derive(Clone, Debug, Default)]
pub struct K8sAttributeScraper {
    cluster: String,
}

impl K8sAttributeScraper {
    pub fn new(cluster: impl Into<String>) -> Self {
        K8sAttributeScraper {
            cluster: cluster.into(),
        }
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }
}

impl AttributeScraper for K8sAttributeScraper {
    fn scrape(&self, attributes: &mut AttributeMap) -> EntityIdentity {
        relabel_prometheus(attributes);
        scrape_with(
            &self.cluster,
            &NAMESPACE_ALLOWLIST,
            &WORKLOAD_ALLOWLIST,
            &NODE_ALLOWLIST,
            attributes,
        )
    }
}
