use opentelemetry_semantic_conventions as semconv;

use crate::attributes::{
    CONTAINER_INSIGHTS_NAMESPACE, CONTAINER_INSIGHTS_NODE_NAME, CONTAINER_INSIGHTS_POD_NAME,
};
use crate::scraper::{scrape_with, AttributeMap, AttributeScraper, EntityIdentity};

const NAMESPACE_ALLOWLIST: [&str; 2] = [
    semconv::resource::K8S_NAMESPACE_NAME,
    CONTAINER_INSIGHTS_NAMESPACE,
];

const WORKLOAD_ALLOWLIST: [&str; 6] = [
    semconv::resource::K8S_DEPLOYMENT_NAME,
    semconv::resource::K8S_DAEMONSET_NAME,
    semconv::resource::K8S_STATEFULSET_NAME,
    semconv::resource::K8S_REPLICASET_NAME,
    semconv::resource::K8S_CONTAINER_NAME,
    CONTAINER_INSIGHTS_POD_NAME,
];

const NODE_ALLOWLIST: [&str; 2] = [
    semconv::resource::K8S_NODE_NAME,
    CONTAINER_INSIGHTS_NODE_NAME,
];

/// Scraper for resources produced on EKS by OpenTelemetry instrumentation
/// or by Container Insights.
///
/// Semantic-convention keys take precedence over Container Insights keys.
/// Workloads are resolved in the order deployment, daemonset, statefulset,
/// replicaset, container, then the Container Insights `PodName`.
#[derive(Clone, Debug, Default)]
pub struct EksAttributeScraper {
    cluster: String,
}

impl EksAttributeScraper {
    pub fn new(cluster: impl Into<String>) -> Self {
        EksAttributeScraper {
            cluster: cluster.into(),
        }
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }
}

impl AttributeScraper for EksAttributeScraper {
    fn scrape(&self, attributes: &mut AttributeMap) -> EntityIdentity {
        scrape_with(
            &self.cluster,
            &NAMESPACE_ALLOWLIST,
            &WORKLOAD_ALLOWLIST,
            &NODE_ALLOWLIST,
            attributes,
        )
    }
}
