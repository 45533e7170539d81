//! Attribute keys read and written while resolving entities.
//!
//! Semantic-convention keys are taken from
//! [`opentelemetry_semantic_conventions`]; the rest are defined here.

/// Kubernetes cluster the resource runs in.
pub const AWS_ENTITY_CLUSTER: &str = "aws.entity.k8s.cluster.name";
/// Kubernetes namespace the resource runs in.
pub const AWS_ENTITY_NAMESPACE: &str = "aws.entity.k8s.namespace.name";
/// Kubernetes workload (deployment, daemonset, ...) the resource belongs to.
pub const AWS_ENTITY_WORKLOAD: &str = "aws.entity.k8s.workload.name";
/// Kubernetes node the resource runs on.
pub const AWS_ENTITY_NODE: &str = "aws.entity.k8s.node.name";

/// Namespace key emitted by Container Insights.
pub const CONTAINER_INSIGHTS_NAMESPACE: &str = "Namespace";
/// Workload key emitted by Container Insights. Holds the workload name, not
/// the pod name.
pub const CONTAINER_INSIGHTS_POD_NAME: &str = "PodName";
/// Node key emitted by Container Insights.
pub const CONTAINER_INSIGHTS_NODE_NAME: &str = "NodeName";

/// Pod label attached by the Prometheus scraper.
pub const PROMETHEUS_POD_LABEL: &str = "pod";
/// Namespace label attached by the Prometheus scraper.
pub const PROMETHEUS_NAMESPACE_LABEL: &str = "namespace";
/// Node label attached by the Prometheus scraper.
pub const PROMETHEUS_NODE_LABEL: &str = "node";
