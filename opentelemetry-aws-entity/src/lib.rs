//! # AWS entity attributes for OpenTelemetry resources
//!
//! This crate resolves the Kubernetes entity (cluster, namespace, workload
//! and node) that produced a telemetry resource and stamps it onto the
//! resource attributes under the `aws.entity.k8s.*` keys.
//!
//! Producers disagree on attribute names. OpenTelemetry instrumentation
//! emits semantic-convention keys such as `k8s.namespace.name`, Container
//! Insights emits `Namespace`/`PodName`/`NodeName`, and the Prometheus
//! scraper emits bare `pod`/`namespace`/`node` labels. Each identity field
//! is resolved from an ordered allowlist where the first key present wins.
//!
//! # Scrapers
//!
//! - [`EksAttributeScraper`] - resolves from semantic-convention keys, then
//!   Container Insights keys.
//! - [`K8sAttributeScraper`] - relabels Prometheus labels first, then
//!   resolves from semantic-convention keys only.
//!
//! ```
//! use opentelemetry_aws_entity::{attributes, AttributeMap, AttributeScraper, EksAttributeScraper};
//!
//! let scraper = EksAttributeScraper::new("my-cluster");
//! let mut attrs = AttributeMap::from([("k8s.namespace.name".to_string(), "default".to_string())]);
//! scraper.scrape(&mut attrs);
//!
//! assert_eq!(attrs[attributes::AWS_ENTITY_CLUSTER], "my-cluster");
//! assert_eq!(attrs[attributes::AWS_ENTITY_NAMESPACE], "default");
//! ```
pub mod attributes;
pub mod mode;
pub mod processor;
pub mod relabel;
pub mod resource_store;
pub mod scraper;

pub use mode::KubernetesMode;
pub use processor::{EntityProcessor, TelemetrySource};
pub use relabel::relabel_prometheus;
pub use resource_store::{Ec2Info, EksInfo, ResourceStore, ResourceStoreBuilder};
pub use scraper::{
    AttributeMap, AttributeScraper, EksAttributeScraper, EntityIdentity, K8sAttributeScraper,
};
