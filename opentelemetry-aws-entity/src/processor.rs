//! Applies an [`AttributeScraper`] to telemetry resources.

use opentelemetry::{otel_debug, KeyValue, Value};
use opentelemetry_sdk::Resource;

use crate::resource_store::ResourceStore;
use crate::scraper::{
    AttributeMap, AttributeScraper, EksAttributeScraper, EntityIdentity, K8sAttributeScraper,
};

/// Producer of the telemetry passing through the processor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TelemetrySource {
    /// OpenTelemetry instrumentation using semantic-convention keys.
    OpenTelemetry,
    /// Container Insights receivers.
    ContainerInsights,
    /// The Prometheus scraper, which uses bare `pod`/`namespace`/`node` labels.
    Prometheus,
}

/// Decorates resources with the `aws.entity.k8s.*` attributes.
pub struct EntityProcessor {
    scraper: Box<dyn AttributeScraper + Send + Sync>,
}

impl EntityProcessor {
    pub fn new(scraper: impl AttributeScraper + Send + Sync + 'static) -> Self {
        EntityProcessor {
            scraper: Box::new(scraper),
        }
    }

    /// Builds a processor for `source` from the discovered infrastructure.
    ///
    /// Returns `None` when the agent is not running in Kubernetes.
    pub fn from_resource_store(store: &ResourceStore, source: TelemetrySource) -> Option<Self> {
        let mode = store.kubernetes_mode();
        if !mode.is_kubernetes() {
            otel_debug!(
                name: "EntityProcessor.Disabled",
                reason = "not running in kubernetes"
            );
            return None;
        }

        let cluster = store.eks_info().cluster_name;
        otel_debug!(
            name: "EntityProcessor.Created",
            kubernetes_mode = mode.as_str(),
            cluster = cluster.as_str(),
            source = format!("{:?}", source)
        );
        let processor = match source {
            TelemetrySource::Prometheus => Self::new(K8sAttributeScraper::new(cluster)),
            TelemetrySource::OpenTelemetry | TelemetrySource::ContainerInsights => {
                Self::new(EksAttributeScraper::new(cluster))
            }
        };
        Some(processor)
    }

    pub fn process_attributes(&self, attributes: &mut AttributeMap) -> EntityIdentity {
        self.scraper.scrape(attributes)
    }

    /// Returns a copy of `resource` decorated with the entity attributes.
    ///
    /// Only string attributes take part in scraping. Attributes of other
    /// types are copied over unchanged and are invisible to the allowlists,
    /// so a non-string `k8s.namespace.name` lets a lower-priority string key
    /// such as `Namespace` win.
    pub fn process_resource(&self, resource: &Resource) -> Resource {
        let mut attributes = AttributeMap::new();
        let mut passthrough = Vec::new();
        for (key, value) in resource.iter() {
            match value {
                Value::String(s) => {
                    attributes.insert(key.as_str().to_string(), s.as_str().to_string());
                }
                other => passthrough.push(KeyValue::new(key.clone(), other.clone())),
            }
        }

        self.process_attributes(&mut attributes);

        let decorated = passthrough.into_iter().chain(
            attributes
                .into_iter()
                .map(|(key, value)| KeyValue::new(key, value)),
        );
        match resource.schema_url() {
            Some(schema_url) => Resource::builder_empty()
                .with_schema_url(decorated, schema_url.to_string())
                .build(),
            None => Resource::builder_empty().with_attributes(decorated).build(),
        }
    }
}
