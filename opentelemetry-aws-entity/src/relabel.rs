use opentelemetry_semantic_conventions as semconv;

use crate::attributes::{PROMETHEUS_NAMESPACE_LABEL, PROMETHEUS_NODE_LABEL, PROMETHEUS_POD_LABEL};
use crate::scraper::AttributeMap;

/// Prometheus label and the semantic-convention key that replaces it, in
/// the order they are applied.
const PROMETHEUS_RELABELS: [(&str, &str); 3] = [
    (PROMETHEUS_POD_LABEL, semconv::resource::K8S_POD_NAME),
    (
        PROMETHEUS_NAMESPACE_LABEL,
        semconv::resource::K8S_NAMESPACE_NAME,
    ),
    (PROMETHEUS_NODE_LABEL, semconv::resource::K8S_NODE_NAME),
];

/// Moves the Prometheus `pod`, `namespace` and `node` labels to their
/// semantic-convention keys.
///
/// Each label is handled independently. The legacy label is removed once
/// its value has been copied, so callers must not read it afterwards.
pub fn relabel_prometheus(attributes: &mut AttributeMap) {
    for (label, key) in PROMETHEUS_RELABELS {
        if let Some(value) = attributes.remove(label) {
            attributes.insert(key.to_string(), value);
        }
    }
}
