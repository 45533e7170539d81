//! Entity attribute scrapers.
//!
//! A scraper resolves an [`EntityIdentity`] from a resource's attributes and
//! writes it back under the `aws.entity.k8s.*` keys. Scrapers only hold the
//! cluster name, so a single instance can be reused across resources and
//! shared between threads.
mod eks;
mod k8s;

use std::collections::HashMap;

use opentelemetry::otel_debug;

use crate::attributes::{
    AWS_ENTITY_CLUSTER, AWS_ENTITY_NAMESPACE, AWS_ENTITY_NODE, AWS_ENTITY_WORKLOAD,
};

pub use eks::EksAttributeScraper;
pub use k8s::K8sAttributeScraper;

/// String attributes of a single telemetry resource.
pub type AttributeMap = HashMap<String, String>;

/// Kubernetes identity resolved for one resource.
///
/// An empty field means no allowlisted key was found for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityIdentity {
    pub cluster: String,
    pub namespace: String,
    pub workload: String,
    pub node: String,
}

impl EntityIdentity {
    /// Writes every non-empty field under its `aws.entity.k8s.*` key.
    ///
    /// Other attributes are left untouched.
    pub fn decorate(&self, attributes: &mut AttributeMap) {
        put_if_non_empty(attributes, AWS_ENTITY_CLUSTER, &self.cluster);
        put_if_non_empty(attributes, AWS_ENTITY_NAMESPACE, &self.namespace);
        put_if_non_empty(attributes, AWS_ENTITY_WORKLOAD, &self.workload);
        put_if_non_empty(attributes, AWS_ENTITY_NODE, &self.node);
    }

    pub fn is_empty(&self) -> bool {
        self.cluster.is_empty()
            && self.namespace.is_empty()
            && self.workload.is_empty()
            && self.node.is_empty()
    }
}

/// Resolves and decorates entity attributes in place.
pub trait AttributeScraper {
    /// Resolves the entity of `attributes`, adds the entity keys to it and
    /// returns what was resolved.
    fn scrape(&self, attributes: &mut AttributeMap) -> EntityIdentity;
}

/// Returns the value of the first allowlisted key present in `attributes`.
///
/// Keys after the first hit are never consulted. Returns an empty string
/// when none of the keys is present.
pub fn resolve(allowlist: &[&str], attributes: &AttributeMap) -> String {
    allowlist
        .iter()
        .find_map(|key| attributes.get(*key))
        .cloned()
        .unwrap_or_default()
}

/// Resolves all identity fields and decorates `attributes` with them.
fn scrape_with(
    cluster: &str,
    namespace_allowlist: &[&str],
    workload_allowlist: &[&str],
    node_allowlist: &[&str],
    attributes: &mut AttributeMap,
) -> EntityIdentity {
    let identity = EntityIdentity {
        cluster: cluster.to_string(),
        namespace: resolve(namespace_allowlist, attributes),
        workload: resolve(workload_allowlist, attributes),
        node: resolve(node_allowlist, attributes),
    };
    identity.decorate(attributes);

    otel_debug!(
        name: "EntityScraper.Resolved",
        cluster = identity.cluster.as_str(),
        namespace = identity.namespace.as_str(),
        workload = identity.workload.as_str(),
        node = identity.node.as_str()
    );
    identity
}

fn put_if_non_empty(attributes: &mut AttributeMap, key: &str, value: &str) {
    if !value.is_empty() {
        attributes.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
pub(crate) fn attribute_map(pairs: &[(&str, &str)]) -> AttributeMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_empty_identity() {
        let mut attrs = AttributeMap::new();
        EntityIdentity::default().decorate(&mut attrs);
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_decorate_cluster_only() {
        let mut attrs = AttributeMap::new();
        let identity = EntityIdentity {
            cluster: "test-cluster".to_string(),
            ..Default::default()
        };
        identity.decorate(&mut attrs);
        assert_eq!(
            attrs,
            attribute_map(&[(AWS_ENTITY_CLUSTER, "test-cluster")])
        );
    }

    #[test]
    fn test_decorate_all_fields_keeps_existing_attributes() {
        let mut attrs = attribute_map(&[("service.name", "checkout")]);
        let identity = EntityIdentity {
            cluster: "test-cluster".to_string(),
            namespace: "test-namespace".to_string(),
            workload: "test-workload".to_string(),
            node: "test-node".to_string(),
        };
        identity.decorate(&mut attrs);
        assert_eq!(
            attrs,
            attribute_map(&[
                ("service.name", "checkout"),
                (AWS_ENTITY_CLUSTER, "test-cluster"),
                (AWS_ENTITY_NAMESPACE, "test-namespace"),
                (AWS_ENTITY_WORKLOAD, "test-workload"),
                (AWS_ENTITY_NODE, "test-node"),
            ])
        );
        assert!(!identity.is_empty());
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let attrs = attribute_map(&[("b", "second"), ("c", "third")]);
        assert_eq!(resolve(&["a", "b", "c"], &attrs), "second");
    }

    #[test]
    fn test_resolve_no_match() {
        let attrs = attribute_map(&[("namespace", "test")]);
        assert_eq!(resolve(&["k8s.namespace.name"], &attrs), "");
        assert_eq!(resolve(&[], &attrs), "");
    }

    #[test]
    fn test_resolve_present_but_empty_value_stops_search() {
        let attrs = attribute_map(&[("a", ""), ("b", "value")]);
        assert_eq!(resolve(&["a", "b"], &attrs), "");
    }
}
