//! Snapshot of the infrastructure identity discovered at agent startup.
//!
//! Discovery itself (instance metadata, EKS lookups) happens elsewhere and
//! populates the store through [`ResourceStoreBuilder`]. Once built, the
//! store is read-only and its accessors hand out owned copies.

use std::collections::HashMap;

use crate::mode::KubernetesMode;

/// EC2 instance identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ec2Info {
    pub instance_id: String,
    pub auto_scaling_group: String,
}

/// EKS cluster identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EksInfo {
    pub cluster_name: String,
}

#[derive(Clone, Debug, Default)]
pub struct ResourceStore {
    ec2_info: Ec2Info,
    eks_info: EksInfo,
    log_files: HashMap<String, String>,
    mode: String,
    kubernetes_mode: KubernetesMode,
}

impl ResourceStore {
    pub fn builder() -> ResourceStoreBuilder {
        ResourceStoreBuilder::default()
    }

    pub fn ec2_info(&self) -> Ec2Info {
        self.ec2_info.clone()
    }

    pub fn eks_info(&self) -> EksInfo {
        self.eks_info.clone()
    }

    /// Log file paths mapped to the label they are reported under.
    pub fn log_files(&self) -> HashMap<String, String> {
        self.log_files.clone()
    }

    /// Deployment mode, for example `EC2` or `onPremise`.
    pub fn mode(&self) -> String {
        self.mode.clone()
    }

    pub fn kubernetes_mode(&self) -> KubernetesMode {
        self.kubernetes_mode.clone()
    }
}

/// Builder for [`ResourceStore`].
#[derive(Debug, Default)]
pub struct ResourceStoreBuilder {
    store: ResourceStore,
}

impl ResourceStoreBuilder {
    pub fn with_ec2_info(mut self, ec2_info: Ec2Info) -> Self {
        self.store.ec2_info = ec2_info;
        self
    }

    pub fn with_eks_info(mut self, eks_info: EksInfo) -> Self {
        self.store.eks_info = eks_info;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<String>, label: impl Into<String>) -> Self {
        self.store.log_files.insert(path.into(), label.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.store.mode = mode.into();
        self
    }

    pub fn with_kubernetes_mode(mut self, kubernetes_mode: KubernetesMode) -> Self {
        self.store.kubernetes_mode = kubernetes_mode;
        self
    }

    pub fn build(self) -> ResourceStore {
        self.store
    }
}
