//! Kubernetes mode the agent runs in.

use std::fmt::{self, Display};

const MODE_EKS: &str = "EKS";
const MODE_K8S_EC2: &str = "K8sEC2";
const MODE_K8S_ON_PREM: &str = "K8sOnPrem";

/// Whether the agent runs inside Kubernetes and, if so, which flavor.
///
/// Parsed from the mode string set during agent startup. An empty string
/// means the agent is not running in Kubernetes. Unknown non-empty values
/// are kept as [`KubernetesMode::Other`] and still count as Kubernetes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum KubernetesMode {
    #[default]
    None,
    Eks,
    K8sEc2,
    K8sOnPrem,
    Other(String),
}

impl KubernetesMode {
    /// Returns true for every mode except [`KubernetesMode::None`].
    pub fn is_kubernetes(&self) -> bool {
        !matches!(self, KubernetesMode::None)
    }

    pub fn as_str(&self) -> &str {
        match self {
            KubernetesMode::None => "",
            KubernetesMode::Eks => MODE_EKS,
            KubernetesMode::K8sEc2 => MODE_K8S_EC2,
            KubernetesMode::K8sOnPrem => MODE_K8S_ON_PREM,
            KubernetesMode::Other(mode) => mode,
        }
    }
}

impl From<&str> for KubernetesMode {
    fn from(mode: &str) -> Self {
        match mode {
            "" => KubernetesMode::None,
            MODE_EKS => KubernetesMode::Eks,
            MODE_K8S_EC2 => KubernetesMode::K8sEc2,
            MODE_K8S_ON_PREM => KubernetesMode::K8sOnPrem,
            other => KubernetesMode::Other(other.to_string()),
        }
    }
}

impl From<Option<&str>> for KubernetesMode {
    fn from(mode: Option<&str>) -> Self {
        mode.map(KubernetesMode::from).unwrap_or_default()
    }
}

impl Display for KubernetesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!(KubernetesMode::from("EKS"), KubernetesMode::Eks);
        assert_eq!(KubernetesMode::from("K8sEC2"), KubernetesMode::K8sEc2);
        assert_eq!(KubernetesMode::from("K8sOnPrem"), KubernetesMode::K8sOnPrem);
    }

    #[test]
    fn test_parse_unset_mode() {
        assert_eq!(KubernetesMode::from(""), KubernetesMode::None);
        assert_eq!(KubernetesMode::from(None), KubernetesMode::None);
        assert!(!KubernetesMode::default().is_kubernetes());
    }

    #[test]
    fn test_unknown_mode_is_kubernetes() {
        let mode = KubernetesMode::from("OpenShift");
        assert_eq!(mode, KubernetesMode::Other("OpenShift".to_string()));
        assert!(mode.is_kubernetes());
        assert_eq!(mode.to_string(), "OpenShift");
    }

    #[test]
    fn test_whitespace_mode_is_kept_verbatim() {
        let mode = KubernetesMode::from("  ");
        assert_eq!(mode, KubernetesMode::Other("  ".to_string()));
        assert!(mode.is_kubernetes());

        let mode = KubernetesMode::from(" k3s ");
        assert_eq!(mode.as_str(), " k3s ");
        assert_eq!(
            KubernetesMode::from(" EKS"),
            KubernetesMode::Other(" EKS".to_string())
        );
    }

    #[test]
    fn test_display_round_trips_known_modes() {
        for mode in [
            KubernetesMode::None,
            KubernetesMode::Eks,
            KubernetesMode::K8sEc2,
            KubernetesMode::K8sOnPrem,
        ] {
            assert_eq!(KubernetesMode::from(mode.to_string().as_str()), mode);
        }
    }
}
