//! # Telemetry pipeline assembly for AWS agents
//!
//! Translates the agent configuration into pipeline descriptions: which
//! receivers, processors, exporters and extensions each named pipeline
//! runs. The pipelines are executed elsewhere.
//!
//! The processor stage of a pipeline depends on where the agent runs.
//! Inside Kubernetes, resources are decorated with entity attributes by the
//! `awsentity` processor. Elsewhere, generic `resourcedetection` is used.
//!
//! ```
//! use opentelemetry_aws_entity::KubernetesMode;
//! use opentelemetry_aws_pipeline::{
//!     model::AgentConfig,
//!     translators::{PipelineTranslator, PrometheusTranslator, TranslationContext},
//! };
//!
//! let yaml = r#"{"logs": {"metrics_collected": {"prometheus": {}}}}"#;
//! let config = AgentConfig::from_yaml_str(yaml).unwrap();
//! let context = TranslationContext::new(KubernetesMode::Eks);
//! let pipeline = PrometheusTranslator::new().translate(&config, &context).unwrap();
//!
//! assert_eq!(pipeline.id.to_string(), "metrics/prometheus");
//! assert_eq!(pipeline.processors[1].to_string(), "awsentity/service");
//! ```

use std::fmt::{self, Display};

pub mod model;
pub mod translators;

/// Identifies a pipeline or a pipeline component, such as `batch/prometheus`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComponentId {
    kind: String,
    name: Option<String>,
}

impl ComponentId {
    pub fn new(kind: impl Into<String>) -> Self {
        ComponentId {
            kind: kind.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}/{}", self.kind, name),
            None => f.write_str(&self.kind),
        }
    }
}

/// Ordered components of one telemetry pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pipeline {
    pub id: ComponentId,
    pub receivers: Vec<ComponentId>,
    pub processors: Vec<ComponentId>,
    pub exporters: Vec<ComponentId>,
    pub extensions: Vec<ComponentId>,
}

/// Errors raised while loading the configuration or assembling pipelines.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TranslatorError {
    /// A key the pipeline requires is absent from the configuration.
    #[error("\"{pipeline}\" missing key in JSON: \"{key}\"")]
    MissingKey { pipeline: ComponentId, key: String },
    /// The configuration could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
