//! # Pipeline translators
//!
//! A translator turns the agent configuration into one named [`Pipeline`].
//! The [`TranslatorRegistry`] runs every registered translator and collects
//! the pipelines that are configured.

pub mod prometheus;

use opentelemetry::otel_debug;
use opentelemetry_aws_entity::{KubernetesMode, ResourceStore};

use crate::{model::AgentConfig, ComponentId, Pipeline, TranslatorError};

pub use prometheus::PrometheusTranslator;

/// Inputs to pipeline assembly that do not come from the configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationContext {
    kubernetes_mode: KubernetesMode,
}

impl TranslationContext {
    pub fn new(kubernetes_mode: KubernetesMode) -> Self {
        TranslationContext { kubernetes_mode }
    }

    /// Builds the context from the infrastructure discovered at startup.
    pub fn from_resource_store(store: &ResourceStore) -> Self {
        Self::new(store.kubernetes_mode())
    }

    pub fn kubernetes_mode(&self) -> &KubernetesMode {
        &self.kubernetes_mode
    }
}

/// Processor that attaches identity to resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessingStage {
    /// `awsentity/service`: decorates resources with Kubernetes entity attributes.
    EntityDecoration,
    /// `resourcedetection`: generic host and cloud resource detection.
    ResourceDetection,
}

impl ProcessingStage {
    pub fn for_mode(mode: &KubernetesMode) -> Self {
        match mode {
            KubernetesMode::None => ProcessingStage::ResourceDetection,
            KubernetesMode::Eks
            | KubernetesMode::K8sEc2
            | KubernetesMode::K8sOnPrem
            | KubernetesMode::Other(_) => ProcessingStage::EntityDecoration,
        }
    }

    pub fn component_id(&self) -> ComponentId {
        match self {
            ProcessingStage::EntityDecoration => ComponentId::new("awsentity").with_name("service"),
            ProcessingStage::ResourceDetection => ComponentId::new("resourcedetection"),
        }
    }
}

/// Translates the agent configuration into a single pipeline.
pub trait PipelineTranslator {
    fn id(&self) -> ComponentId;

    /// Builds the pipeline, or fails with [`TranslatorError::MissingKey`]
    /// when the configuration does not enable it.
    fn translate(
        &self,
        config: &AgentConfig,
        context: &TranslationContext,
    ) -> Result<Pipeline, TranslatorError>;
}

/// Ordered set of pipeline translators.
pub struct TranslatorRegistry {
    translators: Vec<Box<dyn PipelineTranslator>>,
}

impl TranslatorRegistry {
    pub fn new() -> Self {
        TranslatorRegistry {
            translators: Vec::new(),
        }
    }

    /// Registry holding every built-in translator.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PrometheusTranslator::new()));
        registry
    }

    pub fn register(&mut self, translator: Box<dyn PipelineTranslator>) {
        self.translators.push(translator);
    }

    pub fn len(&self) -> usize {
        self.translators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }

    /// Translates every registered pipeline, in registration order.
    ///
    /// Pipelines whose configuration section is missing are skipped. Any
    /// other error aborts assembly.
    pub fn translate_all(
        &self,
        config: &AgentConfig,
        context: &TranslationContext,
    ) -> Result<Vec<Pipeline>, TranslatorError> {
        let mut pipelines = Vec::with_capacity(self.translators.len());
        for translator in &self.translators {
            match translator.translate(config, context) {
                Ok(pipeline) => pipelines.push(pipeline),
                Err(TranslatorError::MissingKey { pipeline, key }) => {
                    otel_debug!(
                        name: "TranslatorRegistry.PipelineSkipped",
                        pipeline = pipeline.to_string(),
                        missing_key = key
                    );
                }
                Err(err) => return Err(err),
            }
        }
        Ok(pipelines)
    }
}

impl Default for TranslatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
