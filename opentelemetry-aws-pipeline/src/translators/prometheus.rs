//! Pipeline for metrics scraped from Prometheus endpoints.

use opentelemetry::otel_debug;

use crate::{
    model::AgentConfig,
    translators::{PipelineTranslator, ProcessingStage, TranslationContext},
    ComponentId, Pipeline, TranslatorError,
};

const PIPELINE_NAME: &str = "prometheus";

/// Configuration section that enables the pipeline.
pub const PROMETHEUS_KEY: &str = "logs::metrics_collected::prometheus";

/// Translator for the `metrics/prometheus` pipeline.
///
/// Prometheus metrics are received through the telegraf adapter, batched,
/// stamped with identity and exported as EMF logs.
#[derive(Clone, Debug)]
pub struct PrometheusTranslator {
    id: ComponentId,
}

impl PrometheusTranslator {
    pub fn new() -> Self {
        PrometheusTranslator {
            id: ComponentId::new("metrics").with_name(PIPELINE_NAME),
        }
    }
}

impl Default for PrometheusTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineTranslator for PrometheusTranslator {
    fn id(&self) -> ComponentId {
        self.id.clone()
    }

    fn translate(
        &self,
        config: &AgentConfig,
        context: &TranslationContext,
    ) -> Result<Pipeline, TranslatorError> {
        if !config.contains_key(PROMETHEUS_KEY) {
            return Err(TranslatorError::MissingKey {
                pipeline: self.id(),
                key: PROMETHEUS_KEY.to_string(),
            });
        }

        let stage = ProcessingStage::for_mode(context.kubernetes_mode());
        otel_debug!(
            name: "PrometheusTranslator.Translate",
            kubernetes_mode = context.kubernetes_mode().as_str(),
            stage = stage.component_id().to_string()
        );

        Ok(Pipeline {
            id: self.id(),
            receivers: vec![ComponentId::new("telegraf_prometheus")],
            processors: vec![
                ComponentId::new("batch").with_name(PIPELINE_NAME),
                stage.component_id(),
            ],
            exporters: vec![ComponentId::new("awsemf").with_name(PIPELINE_NAME)],
            extensions: vec![ComponentId::new("agenthealth").with_name("logs")],
        })
    }
}
