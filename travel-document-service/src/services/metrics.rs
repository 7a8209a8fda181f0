//! Metrics collection and Prometheus export.

use super::image::ImageKind;
use crate::domain::DocumentKind;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Later calls are no-ops.
pub fn init_metrics() -> Result<(), BuildError> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = METRICS_HANDLE.set(handle);
    Ok(())
}

/// Current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

pub fn record_document_generated(kind: DocumentKind, image: ImageKind) {
    metrics::counter!(
        "documents_generated_total",
        "kind" => kind.as_str(),
        "image" => image.prefix()
    )
    .increment(1);
}

pub fn record_encode_failure(image: ImageKind) {
    metrics::counter!("image_encode_failures_total", "image" => image.prefix()).increment(1);
}
