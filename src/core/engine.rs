use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a pipeline through its three stages with logging and optional
/// process monitoring.
pub struct RenderEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> RenderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting block decoration...");

        tracing::info!("Extracting card data...");
        let cards = self.pipeline.extract().await?;
        tracing::info!("Extracted {} cards", cards.len());
        self.monitor.log_stage("Extract");

        tracing::info!("Laying out grid...");
        let result = self.pipeline.transform(cards).await?;
        tracing::info!("Rendered {} bytes of grid markup", result.grid_html.len());
        self.monitor.log_stage("Transform");

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
