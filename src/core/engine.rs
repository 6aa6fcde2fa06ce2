use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct AugmentEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AugmentEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting departure augmentation");

        let lines = self.pipeline.extract().await?;
        tracing::info!("Read {} lines", lines.len());

        let result = self.pipeline.transform(lines).await?;
        tracing::info!("Computed {} departure lines", result.departures_written);

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
