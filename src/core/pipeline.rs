use crate::core::{AugmentResult, ConfigProvider, DepartureRules, Pipeline, Storage};
use crate::domain::model::{augment, split_retaining_newlines};
use crate::utils::error::{AugmentError, Result};

pub struct DeparturePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    rules: DepartureRules,
}

impl<S: Storage, C: ConfigProvider> DeparturePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_rules(storage, config, DepartureRules::default())
    }

    pub fn with_rules(storage: S, config: C, rules: DepartureRules) -> Self {
        Self {
            storage,
            config,
            rules,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DeparturePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let path = self.config.input_file();
        tracing::debug!("Reading map file: {}", path);

        let bytes = self.storage.read_file(path).await?;
        let content =
            std::str::from_utf8(&bytes).map_err(|source| AugmentError::Utf8Error {
                path: path.to_string(),
                source,
            })?;

        Ok(split_retaining_newlines(content))
    }

    async fn transform(&self, lines: Vec<String>) -> Result<AugmentResult> {
        augment(&lines, &self.rules)
    }

    async fn load(&self, result: AugmentResult) -> Result<String> {
        let output_name = format!(
            "{}{}",
            self.config.output_prefix(),
            self.config.input_file()
        );

        tracing::debug!(
            "Writing {} lines to: {}",
            result.lines.len(),
            output_name
        );
        let data = result.lines.concat();
        self.storage.write_file(&output_name, data.as_bytes()).await?;

        Ok(output_name)
    }
}
