use crate::core::decorate;
use crate::core::{Card, ConfigProvider, LayoutResult, Pipeline, Storage};
use crate::domain::services;
use crate::parser;
use crate::render::{builtin_registry, ElementRegistry};
use crate::utils::error::Result;

/// Decoration pipeline over a stored document: extract cards from the block,
/// lay out and render the grid, write the replacement markup.
pub struct BlockPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    registry: ElementRegistry,
}

impl<S: Storage, C: ConfigProvider> BlockPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            registry: builtin_registry(),
        }
    }

    /// Injects a caller-owned registry instead of the builtin one.
    pub fn with_registry(storage: S, config: C, registry: ElementRegistry) -> Self {
        Self {
            storage,
            config,
            registry,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BlockPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Card>> {
        tracing::debug!("Reading document from: {}", self.config.input_path());
        let raw = self.storage.read_file(self.config.input_path()).await?;
        let document = String::from_utf8_lossy(&raw);

        tracing::debug!(
            "Locating block with selector: {}",
            self.config.block_selector()
        );
        let cards = parser::extract_cards(&document, self.config.block_selector())?;
        tracing::debug!("Block yielded {} rows", cards.len());
        Ok(cards)
    }

    async fn transform(&self, cards: Vec<Card>) -> Result<LayoutResult> {
        let grid_html = decorate::render_grid(&cards, &self.registry)?;
        let layout = services::layout_cards(cards);
        tracing::debug!(
            "Laid out {} cards across {} columns",
            layout.card_count(),
            layout.columns.len()
        );
        Ok(LayoutResult { layout, grid_html })
    }

    async fn load(&self, result: LayoutResult) -> Result<String> {
        let output_path = format!(
            "{}/{}",
            self.config.output_path(),
            self.config.output_file()
        );

        tracing::debug!(
            "Writing {} bytes of grid markup to {}",
            result.grid_html.len(),
            output_path
        );
        self.storage
            .write_file(&output_path, result.grid_html.as_bytes())
            .await?;

        Ok(output_path)
    }
}
