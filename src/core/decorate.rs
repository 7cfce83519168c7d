use crate::domain::model::Card;
use crate::parser;
use crate::render::{ElementRegistry, GRID_TAG};
use crate::utils::error::Result;
use serde_json::json;

/// Renders the grid element for a card list through the registry. The grid
/// markup is what replaces the host block's original content.
pub fn render_grid(cards: &[Card], registry: &ElementRegistry) -> Result<String> {
    let props = json!({ "cards": cards });
    registry.render(GRID_TAG, &props)
}

/// One-shot block decoration: extract card data from the block's rows and
/// render the replacement grid markup.
pub fn decorate_block(
    document: &str,
    block_selector: &str,
    registry: &ElementRegistry,
) -> Result<String> {
    let cards = parser::extract_cards(document, block_selector)?;
    render_grid(&cards, registry)
}

/// Decoration against the default design-support selector.
pub fn decorate(document: &str, registry: &ElementRegistry) -> Result<String> {
    let cards = parser::extract_cards_default(document)?;
    render_grid(&cards, registry)
}
