use crate::domain::model::Card;
use crate::domain::services::partition_round_robin;
use crate::render::registry::{Element, ElementRegistry};
use crate::render::{CARD_TAG, GRID_TAG};
use crate::utils::error::Result;

/// Grid container: partitions the bound card list into three columns by
/// round-robin on each render pass and delegates every card to the registry.
pub struct GridElement;

impl Element for GridElement {
    fn tag_name(&self) -> &'static str {
        GRID_TAG
    }

    fn render(&self, props: &serde_json::Value, registry: &ElementRegistry) -> Result<String> {
        let cards: Vec<Card> = match props.get("cards") {
            Some(value) => serde_json::from_value(value.clone())?,
            None => Vec::new(),
        };

        let columns = partition_round_robin(cards);

        let mut html = String::new();
        html.push_str(&format!("<{}>", GRID_TAG));
        html.push_str("<div class=\"cmp_design-support__grid\">");
        for column in columns {
            html.push_str("<div class=\"cmp_design-support__column\">");
            for card in column {
                let card_props = serde_json::to_value(&card)?;
                html.push_str(&registry.render(CARD_TAG, &card_props)?);
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html.push_str(&format!("</{}>", GRID_TAG));
        Ok(html)
    }
}
