use crate::domain::model::Card;
use crate::render::registry::{Element, ElementRegistry};
use crate::render::{escape_attr, escape_text, CARD_TAG};
use crate::utils::error::Result;

/// Card renderer: heading, body text, and a divider plus link list only when
/// at least one link exists.
pub struct CardElement;

impl Element for CardElement {
    fn tag_name(&self) -> &'static str {
        CARD_TAG
    }

    fn render(&self, props: &serde_json::Value, _registry: &ElementRegistry) -> Result<String> {
        let card: Card = serde_json::from_value(props.clone())?;
        Ok(render_card(&card))
    }
}

fn render_card(card: &Card) -> String {
    let mut html = String::new();
    html.push_str(&format!("<{}>", CARD_TAG));
    html.push_str("<div class=\"cmp_design-support__card\">");
    html.push_str(&format!(
        "<h3 class=\"cmp_design-support__title headline-5\">{}</h3>",
        escape_text(&card.title)
    ));
    html.push_str(&format!(
        "<p class=\"cmp_design-support__desc body-2\">{}</p>",
        escape_text(&card.description)
    ));

    if !card.links.is_empty() {
        html.push_str("<div class=\"cmp_design-support__divider\"></div>");
        html.push_str("<ul class=\"cmp_design-support__links\">");
        for link in &card.links {
            html.push_str(&format!(
                "<li><a href=\"{}\" class=\"headline-6\">{}</a></li>",
                escape_attr(&link.url),
                escape_text(&link.text)
            ));
        }
        html.push_str("</ul>");
    }

    html.push_str("</div>");
    html.push_str(&format!("</{}>", CARD_TAG));
    html
}
