use crate::domain::model::Card;
use crate::domain::services;
use crate::utils::error::{RenderError, Result};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

/// Selector the hosting framework gives design-support blocks.
pub const DEFAULT_BLOCK_SELECTOR: &str = "div.design-support";

lazy_static! {
    static ref DEFAULT_BLOCK: Selector =
        Selector::parse(DEFAULT_BLOCK_SELECTOR).expect("default block selector parses");
}

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| RenderError::SelectorError {
        message: e.to_string(),
    })
}

/// Locates the first element matching `block_selector` and extracts one card
/// per row. A document with no matching block is a structural fault.
pub fn extract_cards(document: &str, block_selector: &str) -> Result<Vec<Card>> {
    let selector = parse_selector(block_selector)?;
    extract_with_selector(document, &selector, block_selector)
}

/// Extraction against the default design-support selector.
pub fn extract_cards_default(document: &str) -> Result<Vec<Card>> {
    extract_with_selector(document, &DEFAULT_BLOCK, DEFAULT_BLOCK_SELECTOR)
}

fn extract_with_selector(document: &str, selector: &Selector, shown: &str) -> Result<Vec<Card>> {
    let html = Html::parse_document(document);
    let block = html
        .select(selector)
        .next()
        .ok_or_else(|| RenderError::MarkupError {
            message: format!("no element matched selector '{}'", shown),
        })?;
    Ok(cards_from_block(block))
}

/// Reads an already-located block element: each element child is a row, each
/// row's element children are its cells.
pub fn cards_from_block(block: ElementRef) -> Vec<Card> {
    child_elements(block).map(card_from_row).collect()
}

fn card_from_row(row: ElementRef) -> Card {
    let cells: Vec<ElementRef> = child_elements(row).collect();

    let title = cells.first().map(cell_text).unwrap_or_default();
    let description = cells.get(1).map(cell_text).unwrap_or_default();

    // Links only exist when the label cell does; the URL cell on its own
    // contributes nothing.
    let links = match cells.get(2) {
        Some(label_cell) => {
            let labels = services::split_labels(&cell_text(label_cell));
            let urls = cells.get(3).map(|c| services::split_urls(&cell_text(c)));
            services::pair_links(&labels, urls.as_deref())
        }
        None => Vec::new(),
    };

    Card {
        title,
        description,
        links,
    }
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Link;

    fn block(rows: &str) -> String {
        format!(r#"<div class="design-support">{}</div>"#, rows)
    }

    #[test]
    fn row_with_two_cells_has_no_links() {
        let document = block("<div><div>Title</div><div>Description</div></div>");
        let cards = extract_cards_default(&document).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Title");
        assert_eq!(cards[0].description, "Description");
        assert!(cards[0].links.is_empty());
    }

    #[test]
    fn label_cell_without_url_cell_defaults_all_urls() {
        let document = block("<div><div>T</div><div>D</div><div>A, B, C</div></div>");
        let cards = extract_cards_default(&document).unwrap();
        assert_eq!(
            cards[0].links,
            vec![
                Link::new("A", "#"),
                Link::new("B", "#"),
                Link::new("C", "#"),
            ]
        );
    }

    #[test]
    fn urls_pair_positionally_and_short_lists_fall_back() {
        let document = block(
            "<div><div>T</div><div>D</div><div>A, B, C</div><div>x</div></div>\
             <div><div>U</div><div>E</div><div>A, B</div><div>x,y</div></div>",
        );
        let cards = extract_cards_default(&document).unwrap();
        assert_eq!(
            cards[0].links,
            vec![
                Link::new("A", "x"),
                Link::new("B", "#"),
                Link::new("C", "#"),
            ]
        );
        assert_eq!(cards[1].links, vec![Link::new("A", "x"), Link::new("B", "y")]);
    }

    #[test]
    fn missing_cells_degrade_to_empty_strings() {
        let document = block("<div><div>Only title</div></div><div></div>");
        let cards = extract_cards_default(&document).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Only title");
        assert_eq!(cards[0].description, "");
        assert_eq!(cards[1].title, "");
        assert!(cards[1].links.is_empty());
    }

    #[test]
    fn nested_markup_reads_as_concatenated_text() {
        let document = block("<div><div><p><strong>Bold</strong> title</p></div></div>");
        let cards = extract_cards_default(&document).unwrap();
        assert_eq!(cards[0].title, "Bold title");
    }

    #[test]
    fn url_cell_without_label_cell_is_ignored() {
        // Cell 3 requires cell 2 to be meaningful; a two-cell row parses the
        // same regardless of what a URL cell would have held.
        let document = block("<div><div>T</div><div>D</div></div>");
        let cards = extract_cards_default(&document).unwrap();
        assert!(cards[0].links.is_empty());
    }

    #[test]
    fn custom_selector_locates_the_block() {
        let document = r#"<main><section id="b"><div><div>T</div></div></section></main>"#;
        let cards = extract_cards(document, "section#b").unwrap();
        assert_eq!(cards[0].title, "T");
    }

    #[test]
    fn missing_block_is_a_markup_error() {
        let err = extract_cards_default("<main><p>no block here</p></main>").unwrap_err();
        assert!(matches!(err, RenderError::MarkupError { .. }));
    }

    #[test]
    fn invalid_selector_is_a_selector_error() {
        let err = extract_cards("<div></div>", "div..").unwrap_err();
        assert!(matches!(err, RenderError::SelectorError { .. }));
    }

    #[test]
    fn empty_block_yields_no_cards() {
        let cards = extract_cards_default(&block("")).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let document = block("<div><div>T</div><div>D</div><div>A</div><div>x</div></div>");
        let first = extract_cards_default(&document).unwrap();
        let second = extract_cards_default(&document).unwrap();
        assert_eq!(first, second);
    }
}
