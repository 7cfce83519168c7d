// Markup parsing for design-support blocks: rows of cells in fixed
// positional order [title, description, link labels, link urls].

pub mod block;

pub use block::{cards_from_block, extract_cards, extract_cards_default, DEFAULT_BLOCK_SELECTOR};
