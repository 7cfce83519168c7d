use crate::domain::model::{Card, GridLayout, Link};

/// The grid always lays cards out into exactly this many columns.
pub const COLUMN_COUNT: usize = 3;

/// Fallback destination for a link whose URL cell is absent or short.
pub const DEFAULT_LINK_URL: &str = "#";

/// Splits a comma-separated label cell: tokens trimmed, empties dropped.
pub fn split_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a comma-separated URL cell: tokens trimmed, empties kept so that
/// positional pairing with the label list stays intact.
pub fn split_urls(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).map(str::to_string).collect()
}

/// Pairs each label with the URL at the same position. A missing or empty
/// URL token falls back to `"#"`; extra URL tokens are unused.
pub fn pair_links(labels: &[String], urls: Option<&[String]>) -> Vec<Link> {
    labels
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let url = urls
                .and_then(|u| u.get(i))
                .filter(|u| !u.is_empty())
                .map(String::as_str)
                .unwrap_or(DEFAULT_LINK_URL);
            Link::new(text.clone(), url)
        })
        .collect()
}

/// Round-robin distribution: item `i` goes to bucket `i % COLUMN_COUNT`,
/// preserving relative order within each bucket.
pub fn partition_round_robin<T>(items: Vec<T>) -> Vec<Vec<T>> {
    let mut columns: Vec<Vec<T>> = (0..COLUMN_COUNT).map(|_| Vec::new()).collect();
    for (i, item) in items.into_iter().enumerate() {
        columns[i % COLUMN_COUNT].push(item);
    }
    columns
}

pub fn layout_cards(cards: Vec<Card>) -> GridLayout {
    GridLayout {
        columns: partition_round_robin(cards),
    }
}
