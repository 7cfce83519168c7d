use serde::{Deserialize, Serialize};

fn default_link_url() -> String {
    "#".to_string()
}

/// A single card link: visible label plus destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    #[serde(default = "default_link_url")]
    pub url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// One authored row of the block: title, description and optional links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Cards grouped into the fixed three-column layout, card `i` in column
/// `i % 3`, within-column order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: Vec<Vec<Card>>,
}

impl GridLayout {
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }
}

/// Output of the transform stage: the column layout plus the rendered grid
/// markup that replaces the block's content.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub layout: GridLayout,
    pub grid_html: String,
}
