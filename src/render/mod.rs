// Presentational elements. Markup and class names mirror the design-support
// block contract: external stylesheets key off the cmp_design-support__*
// classes and the headline/body typographic tokens.

pub mod card;
pub mod grid;
pub mod registry;

pub use card::CardElement;
pub use grid::GridElement;
pub use registry::{builtin_registry, Element, ElementRegistry};

/// Tag the card element registers under.
pub const CARD_TAG: &str = "design-support-card";

/// Tag the grid container element registers under.
pub const GRID_TAG: &str = "design-support-grid";

/// Escapes text content for interpolation between tags.
pub(crate) fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a value for interpolation inside a double-quoted attribute.
pub(crate) fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escaping_covers_markup_characters() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn attr_escaping_also_covers_quotes() {
        assert_eq!(escape_attr(r#"x"y"#), "x&quot;y");
        assert_eq!(escape_attr("https://example.com?a=1&b=2"), "https://example.com?a=1&amp;b=2");
    }
}
