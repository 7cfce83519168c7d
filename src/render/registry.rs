use crate::utils::error::{RenderError, Result};
use serde_json::Value;
use std::collections::HashMap;

/// A presentational element: renders its markup from a property map. The
/// registry is passed back in so container elements can delegate to nested
/// elements by tag name.
pub trait Element: Send + Sync {
    fn tag_name(&self) -> &'static str;
    fn render(&self, props: &Value, registry: &ElementRegistry) -> Result<String>;
}

/// Explicit tag-name → renderer table. Defining the same tag twice is an
/// error; callers inject their own registry in tests.
#[derive(Default)]
pub struct ElementRegistry {
    elements: HashMap<&'static str, Box<dyn Element>>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
        }
    }

    pub fn define(&mut self, element: Box<dyn Element>) -> Result<()> {
        let tag = element.tag_name();
        if self.elements.contains_key(tag) {
            return Err(RenderError::ElementError {
                tag: tag.to_string(),
                reason: "tag is already defined".to_string(),
            });
        }
        self.elements.insert(tag, element);
        Ok(())
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.elements.contains_key(tag)
    }

    pub fn render(&self, tag: &str, props: &Value) -> Result<String> {
        match self.elements.get(tag) {
            Some(element) => element.render(props, self),
            None => Err(RenderError::ElementError {
                tag: tag.to_string(),
                reason: "tag is not defined".to_string(),
            }),
        }
    }
}

/// Registry with the two design-support elements defined.
pub fn builtin_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();
    // Both inserts hit an empty table, so neither can collide.
    registry
        .define(Box::new(super::CardElement))
        .expect("builtin card tag is distinct");
    registry
        .define(Box::new(super::GridElement))
        .expect("builtin grid tag is distinct");
    registry
}
