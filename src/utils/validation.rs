use crate::utils::error::{RenderError, Result};
use scraper::Selector;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_selector(field_name: &str, selector: &str) -> Result<()> {
    if selector.is_empty() {
        return Err(RenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: selector.to_string(),
            reason: "Selector cannot be empty".to_string(),
        });
    }

    match Selector::parse(selector) {
        Ok(_) => Ok(()),
        Err(e) => Err(RenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: selector.to_string(),
            reason: format!("Invalid CSS selector: {}", e),
        }),
    }
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(RenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension '{}' (allowed: {})",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(RenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        assert!(validate_path("input_path", "").is_err());
        assert!(validate_path("input_path", "./page.html").is_ok());
    }

    #[test]
    fn path_with_null_byte_is_rejected() {
        assert!(validate_path("output_path", "out\0put").is_err());
    }

    #[test]
    fn selector_must_parse() {
        assert!(validate_selector("block_selector", "div.design-support").is_ok());
        assert!(validate_selector("block_selector", "div..").is_err());
        assert!(validate_selector("block_selector", "").is_err());
    }

    #[test]
    fn output_extension_is_checked() {
        assert!(validate_file_extension("output_file", "grid.html", &["html", "htm"]).is_ok());
        assert!(validate_file_extension("output_file", "grid.htm", &["html", "htm"]).is_ok());
        assert!(validate_file_extension("output_file", "grid.pdf", &["html", "htm"]).is_err());
        assert!(validate_file_extension("output_file", "grid", &["html", "htm"]).is_err());
    }
}
