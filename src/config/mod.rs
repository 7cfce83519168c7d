pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::parser::DEFAULT_BLOCK_SELECTOR;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_selector, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Default name for the rendered grid file.
pub const DEFAULT_OUTPUT_FILE: &str = "design-support.html";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cardgrid")]
#[command(about = "Renders design-support blocks into a three-column card grid")]
pub struct CliConfig {
    #[arg(long, default_value = "./page.html")]
    pub input_path: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_BLOCK_SELECTOR)]
    pub block_selector: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Report process stats after the run")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn block_selector(&self) -> &str {
        &self.block_selector
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_selector("block_selector", &self.block_selector)?;
        validate_file_extension("output_file", &self.output_file, &["html", "htm"])?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            input_path: "./page.html".to_string(),
            output_path: "./output".to_string(),
            block_selector: DEFAULT_BLOCK_SELECTOR.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            verbose: false,
            monitor: false,
            log_json: false,
        }
    }

    #[test]
    fn default_shape_validates() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn bad_selector_fails_validation() {
        let mut config = base_config();
        config.block_selector = "div..".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_html_output_file_fails_validation() {
        let mut config = base_config();
        config.output_file = "grid.zip".to_string();
        assert!(config.validate().is_err());
    }
}
