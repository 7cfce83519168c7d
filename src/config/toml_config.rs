use crate::config::DEFAULT_OUTPUT_FILE;
use crate::core::ConfigProvider;
use crate::parser::DEFAULT_BLOCK_SELECTOR;
use crate::utils::error::{RenderError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_selector, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub extract: ExtractConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub block_selector: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(RenderError::ConfigError {
                message: format!("Configuration file not found: {}", path),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn block_selector(&self) -> &str {
        self.extract
            .block_selector
            .as_deref()
            .unwrap_or(DEFAULT_BLOCK_SELECTOR)
    }

    fn output_file(&self) -> &str {
        self.load.filename.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if self.source.r#type != "file" {
            return Err(RenderError::InvalidConfigValueError {
                field: "source.type".to_string(),
                value: self.source.r#type.clone(),
                reason: "only 'file' sources are supported".to_string(),
            });
        }

        validate_path("source.path", &self.source.path)?;
        validate_path("load.output_path", &self.load.output_path)?;

        if let Some(selector) = &self.extract.block_selector {
            validate_selector("extract.block_selector", selector)?;
        }

        if let Some(filename) = &self.load.filename {
            validate_file_extension("load.filename", filename, &["html", "htm"])?;
        }

        Ok(())
    }
}
