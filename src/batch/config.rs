//! Settings loaded from `spanr.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::batch::parser::ParseOptions;
use crate::batch::runner::RunOptions;
use crate::graph::{GraphError, MSTMethod, Weight};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "spanr.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SpanrConfig {
    #[serde(default = "default_methods")]
    pub methods: Vec<MSTMethod>,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub min_weight: Option<Weight>,
    #[serde(default)]
    pub max_weight: Option<Weight>,
}

impl Default for SpanrConfig {
    fn default() -> Self {
        Self {
            methods: default_methods(),
            format: OutputFormat::default(),
            parallel: false,
            min_weight: None,
            max_weight: None,
        }
    }
}

impl SpanrConfig {
    /// Load a config file, falling back to defaults when it does not exist.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: SpanrConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Accepted weight interval, if either bound is set.
    ///
    /// A missing bound is open on that side.
    pub fn weight_range(&self) -> std::result::Result<Option<(Weight, Weight)>, GraphError> {
        if self.min_weight.is_none() && self.max_weight.is_none() {
            return Ok(None);
        }
        let min = self.min_weight.unwrap_or(Weight::MIN);
        let max = self.max_weight.unwrap_or(Weight::MAX);
        if min > max {
            return Err(GraphError::InvalidWeightRange { min, max });
        }
        Ok(Some((min, max)))
    }

    pub fn parse_options(&self) -> std::result::Result<ParseOptions, GraphError> {
        Ok(ParseOptions {
            weight_range: self.weight_range()?,
        })
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            methods: self.methods.clone(),
            parallel: self.parallel,
        }
    }
}

// Kruskal then Prim
fn default_methods() -> Vec<MSTMethod> {
    vec![MSTMethod::Kruskal, MSTMethod::Prim]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = SpanrConfig::load_from_file("/nonexistent/spanr.toml").unwrap();
        assert_eq!(config, SpanrConfig::default());
        assert_eq!(config.run_options(), RunOptions::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: SpanrConfig = toml::from_str(
            r#"
            methods = ["prim-forest", "exhaustive"]
            format = "json"
            min_weight = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.methods, vec![MSTMethod::PrimForest, MSTMethod::Exhaustive]);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.parallel);
        assert_eq!(config.weight_range().unwrap(), Some((1, Weight::MAX)));
    }

    #[test]
    fn test_inverted_range() {
        let config = SpanrConfig {
            min_weight: Some(20),
            max_weight: Some(1),
            ..SpanrConfig::default()
        };
        assert_eq!(
            config.parse_options().unwrap_err(),
            GraphError::InvalidWeightRange { min: 20, max: 1 }
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
