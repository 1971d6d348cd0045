use crate::batch::DEFAULT_COLUMN;
use crate::parser::vocabulary::{DEFAULT_CONNECTORS, DEFAULT_TITLES};
use crate::parser::Vocabulary;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub column: String,
    pub titles: Vec<String>,
    pub connectors: Vec<String>,
}

fn default_column() -> String {
    DEFAULT_COLUMN.to_string()
}

fn default_titles() -> Vec<String> {
    DEFAULT_TITLES.iter().map(|s| s.to_string()).collect()
}

fn default_connectors() -> Vec<String> {
    DEFAULT_CONNECTORS.iter().map(|s| s.to_string()).collect()
}

/// Keys present in one config file; absent keys leave the lower layer alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    pub column: Option<String>,
    pub titles: Option<Vec<String>>,
    pub connectors: Option<Vec<String>>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column: default_column(),
            titles: default_titles(),
            connectors: default_connectors(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        column: Option<String>,
        extra_titles: Vec<String>,
        extra_connectors: Vec<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "reading global config");
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(".namesplit.toml");
        if local_path.exists() {
            debug!(path = %local_path.display(), "reading local config");
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        Ok(config.apply_cli(column, extra_titles, extra_connectors))
    }

    /// Defaults overlaid with the keys set in the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(column) = layer.column {
            self.column = column;
        }
        if let Some(titles) = layer.titles {
            self.titles = titles;
        }
        if let Some(connectors) = layer.connectors {
            self.connectors = connectors;
        }
        self
    }

    fn apply_cli(
        mut self,
        column: Option<String>,
        extra_titles: Vec<String>,
        extra_connectors: Vec<String>,
    ) -> Self {
        if let Some(column) = column {
            self.column = column;
        }
        for title in extra_titles {
            if !self.titles.contains(&title) {
                self.titles.push(title);
            }
        }
        for connector in extra_connectors {
            if !self.connectors.contains(&connector) {
                self.connectors.push(connector);
            }
        }
        self
    }

    /// Vocabulary for the parser. Blank entries could never match a token
    /// and are dropped.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::new(
            non_blank(&self.titles, "title"),
            non_blank(&self.connectors, "connector"),
        )
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "namesplit").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn non_blank(words: &[String], kind: &str) -> Vec<String> {
    words
        .iter()
        .filter(|w| {
            let keep = !w.trim().is_empty();
            if !keep {
                warn!(kind, "ignoring blank vocabulary entry");
            }
            keep
        })
        .map(|w| w.trim().to_string())
        .collect()
}
