//! Cadastro configuration
//!
//! A `cadastro.yaml` file holds the permission catalog, named templates,
//! and logging defaults for the CLI.

use crate::error::{Error, Result};
use crate::permission::{PermissionCatalog, PermissionTemplate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in a directory
pub const CONFIG_FILE: &str = "cadastro.yaml";

/// Root configuration (`cadastro.yaml`)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CadastroConfig {
    /// Schema version for migrations
    pub version: u32,

    /// Logging defaults
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Permission catalog and templates
    #[serde(default)]
    pub permissions: PermissionsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LoggingConfig {
    /// Filter used when `CADASTRO_LOG` is unset (e.g. `warn`, `cadastro=debug`)
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Permission catalog and the templates built on it
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PermissionsConfig {
    /// Every grantable permission
    #[serde(default)]
    pub catalog: PermissionCatalog,

    /// Named starting selections
    #[serde(default)]
    pub templates: Vec<PermissionTemplate>,
}

impl CadastroConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: CadastroConfig = serde_norway::from_str(content)?;

        if config.version != 1 {
            return Err(Error::Config(format!(
                "Unsupported {} version: {}",
                CONFIG_FILE, config.version
            )));
        }

        Ok(config)
    }

    /// Load configuration from an explicit path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(
            path = %path.display(),
            permissions = config.permissions.catalog.len(),
            templates = config.permissions.templates.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Load `cadastro.yaml` from a directory, if present
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_file = dir.join(CONFIG_FILE);
        if !config_file.exists() {
            return Ok(None);
        }
        Self::load(&config_file).map(Some)
    }

    /// Search `start` and its parents for `cadastro.yaml`
    pub fn find(start: &Path) -> Result<Option<(PathBuf, Self)>> {
        for dir in start.ancestors() {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.exists() {
                let config = Self::load(&candidate)?;
                return Ok(Some((candidate, config)));
            }
        }
        tracing::debug!(start = %start.display(), "no {} found", CONFIG_FILE);
        Ok(None)
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.permissions.catalog
    }

    /// Look up a template by id
    pub fn template(&self, id: &str) -> Result<&PermissionTemplate> {
        self.permissions
            .templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::UnknownTemplate(id.to_string()))
    }
}
