//! Configuration module for Vitrine
//!
//! Resolution order:
//! 1. Environment variables (VITRINE_*)
//! 2. Project config (./vitrine.toml)
//! 3. User config (~/.config/vitrine/config.toml)
//! 4. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{VitrineError, VitrineResult};

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "vitrine.toml";

/// Store branding shown in the session banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            tagline: default_tagline(),
        }
    }
}

fn default_store_name() -> String {
    "Vitrine".to_string()
}

fn default_tagline() -> String {
    "Catálogo de Atacado | Coleção Atual".to_string()
}

/// Recipient identifiers for the order hand-off links
///
/// `whatsapp` is the full number with country and area codes, digits only.
/// Both default to empty; the order view nudges the operator to fill them
/// in before sharing links.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    #[serde(default)]
    pub whatsapp: String,

    #[serde(default)]
    pub email: String,
}

/// Catalog source and gallery layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// CSV product source, relative to the working directory
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Directory holding the product image assets
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Gallery tiles per row
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Soft cap applied by the quantity prompt (not a cart invariant)
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            assets_dir: default_assets_dir(),
            columns: default_columns(),
            max_quantity: default_max_quantity(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("produtos.csv")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_columns() -> usize {
    3
}

fn default_max_quantity() -> u32 {
    1000
}

/// Output preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Never,
    #[default]
    Auto,
    Always,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> VitrineResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> VitrineResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| VitrineError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        if let Some(root) = project_root {
            let project_config = root.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                if let Ok(config) = Self::load(&project_config) {
                    return config.with_env_overrides();
                }
            }
        }

        if let Some(user_config_dir) = dirs::config_dir() {
            let user_config = user_config_dir.join("vitrine/config.toml");
            if user_config.exists() {
                if let Ok(config) = Self::load(&user_config) {
                    return config.with_env_overrides();
                }
            }
        }

        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides (VITRINE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        self.with_env_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_env_overrides_from(mut self, get_env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(number) = get_env("VITRINE_WHATSAPP") {
            self.contact.whatsapp = number;
        }

        if let Some(address) = get_env("VITRINE_EMAIL") {
            self.contact.email = address;
        }

        if let Some(source) = get_env("VITRINE_SOURCE") {
            self.catalog.source = PathBuf::from(source);
        }

        if let Some(mode) = get_env("VITRINE_COLOR") {
            self.output.color = match mode.to_lowercase().as_str() {
                "never" => ColorMode::Never,
                "always" => ColorMode::Always,
                _ => ColorMode::Auto,
            };
        }

        self
    }
}
