use anyhow::{Context, Result};
use config_rs::{Config as ConfigBuilder, Environment, File};
use segy::ByteOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Comparison settings
    #[serde(default)]
    pub compare: CompareConfig,

    /// Trace file format settings
    #[serde(default)]
    pub format: FormatConfig,
}

/// Configuration for the comparison itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Fractional difference allowed between samples (default: 1.0e-4)
    #[serde(default = "default_limit")]
    pub limit: f32,
}

/// Configuration for reading trace files
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormatConfig {
    /// Byte order of the `ns` field and samples (default: native)
    #[serde(default)]
    pub byte_order: ByteOrder,
}

fn default_limit() -> f32 {
    1.0e-4
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

impl Config {
    /// Load Config with layered configuration priority:
    /// 1. Default values
    /// 2. TOML file (the given path, else the user config file if it exists)
    /// 3. Environment variables (SUCMP_COMPARE__LIMIT, SUCMP_FORMAT__BYTE_ORDER)
    pub fn load(config_file: Option<&str>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder()
            .set_default("compare.limit", default_limit() as f64)?
            .set_default("format.byte_order", ByteOrder::default().to_string())?;

        match config_file {
            Some(file_path) => {
                let path = Path::new(file_path);
                if !path.exists() {
                    anyhow::bail!("Configuration file not found: {}", path.display());
                }
                builder = builder.add_source(File::from(path));
            }
            None => {
                if let Some(path) = user_config_path().filter(|p| p.exists()) {
                    builder = builder.add_source(File::from(path));
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("SUCMP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Load Config from a TOML file
    ///
    /// Environment variables can still override values from the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .with_context(|| format!("Configuration path is not UTF-8: {}", path.display()))?;
        Self::load(Some(path_str))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.compare.validate()
    }
}

impl CompareConfig {
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.limit.is_finite(),
            "compare.limit must be a finite number, got {}",
            self.limit
        );
        anyhow::ensure!(
            self.limit >= 0.0,
            "compare.limit cannot be negative, got {}",
            self.limit
        );
        Ok(())
    }
}

/// Location of the per-user configuration file, e.g. `~/.config/sucmp/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sucmp").join("config.toml"))
}
