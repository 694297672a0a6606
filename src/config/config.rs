//! Config file handling

use std::path::{Path, PathBuf};

use crate::codegen::{is_valid_type_name, RenderOptions, DEFAULT_TYPE_NAME};
use crate::context::Environment;
use crate::errors::ConvertError;
use crate::output::DEFAULT_GOFMT;

/// curl-to-go configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub config_dir: PathBuf,
    pub banner: bool,
    pub standalone: bool,
    pub type_name: String,
    pub gofmt: bool,
    /// Formatter executable used when `gofmt` is on
    pub gofmt_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            banner: true,
            standalone: false,
            type_name: DEFAULT_TYPE_NAME.to_string(),
            gofmt: false,
            gofmt_program: DEFAULT_GOFMT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the config file (TOML format)
    pub fn load(env: &Environment) -> Result<Self, ConvertError> {
        let config_dir = env
            .config_dir
            .clone()
            .unwrap_or_else(Self::default_config_dir);
        Self::load_from(&config_dir)
    }

    /// Load `config.toml` from `config_dir`; a missing file yields defaults
    pub fn load_from(config_dir: &Path) -> Result<Self, ConvertError> {
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self {
                config_dir: config_dir.to_path_buf(),
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| ConvertError::Config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::parse(&content)?;
        config.config_dir = config_dir.to_path_buf();
        Ok(config)
    }

    /// Parse config TOML; unknown keys are ignored
    pub fn parse(content: &str) -> Result<Self, ConvertError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| ConvertError::Config(format!("Invalid config TOML: {}", e)))?;

        let defaults = Self::default();
        let output = toml_value.get("output");
        let get_bool = |key: &str, default: bool| {
            output
                .and_then(|o| o.get(key))
                .and_then(|v| v.as_bool())
                .unwrap_or(default)
        };
        let get_str = |key: &str, default: &str| {
            output
                .and_then(|o| o.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or(default)
                .to_string()
        };

        let type_name = get_str("type_name", &defaults.type_name);
        if !is_valid_type_name(&type_name) {
            return Err(ConvertError::Config(format!(
                "output.type_name `{}` is not a usable Go type name",
                type_name
            )));
        }

        Ok(Self {
            banner: get_bool("banner", defaults.banner),
            standalone: get_bool("standalone", defaults.standalone),
            type_name,
            gofmt: get_bool("gofmt", defaults.gofmt),
            gofmt_program: get_str("gofmt_program", &defaults.gofmt_program),
            config_dir: defaults.config_dir,
        })
    }

    /// Render options carried by this config
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            type_name: self.type_name.clone(),
            banner: self.banner,
            standalone: self.standalone,
        }
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("curl-to-go"))
            .unwrap_or_else(|| PathBuf::from(".curl-to-go"))
    }
}
