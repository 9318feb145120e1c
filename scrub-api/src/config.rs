use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use shared_types::ScrubOptions;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScrubConfig {
    pub server: Option<ServerConfig>,
    pub cors: Option<CorsConfig>,
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub defaults: ScrubOptions,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            server: Some(ServerConfig::default()),
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            output: None,
            defaults: ScrubOptions::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// Where the CLI writes result files; the system temp dir when unset
    pub directory: Option<PathBuf>,
}

impl ScrubConfig {
    /// Load from the default config path, writing a default file first if none exists
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            let default_config = toml::to_string_pretty(&ScrubConfig::default())
                .map_err(|e| ConfigError::Message(format!("Failed to render default config: {e}")))?;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    /// Load from a specific file, overlaid with `SCRUB__SECTION__KEY` environment variables
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .add_source(
                Environment::with_prefix("SCRUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        builder.try_deserialize()
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn output_directory(&self) -> PathBuf {
        self.output
            .as_ref()
            .and_then(|o| o.directory.clone())
            .unwrap_or_else(std::env::temp_dir)
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("email-scrub").join("scrub.toml")
    } else {
        PathBuf::from("scrub.toml")
    }
}
