use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    /// Base address of the external contact API. When absent the workflow
    /// runs in local simulation mode instead of calling out.
    pub base: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., GENIUS__API__BASE)
            .add_source(Environment::with_prefix("GENIUS").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Config pointing at an explicit API base, for tests and tooling.
    pub fn with_api_base(base: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base: Some(base.into()),
            },
        }
    }
}
