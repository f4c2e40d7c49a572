//! Converter configuration management.

use serde::Deserialize;

/// Converter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlovyConfig {
    /// Word output configuration.
    #[serde(default)]
    pub words: WordsConfig,
}

/// Word output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WordsConfig {
    /// Text placed between words.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    " ".to_string()
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

impl SlovyConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `SLOVY__*` environment variables (`SLOVY__WORDS__SEPARATOR`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("SLOVY")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
