//! Host configuration loaded from `mist.toml` and `MIST_*` environment
//! variables.

use serde::{Deserialize, Serialize};

/// Root host configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Plugin loading settings.
    #[serde(default)]
    pub plugin: PluginConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Plugin loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Directory tried when a bare plugin file name is given.
    #[serde(default = "default_plugin_directory")]
    pub directory: String,
}

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl HostConfig {
    /// Load configuration from the TOML file named by `MIST_CONFIG`
    /// (default `mist.toml`, optional) merged with environment
    /// variables prefixed with `MIST_`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var("MIST_CONFIG").unwrap_or_else(|_| "mist".to_string());

        config::Config::builder()
            .add_source(config::File::with_name(&path).required(false))
            .add_source(
                config::Environment::with_prefix("MIST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            directory: default_plugin_directory(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_plugin_directory() -> String {
    "./plugins".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let host_config = HostConfig::default();
        assert_eq!(host_config.plugin.directory, "./plugins");
        assert_eq!(host_config.logging.level, "info");
        assert_eq!(host_config.logging.format, "pretty");
    }

    #[test]
    fn test_empty_sources_deserialize_to_defaults() {
        let empty = config::Config::builder().build().unwrap();
        let host_config: HostConfig = empty.try_deserialize().unwrap();
        assert_eq!(host_config.plugin.directory, "./plugins");
    }
}
