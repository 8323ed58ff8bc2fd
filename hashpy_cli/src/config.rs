use crate::theme::ThemeName;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use hashpy_core::DEFAULT_LOG_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub theme: ThemeName,
    pub animations_enabled: bool,
    pub typing_delay_ms: u64,
    pub progress_duration_ms: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub log_file: PathBuf,
    pub color_enabled: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            animations_enabled: true,
            typing_delay_ms: 30,
            progress_duration_ms: 800,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            color_enabled: true,
        }
    }
}

impl AppConfig {
    /// Apply CLI argument overrides to the configuration
    pub fn apply_cli_overrides(&mut self, theme: Option<ThemeName>, no_animation: bool) {
        if let Some(theme) = theme {
            self.shell.theme = theme;
        }
        if no_animation {
            self.shell.animations_enabled = false;
        }
    }
}

/// Configuration manager that handles XDG-compliant paths and layered configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with default XDG-compliant paths
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn get_config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Get the default XDG-compliant configuration path
    fn default_config_path() -> PathBuf {
        #[cfg(not(target_os = "windows"))]
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("hashpy/config.toml");
        }

        dirs::config_dir()
            .map(|d| d.join("hashpy").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".hashpy/config.toml"))
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    ///
    /// CLI flags are applied afterwards by the caller.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            log::debug!("Loading config file {}", self.config_path.display());
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed("HASHPY_").split("__"));

        figment.extract().context("Failed to load configuration")
    }

    /// Get a configuration value by key (dot notation)
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.load()?;
        let toml_string = toml::to_string(&config)?;
        let value: toml::Value = toml::from_str(&toml_string)?;

        let mut current = &value;
        for part in key.split('.') {
            match current {
                toml::Value::Table(table) => {
                    current = table
                        .get(part)
                        .ok_or_else(|| anyhow::anyhow!("Key '{}' not found", key))?;
                }
                _ => anyhow::bail!("Invalid key path: {}", key),
            }
        }

        match current {
            toml::Value::String(s) => Ok(s.clone()),
            toml::Value::Integer(i) => Ok(i.to_string()),
            toml::Value::Boolean(b) => Ok(b.to_string()),
            _ => anyhow::bail!("Value at '{}' is not a simple type", key),
        }
    }

    /// Set a configuration value by key (dot notation) in the config file
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed_value = Self::parse_config_value(key, value)?;

        let mut config = if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path)?;
            toml::from_str(&content)?
        } else {
            toml::Value::Table(toml::map::Map::new())
        };

        let Some((section, field)) = key.split_once('.') else {
            anyhow::bail!("Key must have the form <section>.<field>: {}", key);
        };

        let toml::Value::Table(root) = &mut config else {
            anyhow::bail!("Config file root is not a table");
        };
        if !root.contains_key(section) {
            root.insert(
                section.to_string(),
                toml::Value::Table(toml::map::Map::new()),
            );
        }
        let Some(toml::Value::Table(table)) = root.get_mut(section) else {
            anyhow::bail!("Invalid key path: expected table at '{}'", section);
        };
        table.insert(field.to_string(), parsed_value);

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(&config)?;
        fs::write(&self.config_path, toml_string)?;

        Ok(())
    }

    /// List all configuration values
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        let config = self.load()?;
        let toml_string = toml::to_string(&config)?;
        let value: toml::Value = toml::from_str(&toml_string)?;

        let mut items = Vec::new();
        Self::collect_values(&value, String::new(), &mut items);
        items.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(items)
    }

    /// Recursively collect all key-value pairs from TOML
    fn collect_values(value: &toml::Value, prefix: String, items: &mut Vec<(String, String)>) {
        match value {
            toml::Value::Table(table) => {
                for (key, val) in table {
                    let new_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    Self::collect_values(val, new_prefix, items);
                }
            }
            toml::Value::String(s) => items.push((prefix, s.clone())),
            toml::Value::Integer(i) => items.push((prefix, i.to_string())),
            toml::Value::Boolean(b) => items.push((prefix, b.to_string())),
            _ => {}
        }
    }

    /// Parse and validate a value for `key`
    fn parse_config_value(key: &str, value: &str) -> Result<toml::Value> {
        match key {
            "shell.theme" => {
                let theme = value.trim().to_lowercase();
                if theme != "dark" && theme != "light" {
                    anyhow::bail!("theme must be 'dark' or 'light'");
                }
                Ok(toml::Value::String(theme))
            }
            "shell.typing_delay_ms" | "shell.progress_duration_ms" => {
                let millis: u32 = value
                    .parse()
                    .context("Expected a non-negative number of milliseconds")?;
                Ok(toml::Value::Integer(i64::from(millis)))
            }
            "shell.animations_enabled" | "output.color_enabled" => {
                let bool_val: bool = value
                    .parse()
                    .context("Expected boolean value (true/false)")?;
                Ok(toml::Value::Boolean(bool_val))
            }
            "output.log_file" => {
                if value.trim().is_empty() {
                    anyhow::bail!("log_file must not be empty");
                }
                Ok(toml::Value::String(value.to_string()))
            }
            _ => anyhow::bail!("Unknown configuration key: {}", key),
        }
    }
}

/// Load configuration from `path`, or from the default location
pub fn get_config(path: Option<PathBuf>) -> Result<AppConfig> {
    path.map(ConfigManager::with_path)
        .unwrap_or_default()
        .load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.shell.theme, ThemeName::Dark);
        assert!(config.shell.animations_enabled);
        assert_eq!(config.shell.typing_delay_ms, 30);
        assert_eq!(config.shell.progress_duration_ms, 800);
        assert_eq!(config.output.log_file, PathBuf::from("hash_py_output.txt"));
        assert!(config.output.color_enabled);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(Some(ThemeName::Light), true);

        assert_eq!(config.shell.theme, ThemeName::Light);
        assert!(!config.shell.animations_enabled);
    }

    #[test]
    fn test_no_overrides_keep_values() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(None, false);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        assert!(ConfigManager::parse_config_value("shell.colour", "red").is_err());
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(
            ConfigManager::parse_config_value("shell.theme", "Light").unwrap(),
            toml::Value::String("light".to_string())
        );
        assert!(ConfigManager::parse_config_value("shell.theme", "neon").is_err());
    }
}
