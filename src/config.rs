use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{ColorDepth, ExportFormat};

/// User configuration for quizdocx
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preview: PreviewConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Number of questions shown before "... and N more"
    pub limit: usize,
    pub color_depth: ColorDepth,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            limit: 3,
            color_depth: ColorDepth::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ExportFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Drop questions with empty options or an answer outside the options
    pub strict: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: ExportFormat::Ansi,
            pretty: true,
            strict: true,
        }
    }
}

impl Config {
    /// Load config from the config directory, or defaults if none exists
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the config directory
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::get_config_path() {
            self.save_to(&config_path)?;
        }

        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quizdocx").join("config.toml"))
    }

    /// Write the default config file
    pub fn init_default() -> Result<Option<PathBuf>> {
        Config::default().save()?;
        Ok(Self::get_config_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[preview]\nlimit = 5\n").unwrap();
        assert_eq!(config.preview.limit, 5);
        assert_eq!(config.preview.color_depth, ColorDepth::Auto);
        assert!(config.output.strict);
        assert_eq!(config.output.format, ExportFormat::Ansi);
    }

    #[test]
    fn test_enum_values() {
        let config: Config =
            toml::from_str("[preview]\ncolor_depth = \"8\"\n[output]\nformat = \"payload\"\n")
                .unwrap();
        assert_eq!(config.preview.color_depth, ColorDepth::Extended);
        assert_eq!(config.output.format, ExportFormat::Payload);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir()
            .join(format!("quizdocx-config-{}", std::process::id()))
            .join("config.toml");

        let mut config = Config::default();
        config.preview.limit = 10;
        config.output.pretty = false;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
