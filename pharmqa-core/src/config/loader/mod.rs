use crate::config::constants::paths;
use crate::config::core::{AgentConfig, LoggingConfig, SessionConfig};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for PharmQA
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PharmQaConfig {
    /// Model backend settings
    #[serde(default)]
    pub agent: AgentConfig,

    /// Interaction settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Diagnostics settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PharmQaConfig {
    /// Write the default configuration to `<workspace>/pharmqa.toml`.
    ///
    /// Returns the written path. Refuses to overwrite an existing file unless
    /// `force` is set.
    pub fn bootstrap_project<P: AsRef<Path>>(workspace: P, force: bool) -> Result<PathBuf> {
        let config_path = workspace.as_ref().join(paths::CONFIG_FILE_NAME);
        if config_path.exists() && !force {
            bail!(
                "{} already exists; pass --force to overwrite it",
                config_path.display()
            );
        }
        Self::create_sample_config(&config_path)?;
        Ok(config_path)
    }

    /// Create sample configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let config_content = toml::to_string_pretty(&PharmQaConfig::default())
            .context("Failed to serialize default configuration")?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Configuration manager for loading configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PharmQaConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Get the user's home directory path
    fn get_home_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home));
        }

        if let Ok(userprofile) = std::env::var("USERPROFILE") {
            return Some(PathBuf::from(userprofile));
        }

        dirs::home_dir()
    }

    /// Load configuration from a specific workspace.
    ///
    /// Search order: `<workspace>/pharmqa.toml`, `<workspace>/.pharmqa/pharmqa.toml`,
    /// `~/.pharmqa/pharmqa.toml`. Falls back to defaults when none exists.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        Self::search(workspace.as_ref(), Self::get_home_dir().as_deref())
    }

    fn search(workspace: &Path, home: Option<&Path>) -> Result<Self> {
        let mut candidates = vec![
            workspace.join(paths::CONFIG_FILE_NAME),
            workspace
                .join(paths::CONFIG_DIR_NAME)
                .join(paths::CONFIG_FILE_NAME),
        ];
        if let Some(home) = home {
            candidates.push(
                home.join(paths::CONFIG_DIR_NAME)
                    .join(paths::CONFIG_FILE_NAME),
            );
        }

        for path in candidates {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self {
            config: PharmQaConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PharmQaConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &PharmQaConfig {
        &self.config
    }

    /// Mutable access for command-line overrides
    pub fn config_mut(&mut self) -> &mut PharmQaConfig {
        &mut self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
