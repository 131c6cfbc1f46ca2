//! Configuration provider using Figment

use crate::{
    discovery::{ConfigFile, ConfigFormat, FileDiscovery},
    error::{ConfigResult, ConfigurationError},
    types::{FormsmithConfig, RawConfig},
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Prefix of environment variables read as configuration
pub const ENV_PREFIX: &str = "FORMSMITH_";

/// Loads configuration from every source in precedence order.
///
/// Sources, later overriding earlier:
/// 1. Built-in defaults
/// 2. Discovered files (global, then project)
/// 3. An explicit `--config` file, if any
/// 4. `FORMSMITH_*` environment variables
/// 5. Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
    explicit_file: Option<PathBuf>,
    label_strategy_override: Option<String>,
}

impl ConfigProvider {
    /// Create a provider using the standard discovery locations
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom file discovery
    pub fn with_discovery(mut self, discovery: FileDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    /// Load this file on top of the discovered ones
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Override `label_strategy` from the command line
    pub fn with_label_strategy(mut self, key: Option<String>) -> Self {
        self.label_strategy_override = key;
        self
    }

    /// Load and validate the configuration
    pub fn load(&self) -> ConfigResult<FormsmithConfig> {
        let raw = self.load_raw()?;
        let config = raw.validate()?;
        info!(
            label_strategy = %config.label_strategy,
            bundles = config.bundles.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load the merged configuration without validating it
    pub fn load_raw(&self) -> ConfigResult<RawConfig> {
        let figment = self.build_figment()?;
        let raw: RawConfig = figment.extract()?;
        debug!("Raw label strategy: {}", raw.label_strategy);
        Ok(raw)
    }

    fn build_figment(&self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(RawConfig::default()));

        for config_file in self.discovery.discover_all() {
            figment = figment.merge(file_provider(&config_file));
        }

        if let Some(path) = &self.explicit_file {
            figment = figment.merge(explicit_file_provider(path)?);
        }

        // Keys stay flat: FORMSMITH_LABEL_STRATEGY → label_strategy
        let env = Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into());
        figment = figment.merge(env);

        if let Some(key) = &self.label_strategy_override {
            trace!("Command-line label strategy override: {}", key);
            figment = figment.merge(Serialized::default("label_strategy", key));
        }

        Ok(figment)
    }
}

fn file_provider(config_file: &ConfigFile) -> Figment {
    trace!(
        "Loading config file: {} ({:?})",
        config_file.path.display(),
        config_file.format
    );
    let path = &config_file.path;
    match config_file.format {
        ConfigFormat::Toml => Figment::from(Toml::file(path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
        ConfigFormat::Json => Figment::from(Json::file(path)),
    }
}

fn explicit_file_provider(path: &Path) -> ConfigResult<Figment> {
    if !path.is_file() {
        return Err(ConfigurationError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    // Anything that is not JSON or YAML is read as TOML.
    let format = ConfigFormat::from_path(path).unwrap_or(ConfigFormat::Toml);
    Ok(file_provider(&ConfigFile {
        path: path.to_path_buf(),
        format,
        scope: crate::discovery::ConfigScope::Project,
    }))
}
