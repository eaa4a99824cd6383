//! User-defined provider aliases.
//!
//! The file lives at `~/.config/stratus/providers.json` unless
//! `STRATUS_PROVIDERS_PATH` points elsewhere:
//!
//! ```json
//! { "aliases": { "aws-eu": "aws", "lab": "openstack" } }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use stratus_types::ProviderId;
use stratus_util::config_file_path;
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the alias configuration path.
pub const PROVIDERS_PATH_ENV: &str = "STRATUS_PROVIDERS_PATH";

/// Default filename for the alias configuration.
pub const PROVIDERS_FILE_NAME: &str = "providers.json";

static ALIAS_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9._-]+$").expect("alias name regex should compile"));

/// Errors raised while loading or saving the alias configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid alias '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    /// Extra identifiers mapped to a built-in provider.
    #[serde(default)]
    pub aliases: IndexMap<String, ProviderId>,
}

impl SchemaConfig {
    /// Loads the configuration from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(&default_config_path())
    }

    /// Loads and validates the configuration at `path`. A missing file yields
    /// an empty configuration.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no provider alias configuration");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: SchemaConfig = serde_json::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), aliases = config.aliases.len(), "loaded provider aliases");
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for alias in self.aliases.keys() {
            validate_alias_name(alias)?;
        }
        Ok(())
    }
}

/// Validates one alias name.
pub fn validate_alias_name(alias: &str) -> Result<(), ConfigError> {
    if alias.is_empty() {
        return Err(ConfigError::InvalidAlias {
            alias: alias.to_string(),
            reason: "alias cannot be empty".to_string(),
        });
    }

    if !ALIAS_NAME_REGEX.is_match(alias) {
        return Err(ConfigError::InvalidAlias {
            alias: alias.to_string(),
            reason: "alias must contain only lowercase letters, numbers, dots, underscores, and hyphens".to_string(),
        });
    }

    if alias.parse::<ProviderId>().is_ok() {
        return Err(ConfigError::InvalidAlias {
            alias: alias.to_string(),
            reason: "alias shadows a built-in provider".to_string(),
        });
    }

    Ok(())
}

/// Get the default path for the alias configuration file.
pub fn default_config_path() -> PathBuf {
    config_file_path(PROVIDERS_PATH_ENV, PROVIDERS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = SchemaConfig::load_from_path(&dir.path().join("absent.json")).expect("load");
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn loads_aliases_in_file_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PROVIDERS_FILE_NAME);
        fs::write(&path, r#"{ "aliases": { "lab": "openstack", "aws-eu": "aws" } }"#).expect("write");
        let config = SchemaConfig::load_from_path(&path).expect("load");
        let pairs: Vec<_> = config.aliases.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(pairs, vec![("lab", ProviderId::Openstack), ("aws-eu", ProviderId::Aws)]);
    }

    #[test]
    fn unknown_target_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PROVIDERS_FILE_NAME);
        fs::write(&path, r#"{ "aliases": { "lab": "digitalocean" } }"#).expect("write");
        assert!(matches!(SchemaConfig::load_from_path(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn rejects_shadowing_and_malformed_names() {
        assert!(validate_alias_name("aws-eu").is_ok());
        for bad in ["", "AWS-EU", "my lab", "aws", "rackspace"] {
            assert!(
                matches!(validate_alias_name(bad), Err(ConfigError::InvalidAlias { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn save_then_load_preserves_aliases() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(PROVIDERS_FILE_NAME);
        let mut config = SchemaConfig::default();
        config.aliases.insert("lab".into(), ProviderId::Openstack);
        config.save_to_path(&path).expect("save");
        assert_eq!(SchemaConfig::load_from_path(&path).expect("load"), config);
    }

    #[test]
    fn default_path_honors_environment_override() {
        temp_env::with_var(PROVIDERS_PATH_ENV, Some("/srv/stratus/providers.json"), || {
            assert_eq!(default_config_path(), PathBuf::from("/srv/stratus/providers.json"));
        });
    }
}
