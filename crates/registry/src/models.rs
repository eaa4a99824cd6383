use indexmap::IndexMap;
use serde::Serialize;
use stratus_types::{AuthType, ProviderId, ProviderSchema};
use tracing::debug;

use crate::{ConfigError, SchemaConfig, SchemaError, alias_of, providers, schema_for};

/// A provider identifier resolved against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub provider: ProviderId,
    pub schema: &'static ProviderSchema,
}

/// One row of the provider listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProviderEntry {
    pub id: String,
    pub auth_type: AuthType,
    /// Identifier whose schema this entry reuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<ProviderId>,
    /// Whether the entry came from the user's alias configuration.
    pub user_defined: bool,
}

/// Built-in providers plus user aliases. Immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    aliases: IndexMap<String, ProviderId>,
}

impl SchemaRegistry {
    /// A registry knowing only the built-in providers.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Creates a registry from the alias configuration at the default path.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use stratus_registry::SchemaRegistry;
    ///
    /// let registry = SchemaRegistry::from_config().expect("load provider aliases");
    /// let resolved = registry.resolve("openstack").expect("built in");
    /// println!("{} fields", resolved.schema.fields.len());
    /// ```
    pub fn from_config() -> Result<Self, ConfigError> {
        Ok(Self::with_config(SchemaConfig::load()?))
    }

    pub fn with_config(config: SchemaConfig) -> Self {
        Self {
            aliases: config.aliases,
        }
    }

    /// Resolves an identifier, built-ins first and then user aliases.
    pub fn resolve(&self, provider_id: &str) -> Result<ResolvedProvider, SchemaError> {
        if let Ok(provider) = provider_id.parse::<ProviderId>() {
            return Ok(ResolvedProvider {
                provider,
                schema: schema_for(provider),
            });
        }

        let Some(provider) = self.aliases.get(provider_id).copied() else {
            return Err(SchemaError::UnknownProvider {
                provider: provider_id.to_string(),
            });
        };
        debug!(alias = provider_id, %provider, "resolved user-defined provider alias");
        Ok(ResolvedProvider {
            provider,
            schema: schema_for(provider),
        })
    }

    /// Every resolvable identifier: built-ins in table order, then aliases in
    /// configuration order.
    pub fn entries(&self) -> Vec<ProviderEntry> {
        let builtin = providers().map(|provider| ProviderEntry {
            id: provider.to_string(),
            auth_type: schema_for(provider).auth_type,
            alias_of: alias_of(provider),
            user_defined: false,
        });
        let user = self.aliases.iter().map(|(alias, provider)| ProviderEntry {
            id: alias.clone(),
            auth_type: schema_for(*provider).auth_type,
            alias_of: Some(*provider),
            user_defined: true,
        });
        builtin.chain(user).collect()
    }
}
