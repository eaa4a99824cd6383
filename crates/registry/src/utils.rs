use stratus_types::{ProviderId, ProviderSchema};
use thiserror::Error;
use tracing::debug;

use crate::providers::SCHEMA_TABLE;

/// Failure to find a schema for a provider identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("could not find schema for: {provider}")]
    UnknownProvider { provider: String },
}

/// Loads the schema registered for `provider_id`.
///
/// The table is scanned in order and the first exact, case-sensitive match is
/// returned. There is no fallback: a miss is an error the caller must handle.
///
/// # Examples
///
/// ```rust
/// use stratus_registry::load_schema;
///
/// let schema = load_schema("aws-gov").expect("aws-gov is built in");
/// assert_eq!(schema.fields[0].key, "access-key");
/// assert!(load_schema("localhost").is_err());
/// ```
pub fn load_schema(provider_id: &str) -> Result<&'static ProviderSchema, SchemaError> {
    let schema = SCHEMA_TABLE
        .iter()
        .find(|(id, _)| id.as_str() == provider_id)
        .map(|(_, schema)| *schema)
        .ok_or_else(|| SchemaError::UnknownProvider {
            provider: provider_id.to_string(),
        })?;
    debug!(provider = provider_id, fields = schema.fields.len(), "loaded provider schema");
    Ok(schema)
}

/// Provider identifiers in table order.
pub fn providers() -> impl Iterator<Item = ProviderId> {
    SCHEMA_TABLE.iter().map(|(id, _)| *id)
}

/// The first provider in table order sharing `provider`'s schema.
///
/// Returns `None` when `provider` itself is the canonical entry.
pub fn alias_of(provider: ProviderId) -> Option<ProviderId> {
    let schema = crate::schema_for(provider);
    SCHEMA_TABLE
        .iter()
        .find(|(_, candidate)| std::ptr::eq(*candidate, schema))
        .map(|(id, _)| *id)
        .filter(|canonical| *canonical != provider)
}

/// Whether `provider` reuses the schema of an earlier table entry.
pub fn is_alias(provider: ProviderId) -> bool {
    alias_of(provider).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_provider_has_fields() {
        for id in providers() {
            let schema = load_schema(id.as_str()).expect("registered provider loads");
            assert!(!schema.fields.is_empty(), "{id} has no fields");
        }
    }

    #[test]
    fn unknown_provider_is_an_error() {
        for id in ["", "localhost", "AWS", "aws ", "manual", "azure-gov"] {
            assert_eq!(
                load_schema(id),
                Err(SchemaError::UnknownProvider { provider: id.to_string() }),
                "{id:?} should not resolve"
            );
        }
    }

    #[test]
    fn error_message_names_the_provider() {
        let err = load_schema("localhost").unwrap_err();
        assert_eq!(err.to_string(), "could not find schema for: localhost");
    }

    #[test]
    fn regional_variants_share_one_schema() {
        let groups: [&[&str]; 3] = [&["aws", "aws-china", "aws-gov"], &["azure", "azure-china"], &["openstack", "rackspace"]];
        for group in groups {
            let first = load_schema(group[0]).expect("canonical loads");
            for id in &group[1..] {
                let other = load_schema(id).expect("alias loads");
                assert!(std::ptr::eq(first, other), "{id} should share {}'s schema", group[0]);
                assert_eq!(first.fields, other.fields);
            }
        }
    }

    #[test]
    fn aliases_point_at_first_entry() {
        assert_eq!(alias_of(ProviderId::Aws), None);
        assert_eq!(alias_of(ProviderId::AwsGov), Some(ProviderId::Aws));
        assert_eq!(alias_of(ProviderId::AzureChina), Some(ProviderId::Azure));
        assert_eq!(alias_of(ProviderId::Rackspace), Some(ProviderId::Openstack));
        assert!(!is_alias(ProviderId::Vsphere));
        assert_eq!(providers().filter(|id| is_alias(*id)).count(), 4);
    }
}
