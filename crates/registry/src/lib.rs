//! Registry of provider credential schemas.
//!
//! This crate owns the static table describing what the configuration UI
//! must ask for each supported cloud, the lookup over that table, the
//! user-defined alias configuration, and the legacy flat layout.

pub mod config;
pub mod legacy;
pub mod models;
pub mod providers;
pub mod utils;

pub use config::{ConfigError, SchemaConfig};
pub use legacy::{LegacyEntry, LegacySchema, load_legacy_schema};
pub use models::{ProviderEntry, ResolvedProvider, SchemaRegistry};
pub use providers::{SCHEMA_TABLE, schema_for};
pub use stratus_types::{AuthType, Field, FieldType, InputKind, ProviderId, ProviderSchema};
pub use utils::*;
