//! Shared type definitions for the Stratus provider schema.
//!
//! The types here describe what a user must supply to configure a cloud
//! backend: the provider identifier, its authentication mechanism, and the
//! ordered list of fields rendered by the configuration UI.

pub mod provider;
pub mod schema;
pub mod value;

pub use provider::{ParseProviderIdError, ProviderId};
pub use schema::{AuthType, Field, FieldType, InputKind, ProviderSchema};
pub use value::{FieldValue, REDACTED};
