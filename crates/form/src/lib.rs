//! Credential collection for provider schemas.
//!
//! A [`CredentialForm`] turns each schema field into an [`InputWidget`] and
//! gathers the answers. Nothing here persists values or talks to a provider.

pub mod collector;
pub mod widget;

pub use collector::{CollectedCredentials, CredentialForm, FormError};
pub use widget::{InputWidget, PasswordEditor, StringEditor, WidgetError, YesNo, widget_for};
