//! Field and schema descriptors.
//!
//! Every value in this module is meant to live in `'static` tables, so the
//! constructors are `const fn` and string data is borrowed for `'static`.

use std::fmt;

use serde::Serialize;

/// Authentication mechanism a provider expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthType {
    /// Static access key / secret key pair.
    AccessKey,
    /// OAuth 1.0 token (MAAS API key).
    Oauth1,
    /// OAuth 2.0 service account.
    Oauth2,
    /// Azure service principal with an application secret.
    ServicePrincipalSecret,
    /// Username and password.
    Userpass,
}

impl AuthType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AccessKey => "access-key",
            Self::Oauth1 => "oauth1",
            Self::Oauth2 => "oauth2",
            Self::ServicePrincipalSecret => "service-principal-secret",
            Self::Userpass => "userpass",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a field.
///
/// `Auth` fields are credentials. Everything else is configuration added when
/// the cloud itself is defined, either generic (`ProviderName`, `Provider`) or
/// specific to one provider family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Auth,
    ProviderName,
    Provider,
    Maas,
    Azure,
    Openstack,
    Vsphere,
}

impl FieldType {
    /// Every classification tag, in declaration order.
    pub const ALL: [FieldType; 7] = [
        FieldType::Auth,
        FieldType::ProviderName,
        FieldType::Provider,
        FieldType::Maas,
        FieldType::Azure,
        FieldType::Openstack,
        FieldType::Vsphere,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::ProviderName => "provider-name",
            Self::Provider => "provider",
            Self::Maas => "maas",
            Self::Azure => "azure",
            Self::Openstack => "openstack",
            Self::Vsphere => "vsphere",
        }
    }

    /// Whether the field holds a credential rather than a cloud setting.
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input widget used to collect a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "widget", rename_all = "kebab-case")]
pub enum InputKind {
    /// Single-line text, optionally pre-filled.
    #[serde(rename = "string")]
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<&'static str>,
    },
    /// Masked text.
    Password,
    /// Boolean yes/no toggle.
    YesNo,
}

impl InputKind {
    /// Plain text input without a default.
    pub const fn string() -> Self {
        Self::Text { default: None }
    }

    /// Text input pre-filled with `default`.
    pub const fn string_with_default(default: &'static str) -> Self {
        Self::Text { default: Some(default) }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text { .. } => "string",
            Self::Password => "password",
            Self::YesNo => "yes-no",
        }
    }

    pub const fn default_value(&self) -> Option<&'static str> {
        match self {
            Self::Text { default } => *default,
            Self::Password | Self::YesNo => None,
        }
    }
}

/// One user-input item needed to configure a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Field {
    /// Friendly label shown to the user; the key is shown when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    /// Widget used to collect the value.
    pub input: InputKind,
    /// Configuration key the provider expects.
    pub key: &'static str,
    /// Credential vs. provider setting.
    #[serde(rename = "type")]
    pub kind: FieldType,
}

impl Field {
    pub const fn new(key: &'static str, input: InputKind, kind: FieldType) -> Self {
        Self {
            label: None,
            input,
            key,
            kind,
        }
    }

    pub const fn with_label(self, label: &'static str) -> Self {
        Self {
            label: Some(label),
            ..self
        }
    }

    /// Text shown when prompting for this field.
    pub fn display_label(&self) -> &'static str {
        self.label.unwrap_or(self.key)
    }
}

/// Credential shape for one provider family.
///
/// Aliased providers (regional variants) point at the same `'static`
/// instance, so `std::ptr::eq` identifies them.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProviderSchema {
    pub auth_type: AuthType,
    pub fields: &'static [Field],
}

impl ProviderSchema {
    pub const fn new(auth_type: AuthType, fields: &'static [Field]) -> Self {
        Self { auth_type, fields }
    }

    /// Fields holding credentials, in schema order.
    pub fn auth_fields(&self) -> impl Iterator<Item = &'static Field> {
        self.fields.iter().filter(|field| field.kind.is_auth())
    }

    /// Fields describing the cloud itself, in schema order.
    pub fn provider_fields(&self) -> impl Iterator<Item = &'static Field> {
        self.fields.iter().filter(|field| !field.kind.is_auth())
    }

    /// Looks up a field by its configuration key.
    pub fn field(&self, key: &str) -> Option<&'static Field> {
        self.fields.iter().find(|field| field.key == key)
    }
}
