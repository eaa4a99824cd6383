//! The flat (v1) credential layout.
//!
//! Older releases described each cloud as an ordered list of
//! `key -> widget` entries, with the auth type carried as an optional header
//! and no credential/setting classification. The layout also covers the
//! `manual` provider, which has no counterpart in the current table.

use serde::Serialize;
use stratus_types::{AuthType, InputKind};

use crate::SchemaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegacyEntry {
    pub key: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub input: InputKind,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LegacySchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<AuthType>,
    pub entries: &'static [LegacyEntry],
}

const fn text(key: &'static str) -> LegacyEntry {
    LegacyEntry {
        key,
        label: None,
        input: InputKind::string(),
    }
}

const fn masked(key: &'static str) -> LegacyEntry {
    LegacyEntry {
        key,
        label: None,
        input: InputKind::Password,
    }
}

const fn toggle(key: &'static str) -> LegacyEntry {
    LegacyEntry {
        key,
        label: None,
        input: InputKind::YesNo,
    }
}

const fn labeled(key: &'static str, label: &'static str, input: InputKind) -> LegacyEntry {
    LegacyEntry {
        key,
        label: Some(label),
        input,
    }
}

static AWS: LegacySchema = LegacySchema {
    auth_type: Some(AuthType::AccessKey),
    entries: &[text("access-key"), text("secret-key")],
};

static MAAS: LegacySchema = LegacySchema {
    auth_type: Some(AuthType::Oauth1),
    entries: &[text("@maas-server"), text("maas-oauth")],
};

static AZURE: LegacySchema = LegacySchema {
    auth_type: Some(AuthType::Userpass),
    entries: &[
        text("application-id"),
        text("subscription-id"),
        text("tenant-id"),
        masked("application-password"),
        text("location"),
        text("endpoint"),
        text("storage-endpoint"),
        text("storage-account-type"),
        text("storage-account"),
        text("storage-account-key"),
        text("controller-resource-group"),
    ],
};

static GOOGLE: LegacySchema = LegacySchema {
    auth_type: None,
    entries: &[
        text("private-key"),
        text("client-id"),
        text("client-email"),
        text("region"),
        text("project-id"),
        text("image-endpoint"),
    ],
};

static CLOUDSIGMA: LegacySchema = LegacySchema {
    auth_type: None,
    entries: &[text("username"), masked("password"), text("region"), text("endpoint")],
};

static JOYENT: LegacySchema = LegacySchema {
    auth_type: None,
    entries: &[
        text("sdc-user"),
        text("sdc-key-id"),
        LegacyEntry {
            key: "sdc-url",
            label: None,
            input: InputKind::string_with_default("https://us-west-1.api.joyentcloud.com"),
        },
        text("private-key-path"),
        LegacyEntry {
            key: "algorithm",
            label: None,
            input: InputKind::string_with_default("rsa-sha256"),
        },
    ],
};

static OPENSTACK: LegacySchema = LegacySchema {
    auth_type: Some(AuthType::Userpass),
    entries: &[
        text("username"),
        masked("password"),
        text("tenant-name"),
        text("auth-url"),
        text("auth-mode"),
        text("access-key"),
        text("secret-key"),
        text("region"),
        toggle("use-floating-ip"),
        toggle("use-default-secgroup"),
        text("network"),
    ],
};

static VSPHERE: LegacySchema = LegacySchema {
    auth_type: Some(AuthType::Userpass),
    entries: &[
        labeled("host", "vcenter api-endpoint", InputKind::string()),
        labeled("user", "vcenter username", InputKind::string()),
        labeled("password", "vcenter password", InputKind::Password),
        labeled("regions", "datacenter", InputKind::string()),
        text("external-network"),
    ],
};

static MANUAL: LegacySchema = LegacySchema {
    auth_type: None,
    entries: &[text("bootstrap-host"), text("bootstrap-user"), toggle("use-sshstorage")],
};

/// Ordered v1 table. Identifiers are plain strings since `manual` has no
/// [`stratus_types::ProviderId`].
pub static LEGACY_SCHEMA_TABLE: [(&str, &LegacySchema); 13] = [
    ("aws", &AWS),
    ("aws-china", &AWS),
    ("aws-gov", &AWS),
    ("maas", &MAAS),
    ("azure", &AZURE),
    ("azure-china", &AZURE),
    ("google", &GOOGLE),
    ("cloudsigma", &CLOUDSIGMA),
    ("joyent", &JOYENT),
    ("openstack", &OPENSTACK),
    ("rackspace", &OPENSTACK),
    ("vsphere", &VSPHERE),
    ("manual", &MANUAL),
];

/// Loads the v1 layout for `provider_id`, failing like [`crate::load_schema`].
pub fn load_legacy_schema(provider_id: &str) -> Result<&'static LegacySchema, SchemaError> {
    LEGACY_SCHEMA_TABLE
        .iter()
        .find(|(id, _)| *id == provider_id)
        .map(|(_, schema)| *schema)
        .ok_or_else(|| SchemaError::UnknownProvider {
            provider: provider_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_current_provider_plus_manual() {
        for provider in crate::providers() {
            assert!(load_legacy_schema(provider.as_str()).is_ok(), "{provider} missing from v1 layout");
        }
        let manual = load_legacy_schema("manual").expect("manual layout");
        assert_eq!(manual.auth_type, None);
        assert_eq!(manual.entries[2].input, InputKind::YesNo);
    }

    #[test]
    fn unknown_provider_fails() {
        assert_eq!(
            load_legacy_schema("localhost"),
            Err(SchemaError::UnknownProvider { provider: "localhost".into() })
        );
    }

    #[test]
    fn vsphere_entries_carry_labels() {
        let vsphere = load_legacy_schema("vsphere").expect("vsphere layout");
        let labels: Vec<_> = vsphere.entries.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                Some("vcenter api-endpoint"),
                Some("vcenter username"),
                Some("vcenter password"),
                Some("datacenter"),
                None
            ]
        );
    }

    #[test]
    fn joyent_defaults_survive() {
        let joyent = load_legacy_schema("joyent").expect("joyent layout");
        let url = joyent.entries.iter().find(|e| e.key == "sdc-url").expect("sdc-url");
        assert_eq!(url.input.default_value(), Some("https://us-west-1.api.joyentcloud.com"));
    }
}
