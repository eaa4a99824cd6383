//! Built-in provider schemas.
//!
//! Each provider family has exactly one `static` schema. Regional variants
//! reference the same instance from [`SCHEMA_TABLE`].

use stratus_types::{
    AuthType, Field, FieldType, InputKind, ProviderId, ProviderSchema,
};

const fn auth(key: &'static str) -> Field {
    Field::new(key, InputKind::string(), FieldType::Auth)
}

const fn secret(key: &'static str) -> Field {
    Field::new(key, InputKind::Password, FieldType::Auth)
}

pub static AWS: ProviderSchema = ProviderSchema {
    auth_type: AuthType::AccessKey,
    fields: &[auth("access-key"), auth("secret-key")],
};

pub static MAAS: ProviderSchema = ProviderSchema {
    auth_type: AuthType::Oauth1,
    fields: &[
        Field::new("endpoint", InputKind::string(), FieldType::Maas)
            .with_label("server address (only the ip or dns name)"),
        auth("maas-oauth").with_label("api key"),
    ],
};

pub static AZURE: ProviderSchema = ProviderSchema {
    auth_type: AuthType::ServicePrincipalSecret,
    fields: &[
        auth("application-id"),
        auth("subscription-id"),
        auth("tenant-id"),
        secret("application-password"),
        Field::new("storage-account-type", InputKind::string(), FieldType::Azure),
    ],
};

pub static GOOGLE: ProviderSchema = ProviderSchema {
    auth_type: AuthType::Oauth2,
    fields: &[
        auth("private-key"),
        auth("client-id"),
        auth("client-email"),
        auth("project-id"),
    ],
};

pub static CLOUDSIGMA: ProviderSchema = ProviderSchema {
    auth_type: AuthType::Userpass,
    fields: &[auth("username"), secret("password")],
};

pub static JOYENT: ProviderSchema = ProviderSchema {
    auth_type: AuthType::Userpass,
    fields: &[
        auth("sdc-user"),
        auth("sdc-key-id"),
        auth("private-key"),
        Field::new("algorithm", InputKind::string_with_default("rsa-sha256"), FieldType::Auth),
    ],
};

pub static OPENSTACK: ProviderSchema = ProviderSchema {
    auth_type: AuthType::Userpass,
    fields: &[
        auth("username"),
        secret("password"),
        auth("tenant-name"),
        auth("domain-name"),
        auth("project-domain-name"),
        auth("access-key"),
        auth("secret-key"),
        Field::new("region", InputKind::string(), FieldType::Openstack),
        Field::new("use-floating-ip", InputKind::YesNo, FieldType::Openstack),
        Field::new("use-default-secgroup", InputKind::YesNo, FieldType::Openstack),
        Field::new("network", InputKind::string(), FieldType::Openstack),
        Field::new("external-network", InputKind::string(), FieldType::Openstack),
    ],
};

pub static VSPHERE: ProviderSchema = ProviderSchema {
    auth_type: AuthType::Userpass,
    fields: &[
        Field::new("endpoint", InputKind::string(), FieldType::Provider).with_label("api-endpoint"),
        auth("user"),
        secret("password"),
        Field::new("external-network", InputKind::string(), FieldType::Vsphere),
    ],
};

/// Ordered mapping from provider identifier to schema.
pub static SCHEMA_TABLE: [(ProviderId, &ProviderSchema); 12] = [
    (ProviderId::Aws, &AWS),
    (ProviderId::AwsChina, &AWS),
    (ProviderId::AwsGov, &AWS),
    (ProviderId::Maas, &MAAS),
    (ProviderId::Azure, &AZURE),
    (ProviderId::AzureChina, &AZURE),
    (ProviderId::Google, &GOOGLE),
    (ProviderId::Cloudsigma, &CLOUDSIGMA),
    (ProviderId::Joyent, &JOYENT),
    (ProviderId::Openstack, &OPENSTACK),
    (ProviderId::Rackspace, &OPENSTACK),
    (ProviderId::Vsphere, &VSPHERE),
];

/// Schema for an enumerated provider. Total, unlike string lookup.
pub fn schema_for(provider: ProviderId) -> &'static ProviderSchema {
    match provider {
        ProviderId::Aws | ProviderId::AwsChina | ProviderId::AwsGov => &AWS,
        ProviderId::Maas => &MAAS,
        ProviderId::Azure | ProviderId::AzureChina => &AZURE,
        ProviderId::Google => &GOOGLE,
        ProviderId::Cloudsigma => &CLOUDSIGMA,
        ProviderId::Joyent => &JOYENT,
        ProviderId::Openstack | ProviderId::Rackspace => &OPENSTACK,
        ProviderId::Vsphere => &VSPHERE,
    }
}
