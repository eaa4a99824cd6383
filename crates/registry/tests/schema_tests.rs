use std::fs;

use stratus_registry::{
    AuthType, FieldType, InputKind, ProviderId, SchemaConfig, SchemaError, SchemaRegistry, load_schema,
};

fn keys(provider: &str) -> Vec<&'static str> {
    load_schema(provider)
        .expect("provider schema")
        .fields
        .iter()
        .map(|f| f.key)
        .collect()
}

#[test]
fn aws_asks_for_an_access_key_pair() {
    let schema = load_schema("aws").expect("aws schema");
    assert_eq!(schema.auth_type, AuthType::AccessKey);
    assert_eq!(keys("aws"), vec!["access-key", "secret-key"]);
    assert!(schema.fields.iter().all(|f| f.kind == FieldType::Auth && f.label.is_none()));
}

#[test]
fn maas_labels_its_fields() {
    let schema = load_schema("maas").expect("maas schema");
    assert_eq!(schema.auth_type, AuthType::Oauth1);
    let endpoint = schema.field("endpoint").expect("endpoint");
    assert_eq!(endpoint.kind, FieldType::Maas);
    assert_eq!(endpoint.label, Some("server address (only the ip or dns name)"));
    assert_eq!(schema.field("maas-oauth").and_then(|f| f.label), Some("api key"));
}

#[test]
fn azure_masks_the_application_password() {
    let schema = load_schema("azure-china").expect("azure-china schema");
    assert_eq!(schema.auth_type, AuthType::ServicePrincipalSecret);
    assert_eq!(schema.field("application-password").map(|f| f.input), Some(InputKind::Password));
    let settings: Vec<_> = schema.provider_fields().map(|f| f.key).collect();
    assert_eq!(settings, vec!["storage-account-type"]);
}

#[test]
fn openstack_field_order_is_preserved() {
    assert_eq!(
        keys("rackspace"),
        vec![
            "username",
            "password",
            "tenant-name",
            "domain-name",
            "project-domain-name",
            "access-key",
            "secret-key",
            "region",
            "use-floating-ip",
            "use-default-secgroup",
            "network",
            "external-network",
        ]
    );
}

#[test]
fn vsphere_endpoint_is_a_provider_setting() {
    let schema = load_schema("vsphere").expect("vsphere schema");
    let endpoint = &schema.fields[0];
    assert_eq!(endpoint.key, "endpoint");
    assert_eq!(endpoint.kind, FieldType::Provider);
    assert_eq!(endpoint.display_label(), "api-endpoint");
    assert_eq!(schema.field("external-network").map(|f| f.kind), Some(FieldType::Vsphere));
}

#[test]
fn lookup_misses_are_errors_not_defaults() {
    let err = load_schema("digitalocean").expect_err("not a provider");
    assert_eq!(err, SchemaError::UnknownProvider { provider: "digitalocean".into() });
}

#[test]
fn registry_reads_aliases_from_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("providers.json");
    fs::write(&path, r#"{ "aliases": { "gov-cloud": "aws-gov" } }"#).expect("write config");

    let config = SchemaConfig::load_from_path(&path).expect("load config");
    let registry = SchemaRegistry::with_config(config);
    let resolved = registry.resolve("gov-cloud").expect("alias resolves");
    assert_eq!(resolved.provider, ProviderId::AwsGov);
    assert!(std::ptr::eq(resolved.schema, load_schema("aws").expect("aws")));
}

#[test]
fn config_rejects_alias_shadowing_builtin() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("providers.json");
    fs::write(&path, r#"{ "aliases": { "google": "aws" } }"#).expect("write config");
    let err = SchemaConfig::load_from_path(&path).expect_err("shadowing alias");
    assert!(err.to_string().contains("shadows a built-in provider"), "err: {err}");
}
