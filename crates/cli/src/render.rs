use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use stratus_form::CollectedCredentials;
use stratus_registry::{LegacySchema, ProviderEntry};
use stratus_types::{FieldValue, ProviderSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

/// Serializes `value` for the machine-readable formats. `table` is rendered
/// by the caller, so it returns `None`.
fn structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<Option<String>> {
    Ok(match format {
        OutputFormat::Table => None,
        OutputFormat::Json => Some(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Some(serde_yaml::to_string(value)?),
    })
}

pub fn providers(entries: &[ProviderEntry], format: OutputFormat) -> Result<String> {
    if let Some(out) = structured(&entries, format)? {
        return Ok(out);
    }
    let mut out = format!("{:<16} {:<26} {}\n", "PROVIDER", "AUTH-TYPE", "ALIAS-OF");
    for entry in entries {
        let alias_of = entry.alias_of.map(|id| id.to_string()).unwrap_or_default();
        let marker = if entry.user_defined { " (user)" } else { "" };
        writeln!(
            out,
            "{:<16} {:<26} {}{}",
            entry.id,
            entry.auth_type.as_str(),
            alias_of,
            marker
        )?;
    }
    Ok(out)
}

pub fn schema(provider: &str, schema: &ProviderSchema, format: OutputFormat) -> Result<String> {
    if let Some(out) = structured(schema, format)? {
        return Ok(out);
    }
    let mut out = format!("{provider} (auth-type: {})\n", schema.auth_type);
    writeln!(out, "{:<24} {:<10} {:<14} {}", "KEY", "INPUT", "TYPE", "LABEL")?;
    for field in schema.fields {
        let input = match field.input.default_value() {
            Some(default) => format!("{} [{}]", field.input.as_str(), default),
            None => field.input.as_str().to_string(),
        };
        writeln!(
            out,
            "{:<24} {:<10} {:<14} {}",
            field.key,
            input,
            field.kind.as_str(),
            field.label.unwrap_or("-")
        )?;
    }
    Ok(out)
}

pub fn legacy_schema(provider: &str, schema: &LegacySchema, format: OutputFormat) -> Result<String> {
    if let Some(out) = structured(schema, format)? {
        return Ok(out);
    }
    let auth_type = schema.auth_type.map(|auth| auth.as_str()).unwrap_or("-");
    let mut out = format!("{provider} (v1, auth-type: {auth_type})\n");
    writeln!(out, "{:<26} {:<10} {}", "KEY", "INPUT", "LABEL")?;
    for entry in schema.entries {
        writeln!(
            out,
            "{:<26} {:<10} {}",
            entry.key,
            entry.input.as_str(),
            entry.label.unwrap_or("-")
        )?;
    }
    Ok(out)
}

pub fn collected(values: &CollectedCredentials, format: OutputFormat) -> Result<String> {
    if let Some(out) = structured(values, format)? {
        return Ok(out);
    }
    let mut out = format!("{} (auth-type: {})\n", values.provider, values.auth_type);
    for (section, map) in [("credentials", &values.credentials), ("settings", &values.settings)] {
        writeln!(out, "[{section}]")?;
        for (key, value) in map {
            let shown = match value {
                FieldValue::Bool(flag) => flag.to_string(),
                FieldValue::Text(text) | FieldValue::Secret(text) => text.clone(),
            };
            writeln!(out, "{key} = {shown}")?;
        }
    }
    Ok(out)
}
