use std::io::{self, BufRead, Write};

use indexmap::IndexMap;
use serde::Serialize;
use stratus_types::{AuthType, Field, FieldValue, ProviderSchema};
use thiserror::Error;
use tracing::{debug, warn};

use crate::widget::{InputWidget, WidgetError, widget_for};

#[derive(Debug, Error)]
pub enum FormError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before '{key}' was answered")]
    UnexpectedEof { key: String },

    #[error("no field named '{key}'")]
    UnknownField { key: String },

    #[error("invalid value for '{key}': {source}")]
    Widget {
        key: String,
        #[source]
        source: WidgetError,
    },
}

/// Values gathered for one provider, split by field classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CollectedCredentials {
    pub provider: String,
    pub auth_type: AuthType,
    /// Values of `auth` fields.
    pub credentials: IndexMap<String, FieldValue>,
    /// Values of every other field.
    pub settings: IndexMap<String, FieldValue>,
}

impl CollectedCredentials {
    pub fn redacted(&self) -> Self {
        let redact = |values: &IndexMap<String, FieldValue>| -> IndexMap<String, FieldValue> {
            values
                .iter()
                .map(|(key, value)| (key.clone(), value.redacted()))
                .collect()
        };
        Self {
            provider: self.provider.clone(),
            auth_type: self.auth_type,
            credentials: redact(&self.credentials),
            settings: redact(&self.settings),
        }
    }
}

#[derive(Debug)]
struct FormRow {
    field: &'static Field,
    widget: Box<dyn InputWidget>,
}

/// One widget per schema field, in schema order.
#[derive(Debug)]
pub struct CredentialForm {
    provider: String,
    auth_type: AuthType,
    rows: Vec<FormRow>,
}

impl CredentialForm {
    pub fn new(provider: impl Into<String>, schema: &'static ProviderSchema) -> Self {
        let rows = schema
            .fields
            .iter()
            .map(|field| FormRow {
                field,
                widget: widget_for(field),
            })
            .collect();
        Self {
            provider: provider.into(),
            auth_type: schema.auth_type,
            rows,
        }
    }

    /// Sets one field without prompting.
    pub fn submit(&mut self, key: &str, raw: &str) -> Result<(), FormError> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.field.key == key)
            .ok_or_else(|| FormError::UnknownField { key: key.to_string() })?;
        row.widget.submit(raw).map_err(|source| FormError::Widget {
            key: key.to_string(),
            source,
        })
    }

    /// Prompts for every field in order, re-asking after invalid answers.
    ///
    /// Running out of input before the last field is an error.
    pub fn collect<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        mut writer: W,
    ) -> Result<CollectedCredentials, FormError> {
        for row in &mut self.rows {
            loop {
                write!(writer, "{}", row.widget.render())?;
                writer.flush()?;

                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    return Err(FormError::UnexpectedEof {
                        key: row.field.key.to_string(),
                    });
                }
                let raw = line.trim_end_matches(['\r', '\n']);

                match row.widget.submit(raw) {
                    Ok(()) => break,
                    Err(error) => {
                        warn!(key = row.field.key, "rejected form input");
                        writeln!(writer, "{error}")?;
                    }
                }
            }
        }
        Ok(self.finish())
    }

    /// Snapshot of the values entered so far. Unset fields are omitted.
    pub fn finish(&self) -> CollectedCredentials {
        let mut credentials = IndexMap::new();
        let mut settings = IndexMap::new();
        for row in &self.rows {
            let Some(value) = row.widget.value() else {
                continue;
            };
            let key = row.field.key.to_string();
            if row.field.kind.is_auth() {
                credentials.insert(key, value);
            } else {
                settings.insert(key, value);
            }
        }
        debug!(
            provider = %self.provider,
            credentials = credentials.len(),
            settings = settings.len(),
            "collected provider values"
        );
        CollectedCredentials {
            provider: self.provider.clone(),
            auth_type: self.auth_type,
            credentials,
            settings,
        }
    }
}
