//! Input widgets behind the `render / validate / value` contract.
//!
//! Widgets are deliberately terminal-agnostic: they format a prompt, accept a
//! raw line, and expose the resulting [`FieldValue`].

use std::fmt;

use stratus_types::{Field, FieldValue, InputKind};
use thiserror::Error;

/// Rejected widget input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("expected yes or no, got '{input}'")]
    InvalidYesNo { input: String },
}

pub trait InputWidget: fmt::Debug {
    /// Prompt text shown before reading input.
    fn render(&self) -> String;

    /// Checks raw input without changing state.
    fn validate(&self, raw: &str) -> Result<(), WidgetError>;

    /// Stores raw input. Callers validate first; see [`InputWidget::submit`].
    fn set(&mut self, raw: &str);

    /// The collected value, or `None` when the field was left empty.
    fn value(&self) -> Option<FieldValue>;

    fn submit(&mut self, raw: &str) -> Result<(), WidgetError> {
        self.validate(raw)?;
        self.set(raw);
        Ok(())
    }
}

/// Single-line text. Empty input keeps the default, if any.
#[derive(Debug, Clone, Default)]
pub struct StringEditor {
    label: String,
    default: Option<String>,
    value: Option<String>,
}

impl StringEditor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        let default = default.into();
        self.value = Some(default.clone());
        self.default = Some(default);
        self
    }
}

impl InputWidget for StringEditor {
    fn render(&self) -> String {
        match &self.default {
            Some(default) => format!("{} [{}]: ", self.label, default),
            None => format!("{}: ", self.label),
        }
    }

    fn validate(&self, _raw: &str) -> Result<(), WidgetError> {
        Ok(())
    }

    fn set(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.value = if trimmed.is_empty() {
            self.default.clone()
        } else {
            Some(trimmed.to_string())
        };
    }

    fn value(&self) -> Option<FieldValue> {
        self.value.clone().map(FieldValue::Text)
    }
}

/// Masked text. The value is kept verbatim and never rendered; blank input
/// leaves it unset.
#[derive(Default)]
pub struct PasswordEditor {
    label: String,
    value: Option<String>,
}

impl PasswordEditor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }
}

impl fmt::Debug for PasswordEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordEditor")
            .field("label", &self.label)
            .field("set", &self.value.is_some())
            .finish()
    }
}

impl InputWidget for PasswordEditor {
    fn render(&self) -> String {
        format!("{}: ", self.label)
    }

    fn validate(&self, _raw: &str) -> Result<(), WidgetError> {
        Ok(())
    }

    fn set(&mut self, raw: &str) {
        self.value = (!raw.trim().is_empty()).then(|| raw.to_string());
    }

    fn value(&self) -> Option<FieldValue> {
        self.value.clone().map(FieldValue::Secret)
    }
}

/// Boolean toggle answered with y/yes/true or n/no/false.
#[derive(Debug, Clone, Default)]
pub struct YesNo {
    label: String,
    value: Option<bool>,
}

impl YesNo {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    fn parse(raw: &str) -> Result<Option<bool>, WidgetError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "y" | "yes" | "true" => Ok(Some(true)),
            "n" | "no" | "false" => Ok(Some(false)),
            _ => Err(WidgetError::InvalidYesNo {
                input: raw.trim().to_string(),
            }),
        }
    }
}

impl InputWidget for YesNo {
    fn render(&self) -> String {
        format!("{} (y/n): ", self.label)
    }

    fn validate(&self, raw: &str) -> Result<(), WidgetError> {
        Self::parse(raw).map(|_| ())
    }

    fn set(&mut self, raw: &str) {
        if let Ok(value) = Self::parse(raw) {
            self.value = value;
        }
    }

    fn value(&self) -> Option<FieldValue> {
        self.value.map(FieldValue::Bool)
    }
}

/// Builds the widget a field asks for, labelled for display.
pub fn widget_for(field: &Field) -> Box<dyn InputWidget> {
    let label = field.display_label();
    match field.input {
        InputKind::Text { default: Some(default) } => Box::new(StringEditor::new(label).with_default(default)),
        InputKind::Text { default: None } => Box::new(StringEditor::new(label)),
        InputKind::Password => Box::new(PasswordEditor::new(label)),
        InputKind::YesNo => Box::new(YesNo::new(label)),
    }
}
