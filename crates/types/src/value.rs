use std::fmt;

use serde::Serialize;

/// Placeholder written in place of secret values.
pub const REDACTED: &str = "<redacted>";

/// A value produced by an input widget. Write-only: values are printed,
/// never read back.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
    /// Text collected through a masked input.
    Secret(String),
}

impl FieldValue {
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Secret(_))
    }

    /// Copy of the value with secret text replaced by [`REDACTED`].
    pub fn redacted(&self) -> Self {
        match self {
            Self::Secret(_) => Self::Secret(REDACTED.to_string()),
            other => other.clone(),
        }
    }
}

// Secrets never reach logs through `{:?}`.
impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Self::Secret(_) => f.debug_tuple("Secret").field(&REDACTED).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_only_secrets() {
        assert_eq!(FieldValue::Secret("hunter2".into()).redacted(), FieldValue::Secret(REDACTED.into()));
        assert_eq!(FieldValue::Text("eu-west-1".into()).redacted(), FieldValue::Text("eu-west-1".into()));
        assert_eq!(FieldValue::Bool(true).redacted(), FieldValue::Bool(true));
    }

    #[test]
    fn debug_hides_secret_text() {
        let rendered = format!("{:?}", FieldValue::Secret("hunter2".into()));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(REDACTED));
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_string(&vec![
            FieldValue::Bool(false),
            FieldValue::Text("net".into()),
            FieldValue::Secret("pw".into()),
        ])
        .expect("serialize values");
        assert_eq!(json, r#"[false,"net","pw"]"#);
    }

    #[test]
    fn redacted_secret_serializes_placeholder() {
        let secret = FieldValue::Secret("hunter2".into());
        let json = serde_json::to_string(&secret.redacted()).expect("serialize redacted");
        assert_eq!(json, format!("\"{REDACTED}\""));
        assert!(secret.redacted().is_secret());
    }
}
