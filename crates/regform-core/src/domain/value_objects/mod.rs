//! Value Objects module
//!
//! Immutable, validated form primitives.

pub mod artifact;
pub mod email;
pub mod options;
pub mod phone;

pub use artifact::SignatureArtifact;
pub use email::EmailFormat;
pub use options::*;
pub use phone::PhoneFormat;

use serde::{Deserialize, Deserializer, Serialize};

/// Reference to a file picked by the user
///
/// Only the reference is captured; contents are never read or uploaded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    file_name: String,
    content_type: Option<String>,
    size_bytes: Option<u64>,
}

impl FileRef {
    pub fn named(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            size_bytes: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn size_bytes(&self) -> Option<u64> {
        self.size_bytes
    }
}

impl std::fmt::Display for FileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name)
    }
}

/// Untyped answer for one field, as read from an answers file
///
/// Numbers are read as their decimal text, so `yearsInBusiness = 5` and
/// `yearsInBusiness = "5"` are the same answer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged, expecting = "a boolean, number, string or list of strings")]
enum RawAnswer {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawAnswer::deserialize(deserializer)? {
            RawAnswer::Flag(flag) => Self::Flag(flag),
            RawAnswer::Integer(number) => Self::Text(number.to_string()),
            RawAnswer::Float(number) => Self::Text(number.to_string()),
            RawAnswer::Text(text) => Self::Text(text),
            RawAnswer::List(items) => Self::List(items),
        })
    }
}

impl Answer {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Flag(_) => "a boolean",
            Self::Text(_) => "text",
            Self::List(_) => "a list",
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_ref_builder() {
        let file = FileRef::named("resale.pdf").with_content_type("application/pdf").with_size(2048);
        assert_eq!(file.file_name(), "resale.pdf");
        assert_eq!(file.content_type(), Some("application/pdf"));
        assert_eq!(file.size_bytes(), Some(2048));
        assert_eq!(file.to_string(), "resale.pdf");
    }

    #[test]
    fn test_answer_untagged_shapes() {
        let answers: std::collections::BTreeMap<String, Answer> = toml::from_str(
            r#"
            companyName = "Acme"
            agreementConfirmed = true
            marketingSupportNeeded = ["Product Samples"]
            "#,
        )
        .unwrap();
        assert_eq!(answers["companyName"], Answer::Text("Acme".into()));
        assert_eq!(answers["agreementConfirmed"], Answer::Flag(true));
        assert_eq!(answers["marketingSupportNeeded"], Answer::List(vec!["Product Samples".into()]));
    }

    #[test]
    fn test_numeric_answers_become_text() {
        let answers: std::collections::BTreeMap<String, Answer> = toml::from_str(
            r#"
            yearsInBusiness = 5
            monthlyPurchaseVolume = 2500.5
            "#,
        )
        .unwrap();
        assert_eq!(answers["yearsInBusiness"], Answer::Text("5".into()));
        assert_eq!(answers["monthlyPurchaseVolume"], Answer::Text("2500.5".into()));

        let json: Answer = serde_json::from_str("12").unwrap();
        assert_eq!(json, Answer::from("12"));
    }

    #[test]
    fn test_unsupported_answer_names_accepted_shapes() {
        let err = serde_json::from_str::<Answer>(r#"{"nested": 1}"#).unwrap_err();
        assert!(err.to_string().contains("a boolean, number, string or list of strings"));
    }
}
