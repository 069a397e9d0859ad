//! Field schemas
//!
//! A schema is the fixed, ordered list of a form variant's fields with their
//! value kind, section, required flag, extra format rule and reveal condition.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use crate::domain::value_objects::{Answer, FileRef, SignatureArtifact};
use crate::error::Result;

/// The two registration forms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    Wholesale,
    Distributor,
}

impl FormVariant {
    pub const ALL: [FormVariant; 2] = [FormVariant::Wholesale, FormVariant::Distributor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wholesale => "wholesale",
            Self::Distributor => "distributor",
        }
    }
}

impl Default for FormVariant {
    fn default() -> Self {
        Self::Wholesale
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed enumeration of one variant's field identifiers
pub trait FieldId: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Submitted key (camelCase)
    fn name(self) -> &'static str;

    /// Every field, in record order
    fn all() -> &'static [Self];

    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }
}

/// Value kind of a field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    SingleSelect(&'static [&'static str]),
    MultiSelect(&'static [&'static str]),
    Boolean,
    File,
    Signature,
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::SingleSelect(_) => "single-select",
            Self::MultiSelect(_) => "multi-select",
            Self::Boolean => "boolean",
            Self::File => "file",
            Self::Signature => "signature",
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::SingleSelect(options) | Self::MultiSelect(options) => options,
            _ => &[],
        }
    }
}

/// Extra check run after the required check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRule {
    Email,
    Phone,
    Agreement,
}

/// Field shown only while `controller` holds `trigger`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal<F> {
    pub controller: F,
    pub trigger: &'static str,
}

/// One schema entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec<F> {
    pub field: F,
    pub label: &'static str,
    pub section: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub rule: Option<FieldRule>,
    pub reveal: Option<Reveal<F>>,
}

impl<F: Copy> FieldSpec<F> {
    pub const fn new(field: F, section: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            field,
            label,
            section,
            kind,
            required: false,
            rule: None,
            reveal: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn rule(mut self, rule: FieldRule) -> Self {
        self.rule = Some(rule);
        self
    }

    pub const fn revealed_by(mut self, controller: F, trigger: &'static str) -> Self {
        self.reveal = Some(Reveal { controller, trigger });
        self
    }
}

/// Kind-tagged read view of a field's current value
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Choice(Option<&'static str>),
    Choices(Vec<&'static str>),
    Flag(bool),
    File(Option<&'a FileRef>),
    Signature(Option<&'a SignatureArtifact>),
}

impl FieldValue<'_> {
    /// Emptiness as the required check sees it
    ///
    /// Text is empty only when it has no characters; whitespace counts as content.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Choice(choice) => choice.is_none(),
            Self::Choices(choices) => choices.is_empty(),
            Self::Flag(flag) => !flag,
            Self::File(file) => file.is_none(),
            Self::Signature(signature) => signature.is_none(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&'static str> {
        match self {
            Self::Choice(choice) => *choice,
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Choice(choice) => f.write_str(choice.unwrap_or("")),
            Self::Choices(choices) => f.write_str(&choices.join("; ")),
            Self::Flag(flag) => write!(f, "{}", if *flag { "yes" } else { "no" }),
            Self::File(file) => f.write_str(file.map(FileRef::file_name).unwrap_or("")),
            Self::Signature(Some(_)) => f.write_str("[signed]"),
            Self::Signature(None) => Ok(()),
        }
    }
}

/// User-facing text of one form variant
#[derive(Clone, Copy, Debug)]
pub struct FormCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submitting: &'static str,
    pub success: &'static str,
    pub success_duration_ms: u64,
    pub failure: &'static str,
    pub agreement_clauses: &'static [&'static str],
}

/// An edit whose payload already has the field's value kind
pub trait FieldEdit: Clone + fmt::Debug + Send + 'static {
    type Field: FieldId;

    fn field(&self) -> Self::Field;
}

/// A statically typed form record
pub trait RegistrationRecord:
    Clone + Default + fmt::Debug + PartialEq + Serialize + Send + Sync + 'static
{
    type Field: FieldId;
    type Edit: FieldEdit<Field = Self::Field>;

    const VARIANT: FormVariant;
    const SIGNATURE_FIELD: Self::Field;

    fn schema() -> &'static [FieldSpec<Self::Field>];

    fn copy() -> &'static FormCopy;

    fn value(&self, field: Self::Field) -> FieldValue<'_>;

    /// Write the edit, returning the field it touched
    fn apply(&mut self, edit: Self::Edit) -> Self::Field;

    fn set_signature(&mut self, artifact: Option<SignatureArtifact>);

    /// Build an edit from an untyped answer
    fn parse_answer(field: Self::Field, answer: &Answer) -> Result<Self::Edit>;

    fn spec(field: Self::Field) -> Option<&'static FieldSpec<Self::Field>> {
        Self::schema().iter().find(|spec| spec.field == field)
    }

    /// Whether a conditional field is currently shown; unconditional fields always are
    fn is_revealed(&self, field: Self::Field) -> bool {
        match Self::spec(field).and_then(|spec| spec.reveal) {
            Some(reveal) => self.value(reveal.controller).as_choice() == Some(reveal.trigger),
            None => true,
        }
    }

    /// Distinct section titles, in schema order
    fn sections() -> Vec<&'static str> {
        let mut sections: Vec<&'static str> = Vec::new();
        for spec in Self::schema() {
            if !sections.contains(&spec.section) {
                sections.push(spec.section);
            }
        }
        sections
    }
}
