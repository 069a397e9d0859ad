//! Form validation
//!
//! A pure check of a record against its schema. Each field gets at most one
//! violation; the required check runs first, then the field's format rule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::schema::{FieldId, FieldRule, RegistrationRecord};
use crate::domain::value_objects::{EmailFormat, PhoneFormat};
use crate::error::Result;

/// Why a field failed validation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    MissingRequired,
    InvalidEmail,
    InvalidPhone,
    AgreementNotConfirmed,
}

impl Violation {
    /// Message shown next to the field
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingRequired => "This field is required",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::InvalidPhone => "Please enter a valid phone number",
            Self::AgreementNotConfirmed => "You must confirm the agreement to proceed",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Knobs for rules the forms leave open
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Treat a conditional field as required while it is revealed
    pub require_revealed_fields: bool,
}

/// Violations keyed by field, in record order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult<F> {
    violations: BTreeMap<F, Violation>,
}

impl<F: FieldId> ValidationResult<F> {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn get(&self, field: F) -> Option<Violation> {
        self.violations.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, Violation)> + '_ {
        self.violations.iter().map(|(f, v)| (*f, *v))
    }

    pub fn into_map(self) -> BTreeMap<F, Violation> {
        self.violations
    }
}

impl<F> Default for ValidationResult<F> {
    fn default() -> Self {
        Self {
            violations: BTreeMap::new(),
        }
    }
}

/// Schema-driven record validator
#[derive(Clone, Debug)]
pub struct Validator {
    email: EmailFormat,
    phone: PhoneFormat,
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new(policy: ValidationPolicy) -> Result<Self> {
        Ok(Self {
            email: EmailFormat::new()?,
            phone: PhoneFormat::new()?,
            policy,
        })
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Check every field of `record`
    ///
    /// Format rules only apply to non-empty values, so an empty optional field
    /// never fails them. The agreement rule always applies.
    pub fn validate<R: RegistrationRecord>(&self, record: &R) -> ValidationResult<R::Field> {
        let mut violations = BTreeMap::new();

        for spec in R::schema() {
            let value = record.value(spec.field);
            let required = match spec.reveal {
                Some(_) => self.policy.require_revealed_fields && record.is_revealed(spec.field),
                None => spec.required,
            };

            if required && value.is_empty() {
                violations.insert(spec.field, Violation::MissingRequired);
            }

            let broken = match spec.rule {
                Some(FieldRule::Email) => value
                    .as_text()
                    .filter(|text| !text.is_empty())
                    .map_or(false, |text| !self.email.matches(text))
                    .then_some(Violation::InvalidEmail),
                Some(FieldRule::Phone) => value
                    .as_text()
                    .filter(|text| !text.is_empty())
                    .map_or(false, |text| !self.phone.matches(text))
                    .then_some(Violation::InvalidPhone),
                Some(FieldRule::Agreement) => value.is_empty().then_some(Violation::AgreementNotConfirmed),
                None => None,
            };
            if let Some(violation) = broken {
                violations.insert(spec.field, violation);
            }
        }

        ValidationResult { violations }
    }
}
