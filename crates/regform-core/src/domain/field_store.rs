//! Field Store
//!
//! Holds one form's record and its per-field errors. Editing a field clears
//! that field's error and nothing else.

use std::collections::{BTreeMap, VecDeque};
use tracing::debug;

use crate::domain::events::FormEvent;
use crate::domain::records::DistributorRecord;
use crate::domain::schema::{FieldEdit, FieldId, FieldValue, RegistrationRecord};
use crate::domain::validation::{ValidationResult, Violation};
use crate::domain::value_objects::{Answer, MarketingSupport, SignatureArtifact};
use crate::error::{FormError, Result};

/// Undrained events kept per store; older ones are dropped first
pub const MAX_BUFFERED_EVENTS: usize = 256;

/// Record plus validation state of one form
#[derive(Clone, Debug)]
pub struct FieldStore<R: RegistrationRecord> {
    record: R,
    errors: BTreeMap<R::Field, Violation>,
    events: VecDeque<FormEvent>,
}

impl<R: RegistrationRecord> Default for FieldStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RegistrationRecord> FieldStore<R> {
    pub fn new() -> Self {
        Self::with_record(R::default())
    }

    pub fn with_record(record: R) -> Self {
        Self {
            record,
            errors: BTreeMap::new(),
            events: VecDeque::new(),
        }
    }

    /// Build a store from untrusted name/answer pairs
    pub fn from_answers(answers: &BTreeMap<String, Answer>) -> Result<Self> {
        let mut store = Self::new();
        store.apply_answers(answers)?;
        Ok(store)
    }

    /// Parse every answer first, then apply them; on error nothing is written
    pub fn apply_answers(&mut self, answers: &BTreeMap<String, Answer>) -> Result<()> {
        let edits = answers
            .iter()
            .map(|(name, answer)| {
                let field = R::Field::from_name(name)
                    .ok_or_else(|| FormError::UnknownField(name.clone()))?;
                R::parse_answer(field, answer)
            })
            .collect::<Result<Vec<_>>>()?;

        for edit in edits {
            self.apply_edit(edit);
        }
        Ok(())
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn snapshot(&self) -> R {
        self.record.clone()
    }

    pub fn get(&self, field: R::Field) -> FieldValue<'_> {
        self.record.value(field)
    }

    pub fn apply_edit(&mut self, edit: R::Edit) {
        let field = edit.field();
        debug!(form = %R::VARIANT, field = %field, "field edited");
        self.record.apply(edit);
        self.errors.remove(&field);
        self.record_event(FormEvent::Edited { field: field.name() });
    }

    /// Store or retract the captured signature
    pub fn merge_signature(&mut self, artifact: Option<SignatureArtifact>) {
        let present = artifact.is_some();
        debug!(form = %R::VARIANT, present, "signature merged");
        self.record.set_signature(artifact);
        self.errors.remove(&R::SIGNATURE_FIELD);
        self.record_event(FormEvent::SignatureMerged { present });
    }

    pub fn is_revealed(&self, field: R::Field) -> bool {
        self.record.is_revealed(field)
    }

    pub fn error(&self, field: R::Field) -> Option<Violation> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &BTreeMap<R::Field, Violation> {
        &self.errors
    }

    /// Replace all field errors with the outcome of a validation run
    pub fn set_errors(&mut self, result: ValidationResult<R::Field>) {
        self.errors = result.into_map();
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Back to an empty record with no errors
    pub fn reset(&mut self) {
        self.record = R::default();
        self.errors.clear();
        self.events.clear();
        self.record_event(FormEvent::Reset);
    }

    pub(crate) fn record_event(&mut self, event: FormEvent) {
        if self.events.len() == MAX_BUFFERED_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn take_events(&mut self) -> Vec<FormEvent> {
        self.events.drain(..).collect()
    }
}

impl FieldStore<DistributorRecord> {
    /// Check or uncheck one marketing support option
    pub fn toggle_option(&mut self, option: MarketingSupport, checked: bool) {
        let field = crate::domain::records::DistributorField::MarketingSupportNeeded;
        self.record.toggle_marketing_support(option, checked);
        self.errors.remove(&field);
        self.record_event(FormEvent::Edited { field: field.name() });
    }
}
