//! Field store shared between the form, its controller and its signature pad

use parking_lot::Mutex;
use std::sync::Arc;

use crate::domain::field_store::FieldStore;
use crate::domain::schema::RegistrationRecord;
use crate::domain::validation::Violation;
use crate::domain::value_objects::SignatureArtifact;
use crate::ports::inbound::FieldInput;
use crate::ports::outbound::SignatureSink;

/// Cloneable handle to one form's [`FieldStore`]
pub struct SharedStore<R: RegistrationRecord> {
    inner: Arc<Mutex<FieldStore<R>>>,
}

impl<R: RegistrationRecord> Clone for SharedStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RegistrationRecord> Default for SharedStore<R> {
    fn default() -> Self {
        Self::new(FieldStore::new())
    }
}

impl<R: RegistrationRecord> std::fmt::Debug for SharedStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStore").field("form", &R::VARIANT).finish()
    }
}

impl<R: RegistrationRecord> SharedStore<R> {
    pub fn new(store: FieldStore<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Read under the lock
    pub fn read<T>(&self, f: impl FnOnce(&FieldStore<R>) -> T) -> T {
        f(&self.inner.lock())
    }

    /// Mutate under the lock
    pub fn update<T>(&self, f: impl FnOnce(&mut FieldStore<R>) -> T) -> T {
        f(&mut self.inner.lock())
    }

    pub fn snapshot(&self) -> R {
        self.inner.lock().snapshot()
    }

    pub fn apply_edit(&self, edit: R::Edit) {
        self.inner.lock().apply_edit(edit);
    }
}

impl<R: RegistrationRecord> SignatureSink for SharedStore<R> {
    fn signature_changed(&self, artifact: Option<SignatureArtifact>) {
        self.inner.lock().merge_signature(artifact);
    }
}

impl<R: RegistrationRecord> FieldInput<R> for SharedStore<R> {
    fn set(&self, edit: R::Edit) {
        self.apply_edit(edit);
    }

    fn display(&self, field: R::Field) -> String {
        self.inner.lock().get(field).to_string()
    }

    fn error(&self, field: R::Field) -> Option<Violation> {
        self.inner.lock().error(field)
    }

    fn is_revealed(&self, field: R::Field) -> bool {
        self.inner.lock().is_revealed(field)
    }
}
