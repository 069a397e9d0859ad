//! Inbound ports
//!
//! What a presentation layer drives: per-field value/set/error and the
//! signature widget's pointer and button actions.

use crate::domain::schema::RegistrationRecord;
use crate::domain::signature::{Point, SignatureError};
use crate::domain::validation::Violation;
use crate::domain::value_objects::SignatureArtifact;

/// Per-field access for one form
pub trait FieldInput<R: RegistrationRecord>: Send + Sync {
    fn set(&self, edit: R::Edit);

    /// Display form of the current value
    fn display(&self, field: R::Field) -> String;

    fn error(&self, field: R::Field) -> Option<Violation>;

    fn is_revealed(&self, field: R::Field) -> bool;
}

/// Signature widget actions
pub trait SignatureInput: Send + Sync {
    fn stroke_start(&self, point: Point) -> Result<(), SignatureError>;

    fn stroke_to(&self, point: Point);

    fn stroke_end(&self);

    fn clear(&self);

    /// `Ok(false)` when there was nothing to undo
    fn undo(&self) -> Result<bool, SignatureError>;

    fn save(&self) -> Result<SignatureArtifact, SignatureError>;
}
