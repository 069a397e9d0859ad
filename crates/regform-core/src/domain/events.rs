//! Domain Events
//!
//! Events raised by the field store and the submission flow.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Form-level domain events
#[derive(Clone, Debug, PartialEq)]
pub enum FormEvent {
    Edited {
        field: &'static str,
    },

    SignatureMerged {
        present: bool,
    },

    SubmissionStarted {
        attempt: u64,
        started_at: DateTime<Utc>,
    },

    SubmissionSucceeded {
        attempt: u64,
        submission_id: Uuid,
    },

    SubmissionFailed {
        attempt: u64,
        violations: usize,
    },

    Reset,
}

impl FormEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            FormEvent::Edited { .. } => "form.edited",
            FormEvent::SignatureMerged { .. } => "form.signature_merged",
            FormEvent::SubmissionStarted { .. } => "submission.started",
            FormEvent::SubmissionSucceeded { .. } => "submission.succeeded",
            FormEvent::SubmissionFailed { .. } => "submission.failed",
            FormEvent::Reset => "form.reset",
        }
    }
}
