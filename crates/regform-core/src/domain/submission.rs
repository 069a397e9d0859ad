//! Submission lifecycle types

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::schema::{FormVariant, RegistrationRecord};

/// Submission state machine: Idle → Pending → Succeeded | Failed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// A finished attempt, successful or not
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

/// An accepted record as handed to the submission sink
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission<R> {
    pub id: Uuid,
    pub variant: FormVariant,
    pub submitted_at: DateTime<Utc>,
    pub record: R,
}

impl<R: RegistrationRecord> Submission<R> {
    pub fn accept(record: R) -> Self {
        Self {
            id: Uuid::new_v4(),
            variant: R::VARIANT,
            submitted_at: Utc::now(),
            record,
        }
    }
}
