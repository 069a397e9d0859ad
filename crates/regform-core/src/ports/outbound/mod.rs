//! Outbound ports
//!
//! Hexagonal architecture: these are the interfaces that infrastructure must implement.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::events::FormEvent;
use crate::domain::schema::RegistrationRecord;
use crate::domain::submission::Submission;
use crate::domain::value_objects::SignatureArtifact;
use crate::error::Result;

/// Notification intent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Loading,
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A transient message; `duration == None` stays until dismissed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Loading,
            message: message.into(),
            duration: None,
        }
    }

    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Self::timed(NotificationKind::Success, message, duration)
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self::timed(NotificationKind::Error, message, duration)
    }

    pub fn info(message: impl Into<String>, duration: Duration) -> Self {
        Self::timed(NotificationKind::Info, message, duration)
    }

    fn timed(kind: NotificationKind, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            duration: Some(duration),
        }
    }
}

/// Handle used to dismiss a shown notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

/// Notification side channel
pub trait Notifier: Send + Sync {
    fn show(&self, notification: Notification) -> NotificationId;

    fn dismiss(&self, id: NotificationId);
}

/// Receives accepted records
#[async_trait]
pub trait SubmissionSink<R: RegistrationRecord>: Send + Sync {
    async fn accept(&self, submission: &Submission<R>) -> Result<()>;
}

/// Owning form of a signature field
pub trait SignatureSink: Send + Sync {
    /// `None` retracts a previously captured signature
    fn signature_changed(&self, artifact: Option<SignatureArtifact>);
}

/// Event publisher port
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, events: Vec<FormEvent>) -> Result<()>;
}
