//! Regform Core - Registration Forms Platform
//!
//! Core of the wholesale buyer and distributor registration forms: typed form
//! records, validation, the simulated submission lifecycle and the signature
//! capture surface.
//!
//! ## Architecture
//!
//! - **Domain Layer**: typed records, field schemas, validator, signature canvas
//! - **Application Layer**: submission controller, signature pad, preloader
//! - **Ports Layer**: notification, submission and signature sinks
//! - **Infrastructure Layer**: tracing/recording notifiers, sinks, task scheduling
//!
//! ## Flow
//!
//! ```text
//! edit ──▶ FieldStore ──(submit)──▶ SubmissionController ──(delay)──▶ Validator
//!                ▲                          │
//!   SignaturePad ┘ (artifact merge)         └──▶ Notifier / SubmissionSink
//! ```

pub mod config;
pub mod error;
pub mod domain;
pub mod application;
pub mod ports;
pub mod infrastructure;

// Re-exports for convenience
pub use config::{CanvasConfig, ConfigError, RegformConfig, Timings, ToastDurations};
pub use error::{FormError, Result};
pub use domain::field_store::FieldStore;
pub use domain::records::{
    DistributorEdit, DistributorField, DistributorRecord, WholesaleEdit, WholesaleField,
    WholesaleRecord,
};
pub use domain::schema::{
    FieldEdit, FieldId, FieldKind, FieldRule, FieldSpec, FieldValue, FormCopy, FormVariant,
    RegistrationRecord,
};
pub use domain::navigation::{FormSwitcher, Route};
pub use domain::terms::{TermsSection, AUTO_SHIP_TERMS, TERMS_TITLE};
pub use domain::signature::{PenStyle, Point, SignatureCanvas, SignatureError};
pub use domain::submission::{Submission, SubmissionState};
pub use domain::validation::{ValidationPolicy, ValidationResult, Validator, Violation};
pub use domain::value_objects::{Answer, FileRef, SignatureArtifact};
pub use application::{FormPorts, Preloader, PreloaderExit, SharedStore, SignaturePad, SubmissionController};
pub use ports::inbound::{FieldInput, SignatureInput};
pub use ports::outbound::{
    EventPublisher, Notification, NotificationId, NotificationKind, Notifier, SignatureSink,
    SubmissionSink,
};
