//! Infrastructure layer
//!
//! Adapters for the outbound ports plus the cancellable task scope used for
//! the submission and auto-clear delays.

pub mod events;
pub mod notify;
pub mod scheduler;
pub mod sink;

pub use events::{InMemoryEventPublisher, LoggingEventPublisher};
pub use notify::{RecordingNotifier, TracingNotifier};
pub use scheduler::{ScheduledTask, TaskScope};
pub use sink::{InMemorySink, LoggingSink};
