//! Submission Controller
//!
//! Drives one attempt through Idle → Pending → Succeeded | Failed with a
//! fixed artificial delay before validation. A submit while Pending cancels
//! the in-flight attempt and starts over.

use chrono::Utc;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::application::shared_store::SharedStore;
use crate::config::{RegformConfig, Timings, ToastDurations};
use crate::domain::events::FormEvent;
use crate::domain::schema::RegistrationRecord;
use crate::domain::submission::{Submission, SubmissionState};
use crate::domain::validation::Validator;
use crate::error::Result;
use crate::infrastructure::events::LoggingEventPublisher;
use crate::infrastructure::scheduler::{ScheduledTask, TaskScope};
use crate::ports::outbound::{EventPublisher, Notification, NotificationId, Notifier, SubmissionSink};

/// Outbound capabilities of one form
pub struct FormPorts<R: RegistrationRecord> {
    pub notifier: Arc<dyn Notifier>,
    pub sink: Arc<dyn SubmissionSink<R>>,
    pub events: Arc<dyn EventPublisher>,
}

impl<R: RegistrationRecord> FormPorts<R> {
    pub fn new(notifier: Arc<dyn Notifier>, sink: Arc<dyn SubmissionSink<R>>) -> Self {
        Self {
            notifier,
            sink,
            events: Arc::new(LoggingEventPublisher),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn EventPublisher>) -> Self {
        self.events = events;
        self
    }
}

struct Attempt {
    number: u64,
    loading: NotificationId,
    task: ScheduledTask,
}

struct Inner<R: RegistrationRecord> {
    store: SharedStore<R>,
    validator: Validator,
    ports: FormPorts<R>,
    timings: Timings,
    toasts: ToastDurations,
    state: watch::Sender<SubmissionState>,
    current: Mutex<Option<Attempt>>,
}

pub struct SubmissionController<R: RegistrationRecord> {
    inner: Arc<Inner<R>>,
    attempts: AtomicU64,
    scope: TaskScope,
}

impl<R: RegistrationRecord> SubmissionController<R> {
    pub fn new(store: SharedStore<R>, ports: FormPorts<R>, config: &RegformConfig) -> Result<Self> {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Ok(Self {
            inner: Arc::new(Inner {
                store,
                validator: Validator::new(config.validation)?,
                ports,
                timings: config.timings,
                toasts: config.toasts,
                state,
                current: Mutex::new(None),
            }),
            attempts: AtomicU64::new(0),
            scope: TaskScope::new(),
        })
    }

    pub fn store(&self) -> &SharedStore<R> {
        &self.inner.store
    }

    pub fn state(&self) -> SubmissionState {
        *self.inner.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.inner.state.subscribe()
    }

    /// Start an attempt and return its number
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&self) -> u64 {
        let number = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;
        let inner = &self.inner;
        let mut current = inner.current.lock();

        if let Some(previous) = current.take() {
            info!(form = %R::VARIANT, attempt = previous.number, "restarting submission");
            previous.task.cancel();
            inner.ports.notifier.dismiss(previous.loading);
        }

        let loading = inner.ports.notifier.show(Notification::loading(R::copy().submitting));
        inner.state.send_replace(SubmissionState::Pending);
        inner.store.update(|store| {
            store.record_event(FormEvent::SubmissionStarted {
                attempt: number,
                started_at: Utc::now(),
            })
        });
        info!(form = %R::VARIANT, attempt = number, "submission pending");

        let delay = inner.timings.submission_delay();
        let settling = Arc::clone(inner);
        let task = self.scope.spawn(async move {
            tokio::time::sleep(delay).await;
            settling.settle(number).await;
        });

        *current = Some(Attempt { number, loading, task });
        number
    }

    /// Wait until the current attempt has settled
    pub async fn wait_settled(&self) -> SubmissionState {
        let mut receiver = self.subscribe();
        let settled = receiver.wait_for(SubmissionState::is_settled).await.map(|state| *state);
        settled.unwrap_or_else(|_| self.state())
    }

    /// Cancel any in-flight attempt; a pending form returns to Idle
    pub fn close(&self) {
        if let Some(attempt) = self.inner.current.lock().take() {
            attempt.task.cancel();
            self.inner.ports.notifier.dismiss(attempt.loading);
            info!(form = %R::VARIANT, attempt = attempt.number, "submission cancelled");
        }
        self.scope.cancel_all();
        if self.state() == SubmissionState::Pending {
            self.inner.state.send_replace(SubmissionState::Idle);
        }
    }

    /// Cancel, then empty the form
    pub fn reset(&self) {
        self.close();
        self.inner.store.update(|store| store.reset());
        self.inner.state.send_replace(SubmissionState::Idle);
    }
}

impl<R: RegistrationRecord> Drop for SubmissionController<R> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<R: RegistrationRecord> Inner<R> {
    async fn settle(&self, number: u64) {
        let loading = {
            let mut current = self.current.lock();
            if current.as_ref().map(|attempt| attempt.number) != Some(number) {
                return;
            }
            current.take().map(|attempt| attempt.loading)
        };
        let Some(loading) = loading else {
            return;
        };

        let copy = R::copy();
        let record = self.store.snapshot();
        let result = self.validator.validate(&record);
        self.ports.notifier.dismiss(loading);

        let outcome = if result.is_valid() {
            let submission = Submission::accept(record);
            self.store.update(|store| {
                store.clear_errors();
                store.record_event(FormEvent::SubmissionSucceeded {
                    attempt: number,
                    submission_id: submission.id,
                });
            });
            self.ports.notifier.show(Notification::success(
                copy.success,
                Duration::from_millis(copy.success_duration_ms),
            ));
            info!(form = %R::VARIANT, attempt = number, submission_id = %submission.id, "submission succeeded");

            if let Err(e) = self.ports.sink.accept(&submission).await {
                warn!(form = %R::VARIANT, error = %e, "submission sink rejected record");
            }
            SubmissionState::Succeeded
        } else {
            let violations = result.len();
            self.store.update(|store| {
                store.set_errors(result);
                store.record_event(FormEvent::SubmissionFailed {
                    attempt: number,
                    violations,
                });
            });
            self.ports.notifier.show(Notification::error(copy.failure, self.toasts.error()));
            warn!(form = %R::VARIANT, attempt = number, violations, "submission failed validation");
            SubmissionState::Failed
        };

        let events = self.store.update(|store| store.take_events());
        if let Err(e) = self.ports.events.publish(events).await {
            warn!(form = %R::VARIANT, error = %e, "event publishing failed");
        }

        // Settled only once the sink and publisher are done, unless a newer attempt took over
        if self.current.lock().is_none() {
            self.state.send_replace(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::{WholesaleEdit, WholesaleField, WholesaleRecord};
    use crate::infrastructure::{InMemoryEventPublisher, InMemorySink, RecordingNotifier};
    use crate::ports::outbound::NotificationKind;

    struct Harness {
        controller: SubmissionController<WholesaleRecord>,
        notifier: Arc<RecordingNotifier>,
        sink: Arc<InMemorySink<WholesaleRecord>>,
        events: Arc<InMemoryEventPublisher>,
    }

    fn harness() -> Harness {
        let notifier = Arc::new(RecordingNotifier::new());
        let sink = Arc::new(InMemorySink::new());
        let events = Arc::new(InMemoryEventPublisher::new());
        let ports = FormPorts::new(notifier.clone(), sink.clone()).with_events(events.clone());
        let controller =
            SubmissionController::new(SharedStore::default(), ports, &RegformConfig::default()).unwrap();
        Harness {
            controller,
            notifier,
            sink,
            events,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_until_delay_elapses() {
        let h = harness();
        assert_eq!(h.controller.state(), SubmissionState::Idle);

        h.controller.submit();
        assert_eq!(h.controller.state(), SubmissionState::Pending);
        assert_eq!(h.notifier.last().unwrap().kind, NotificationKind::Loading);

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert_eq!(h.controller.state(), SubmissionState::Pending);

        assert_eq!(h.controller.wait_settled().await, SubmissionState::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_settled_after_settle_returns_outcome() {
        let h = harness();
        h.controller.submit();
        assert_eq!(h.controller.wait_settled().await, SubmissionState::Failed);
        assert_eq!(h.controller.wait_settled().await, SubmissionState::Failed);
        assert_eq!(h.controller.state(), SubmissionState::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_submission_populates_errors() {
        let h = harness();
        h.controller.store().apply_edit(WholesaleEdit::CompanyName("Acme".into()));
        h.controller.submit();
        h.controller.wait_settled().await;

        let store = h.controller.store();
        assert_eq!(store.read(|s| s.error(WholesaleField::CompanyName)), None);
        assert!(store.read(|s| s.error(WholesaleField::City)).is_some());

        let errors = h.notifier.of_kind(NotificationKind::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Please fill in all required fields correctly before submitting.");
        assert_eq!(errors[0].duration, Some(Duration::from_secs(4)));
        assert!(h.notifier.active().iter().all(|n| n.kind != NotificationKind::Loading));
        assert!(h.sink.is_empty());
        assert!(h.events.event_types().contains(&"submission.failed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_while_pending_restarts() {
        let h = harness();
        h.controller.submit();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let second = h.controller.submit();
        assert_eq!(second, 2);

        // The first attempt would have settled at 1500ms
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(h.controller.state(), SubmissionState::Pending);

        h.controller.wait_settled().await;
        assert_eq!(h.notifier.of_kind(NotificationKind::Loading).len(), 2);
        assert_eq!(h.notifier.dismissed().len(), 2);
        assert_eq!(h.notifier.of_kind(NotificationKind::Error).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_cancels_in_flight_attempt() {
        let h = harness();
        h.controller.submit();
        h.controller.close();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(h.controller.state(), SubmissionState::Idle);
        assert!(h.notifier.of_kind(NotificationKind::Error).is_empty());
        assert!(h.notifier.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_empties_form() {
        let h = harness();
        h.controller.store().apply_edit(WholesaleEdit::City("Springfield".into()));
        h.controller.reset();
        assert_eq!(h.controller.store().snapshot(), WholesaleRecord::default());
        assert_eq!(h.controller.state(), SubmissionState::Idle);
    }
}
