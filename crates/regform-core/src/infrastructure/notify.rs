//! Notifier adapters

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, info};

use crate::ports::outbound::{Notification, NotificationId, NotificationKind, Notifier};

/// Writes notifications to the tracing log
#[derive(Debug, Default)]
pub struct TracingNotifier {
    next_id: AtomicU64,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for TracingNotifier {
    fn show(&self, notification: Notification) -> NotificationId {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let duration_ms = notification.duration.map(|d| d.as_millis() as u64);
        match notification.kind {
            NotificationKind::Error => {
                error!(id = id.0, duration_ms, "{}", notification.message)
            }
            kind => info!(id = id.0, kind = kind.as_str(), duration_ms, "{}", notification.message),
        }
        id
    }

    fn dismiss(&self, id: NotificationId) {
        debug!(id = id.0, "notification dismissed");
    }
}

/// Keeps every notification for later inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    next_id: AtomicU64,
    shown: Mutex<Vec<(NotificationId, Notification)>>,
    dismissed: Mutex<Vec<NotificationId>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().iter().map(|(_, n)| n.clone()).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.shown.lock().iter().map(|(_, n)| n.message.clone()).collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.shown.lock().last().map(|(_, n)| n.clone())
    }

    pub fn of_kind(&self, kind: NotificationKind) -> Vec<Notification> {
        self.shown
            .lock()
            .iter()
            .filter(|(_, n)| n.kind == kind)
            .map(|(_, n)| n.clone())
            .collect()
    }

    pub fn dismissed(&self) -> Vec<NotificationId> {
        self.dismissed.lock().clone()
    }

    /// Shown notifications not yet dismissed
    pub fn active(&self) -> Vec<Notification> {
        let dismissed = self.dismissed.lock();
        self.shown
            .lock()
            .iter()
            .filter(|(id, _)| !dismissed.contains(id))
            .map(|(_, n)| n.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notification: Notification) -> NotificationId {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.shown.lock().push((id, notification));
        id
    }

    fn dismiss(&self, id: NotificationId) {
        self.dismissed.lock().push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_recording_notifier_tracks_dismissal() {
        let notifier = RecordingNotifier::new();
        let loading = notifier.show(Notification::loading("Submitting your application..."));
        notifier.show(Notification::info("Signature undone", Duration::from_secs(2)));
        notifier.dismiss(loading);

        assert_eq!(notifier.shown().len(), 2);
        assert_eq!(notifier.dismissed(), vec![loading]);
        assert_eq!(notifier.active().len(), 1);
        assert_eq!(notifier.of_kind(NotificationKind::Info)[0].message, "Signature undone");
    }

    #[test]
    fn test_ids_are_distinct() {
        let notifier = TracingNotifier::new();
        let a = notifier.show(Notification::loading("a"));
        let b = notifier.show(Notification::loading("b"));
        assert_ne!(a, b);
    }
}
