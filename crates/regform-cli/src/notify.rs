//! Terminal notifier

use colored::Colorize;
use regform_core::{Notification, NotificationId, NotificationKind, Notifier};
use std::sync::atomic::{AtomicU64, Ordering};

/// Prints notifications to stderr, coloured by kind
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    next_id: AtomicU64,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for TerminalNotifier {
    fn show(&self, notification: Notification) -> NotificationId {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let badge = match notification.kind {
            NotificationKind::Loading => "…".cyan(),
            NotificationKind::Success => "✓".green().bold(),
            NotificationKind::Error => "✗".red().bold(),
            NotificationKind::Info => "i".blue(),
        };
        eprintln!("{} {}", badge, notification.message);
        id
    }

    fn dismiss(&self, _id: NotificationId) {}
}
