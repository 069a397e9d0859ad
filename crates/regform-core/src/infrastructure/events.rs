//! Event publisher adapters

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::events::FormEvent;
use crate::error::Result;
use crate::ports::outbound::EventPublisher;

/// Logs each event at debug level
#[derive(Debug, Default)]
pub struct LoggingEventPublisher;

#[async_trait]
impl EventPublisher for LoggingEventPublisher {
    async fn publish(&self, events: Vec<FormEvent>) -> Result<()> {
        for event in events {
            debug!(event_type = event.event_type(), ?event, "form event");
        }
        Ok(())
    }
}

/// Collects events for inspection
#[derive(Debug, Default)]
pub struct InMemoryEventPublisher {
    events: Mutex<Vec<FormEvent>>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<FormEvent> {
        self.events.lock().clone()
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(FormEvent::event_type).collect()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, events: Vec<FormEvent>) -> Result<()> {
        self.events.lock().extend(events);
        Ok(())
    }
}
