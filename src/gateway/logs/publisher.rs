use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher emits every domain event as a structured log line instead of sending
// it to an external topic.
#[derive(Debug, Default)]
pub struct LogPublisher {
    published: usize,
}

impl LogPublisher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&mut self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        self.published += 1;
        info!(event_id = event.event_id.as_str(), kind = ?event.kind, key = event.key.as_str(),
            published = self.published, "published {}", json);
        Ok(())
    }
}
