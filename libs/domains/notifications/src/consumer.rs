//! Wiring of event kinds onto broker queue consumers.
//!
//! Every [`EventKind`] gets its own queue consumer and its own clone of the
//! shared [`EventProcessor`]. Deliveries on one queue are handled strictly
//! one at a time; kinds only run concurrently with each other.

use crate::enrichment::Directory;
use crate::error::{NotificationError, NotificationResult};
use crate::models::EventKind;
use crate::processor::EventProcessor;
use crate::providers::EmailProvider;
use async_trait::async_trait;
use broker::{Broker, DeliveryHandler, QueueBinding, QueueConsumer};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Routes one queue's deliveries into the event processor.
pub struct EventRoute<P: EmailProvider, D: Directory> {
    kind: EventKind,
    processor: EventProcessor<P, D>,
}

impl<P, D> EventRoute<P, D>
where
    P: EmailProvider + 'static,
    D: Directory + 'static,
{
    pub fn new(kind: EventKind, processor: EventProcessor<P, D>) -> Self {
        Self { kind, processor }
    }
}

#[async_trait]
impl<P, D> DeliveryHandler for EventRoute<P, D>
where
    P: EmailProvider + 'static,
    D: Directory + 'static,
{
    type Error = NotificationError;

    async fn handle(&self, payload: &[u8]) -> Result<(), Self::Error> {
        let event = self.kind.decode(payload)?;
        debug!(event = %self.kind, "Received event");
        self.processor.handle_event(event).await
    }
}

/// Declare, bind, and start one consumer per event kind on the shared
/// broker channel, each on its own task.
///
/// A declare or bind rejection aborts startup; consumers already started
/// keep running until the shutdown flag flips.
pub async fn start_event_consumers<P, D>(
    broker: &Broker,
    processor: &EventProcessor<P, D>,
    shutdown: watch::Receiver<bool>,
) -> NotificationResult<Vec<JoinHandle<()>>>
where
    P: EmailProvider + 'static,
    D: Directory + 'static,
{
    let mut handles = Vec::with_capacity(EventKind::ALL.len());

    for kind in EventKind::ALL {
        let binding = QueueBinding::new(kind.queue(), kind.routing_key());
        let route = EventRoute::new(kind, processor.clone());
        let consumer = QueueConsumer::new(broker, binding, route)?;
        let active = consumer.start().await?;
        handles.push(tokio::spawn(active.run(shutdown.clone())));
    }

    Ok(handles)
}
