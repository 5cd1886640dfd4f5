//! Generic explicit-ack queue consumer.
//!
//! One consumer implementation serves every queue: construct it with a
//! [`QueueBinding`] and a [`DeliveryHandler`], start it (declare + bind +
//! consume), then drive the delivery loop until shutdown. Handler success
//! acknowledges the delivery; handler failure requeues it.

use crate::connection::Broker;
use crate::error::BrokerError;
use async_trait::async_trait;
use futures::StreamExt;
use lapin::message::Delivery;
use lapin::options::{
    BasicAckOptions, BasicConsumeOptions, BasicNackOptions, QueueBindOptions, QueueDeclareOptions,
};
use lapin::types::FieldTable;
use lapin::{Channel, Consumer};
use tokio::sync::watch;
use tracing::{error, info, warn};

/// A durable queue and the single routing key binding it to the exchange.
#[derive(Debug, Clone)]
pub struct QueueBinding {
    pub queue: String,
    pub routing_key: String,
}

impl QueueBinding {
    pub fn new(queue: impl Into<String>, routing_key: impl Into<String>) -> Self {
        Self {
            queue: queue.into(),
            routing_key: routing_key.into(),
        }
    }
}

/// Per-delivery processing hook.
///
/// `Ok(())` acknowledges the delivery; any error negatively acknowledges it
/// with requeue, so the broker redelivers. There is no retry cap and no dead
/// letter path: a payload that fails deterministically redelivers forever.
#[async_trait]
pub trait DeliveryHandler: Send + Sync + 'static {
    type Error: std::error::Error + Send;

    async fn handle(&self, payload: &[u8]) -> Result<(), Self::Error>;
}

/// A consumer bound to one queue, ready to start.
pub struct QueueConsumer<H: DeliveryHandler> {
    channel: Channel,
    exchange: String,
    binding: QueueBinding,
    handler: H,
}

impl<H: DeliveryHandler> QueueConsumer<H> {
    /// Borrow the shared channel and exchange from an established broker.
    ///
    /// Fails with [`BrokerError::NotReady`] when the broker's channel is no
    /// longer connected.
    pub fn new(broker: &Broker, binding: QueueBinding, handler: H) -> Result<Self, BrokerError> {
        Ok(Self {
            channel: broker.channel()?,
            exchange: broker.exchange().to_string(),
            binding,
            handler,
        })
    }

    /// Declare the durable queue, bind it to the exchange, and register an
    /// explicit-ack consumer. Any failure here is startup-fatal.
    pub async fn start(self) -> Result<ActiveConsumer<H>, BrokerError> {
        self.channel
            .queue_declare(
                &self.binding.queue,
                QueueDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await?;

        self.channel
            .queue_bind(
                &self.binding.queue,
                &self.exchange,
                &self.binding.routing_key,
                QueueBindOptions::default(),
                FieldTable::default(),
            )
            .await?;

        let tag = format!("{}-{}", self.binding.queue, uuid::Uuid::new_v4());
        let deliveries = self
            .channel
            .basic_consume(
                &self.binding.queue,
                &tag,
                BasicConsumeOptions {
                    no_ack: false,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await?;

        info!(
            queue = %self.binding.queue,
            routing_key = %self.binding.routing_key,
            "Waiting for messages"
        );

        Ok(ActiveConsumer {
            queue: self.binding.queue,
            deliveries,
            handler: self.handler,
        })
    }
}

/// A started consumer driving deliveries through its handler.
pub struct ActiveConsumer<H: DeliveryHandler> {
    queue: String,
    deliveries: Consumer,
    handler: H,
}

impl<H: DeliveryHandler> ActiveConsumer<H> {
    /// Consume until the shutdown flag flips or the delivery stream closes.
    ///
    /// Deliveries are handled one at a time: the next delivery is not taken
    /// until the current one has been acked or requeued. A delivery in
    /// flight when shutdown fires still completes; deliveries not yet taken
    /// from the stream are abandoned unacknowledged.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!(queue = %self.queue, "Shutdown signal received, stopping consumer");
                        break;
                    }
                }
                delivery = self.deliveries.next() => {
                    match delivery {
                        Some(Ok(delivery)) => self.handle_delivery(delivery).await,
                        Some(Err(err)) => {
                            error!(queue = %self.queue, error = %err, "Failed to receive delivery");
                        }
                        None => {
                            warn!(queue = %self.queue, "Delivery stream closed");
                            break;
                        }
                    }
                }
            }
        }
    }

    async fn handle_delivery(&self, delivery: Delivery) {
        match self.handler.handle(&delivery.data).await {
            Ok(()) => {
                if let Err(err) = delivery.ack(BasicAckOptions::default()).await {
                    error!(queue = %self.queue, error = %err, "Failed to ack delivery");
                }
            }
            Err(err) => {
                error!(queue = %self.queue, error = %err, "Processing failed, requeueing message");
                let options = BasicNackOptions {
                    multiple: false,
                    requeue: true,
                };
                if let Err(err) = delivery.nack(options).await {
                    error!(queue = %self.queue, error = %err, "Failed to nack delivery");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    struct Recorder {
        seen: Arc<Mutex<Vec<Vec<u8>>>>,
        fail: bool,
    }

    #[async_trait]
    impl DeliveryHandler for Recorder {
        type Error = io::Error;

        async fn handle(&self, payload: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::Other, "handler rejected payload"));
            }
            self.seen.lock().unwrap().push(payload.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_queue_binding_holds_queue_and_key() {
        let binding = QueueBinding::new("email.client.created", "client.created");
        assert_eq!(binding.queue, "email.client.created");
        assert_eq!(binding.routing_key, "client.created");
    }

    #[tokio::test]
    async fn test_handler_success_receives_payload() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handler = Recorder {
            seen: Arc::clone(&seen),
            fail: false,
        };

        handler.handle(b"{\"email\":\"a@x.com\"}").await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], b"{\"email\":\"a@x.com\"}");
    }

    #[tokio::test]
    async fn test_handler_failure_surfaces_error() {
        let handler = Recorder {
            seen: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        };

        let result = handler.handle(b"payload").await;
        assert!(result.is_err());
        assert!(handler.seen.lock().unwrap().is_empty());
    }
}
