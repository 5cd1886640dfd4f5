//! RabbitMQ plumbing: a managed connection/channel pair and a generic
//! explicit-ack queue consumer.
//!
//! ## Design
//!
//! - **One connection, one channel**: [`Broker`] owns the single pair shared
//!   by every consumer, declares the durable topic exchange once at connect
//!   time, and closes both legs on shutdown without propagating teardown
//!   errors.
//! - **One consumer implementation**: [`QueueConsumer`] takes a
//!   [`QueueBinding`] (queue name + routing key) and a [`DeliveryHandler`],
//!   declares and binds the durable queue, and consumes with explicit
//!   acknowledgment. Handler success acks; handler failure nacks with
//!   requeue, so redelivery is unbounded.
//!
//! ## Example
//!
//! ```ignore
//! use broker::{Broker, BrokerConfig, QueueBinding, QueueConsumer};
//!
//! let broker = Broker::connect(&BrokerConfig::from_env("app.events")).await?;
//! let binding = QueueBinding::new("email.client.created", "client.created");
//! let consumer = QueueConsumer::new(&broker, binding, handler)?;
//! let active = consumer.start().await?;
//! tokio::spawn(active.run(shutdown_rx));
//! ```

mod config;
mod connection;
mod consumer;
mod error;

// Re-export main types
pub use config::BrokerConfig;
pub use connection::Broker;
pub use consumer::{ActiveConsumer, DeliveryHandler, QueueBinding, QueueConsumer};
pub use error::BrokerError;
