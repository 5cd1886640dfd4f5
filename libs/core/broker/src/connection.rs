//! Connection lifecycle: bounded-retry connect, shared channel access,
//! idempotent exchange declaration, graceful close.

use crate::config::BrokerConfig;
use crate::error::BrokerError;
use lapin::options::ExchangeDeclareOptions;
use lapin::types::FieldTable;
use lapin::{Channel, Connection, ConnectionProperties, ExchangeKind};
use tracing::{error, info, warn};

/// Owns the single connection/channel pair shared by every consumer.
///
/// At most one live pair exists per process: the process shell creates one
/// `Broker` at startup, hands it to consumers, and closes it on shutdown.
pub struct Broker {
    connection: Connection,
    channel: Channel,
    exchange: String,
}

impl Broker {
    /// Connect with a bounded retry budget and declare the topic exchange.
    ///
    /// Each failed attempt is logged and followed by a fixed delay; the last
    /// failure is returned once the budget is exhausted, which is fatal for
    /// startup.
    pub async fn connect(config: &BrokerConfig) -> Result<Self, BrokerError> {
        let attempts = config.connect_attempts.max(1);
        let mut attempt = 1;

        loop {
            match Self::try_connect(config).await {
                Ok(broker) => {
                    info!(exchange = %config.exchange, "RabbitMQ successfully connected");
                    return Ok(broker);
                }
                Err(source) => {
                    if attempt >= attempts {
                        return Err(BrokerError::ConnectExhausted { attempts, source });
                    }
                    warn!(
                        attempt,
                        attempts,
                        error = %source,
                        "Waiting for RabbitMQ connection..."
                    );
                    attempt += 1;
                    tokio::time::sleep(config.retry_delay).await;
                }
            }
        }
    }

    async fn try_connect(config: &BrokerConfig) -> Result<Self, lapin::Error> {
        let connection = Connection::connect(&config.url, ConnectionProperties::default()).await?;

        // Log-only observer: asynchronous connection failures surface in the
        // logs and as closed delivery streams, never as a panic from here.
        connection.on_error(|err| {
            error!(error = %err, "RabbitMQ connection error");
        });

        let channel = connection.create_channel().await?;

        channel
            .exchange_declare(
                &config.exchange,
                ExchangeKind::Topic,
                ExchangeDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await?;

        Ok(Self {
            connection,
            channel,
            exchange: config.exchange.clone(),
        })
    }

    /// Handle to the shared channel.
    ///
    /// Returns [`BrokerError::NotReady`] when the channel is no longer in a
    /// connected state, e.g. after [`Broker::close`] or a broker-side close.
    pub fn channel(&self) -> Result<Channel, BrokerError> {
        if !self.channel.status().connected() {
            return Err(BrokerError::NotReady);
        }
        Ok(self.channel.clone())
    }

    /// Name of the topic exchange declared at connect time.
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Close channel then connection. Both legs are attempted and teardown
    /// errors are logged and swallowed so shutdown always completes.
    pub async fn close(&self) {
        let mut clean = true;

        if let Err(err) = self.channel.close(200, "shutting down").await {
            warn!(error = %err, "Failed to close RabbitMQ channel");
            clean = false;
        }

        if let Err(err) = self.connection.close(200, "shutting down").await {
            warn!(error = %err, "Failed to close RabbitMQ connection");
            clean = false;
        }

        if clean {
            info!("RabbitMQ connection closed gracefully");
        }
    }
}
