//! Broker connection configuration.

use core_config::env_or_default;
use std::time::Duration;

/// Connection settings for the RabbitMQ broker.
///
/// The exchange is declared idempotently as a durable topic exchange when the
/// connection is established, so publishers and consumers can come up in any
/// order.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    /// AMQP endpoint, e.g. `amqp://localhost`
    pub url: String,

    /// Topic exchange shared by every consumer
    pub exchange: String,

    /// Connection attempts before giving up
    pub connect_attempts: u32,

    /// Fixed delay between connection attempts
    pub retry_delay: Duration,
}

impl BrokerConfig {
    /// Create a configuration for the given exchange with default retry
    /// settings (5 attempts, 5s apart).
    pub fn new(url: impl Into<String>, exchange: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            exchange: exchange.into(),
            connect_attempts: 5,
            retry_delay: Duration::from_secs(5),
        }
    }

    /// Create a configuration for the given exchange, reading the endpoint
    /// from `RABBITMQ_URL` (default `amqp://localhost`).
    pub fn from_env(exchange: impl Into<String>) -> Self {
        Self::new(env_or_default("RABBITMQ_URL", "amqp://localhost"), exchange)
    }

    pub fn with_connect_attempts(mut self, attempts: u32) -> Self {
        self.connect_attempts = attempts;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_retry_defaults() {
        let config = BrokerConfig::new("amqp://broker:5672", "app.events");
        assert_eq!(config.url, "amqp://broker:5672");
        assert_eq!(config.exchange, "app.events");
        assert_eq!(config.connect_attempts, 5);
        assert_eq!(config.retry_delay, Duration::from_secs(5));
    }

    #[test]
    fn test_from_env_defaults_to_localhost() {
        temp_env::with_var_unset("RABBITMQ_URL", || {
            let config = BrokerConfig::from_env("app.events");
            assert_eq!(config.url, "amqp://localhost");
        });
    }

    #[test]
    fn test_from_env_reads_url() {
        temp_env::with_var("RABBITMQ_URL", Some("amqp://rabbit:5672"), || {
            let config = BrokerConfig::from_env("app.events");
            assert_eq!(config.url, "amqp://rabbit:5672");
        });
    }

    #[test]
    fn test_builder_overrides() {
        let config = BrokerConfig::new("amqp://localhost", "app.events")
            .with_connect_attempts(2)
            .with_retry_delay(Duration::from_millis(100));
        assert_eq!(config.connect_attempts, 2);
        assert_eq!(config.retry_delay, Duration::from_millis(100));
    }
}
