//! Error types for broker connection management and consumption.

use thiserror::Error;

/// Errors surfaced by the broker connection manager and queue consumers.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// Underlying AMQP protocol or transport failure.
    #[error("broker protocol error: {0}")]
    Protocol(#[from] lapin::Error),

    /// The shared channel was requested before the connection was
    /// established or after it was closed. A usage-contract violation,
    /// not a transient condition.
    #[error("broker channel not initialized")]
    NotReady,

    /// The bounded connect retry budget was exhausted.
    #[error("failed to connect to broker after {attempts} attempts")]
    ConnectExhausted {
        attempts: u32,
        #[source]
        source: lapin::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_display() {
        let err = BrokerError::NotReady;
        assert_eq!(err.to_string(), "broker channel not initialized");
    }

    #[test]
    fn test_connect_exhausted_display_includes_attempts() {
        let err = BrokerError::ConnectExhausted {
            attempts: 5,
            source: lapin::Error::InvalidConnectionState(lapin::ConnectionState::Closed),
        };
        assert!(err.to_string().contains("5 attempts"));
    }

    #[test]
    fn test_protocol_wraps_lapin_error() {
        let err: BrokerError =
            lapin::Error::InvalidChannelState(lapin::ChannelState::Closed).into();
        assert!(matches!(err, BrokerError::Protocol(_)));
        assert!(err.to_string().starts_with("broker protocol error"));
    }
}
