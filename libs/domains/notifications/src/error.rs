//! Error types for the notifications domain.

use thiserror::Error;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Errors that can occur while handling a notification event.
///
/// Any of these returned from an event handler requeues the delivery, so
/// every variant here means "this email has not been sent yet".
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Broker-level failure (channel gone, queue declare or bind rejected).
    #[error("Broker error: {0}")]
    Broker(#[from] broker::BrokerError),

    /// Event payload could not be decoded into the expected shape.
    #[error("Invalid event payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// An enrichment lookup came back empty, so the recipient is unknown.
    #[error("Could not fetch {0} data")]
    EnrichmentMissing(&'static str),

    /// Enrichment HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Template registration or rendering failure.
    #[error("Template rendering error: {0}")]
    Template(String),

    /// Email delivery failure reported by the transport.
    #[error("Email delivery error: {0}")]
    Delivery(String),
}
