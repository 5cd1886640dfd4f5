//! Email provider implementations.
//!
//! This module contains the `EmailProvider` trait, the SMTP transport used
//! in every environment, and a recording mock for tests.

mod mock;
mod smtp;

pub use mock::MockEmailProvider;
pub use smtp::{SmtpConfig, SmtpProvider};

use crate::error::NotificationResult;
use async_trait::async_trait;

/// Receipt for an email accepted by the transport.
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    /// Transport-specific message ID for tracking.
    pub message_id: Option<String>,
    /// Whether the email was accepted for delivery.
    pub accepted: bool,
}

/// Email content ready for sending.
#[derive(Debug, Clone, Default)]
pub struct EmailContent {
    /// Recipient email address.
    pub to_email: String,
    /// Recipient display name.
    pub to_name: String,
    /// Email subject.
    pub subject: String,
    /// HTML body content.
    pub html_body: String,
    /// Plain text body content.
    pub text_body: String,
}

/// Trait for email sending transports.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send an email.
    async fn send(&self, email: &EmailContent) -> NotificationResult<DeliveryReceipt>;

    /// Get the provider name for logging.
    fn name(&self) -> &'static str;

    /// Check that the transport is reachable and correctly configured.
    async fn health_check(&self) -> NotificationResult<bool>;
}
