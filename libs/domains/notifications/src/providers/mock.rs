//! Mock email provider for testing.

use super::{DeliveryReceipt, EmailContent, EmailProvider};
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock email provider that records sent emails in memory.
pub struct MockEmailProvider {
    sent_emails: Arc<Mutex<Vec<EmailContent>>>,
    /// Fail every send once this many emails have been recorded.
    fail_from: Option<usize>,
    failure_message: Option<String>,
}

impl MockEmailProvider {
    /// Create a mock provider that accepts everything.
    pub fn new() -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            fail_from: None,
            failure_message: None,
        }
    }

    /// Create a mock provider that fails every send.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::failing_after(0, message)
    }

    /// Create a mock provider that accepts `accept` sends, then fails.
    pub fn failing_after(accept: usize, message: impl Into<String>) -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            fail_from: Some(accept),
            failure_message: Some(message.into()),
        }
    }

    /// Get all sent emails.
    pub async fn sent_emails(&self) -> Vec<EmailContent> {
        self.sent_emails.lock().await.clone()
    }

    /// Get the count of sent emails.
    pub async fn sent_count(&self) -> usize {
        self.sent_emails.lock().await.len()
    }

    /// Check if an email was sent to a specific address.
    pub async fn was_sent_to(&self, email: &str) -> bool {
        self.sent_emails
            .lock()
            .await
            .iter()
            .any(|e| e.to_email == email)
    }

    /// Clear recorded emails.
    pub async fn clear(&self) {
        self.sent_emails.lock().await.clear();
    }
}

impl Default for MockEmailProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, email: &EmailContent) -> NotificationResult<DeliveryReceipt> {
        let mut sent = self.sent_emails.lock().await;

        if let Some(fail_from) = self.fail_from {
            if sent.len() >= fail_from {
                let message = self
                    .failure_message
                    .clone()
                    .unwrap_or_else(|| "Mock send failure".to_string());
                return Err(NotificationError::Delivery(message));
            }
        }

        sent.push(email.clone());

        Ok(DeliveryReceipt {
            message_id: Some(format!("mock-{}", sent.len())),
            accepted: true,
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    async fn health_check(&self) -> NotificationResult<bool> {
        if self.fail_from == Some(0) {
            return Err(NotificationError::Delivery(
                "Mock health check failed".to_string(),
            ));
        }
        Ok(true)
    }
}
