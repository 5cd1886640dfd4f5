//! SMTP email provider implementation using lettre.
//!
//! Covers both real relays (TLS plus credentials) and local development
//! servers like Mailpit, where `SMTP_SECURE=false` and no credentials are
//! configured.

use super::{DeliveryReceipt, EmailContent, EmailProvider};
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default, env_required};
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{debug, error, info};

/// SMTP transport configuration.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server host.
    pub host: String,
    /// SMTP server port.
    pub port: u16,
    /// Use a TLS relay. When false the transport speaks plain SMTP.
    pub secure: bool,
    /// SMTP username, absent for unauthenticated dev servers.
    pub username: Option<String>,
    /// SMTP password, absent for unauthenticated dev servers.
    pub password: Option<String>,
    /// Sender email address.
    pub from_email: String,
    /// Sender display name.
    pub from_name: String,
}

impl SmtpConfig {
    pub fn new(host: impl Into<String>, port: u16, from_email: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            secure: false,
            username: None,
            password: None,
            from_email: from_email.into(),
            from_name: "Vetcore Platform".to_string(),
        }
    }

    /// Builder method to toggle the TLS relay.
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Builder method to set credentials.
    pub fn with_credentials(mut self, username: String, password: String) -> Self {
        self.username = Some(username);
        self.password = Some(password);
        self
    }

    /// Builder method to override the sender display name.
    pub fn with_from_name(mut self, from_name: impl Into<String>) -> Self {
        self.from_name = from_name.into();
        self
    }
}

impl FromEnv for SmtpConfig {
    /// Load from `SMTP_HOST`, `SMTP_PORT`, `SMTP_SECURE`, `SMTP_USER`,
    /// `SMTP_PASS`, and `EMAIL_FROM`. Host, port, and sender address are
    /// required; everything else falls back to the dev-server defaults.
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_required("SMTP_HOST")?;
        let port = env_required("SMTP_PORT")?
            .parse::<u16>()
            .map_err(|e| ConfigError::ParseError {
                key: "SMTP_PORT".to_string(),
                details: e.to_string(),
            })?;
        let from_email = env_required("EMAIL_FROM")?;

        let mut config = Self::new(host, port, from_email)
            .with_secure(env_or_default("SMTP_SECURE", "false") == "true");

        if let (Some(username), Some(password)) = (
            std::env::var("SMTP_USER").ok(),
            std::env::var("SMTP_PASS").ok(),
        ) {
            config = config.with_credentials(username, password);
        }

        Ok(config)
    }
}

/// SMTP email provider.
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: SmtpConfig,
}

impl SmtpProvider {
    /// Create a new SMTP provider from configuration.
    pub fn new(config: SmtpConfig) -> NotificationResult<Self> {
        let transport = Self::build_transport(&config)?;

        Ok(Self { transport, config })
    }

    fn build_transport(
        config: &SmtpConfig,
    ) -> NotificationResult<AsyncSmtpTransport<Tokio1Executor>> {
        let mut builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| NotificationError::Delivery(format!("Invalid SMTP relay: {}", e)))?
                .port(config.port)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host).port(config.port)
        };

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(builder.build())
    }

    fn build_message(&self, email: &EmailContent) -> NotificationResult<Message> {
        let from: Mailbox = format!("{} <{}>", self.config.from_name, self.config.from_email)
            .parse()
            .map_err(|e| NotificationError::Delivery(format!("Invalid from address: {}", e)))?;

        let to: Mailbox = if email.to_name.is_empty() {
            email.to_email.parse()
        } else {
            format!("{} <{}>", email.to_name, email.to_email).parse()
        }
        .map_err(|e| NotificationError::Delivery(format!("Invalid to address: {}", e)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(&email.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )
            .map_err(|e| NotificationError::Delivery(format!("Failed to build message: {}", e)))
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &EmailContent) -> NotificationResult<DeliveryReceipt> {
        debug!(
            to = %email.to_email,
            subject = %email.subject,
            "Sending email via SMTP"
        );

        let message = self.build_message(email)?;

        let response = self.transport.send(message).await.map_err(|e| {
            error!(error = %e, "SMTP send failed");
            NotificationError::Delivery(format!("SMTP error: {}", e))
        })?;

        let message_id = response.message().next().map(|s| s.to_string());

        info!(
            to = %email.to_email,
            message_id = ?message_id,
            "Email sent via SMTP"
        );

        Ok(DeliveryReceipt {
            message_id,
            accepted: true,
        })
    }

    fn name(&self) -> &'static str {
        "SMTP"
    }

    async fn health_check(&self) -> NotificationResult<bool> {
        self.transport
            .test_connection()
            .await
            .map_err(|e| NotificationError::Delivery(format!("SMTP connection failed: {}", e)))
    }
}
