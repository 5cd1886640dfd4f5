//! Notifications Domain
//!
//! Consumes Vetcore domain events from RabbitMQ and turns them into
//! templated Spanish emails.
//!
//! # Features
//!
//! - Welcome emails for self-registered clients
//! - Credentials emails for admin-created accounts
//! - Appointment confirmations for client and veterinarian
//! - Appointment, vaccination, deworming, and follow-up reminders
//! - Synchronous enrichment against the auth and patients services
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  vetcore.events │  ← topic exchange (RabbitMQ)
//! └────────┬────────┘
//!          │ one routing key per event kind
//! ┌────────▼────────┐
//! │  QueueConsumer  │  ← durable queue per kind, explicit ack
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ EventProcessor  │  ← decode → enrich (HTTP) → render → dispatch
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ Email Provider  │  ← SMTP via lettre
//! └─────────────────┘
//! ```
//!
//! Handler success acknowledges the delivery; any failure requeues it, so
//! email side effects are at-least-once.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_notifications::{
//!     EventProcessor, HttpDirectory, SmtpProvider, TemplateEngine,
//!     start_event_consumers,
//! };
//!
//! let processor = EventProcessor::new(provider, directory, templates);
//!
//! // One consumer task per event kind
//! let handles = start_event_consumers(&broker, &processor, shutdown).await?;
//! ```

pub mod consumer;
pub mod enrichment;
pub mod error;
pub mod models;
pub mod processor;
pub mod providers;
pub mod templates;

// Re-export commonly used types
pub use consumer::{EventRoute, start_event_consumers};
pub use enrichment::{ClientRecord, Directory, DirectoryConfig, HttpDirectory, PetRecord};
pub use error::{NotificationError, NotificationResult};
pub use models::{EVENTS_EXCHANGE, Event, EventKind, UserRole};
pub use processor::EventProcessor;
pub use providers::{
    DeliveryReceipt, EmailContent, EmailProvider, MockEmailProvider, SmtpConfig, SmtpProvider,
};
pub use templates::{DEFAULT_FRONTEND_URL, RenderedEmail, TemplateEngine};
