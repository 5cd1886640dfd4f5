//! Event processor: enrich, render, and dispatch one email per event.
//!
//! The processor is the seam between decoded events and the outside world.
//! It owns the provider, the directory, and the template engine, and is
//! cheap to clone so every queue consumer can carry its own handle.

use crate::enrichment::{ClientRecord, Directory, PetRecord};
use crate::error::{NotificationError, NotificationResult};
use crate::models::{
    AccountCreatedEmailData, AppointmentCreatedEvent, AppointmentEmailData, AppointmentRecipient,
    AppointmentReminderData, ClientCreatedEvent, DewormingReminderData, Event, EventKind,
    FollowUpReminderData, ReminderAppointmentEvent, ReminderDewormingEvent, ReminderFollowupEvent,
    ReminderVaccinationEvent, UserCreatedByAdminEvent, UserRole, VaccinationReminderData,
    WelcomeEmailData,
};
use crate::providers::{EmailContent, EmailProvider};
use crate::templates::{RenderedEmail, TemplateEngine};
use chrono::{DateTime, NaiveDate};
use std::sync::Arc;
use tracing::info;

/// Turns decoded events into dispatched emails.
pub struct EventProcessor<P: EmailProvider, D: Directory> {
    provider: Arc<P>,
    directory: Arc<D>,
    templates: Arc<TemplateEngine>,
}

impl<P, D> EventProcessor<P, D>
where
    P: EmailProvider + 'static,
    D: Directory + 'static,
{
    /// Create a new event processor.
    pub fn new(provider: P, directory: D, templates: TemplateEngine) -> Self {
        Self {
            provider: Arc::new(provider),
            directory: Arc::new(directory),
            templates: Arc::new(templates),
        }
    }

    /// Get a reference to the email provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Handle one decoded event end to end.
    ///
    /// `Ok` means every email the event calls for was accepted by the
    /// transport and the delivery can be acknowledged. Any error requeues
    /// the delivery for another attempt.
    pub async fn handle_event(&self, event: Event) -> NotificationResult<()> {
        match event {
            Event::ClientCreated(event) => self.send_welcome(event).await,
            Event::UserCreatedByAdmin(event) => self.send_account_created(event).await,
            Event::AppointmentCreated(event) => self.send_appointment_confirmations(event).await,
            Event::ReminderAppointment(event) => self.send_appointment_reminder(event).await,
            Event::ReminderVaccination(event) => self.send_vaccination_reminder(event).await,
            Event::ReminderDeworming(event) => self.send_deworming_reminder(event).await,
            Event::ReminderFollowup(event) => self.send_followup_reminder(event).await,
        }
    }

    async fn send_welcome(&self, event: ClientCreatedEvent) -> NotificationResult<()> {
        let rendered = self.templates.render_welcome(&WelcomeEmailData {
            fullname: event.fullname.clone(),
        })?;

        self.dispatch(EventKind::ClientCreated, &event.email, &event.fullname, rendered)
            .await
    }

    async fn send_account_created(&self, event: UserCreatedByAdminEvent) -> NotificationResult<()> {
        let rendered = self.templates.render_account_created(&AccountCreatedEmailData {
            fullname: event.fullname.clone(),
            email: event.email.clone(),
            temporary_password: event.temporary_password.clone(),
            role: UserRole::from_name(&event.role_name),
        })?;

        self.dispatch(EventKind::UserCreatedByAdmin, &event.email, &event.fullname, rendered)
            .await
    }

    /// Client first, then veterinarian, sequentially. When the second send
    /// fails the whole event requeues, so the client can receive a
    /// duplicate once the redelivery goes through.
    async fn send_appointment_confirmations(
        &self,
        event: AppointmentCreatedEvent,
    ) -> NotificationResult<()> {
        let data = AppointmentEmailData {
            fecha: event.fecha.clone(),
            hora: event.hora.clone(),
            motivo: event.motivo.clone(),
            pet_name: event.pet_name.clone(),
            client_name: event.client_name.clone(),
            veterinarian_name: event.veterinarian_name.clone(),
        };

        let rendered = self
            .templates
            .render_appointment_confirmation(AppointmentRecipient::Client, &data)?;
        self.dispatch(
            EventKind::AppointmentCreated,
            &event.client_email,
            &event.client_name,
            rendered,
        )
        .await?;

        let rendered = self
            .templates
            .render_appointment_confirmation(AppointmentRecipient::Veterinarian, &data)?;
        self.dispatch(
            EventKind::AppointmentCreated,
            &event.veterinarian_email,
            &event.veterinarian_name,
            rendered,
        )
        .await
    }

    async fn send_appointment_reminder(
        &self,
        event: ReminderAppointmentEvent,
    ) -> NotificationResult<()> {
        let (client, pet) = tokio::join!(
            self.directory.fetch_client(&event.client_id),
            self.directory.fetch_pet(&event.pet_id),
        );
        let (client, pet) = match (client, pet) {
            (Some(client), Some(pet)) => (client, pet),
            _ => return Err(NotificationError::EnrichmentMissing("client or pet")),
        };

        let rendered = self.templates.render_appointment_reminder(&AppointmentReminderData {
            fullname: client.fullname.clone(),
            pet_name: pet.pet_name,
            date: spanish_date(&event.date),
            time: event.time.clone(),
            reason: event.reason.clone(),
        })?;

        self.dispatch(EventKind::ReminderAppointment, &client.email, &client.fullname, rendered)
            .await
    }

    async fn send_vaccination_reminder(
        &self,
        event: ReminderVaccinationEvent,
    ) -> NotificationResult<()> {
        let (client, pet) = self.client_via_pet(&event.pet_id).await?;

        let rendered = self.templates.render_vaccination_reminder(&VaccinationReminderData {
            fullname: client.fullname.clone(),
            pet_name: pet.pet_name,
            vaccine_name: event.vaccine_name.clone(),
            next_dose: spanish_date(&event.next_dose),
        })?;

        self.dispatch(EventKind::ReminderVaccination, &client.email, &client.fullname, rendered)
            .await
    }

    async fn send_deworming_reminder(
        &self,
        event: ReminderDewormingEvent,
    ) -> NotificationResult<()> {
        let (client, pet) = self.client_via_pet(&event.pet_id).await?;

        let rendered = self.templates.render_deworming_reminder(&DewormingReminderData {
            fullname: client.fullname.clone(),
            pet_name: pet.pet_name,
            product: event.product.clone(),
            parasite_type: event.parasite_type.clone(),
            next_dose: spanish_date(&event.next_dose),
        })?;

        self.dispatch(EventKind::ReminderDeworming, &client.email, &client.fullname, rendered)
            .await
    }

    async fn send_followup_reminder(
        &self,
        event: ReminderFollowupEvent,
    ) -> NotificationResult<()> {
        let (client, pet) = self.client_via_pet(&event.pet_id).await?;

        let rendered = self.templates.render_followup_reminder(&FollowUpReminderData {
            fullname: client.fullname.clone(),
            pet_name: pet.pet_name,
            next_consultation: spanish_date(&event.next_consultation),
            diagnosis: event.diagnosis.clone(),
        })?;

        self.dispatch(EventKind::ReminderFollowup, &client.email, &client.fullname, rendered)
            .await
    }

    /// Resolve the owning client through the pet record. Reminder events
    /// other than appointments carry only a pet ID.
    async fn client_via_pet(&self, pet_id: &str) -> NotificationResult<(ClientRecord, PetRecord)> {
        let pet = self
            .directory
            .fetch_pet(pet_id)
            .await
            .ok_or(NotificationError::EnrichmentMissing("pet"))?;

        let client = self
            .directory
            .fetch_client(&pet.owner)
            .await
            .ok_or(NotificationError::EnrichmentMissing("client"))?;

        Ok((client, pet))
    }

    async fn dispatch(
        &self,
        kind: EventKind,
        to_email: &str,
        to_name: &str,
        rendered: RenderedEmail,
    ) -> NotificationResult<()> {
        let email = EmailContent {
            to_email: to_email.to_string(),
            to_name: to_name.to_string(),
            subject: rendered.subject,
            html_body: rendered.html,
            text_body: rendered.text,
        };

        let receipt = self.provider.send(&email).await?;

        info!(
            event = %kind,
            to = %email.to_email,
            provider = self.provider.name(),
            message_id = ?receipt.message_id,
            "Email sent"
        );

        Ok(())
    }
}

impl<P: EmailProvider, D: Directory> Clone for EventProcessor<P, D> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            directory: Arc::clone(&self.directory),
            templates: Arc::clone(&self.templates),
        }
    }
}

/// Format an ISO date (or datetime) the way `es-ES` renders dates, day
/// first with no zero padding. Input that does not parse is forwarded
/// verbatim rather than dropped.
fn spanish_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-d/%-m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::MockDirectory;
    use crate::providers::MockEmailProvider;
    use mockall::predicate::eq;

    fn engine() -> TemplateEngine {
        TemplateEngine::new("https://app.vetcore.example").unwrap()
    }

    fn client_record() -> ClientRecord {
        ClientRecord {
            email: "carlos@example.com".to_string(),
            fullname: "Carlos Ruiz".to_string(),
        }
    }

    fn pet_record() -> PetRecord {
        PetRecord {
            pet_name: "Luna".to_string(),
            owner: "c1".to_string(),
        }
    }

    #[test]
    fn test_spanish_date_formats() {
        assert_eq!(spanish_date("2025-01-01"), "1/1/2025");
        assert_eq!(spanish_date("2025-03-12"), "12/3/2025");
        assert_eq!(spanish_date("2025-03-12T10:30:00Z"), "12/3/2025");
        assert_eq!(spanish_date("mañana"), "mañana");
    }

    #[tokio::test]
    async fn test_client_created_sends_welcome_email() {
        let processor =
            EventProcessor::new(MockEmailProvider::new(), MockDirectory::new(), engine());

        let event = EventKind::ClientCreated
            .decode(br#"{"email": "ana@example.com", "fullname": "Ana Torres"}"#)
            .unwrap();
        processor.handle_event(event).await.unwrap();

        let sent = processor.provider().sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "ana@example.com");
        assert_eq!(sent[0].subject, "¡Bienvenido a Vetcore!");
        assert!(sent[0].html_body.contains("Hola Ana Torres,"));
    }

    #[tokio::test]
    async fn test_account_created_maps_role_content() {
        let processor =
            EventProcessor::new(MockEmailProvider::new(), MockDirectory::new(), engine());

        let event = EventKind::UserCreatedByAdmin
            .decode(
                br#"{
                    "email": "laura@example.com",
                    "fullname": "Laura Vega",
                    "roleName": "veterinarian",
                    "temporaryPassword": "Temp1234"
                }"#,
            )
            .unwrap();
        processor.handle_event(event).await.unwrap();

        let sent = processor.provider().sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Tu cuenta en Vetcore ha sido creada");
        assert!(sent[0].html_body.contains("Temp1234"));
        assert!(sent[0].html_body.contains("Gestionar historiales médicos y consultas"));
    }

    #[tokio::test]
    async fn test_appointment_created_sends_client_then_veterinarian() {
        let processor =
            EventProcessor::new(MockEmailProvider::new(), MockDirectory::new(), engine());

        let event = EventKind::AppointmentCreated
            .decode(
                br#"{
                    "clientEmail": "ana@example.com",
                    "clientName": "Ana Torres",
                    "veterinarianEmail": "laura@example.com",
                    "veterinarianName": "Dra. Laura Vega",
                    "fecha": "12/3/2025",
                    "hora": "10:30",
                    "motivo": "Control anual",
                    "petName": "Luna"
                }"#,
            )
            .unwrap();
        processor.handle_event(event).await.unwrap();

        let sent = processor.provider().sent_emails().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to_email, "ana@example.com");
        assert_eq!(sent[0].subject, "Confirmación de tu cita en Vetcore");
        assert_eq!(sent[1].to_email, "laura@example.com");
        assert_eq!(sent[1].subject, "Nueva cita programada en Vetcore");
    }

    #[tokio::test]
    async fn test_appointment_created_requeues_when_second_send_fails() {
        let processor = EventProcessor::new(
            MockEmailProvider::failing_after(1, "mailbox unavailable"),
            MockDirectory::new(),
            engine(),
        );

        let event = EventKind::AppointmentCreated
            .decode(
                br#"{
                    "clientEmail": "ana@example.com",
                    "clientName": "Ana Torres",
                    "veterinarianEmail": "laura@example.com",
                    "veterinarianName": "Dra. Laura Vega",
                    "fecha": "12/3/2025",
                    "hora": "10:30",
                    "motivo": "Control anual",
                    "petName": "Luna"
                }"#,
            )
            .unwrap();

        let result = processor.handle_event(event).await;
        assert!(result.is_err());
        // The client email already went out; the redelivery will duplicate it
        let sent = processor.provider().sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_appointment_reminder_enriches_both_records() {
        let mut directory = MockDirectory::new();
        directory
            .expect_fetch_client()
            .with(eq("c1"))
            .returning(|_| Some(client_record()));
        directory
            .expect_fetch_pet()
            .with(eq("p1"))
            .returning(|_| Some(pet_record()));

        let processor = EventProcessor::new(MockEmailProvider::new(), directory, engine());

        let event = EventKind::ReminderAppointment
            .decode(
                br#"{"clientId": "c1", "petId": "p1", "date": "2025-03-12", "time": "10:30", "reason": "Control"}"#,
            )
            .unwrap();
        processor.handle_event(event).await.unwrap();

        let sent = processor.provider().sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "carlos@example.com");
        assert_eq!(sent[0].subject, "Recordatorio de cita para Luna");
        assert!(sent[0].html_body.contains("12/3/2025"));
    }

    #[tokio::test]
    async fn test_appointment_reminder_errors_when_either_record_missing() {
        let mut directory = MockDirectory::new();
        directory
            .expect_fetch_client()
            .returning(|_| Some(client_record()));
        directory.expect_fetch_pet().returning(|_| None);

        let processor = EventProcessor::new(MockEmailProvider::new(), directory, engine());

        let event = EventKind::ReminderAppointment
            .decode(
                br#"{"clientId": "c1", "petId": "p1", "date": "2025-03-12", "time": "10:30", "reason": "Control"}"#,
            )
            .unwrap();

        let err = processor.handle_event(event).await.unwrap_err();
        assert_eq!(err.to_string(), "Could not fetch client or pet data");
        assert_eq!(processor.provider().sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_vaccination_reminder_resolves_owner_through_pet() {
        let mut directory = MockDirectory::new();
        directory
            .expect_fetch_pet()
            .with(eq("p1"))
            .returning(|_| Some(pet_record()));
        directory
            .expect_fetch_client()
            .with(eq("c1"))
            .returning(|_| Some(client_record()));

        let processor = EventProcessor::new(MockEmailProvider::new(), directory, engine());

        let event = EventKind::ReminderVaccination
            .decode(br#"{"petId": "p1", "vaccineName": "Rabia", "nextDose": "2025-04-01"}"#)
            .unwrap();
        processor.handle_event(event).await.unwrap();

        let sent = processor.provider().sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "carlos@example.com");
        assert_eq!(sent[0].subject, "Recordatorio de vacunación para Luna");
        assert!(sent[0].html_body.contains("1/4/2025"));
    }

    #[tokio::test]
    async fn test_vaccination_reminder_errors_when_pet_missing() {
        let mut directory = MockDirectory::new();
        directory.expect_fetch_pet().returning(|_| None);

        let processor = EventProcessor::new(MockEmailProvider::new(), directory, engine());

        let event = EventKind::ReminderVaccination
            .decode(br#"{"petId": "p1", "vaccineName": "Rabia", "nextDose": "2025-04-01"}"#)
            .unwrap();

        let err = processor.handle_event(event).await.unwrap_err();
        assert_eq!(err.to_string(), "Could not fetch pet data");
    }

    #[tokio::test]
    async fn test_deworming_reminder_errors_when_owner_missing() {
        let mut directory = MockDirectory::new();
        directory
            .expect_fetch_pet()
            .returning(|_| Some(pet_record()));
        directory.expect_fetch_client().returning(|_| None);

        let processor = EventProcessor::new(MockEmailProvider::new(), directory, engine());

        let event = EventKind::ReminderDeworming
            .decode(
                br#"{"petId": "p1", "product": "Drontal", "parasiteType": "interno", "nextDose": "2025-04-01"}"#,
            )
            .unwrap();

        let err = processor.handle_event(event).await.unwrap_err();
        assert_eq!(err.to_string(), "Could not fetch client data");
        assert_eq!(processor.provider().sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_followup_reminder_sends_to_owner() {
        let mut directory = MockDirectory::new();
        directory
            .expect_fetch_pet()
            .with(eq("p1"))
            .returning(|_| Some(pet_record()));
        directory
            .expect_fetch_client()
            .with(eq("c1"))
            .returning(|_| Some(client_record()));

        let processor = EventProcessor::new(MockEmailProvider::new(), directory, engine());

        let event = EventKind::ReminderFollowup
            .decode(br#"{"petId": "p1", "nextConsultation": "2025-04-01", "diagnosis": "Otitis"}"#)
            .unwrap();
        processor.handle_event(event).await.unwrap();

        let sent = processor.provider().sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Recordatorio de seguimiento para Luna");
        assert!(sent[0].html_body.contains("Otitis"));
    }

    #[tokio::test]
    async fn test_redelivery_after_transient_failure_sends_once() {
        let event = EventKind::ClientCreated
            .decode(br#"{"email": "ana@example.com", "fullname": "Ana Torres"}"#)
            .unwrap();

        // First delivery: transport down, handler errors, delivery requeues
        let failing = EventProcessor::new(
            MockEmailProvider::failing("connection refused"),
            MockDirectory::new(),
            engine(),
        );
        assert!(failing.handle_event(event.clone()).await.is_err());
        assert_eq!(failing.provider().sent_count().await, 0);

        // Redelivery: transport recovered, exactly one email goes out
        let recovered =
            EventProcessor::new(MockEmailProvider::new(), MockDirectory::new(), engine());
        recovered.handle_event(event).await.unwrap();
        assert_eq!(recovered.provider().sent_count().await, 1);
    }
}
