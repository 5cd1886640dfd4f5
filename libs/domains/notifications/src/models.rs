//! Event kinds, wire payloads, and template data for the notifications domain.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Topic exchange every Vetcore domain event is published to.
pub const EVENTS_EXCHANGE: &str = "vetcore.events";

// ============================================================================
// Event Kinds
// ============================================================================

/// The seven event kinds this service consumes.
///
/// Each kind owns one durable queue bound to [`EVENTS_EXCHANGE`] under one
/// routing key, and decodes into its own payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ClientCreated,
    UserCreatedByAdmin,
    AppointmentCreated,
    ReminderAppointment,
    ReminderVaccination,
    ReminderDeworming,
    ReminderFollowup,
}

impl EventKind {
    /// Every kind, in consumer start order.
    pub const ALL: [EventKind; 7] = [
        EventKind::ClientCreated,
        EventKind::UserCreatedByAdmin,
        EventKind::AppointmentCreated,
        EventKind::ReminderAppointment,
        EventKind::ReminderVaccination,
        EventKind::ReminderDeworming,
        EventKind::ReminderFollowup,
    ];

    /// Durable queue this kind is consumed from.
    pub fn queue(&self) -> &'static str {
        match self {
            EventKind::ClientCreated => "email.client.created",
            EventKind::UserCreatedByAdmin => "email.user.created.by.admin",
            EventKind::AppointmentCreated => "email.appointment.created",
            EventKind::ReminderAppointment => "email.reminder.appointment",
            EventKind::ReminderVaccination => "email.reminder.vaccination",
            EventKind::ReminderDeworming => "email.reminder.deworming",
            EventKind::ReminderFollowup => "email.reminder.followup",
        }
    }

    /// Routing key binding the queue to the exchange.
    pub fn routing_key(&self) -> &'static str {
        match self {
            EventKind::ClientCreated => "client.created",
            EventKind::UserCreatedByAdmin => "user.created.by.admin",
            EventKind::AppointmentCreated => "appointment.created",
            EventKind::ReminderAppointment => "reminder.appointment",
            EventKind::ReminderVaccination => "reminder.vaccination",
            EventKind::ReminderDeworming => "reminder.deworming",
            EventKind::ReminderFollowup => "reminder.followup",
        }
    }

    /// Decode a raw delivery body into this kind's event.
    ///
    /// Payloads are JSON objects with camelCase field names. A missing or
    /// mistyped field fails the decode; the delivery is then requeued rather
    /// than half-handled.
    pub fn decode(&self, payload: &[u8]) -> Result<Event, serde_json::Error> {
        let event = match self {
            EventKind::ClientCreated => Event::ClientCreated(serde_json::from_slice(payload)?),
            EventKind::UserCreatedByAdmin => {
                Event::UserCreatedByAdmin(serde_json::from_slice(payload)?)
            }
            EventKind::AppointmentCreated => {
                Event::AppointmentCreated(serde_json::from_slice(payload)?)
            }
            EventKind::ReminderAppointment => {
                Event::ReminderAppointment(serde_json::from_slice(payload)?)
            }
            EventKind::ReminderVaccination => {
                Event::ReminderVaccination(serde_json::from_slice(payload)?)
            }
            EventKind::ReminderDeworming => {
                Event::ReminderDeworming(serde_json::from_slice(payload)?)
            }
            EventKind::ReminderFollowup => {
                Event::ReminderFollowup(serde_json::from_slice(payload)?)
            }
        };
        Ok(event)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.routing_key())
    }
}

// ============================================================================
// Event Payloads
// ============================================================================

/// A decoded domain event, tagged by kind.
#[derive(Debug, Clone)]
pub enum Event {
    ClientCreated(ClientCreatedEvent),
    UserCreatedByAdmin(UserCreatedByAdminEvent),
    AppointmentCreated(AppointmentCreatedEvent),
    ReminderAppointment(ReminderAppointmentEvent),
    ReminderVaccination(ReminderVaccinationEvent),
    ReminderDeworming(ReminderDewormingEvent),
    ReminderFollowup(ReminderFollowupEvent),
}

impl Event {
    /// The kind this event decoded from.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::ClientCreated(_) => EventKind::ClientCreated,
            Event::UserCreatedByAdmin(_) => EventKind::UserCreatedByAdmin,
            Event::AppointmentCreated(_) => EventKind::AppointmentCreated,
            Event::ReminderAppointment(_) => EventKind::ReminderAppointment,
            Event::ReminderVaccination(_) => EventKind::ReminderVaccination,
            Event::ReminderDeworming(_) => EventKind::ReminderDeworming,
            Event::ReminderFollowup(_) => EventKind::ReminderFollowup,
        }
    }
}

/// Published when a client registers through the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCreatedEvent {
    pub email: String,
    pub fullname: String,
}

/// Published when an administrator creates an account on someone's behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedByAdminEvent {
    pub email: String,
    pub fullname: String,
    pub role_name: String,
    pub temporary_password: String,
}

/// Published when an appointment is booked. Carries both recipients inline,
/// so no enrichment is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCreatedEvent {
    pub client_email: String,
    pub client_name: String,
    pub veterinarian_email: String,
    pub veterinarian_name: String,
    /// Display-ready date, forwarded to the email as-is.
    pub fecha: String,
    pub hora: String,
    pub motivo: String,
    pub pet_name: String,
}

/// Published by the scheduler ahead of an appointment. Client and pet are
/// referenced by ID and resolved at send time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderAppointmentEvent {
    pub client_id: String,
    pub pet_id: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

/// Published by the scheduler when a vaccine dose comes due.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderVaccinationEvent {
    pub pet_id: String,
    pub vaccine_name: String,
    pub next_dose: String,
}

/// Published by the scheduler when a deworming dose comes due.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDewormingEvent {
    pub pet_id: String,
    pub product: String,
    pub parasite_type: String,
    pub next_dose: String,
}

/// Published by the scheduler when a follow-up consultation comes due.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderFollowupEvent {
    pub pet_id: String,
    pub next_consultation: String,
    pub diagnosis: String,
}

// ============================================================================
// Roles and Recipients
// ============================================================================

/// Platform role carried by account-created events.
///
/// Role names match exactly; anything else, including a differently-cased
/// spelling, falls through to [`UserRole::Other`] and gets an email without
/// role-specific content.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Admin,
    Veterinarian,
    Receptionist,
    Client,
    #[strum(default)]
    Other(String),
}

impl UserRole {
    /// Parse a role name from an event payload. Never fails; unknown names
    /// become [`UserRole::Other`] carrying the name verbatim.
    pub fn from_name(name: &str) -> Self {
        name.parse()
            .unwrap_or_else(|_| UserRole::Other(name.to_string()))
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Veterinarian => write!(f, "veterinarian"),
            UserRole::Receptionist => write!(f, "receptionist"),
            UserRole::Client => write!(f, "client"),
            UserRole::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Which party an appointment confirmation is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AppointmentRecipient {
    Client,
    Veterinarian,
}

// ============================================================================
// Template Data
// ============================================================================

/// Data for the welcome email sent on client registration.
#[derive(Debug, Clone)]
pub struct WelcomeEmailData {
    pub fullname: String,
}

/// Data for the credentials email sent when an administrator creates an
/// account.
#[derive(Debug, Clone)]
pub struct AccountCreatedEmailData {
    pub fullname: String,
    pub email: String,
    pub temporary_password: String,
    pub role: UserRole,
}

/// Data shared by both appointment confirmation variants.
#[derive(Debug, Clone)]
pub struct AppointmentEmailData {
    pub fecha: String,
    pub hora: String,
    pub motivo: String,
    pub pet_name: String,
    pub client_name: String,
    pub veterinarian_name: String,
}

/// Data for the appointment reminder email.
#[derive(Debug, Clone)]
pub struct AppointmentReminderData {
    pub fullname: String,
    pub pet_name: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

/// Data for the vaccination reminder email.
#[derive(Debug, Clone)]
pub struct VaccinationReminderData {
    pub fullname: String,
    pub pet_name: String,
    pub vaccine_name: String,
    pub next_dose: String,
}

/// Data for the deworming reminder email.
#[derive(Debug, Clone)]
pub struct DewormingReminderData {
    pub fullname: String,
    pub pet_name: String,
    pub product: String,
    pub parasite_type: String,
    pub next_dose: String,
}

/// Data for the follow-up reminder email.
#[derive(Debug, Clone)]
pub struct FollowUpReminderData {
    pub fullname: String,
    pub pet_name: String,
    pub next_consultation: String,
    pub diagnosis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_and_routing_key_table() {
        let expected = [
            (EventKind::ClientCreated, "email.client.created", "client.created"),
            (
                EventKind::UserCreatedByAdmin,
                "email.user.created.by.admin",
                "user.created.by.admin",
            ),
            (
                EventKind::AppointmentCreated,
                "email.appointment.created",
                "appointment.created",
            ),
            (
                EventKind::ReminderAppointment,
                "email.reminder.appointment",
                "reminder.appointment",
            ),
            (
                EventKind::ReminderVaccination,
                "email.reminder.vaccination",
                "reminder.vaccination",
            ),
            (
                EventKind::ReminderDeworming,
                "email.reminder.deworming",
                "reminder.deworming",
            ),
            (
                EventKind::ReminderFollowup,
                "email.reminder.followup",
                "reminder.followup",
            ),
        ];

        assert_eq!(EventKind::ALL.len(), expected.len());
        for (kind, queue, routing_key) in expected {
            assert_eq!(kind.queue(), queue);
            assert_eq!(kind.routing_key(), routing_key);
            assert_eq!(kind.to_string(), routing_key);
        }
    }

    #[test]
    fn test_decode_client_created() {
        let event = EventKind::ClientCreated
            .decode(br#"{"email": "ana@example.com", "fullname": "Ana Torres"}"#)
            .unwrap();

        assert_eq!(event.kind(), EventKind::ClientCreated);
        match event {
            Event::ClientCreated(payload) => {
                assert_eq!(payload.email, "ana@example.com");
                assert_eq!(payload.fullname, "Ana Torres");
            }
            other => panic!("decoded wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_decode_user_created_by_admin_uses_camel_case() {
        let event = EventKind::UserCreatedByAdmin
            .decode(
                br#"{
                    "email": "vet@example.com",
                    "fullname": "Laura Vega",
                    "roleName": "veterinarian",
                    "temporaryPassword": "Temp1234"
                }"#,
            )
            .unwrap();

        match event {
            Event::UserCreatedByAdmin(payload) => {
                assert_eq!(payload.role_name, "veterinarian");
                assert_eq!(payload.temporary_password, "Temp1234");
            }
            other => panic!("decoded wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_decode_appointment_created() {
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

        match event {
            Event::AppointmentCreated(payload) => {
                assert_eq!(payload.client_email, "ana@example.com");
                assert_eq!(payload.veterinarian_name, "Dra. Laura Vega");
                assert_eq!(payload.pet_name, "Luna");
            }
            other => panic!("decoded wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_decode_reminder_payloads() {
        let event = EventKind::ReminderAppointment
            .decode(
                br#"{"clientId": "c1", "petId": "p1", "date": "2025-03-12", "time": "10:30", "reason": "Control"}"#,
            )
            .unwrap();
        assert_eq!(event.kind(), EventKind::ReminderAppointment);

        let event = EventKind::ReminderVaccination
            .decode(br#"{"petId": "p1", "vaccineName": "Rabia", "nextDose": "2025-04-01"}"#)
            .unwrap();
        assert_eq!(event.kind(), EventKind::ReminderVaccination);

        let event = EventKind::ReminderDeworming
            .decode(
                br#"{"petId": "p1", "product": "Drontal", "parasiteType": "interno", "nextDose": "2025-04-01"}"#,
            )
            .unwrap();
        assert_eq!(event.kind(), EventKind::ReminderDeworming);

        let event = EventKind::ReminderFollowup
            .decode(
                br#"{"petId": "p1", "nextConsultation": "2025-04-01", "diagnosis": "Otitis"}"#,
            )
            .unwrap();
        assert_eq!(event.kind(), EventKind::ReminderFollowup);
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let result = EventKind::ClientCreated.decode(br#"{"email": "ana@example.com"}"#);
        assert!(result.is_err());

        let result = EventKind::ReminderVaccination.decode(br#"{"petId": "p1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(EventKind::ClientCreated.decode(b"not json at all").is_err());
        assert!(EventKind::ReminderFollowup.decode(b"").is_err());
    }

    #[test]
    fn test_user_role_from_name() {
        assert_eq!(UserRole::from_name("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_name("veterinarian"), UserRole::Veterinarian);
        assert_eq!(UserRole::from_name("receptionist"), UserRole::Receptionist);
        assert_eq!(UserRole::from_name("client"), UserRole::Client);
        assert_eq!(
            UserRole::from_name("groomer"),
            UserRole::Other("groomer".to_string())
        );
    }

    #[test]
    fn test_user_role_matching_is_case_sensitive() {
        assert_eq!(
            UserRole::from_name("Admin"),
            UserRole::Other("Admin".to_string())
        );
        assert_eq!(UserRole::from_name("Admin").to_string(), "Admin");
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Veterinarian.to_string(), "veterinarian");
        assert_eq!(UserRole::Other("groomer".to_string()).to_string(), "groomer");
    }
}
