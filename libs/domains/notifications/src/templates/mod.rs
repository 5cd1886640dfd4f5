//! Email template rendering engine.
//!
//! Handlebars-based rendering for every email this service sends. All copy
//! is Spanish and shares one visual frame: a colored header, a light content
//! card, and an automated-mail footer. Each email ships as an HTML part and
//! a plain text part.

use crate::error::{NotificationError, NotificationResult};
use crate::models::{
    AccountCreatedEmailData, AppointmentEmailData, AppointmentRecipient, AppointmentReminderData,
    DewormingReminderData, FollowUpReminderData, UserRole, VaccinationReminderData,
    WelcomeEmailData,
};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

/// Frontend address used when `FRONTEND_URL` is not configured.
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// A rendered email ready for sending.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    /// HTML version of the email body.
    pub html: String,
    /// Plain text version of the email body.
    pub text: String,
    /// Email subject line.
    pub subject: String,
}

/// Template engine for rendering emails.
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    /// Platform address injected into templates that link back to Vetcore.
    frontend_url: String,
}

impl TemplateEngine {
    /// Create a new template engine with all templates registered.
    pub fn new(frontend_url: impl Into<String>) -> NotificationResult<Self> {
        let mut handlebars = Handlebars::new();

        let templates = [
            ("welcome_html", WELCOME_HTML_TEMPLATE),
            ("welcome_text", WELCOME_TEXT_TEMPLATE),
            ("account_created_html", ACCOUNT_CREATED_HTML_TEMPLATE),
            ("account_created_text", ACCOUNT_CREATED_TEXT_TEMPLATE),
            ("appointment_html", APPOINTMENT_HTML_TEMPLATE),
            ("appointment_text", APPOINTMENT_TEXT_TEMPLATE),
            ("appointment_reminder_html", APPOINTMENT_REMINDER_HTML_TEMPLATE),
            ("appointment_reminder_text", APPOINTMENT_REMINDER_TEXT_TEMPLATE),
            ("vaccination_reminder_html", VACCINATION_REMINDER_HTML_TEMPLATE),
            ("vaccination_reminder_text", VACCINATION_REMINDER_TEXT_TEMPLATE),
            ("deworming_reminder_html", DEWORMING_REMINDER_HTML_TEMPLATE),
            ("deworming_reminder_text", DEWORMING_REMINDER_TEXT_TEMPLATE),
            ("followup_reminder_html", FOLLOWUP_REMINDER_HTML_TEMPLATE),
            ("followup_reminder_text", FOLLOWUP_REMINDER_TEXT_TEMPLATE),
        ];

        for (name, source) in templates {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| {
                    NotificationError::Template(format!("Failed to register {}: {}", name, e))
                })?;
        }

        Ok(Self {
            handlebars,
            frontend_url: frontend_url.into(),
        })
    }

    /// Render a template with the given data.
    fn render<T: Serialize>(&self, template_name: &str, data: &T) -> NotificationResult<String> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| NotificationError::Template(e.to_string()))
    }

    /// Render the welcome email sent on client registration.
    pub fn render_welcome(&self, data: &WelcomeEmailData) -> NotificationResult<RenderedEmail> {
        debug!(fullname = %data.fullname, "Rendering welcome email");

        let payload = json!({
            "fullname": data.fullname,
            "frontend_url": self.frontend_url,
        });

        let html = self.render("welcome_html", &payload)?;
        let text = self.render("welcome_text", &payload)?;

        Ok(RenderedEmail {
            html,
            text,
            subject: "¡Bienvenido a Vetcore!".to_string(),
        })
    }

    /// Render the credentials email for an account created by an
    /// administrator. Role-specific content only appears for the four
    /// known roles; an unknown role still gets the shared content.
    pub fn render_account_created(
        &self,
        data: &AccountCreatedEmailData,
    ) -> NotificationResult<RenderedEmail> {
        debug!(fullname = %data.fullname, role = %data.role, "Rendering account created email");

        let payload = json!({
            "fullname": data.fullname,
            "email": data.email,
            "temporary_password": data.temporary_password,
            "role_name": data.role.to_string(),
            "is_admin": data.role == UserRole::Admin,
            "is_veterinarian": data.role == UserRole::Veterinarian,
            "is_receptionist": data.role == UserRole::Receptionist,
            "is_client": data.role == UserRole::Client,
            "frontend_url": self.frontend_url,
        });

        let html = self.render("account_created_html", &payload)?;
        let text = self.render("account_created_text", &payload)?;

        Ok(RenderedEmail {
            html,
            text,
            subject: "Tu cuenta en Vetcore ha sido creada".to_string(),
        })
    }

    /// Render an appointment confirmation for either party. The client and
    /// veterinarian variants differ in greeting, accent color, and which
    /// side of the appointment the details name.
    pub fn render_appointment_confirmation(
        &self,
        recipient: AppointmentRecipient,
        data: &AppointmentEmailData,
    ) -> NotificationResult<RenderedEmail> {
        debug!(recipient = %recipient, pet = %data.pet_name, "Rendering appointment confirmation email");

        let is_client = recipient == AppointmentRecipient::Client;
        let (recipient_name, accent, accent_soft) = if is_client {
            (&data.client_name, "#4CAF50", "#e8f5e9")
        } else {
            (&data.veterinarian_name, "#2196F3", "#e3f2fd")
        };

        let payload = json!({
            "recipient_name": recipient_name,
            "client_name": data.client_name,
            "veterinarian_name": data.veterinarian_name,
            "pet_name": data.pet_name,
            "fecha": data.fecha,
            "hora": data.hora,
            "motivo": data.motivo,
            "accent": accent,
            "accent_soft": accent_soft,
            "is_client": is_client,
            "is_veterinarian": !is_client,
            "frontend_url": self.frontend_url,
        });

        let html = self.render("appointment_html", &payload)?;
        let text = self.render("appointment_text", &payload)?;

        let subject = match recipient {
            AppointmentRecipient::Client => "Confirmación de tu cita en Vetcore".to_string(),
            AppointmentRecipient::Veterinarian => "Nueva cita programada en Vetcore".to_string(),
        };

        Ok(RenderedEmail { html, text, subject })
    }

    /// Render the appointment reminder email.
    pub fn render_appointment_reminder(
        &self,
        data: &AppointmentReminderData,
    ) -> NotificationResult<RenderedEmail> {
        debug!(fullname = %data.fullname, pet = %data.pet_name, "Rendering appointment reminder email");

        let payload = json!({
            "fullname": data.fullname,
            "pet_name": data.pet_name,
            "date": data.date,
            "time": data.time,
            "reason": data.reason,
        });

        let html = self.render("appointment_reminder_html", &payload)?;
        let text = self.render("appointment_reminder_text", &payload)?;

        Ok(RenderedEmail {
            html,
            text,
            subject: format!("Recordatorio de cita para {}", data.pet_name),
        })
    }

    /// Render the vaccination reminder email.
    pub fn render_vaccination_reminder(
        &self,
        data: &VaccinationReminderData,
    ) -> NotificationResult<RenderedEmail> {
        debug!(fullname = %data.fullname, pet = %data.pet_name, "Rendering vaccination reminder email");

        let payload = json!({
            "fullname": data.fullname,
            "pet_name": data.pet_name,
            "vaccine_name": data.vaccine_name,
            "next_dose": data.next_dose,
        });

        let html = self.render("vaccination_reminder_html", &payload)?;
        let text = self.render("vaccination_reminder_text", &payload)?;

        Ok(RenderedEmail {
            html,
            text,
            subject: format!("Recordatorio de vacunación para {}", data.pet_name),
        })
    }

    /// Render the deworming reminder email.
    pub fn render_deworming_reminder(
        &self,
        data: &DewormingReminderData,
    ) -> NotificationResult<RenderedEmail> {
        debug!(fullname = %data.fullname, pet = %data.pet_name, "Rendering deworming reminder email");

        let payload = json!({
            "fullname": data.fullname,
            "pet_name": data.pet_name,
            "product": data.product,
            "parasite_type": data.parasite_type,
            "next_dose": data.next_dose,
        });

        let html = self.render("deworming_reminder_html", &payload)?;
        let text = self.render("deworming_reminder_text", &payload)?;

        Ok(RenderedEmail {
            html,
            text,
            subject: format!("Recordatorio de desparasitación para {}", data.pet_name),
        })
    }

    /// Render the follow-up reminder email.
    pub fn render_followup_reminder(
        &self,
        data: &FollowUpReminderData,
    ) -> NotificationResult<RenderedEmail> {
        debug!(fullname = %data.fullname, pet = %data.pet_name, "Rendering follow-up reminder email");

        let payload = json!({
            "fullname": data.fullname,
            "pet_name": data.pet_name,
            "next_consultation": data.next_consultation,
            "diagnosis": data.diagnosis,
        });

        let html = self.render("followup_reminder_html", &payload)?;
        let text = self.render("followup_reminder_text", &payload)?;

        Ok(RenderedEmail {
            html,
            text,
            subject: format!("Recordatorio de seguimiento para {}", data.pet_name),
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(DEFAULT_FRONTEND_URL).expect("Failed to create default template engine")
    }
}

// ============================================================================
// Email Templates
// ============================================================================

const WELCOME_HTML_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Bienvenido a Vetcore</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background-color: #4CAF50; padding: 20px; text-align: center; border-radius: 10px 10px 0 0;">
    <h1 style="color: white; margin: 0;">¡Bienvenido a Vetcore!</h1>
  </div>

  <div style="background-color: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
    <h2 style="color: #4CAF50;">Hola {{fullname}},</h2>

    <p>¡Gracias por unirte a <strong>Vetcore</strong>, la plataforma de gestión veterinaria que cuida de tus mejores amigos!</p>

    <p>Estamos emocionados de tenerte con nosotros. Con Vetcore podrás:</p>

    <ul style="line-height: 2;">
      <li>📋 Gestionar las citas de tus mascotas</li>
      <li>🏥 Acceder al historial médico completo</li>
      <li>💊 Recibir recordatorios de vacunas y tratamientos</li>
      <li>👨‍⚕️ Conectar con veterinarios profesionales</li>
    </ul>

    <p>Tu cuenta ya está activa y lista para usar. Puedes iniciar sesión en cualquier momento para comenzar a gestionar el cuidado de tus mascotas.</p>

    <div style="text-align: center; margin: 30px 0;">
      <a href="{{frontend_url}}"
         style="background-color: #4CAF50; color: white; padding: 12px 30px; text-decoration: none; border-radius: 5px; font-weight: bold; display: inline-block;">
        Ir a Vetcore
      </a>
    </div>

    <p>Si tienes alguna pregunta o necesitas ayuda, no dudes en contactarnos.</p>

    <p>¡Que tengas un excelente día!</p>

    <p style="margin-top: 30px;">
      <strong>El equipo de Vetcore</strong><br>
      <small style="color: #666;">Cuidando de tus mascotas con amor y profesionalismo</small>
    </p>
  </div>

  <div style="text-align: center; margin-top: 20px; color: #666; font-size: 12px;">
    <p>Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.</p>
  </div>
</body>
</html>
"#;

const WELCOME_TEXT_TEMPLATE: &str = r#"
¡Bienvenido a Vetcore!

Hola {{{fullname}}},

¡Gracias por unirte a Vetcore, la plataforma de gestión veterinaria que cuida de tus mejores amigos!

Estamos emocionados de tenerte con nosotros. Con Vetcore podrás:

- Gestionar las citas de tus mascotas
- Acceder al historial médico completo
- Recibir recordatorios de vacunas y tratamientos
- Conectar con veterinarios profesionales

Tu cuenta ya está activa y lista para usar. Puedes iniciar sesión en cualquier momento para comenzar a gestionar el cuidado de tus mascotas.

Visita: {{{frontend_url}}}

Si tienes alguna pregunta o necesitas ayuda, no dudes en contactarnos.

¡Que tengas un excelente día!

El equipo de Vetcore
Cuidando de tus mascotas con amor y profesionalismo

---
Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.
"#;

const ACCOUNT_CREATED_HTML_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Cuenta creada en Vetcore</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background-color: #2196F3; padding: 20px; text-align: center; border-radius: 10px 10px 0 0;">
    <h1 style="color: white; margin: 0;">¡Tu cuenta ha sido creada!</h1>
  </div>

  <div style="background-color: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
    <h2 style="color: #2196F3;">Hola {{fullname}},</h2>

    <p>Un administrador ha creado una cuenta para ti en <strong>Vetcore</strong>, la plataforma de gestión veterinaria.</p>

    <div style="background-color: #fff3cd; border-left: 4px solid #ffc107; padding: 15px; margin: 20px 0;">
      <p style="margin: 0; font-weight: bold; color: #856404;">⚠️ Información importante de seguridad</p>
      <p style="margin: 10px 0 0 0; color: #856404;">Por tu seguridad, deberás cambiar esta contraseña la primera vez que inicies sesión.</p>
    </div>

    <h3 style="color: #2196F3; margin-top: 30px;">Tus credenciales de acceso:</h3>

    <div style="background-color: #e3f2fd; padding: 20px; border-radius: 5px; margin: 20px 0;">
      <p style="margin: 5px 0;"><strong>Email:</strong> {{email}}</p>
      <p style="margin: 5px 0;"><strong>Contraseña temporal:</strong> <code style="background-color: #fff; padding: 5px 10px; border-radius: 3px; font-size: 16px; color: #d32f2f;">{{temporary_password}}</code></p>
      <p style="margin: 5px 0;"><strong>Rol asignado:</strong> {{role_name}}</p>
    </div>

    <p><strong>¿Qué puedes hacer en Vetcore según tu rol?</strong></p>
    <ul style="line-height: 2;">
      {{#if is_admin}}<li>👨‍💼 Administrar usuarios y configuración del sistema</li>{{/if}}
      {{#if is_veterinarian}}<li>👨‍⚕️ Gestionar historiales médicos y consultas</li>{{/if}}
      {{#if is_receptionist}}<li>📋 Gestionar citas y registros de pacientes</li>{{/if}}
      {{#if is_client}}<li>🐾 Ver el historial médico de tus mascotas</li>{{/if}}
      <li>📧 Actualizar tu información de perfil</li>
    </ul>

    <div style="text-align: center; margin: 30px 0;">
      <a href="{{frontend_url}}"
         style="background-color: #2196F3; color: white; padding: 12px 30px; text-decoration: none; border-radius: 5px; font-weight: bold; display: inline-block;">
        Iniciar Sesión
      </a>
    </div>

    <div style="background-color: #fff3cd; border-left: 4px solid #ffc107; padding: 15px; margin: 20px 0;">
      <p style="margin: 0; font-weight: bold; color: #856404;">🔒 Recomendaciones de seguridad:</p>
      <ul style="margin: 10px 0 0 0; padding-left: 20px; color: #856404;">
        <li>No compartas tu contraseña con nadie</li>
        <li>Usa una contraseña segura al cambiarla (mínimo 8 caracteres)</li>
        <li>Cierra sesión cuando termines de usar la plataforma</li>
      </ul>
    </div>

    <p>Si tienes alguna pregunta o necesitas ayuda, no dudes en contactar al administrador.</p>

    <p style="margin-top: 30px;">
      <strong>El equipo de Vetcore</strong><br>
      <small style="color: #666;">Cuidando de tus mascotas con amor y profesionalismo</small>
    </p>
  </div>

  <div style="text-align: center; margin-top: 20px; color: #666; font-size: 12px;">
    <p>Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.</p>
  </div>
</body>
</html>
"#;

const ACCOUNT_CREATED_TEXT_TEMPLATE: &str = r#"
Tu cuenta en Vetcore ha sido creada

Hola {{{fullname}}},

Un administrador ha creado una cuenta para ti en Vetcore, la plataforma de gestión veterinaria.

⚠️ IMPORTANTE: Por tu seguridad, deberás cambiar esta contraseña la primera vez que inicies sesión.

TUS CREDENCIALES DE ACCESO:
- Email: {{{email}}}
- Contraseña temporal: {{{temporary_password}}}
- Rol asignado: {{{role_name}}}

RECOMENDACIONES DE SEGURIDAD:
- No compartas tu contraseña con nadie
- Usa una contraseña segura al cambiarla (mínimo 8 caracteres)
- Cierra sesión cuando termines de usar la plataforma

Visita: {{{frontend_url}}}

Si tienes alguna pregunta o necesitas ayuda, no dudes en contactar al administrador.

El equipo de Vetcore
Cuidando de tus mascotas con amor y profesionalismo

---
Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.
"#;

const APPOINTMENT_HTML_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Cita en Vetcore</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background-color: {{accent}}; padding: 20px; text-align: center; border-radius: 10px 10px 0 0;">
    {{#if is_client}}<h1 style="color: white; margin: 0;">¡Cita confirmada!</h1>{{/if}}
    {{#if is_veterinarian}}<h1 style="color: white; margin: 0;">Nueva cita programada</h1>{{/if}}
  </div>

  <div style="background-color: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
    <h2 style="color: {{accent}};">Hola {{recipient_name}},</h2>

    {{#if is_client}}<p>Tu cita en <strong>Vetcore</strong> ha sido registrada correctamente. Aquí tienes los detalles:</p>{{/if}}
    {{#if is_veterinarian}}<p>Se ha programado una nueva cita en tu agenda de <strong>Vetcore</strong>. Aquí tienes los detalles:</p>{{/if}}

    <div style="background-color: {{accent_soft}}; padding: 20px; border-radius: 5px; margin: 20px 0;">
      <p style="margin: 5px 0;"><strong>Fecha:</strong> {{fecha}}</p>
      <p style="margin: 5px 0;"><strong>Hora:</strong> {{hora}}</p>
      <p style="margin: 5px 0;"><strong>Motivo:</strong> {{motivo}}</p>
      {{#if is_client}}
      <p style="margin: 5px 0;"><strong>Mascota:</strong> {{pet_name}}</p>
      <p style="margin: 5px 0;"><strong>Veterinario/a:</strong> {{veterinarian_name}}</p>
      {{/if}}
      {{#if is_veterinarian}}
      <p style="margin: 5px 0;"><strong>Paciente:</strong> {{pet_name}}</p>
      <p style="margin: 5px 0;"><strong>Cliente:</strong> {{client_name}}</p>
      {{/if}}
    </div>

    {{#if is_client}}<p>Si necesitas reprogramar o cancelar tu cita, hazlo desde la plataforma o contacta con la clínica.</p>{{/if}}

    <div style="text-align: center; margin: 30px 0;">
      <a href="{{frontend_url}}"
         style="background-color: {{accent}}; color: white; padding: 12px 30px; text-decoration: none; border-radius: 5px; font-weight: bold; display: inline-block;">
        Ver en Vetcore
      </a>
    </div>

    <p style="margin-top: 30px;">
      <strong>El equipo de Vetcore</strong><br>
      <small style="color: #666;">Cuidando de tus mascotas con amor y profesionalismo</small>
    </p>
  </div>

  <div style="text-align: center; margin-top: 20px; color: #666; font-size: 12px;">
    <p>Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.</p>
  </div>
</body>
</html>
"#;

const APPOINTMENT_TEXT_TEMPLATE: &str = r#"
{{#if is_client}}Confirmación de tu cita en Vetcore{{/if}}{{#if is_veterinarian}}Nueva cita programada en Vetcore{{/if}}

Hola {{{recipient_name}}},

{{#if is_client}}Tu cita en Vetcore ha sido registrada correctamente. Aquí tienes los detalles:{{/if}}{{#if is_veterinarian}}Se ha programado una nueva cita en tu agenda de Vetcore. Aquí tienes los detalles:{{/if}}

- Fecha: {{{fecha}}}
- Hora: {{{hora}}}
- Motivo: {{{motivo}}}
{{#if is_client}}- Mascota: {{{pet_name}}}
- Veterinario/a: {{{veterinarian_name}}}{{/if}}{{#if is_veterinarian}}- Paciente: {{{pet_name}}}
- Cliente: {{{client_name}}}{{/if}}

Visita: {{{frontend_url}}}

El equipo de Vetcore
Cuidando de tus mascotas con amor y profesionalismo

---
Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.
"#;

const APPOINTMENT_REMINDER_HTML_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Recordatorio de cita</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background-color: #FF9800; padding: 20px; text-align: center; border-radius: 10px 10px 0 0;">
    <h1 style="color: white; margin: 0;">Recordatorio de cita</h1>
  </div>

  <div style="background-color: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
    <h2 style="color: #FF9800;">Hola {{fullname}},</h2>

    <p>Te recordamos que <strong>{{pet_name}}</strong> tiene una cita próxima en <strong>Vetcore</strong>:</p>

    <div style="background-color: #fff3e0; padding: 20px; border-radius: 5px; margin: 20px 0;">
      <p style="margin: 5px 0;"><strong>Fecha:</strong> {{date}}</p>
      <p style="margin: 5px 0;"><strong>Hora:</strong> {{time}}</p>
      <p style="margin: 5px 0;"><strong>Motivo:</strong> {{reason}}</p>
      <p style="margin: 5px 0;"><strong>Mascota:</strong> {{pet_name}}</p>
    </div>

    <p>Si no puedes asistir, por favor contacta con la clínica para reprogramar la cita.</p>

    <p style="margin-top: 30px;">
      <strong>El equipo de Vetcore</strong><br>
      <small style="color: #666;">Cuidando de tus mascotas con amor y profesionalismo</small>
    </p>
  </div>

  <div style="text-align: center; margin-top: 20px; color: #666; font-size: 12px;">
    <p>Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.</p>
  </div>
</body>
</html>
"#;

const APPOINTMENT_REMINDER_TEXT_TEMPLATE: &str = r#"
Recordatorio de cita

Hola {{{fullname}}},

Te recordamos que {{{pet_name}}} tiene una cita próxima en Vetcore:

- Fecha: {{{date}}}
- Hora: {{{time}}}
- Motivo: {{{reason}}}
- Mascota: {{{pet_name}}}

Si no puedes asistir, por favor contacta con la clínica para reprogramar la cita.

El equipo de Vetcore
Cuidando de tus mascotas con amor y profesionalismo

---
Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.
"#;

const VACCINATION_REMINDER_HTML_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Recordatorio de vacunación</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background-color: #9C27B0; padding: 20px; text-align: center; border-radius: 10px 10px 0 0;">
    <h1 style="color: white; margin: 0;">Recordatorio de vacunación</h1>
  </div>

  <div style="background-color: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
    <h2 style="color: #9C27B0;">Hola {{fullname}},</h2>

    <p>La próxima dosis de vacunación de <strong>{{pet_name}}</strong> está programada:</p>

    <div style="background-color: #f3e5f5; padding: 20px; border-radius: 5px; margin: 20px 0;">
      <p style="margin: 5px 0;"><strong>Vacuna:</strong> {{vaccine_name}}</p>
      <p style="margin: 5px 0;"><strong>Próxima dosis:</strong> {{next_dose}}</p>
      <p style="margin: 5px 0;"><strong>Mascota:</strong> {{pet_name}}</p>
    </div>

    <p>Agenda una cita para mantener al día el calendario de vacunación de tu mascota.</p>

    <p style="margin-top: 30px;">
      <strong>El equipo de Vetcore</strong><br>
      <small style="color: #666;">Cuidando de tus mascotas con amor y profesionalismo</small>
    </p>
  </div>

  <div style="text-align: center; margin-top: 20px; color: #666; font-size: 12px;">
    <p>Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.</p>
  </div>
</body>
</html>
"#;

const VACCINATION_REMINDER_TEXT_TEMPLATE: &str = r#"
Recordatorio de vacunación

Hola {{{fullname}}},

La próxima dosis de vacunación de {{{pet_name}}} está programada:

- Vacuna: {{{vaccine_name}}}
- Próxima dosis: {{{next_dose}}}
- Mascota: {{{pet_name}}}

Agenda una cita para mantener al día el calendario de vacunación de tu mascota.

El equipo de Vetcore
Cuidando de tus mascotas con amor y profesionalismo

---
Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.
"#;

const DEWORMING_REMINDER_HTML_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Recordatorio de desparasitación</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background-color: #009688; padding: 20px; text-align: center; border-radius: 10px 10px 0 0;">
    <h1 style="color: white; margin: 0;">Recordatorio de desparasitación</h1>
  </div>

  <div style="background-color: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
    <h2 style="color: #009688;">Hola {{fullname}},</h2>

    <p>La próxima desparasitación de <strong>{{pet_name}}</strong> está programada:</p>

    <div style="background-color: #e0f2f1; padding: 20px; border-radius: 5px; margin: 20px 0;">
      <p style="margin: 5px 0;"><strong>Producto:</strong> {{product}}</p>
      <p style="margin: 5px 0;"><strong>Tipo de parásito:</strong> {{parasite_type}}</p>
      <p style="margin: 5px 0;"><strong>Próxima dosis:</strong> {{next_dose}}</p>
      <p style="margin: 5px 0;"><strong>Mascota:</strong> {{pet_name}}</p>
    </div>

    <p>Agenda una cita para proteger a tu mascota de los parásitos.</p>

    <p style="margin-top: 30px;">
      <strong>El equipo de Vetcore</strong><br>
      <small style="color: #666;">Cuidando de tus mascotas con amor y profesionalismo</small>
    </p>
  </div>

  <div style="text-align: center; margin-top: 20px; color: #666; font-size: 12px;">
    <p>Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.</p>
  </div>
</body>
</html>
"#;

const DEWORMING_REMINDER_TEXT_TEMPLATE: &str = r#"
Recordatorio de desparasitación

Hola {{{fullname}}},

La próxima desparasitación de {{{pet_name}}} está programada:

- Producto: {{{product}}}
- Tipo de parásito: {{{parasite_type}}}
- Próxima dosis: {{{next_dose}}}
- Mascota: {{{pet_name}}}

Agenda una cita para proteger a tu mascota de los parásitos.

El equipo de Vetcore
Cuidando de tus mascotas con amor y profesionalismo

---
Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.
"#;

const FOLLOWUP_REMINDER_HTML_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Recordatorio de seguimiento</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background-color: #3F51B5; padding: 20px; text-align: center; border-radius: 10px 10px 0 0;">
    <h1 style="color: white; margin: 0;">Recordatorio de seguimiento</h1>
  </div>

  <div style="background-color: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
    <h2 style="color: #3F51B5;">Hola {{fullname}},</h2>

    <p><strong>{{pet_name}}</strong> tiene una consulta de seguimiento pendiente en <strong>Vetcore</strong>:</p>

    <div style="background-color: #e8eaf6; padding: 20px; border-radius: 5px; margin: 20px 0;">
      <p style="margin: 5px 0;"><strong>Próxima consulta:</strong> {{next_consultation}}</p>
      <p style="margin: 5px 0;"><strong>Diagnóstico:</strong> {{diagnosis}}</p>
      <p style="margin: 5px 0;"><strong>Mascota:</strong> {{pet_name}}</p>
    </div>

    <p>Agenda la consulta de seguimiento para continuar con el tratamiento de tu mascota.</p>

    <p style="margin-top: 30px;">
      <strong>El equipo de Vetcore</strong><br>
      <small style="color: #666;">Cuidando de tus mascotas con amor y profesionalismo</small>
    </p>
  </div>

  <div style="text-align: center; margin-top: 20px; color: #666; font-size: 12px;">
    <p>Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.</p>
  </div>
</body>
</html>
"#;

const FOLLOWUP_REMINDER_TEXT_TEMPLATE: &str = r#"
Recordatorio de seguimiento

Hola {{{fullname}}},

{{{pet_name}}} tiene una consulta de seguimiento pendiente en Vetcore:

- Próxima consulta: {{{next_consultation}}}
- Diagnóstico: {{{diagnosis}}}
- Mascota: {{{pet_name}}}

Agenda la consulta de seguimiento para continuar con el tratamiento de tu mascota.

El equipo de Vetcore
Cuidando de tus mascotas con amor y profesionalismo

---
Este correo fue enviado automáticamente. Por favor no respondas a este mensaje.
"#;
