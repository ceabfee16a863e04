//! Email templates rendered with Handlebars
//!
//! The bodies are embedded at build time and registered once. Strict mode
//! turns a missing variable into a render error instead of an empty string.

use handlebars::Handlebars;
use serde_json::Value;
use tracing::error;

use setting_core::errors::DomainError;
use setting_core::services::{EmailTemplate, TemplateRenderer};

use crate::InfrastructureError;

fn source(template: EmailTemplate) -> &'static str {
    match template {
        EmailTemplate::ContactNotification => {
            include_str!("../../templates/contact-notification.hbs")
        }
        EmailTemplate::CustomizationConfirmation => {
            include_str!("../../templates/customization-confirmation.hbs")
        }
        EmailTemplate::CustomizationAlert => {
            include_str!("../../templates/customization-alert.hbs")
        }
    }
}

/// Renderer over the embedded email templates
pub struct HandlebarsRenderer {
    handlebars: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Result<Self, InfrastructureError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);

        for template in EmailTemplate::all() {
            handlebars
                .register_template_string(template.name(), source(template))
                .map_err(|e| {
                    InfrastructureError::Template(format!(
                        "Failed to register {}: {}",
                        template.name(),
                        e
                    ))
                })?;
        }

        Ok(Self { handlebars })
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, template: EmailTemplate, data: &Value) -> Result<String, DomainError> {
        self.handlebars.render(template.name(), data).map_err(|e| {
            error!(template = template.name(), error = %e, "Failed to render email template");
            InfrastructureError::Template(e.to_string()).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contact_data() -> Value {
        json!({
            "name": "Jane",
            "email": "jane@example.com",
            "phone": "",
            "subject": "Order question",
            "message": "Where is <my> order?",
            "product_name": "E-LUXE",
            "support_url": "https://e-luxe.fr/support",
        })
    }

    #[test]
    fn test_contact_template_renders_fields_escaped() {
        let renderer = HandlebarsRenderer::new().unwrap();
        let body = renderer
            .render(EmailTemplate::ContactNotification, &contact_data())
            .unwrap();

        assert!(body.contains("Jane"));
        assert!(body.contains("Order question"));
        assert!(body.contains("Where is &lt;my&gt; order?"));
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let renderer = HandlebarsRenderer::new().unwrap();
        let result = renderer.render(EmailTemplate::ContactNotification, &json!({"name": "Jane"}));

        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[test]
    fn test_customization_alert_includes_image_only_when_present() {
        let renderer = HandlebarsRenderer::new().unwrap();
        let mut data = json!({
            "name": "Jane",
            "email": "jane@example.com",
            "phone": "0600000000",
            "subject": "Engraving",
            "message": "Initials on the clasp",
            "image": "",
            "product_id": "64b7f0c2a1b2c3d4e5f60718",
            "product_name": "E-LUXE",
            "support_url": "#",
        });

        let without = renderer.render(EmailTemplate::CustomizationAlert, &data).unwrap();
        assert!(!without.contains("<img"));

        data["image"] = json!("https://cdn.e-luxe.fr/ref.png");
        let with = renderer.render(EmailTemplate::CustomizationAlert, &data).unwrap();
        assert!(with.contains("https://cdn.e-luxe.fr/ref.png"));
    }
}
