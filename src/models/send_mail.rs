use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Send-Mail Request
///
/// An inbound send-mail request as received on the wire.
///
/// Every field is optional at this layer: requests arrive from loosely
/// typed clients, so deserialization never fails on a missing or empty
/// field. Presence and format are checked one rule at a time by
/// [`crate::handlers::validation::rules`], which reports the first
/// violated rule instead of a serde error.
///
/// ## Example JSON
/// ```json
/// {
///   "subject": "Welcome aboard",
///   "message": "<p>Hello!</p>",
///   "sender": { "name": "Acme Notifications", "email": "no-reply@acme.dev" },
///   "recipients": { "email": "customer@gmail.com" }
/// }
/// ```
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SendMailRequest {
    pub subject: Option<String>,
    /// HTML body of the message. Either this or a template id must be
    /// supplied.
    pub message: Option<String>,
    pub template: Option<TemplateRef>,
    pub sender: Option<SenderField>,
    pub recipients: Option<RecipientsField>,
}

/// Reference to a stored template, used in place of an inline body.
/// `variables` is an opaque JSON object forwarded to the renderer.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TemplateRef {
    pub id: Option<String>,
    #[schema(value_type = Object)]
    pub variables: Option<serde_json::Value>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SenderField {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RecipientsField {
    pub email: Option<String>,
}

fn trimmed(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

impl SendMailRequest {
    /// Trimmed subject, if present and non-empty.
    pub fn subject(&self) -> Option<&str> {
        trimmed(&self.subject)
    }

    /// Trimmed HTML body, if present and non-empty.
    pub fn html_body(&self) -> Option<&str> {
        trimmed(&self.message)
    }

    pub fn template_id(&self) -> Option<&str> {
        self.template.as_ref().and_then(|t| trimmed(&t.id))
    }

    pub fn template_variables(&self) -> Option<&serde_json::Value> {
        self.template.as_ref().and_then(|t| t.variables.as_ref())
    }

    pub fn sender_name(&self) -> Option<&str> {
        self.sender.as_ref().and_then(|s| trimmed(&s.name))
    }

    pub fn sender_email(&self) -> Option<&str> {
        self.sender.as_ref().and_then(|s| trimmed(&s.email))
    }

    pub fn recipient_email(&self) -> Option<&str> {
        self.recipients.as_ref().and_then(|r| trimmed(&r.email))
    }
}

/// A send-mail request that passed every validation rule: trimmed,
/// normalized, and ready for hand-off to the delivery pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidRequest {
    pub subject: String,
    pub content: MailContent,
    pub sender: VerifiedSender,
    pub recipient: String,
}

/// Body of an accepted message: inline HTML or a stored template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MailContent {
    Html {
        body: String,
    },
    Template {
        id: String,
        variables: Option<serde_json::Value>,
    },
}

/// Sender identity carried by an accepted request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedSender {
    pub name: String,
    pub email: String,
}
