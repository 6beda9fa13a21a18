use crate::handlers::validation::sender::SenderVerifier;
use crate::handlers::validation::syntax;
use crate::models::send_mail::{MailContent, SendMailRequest, ValidRequest, VerifiedSender};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use utoipa::ToSchema;

/// Minimum accepted subject length, in characters.
pub const MIN_SUBJECT_CHARS: usize = 3;
/// Minimum accepted sender display-name length, in characters.
pub const MIN_SENDER_NAME_CHARS: usize = 3;

/// A rejected send-mail request: one variant per rule, declared in the
/// order the rules run. The first violated rule decides the variant;
/// later rules are never evaluated.
///
/// The message text of each variant is a compatibility contract with
/// existing clients and must not be reworded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingSenderEmail,
    MissingSubject,
    MissingMessage,
    MissingRecipientEmail,
    MissingSenderName,
    SubjectTooShort,
    InvalidRecipientEmail,
    SenderNameTooShort,
    SenderUnreachable,
    SenderDomainMismatch,
}

/// Coarse classification of a rejection, used for logging and metrics
/// rather than the wire (clients key on the exact message).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationClass {
    MissingField,
    LengthViolation,
    FormatViolation,
    SenderUnreachable,
    DomainMismatch,
}

impl ValidationError {
    /// The client-facing message for this rejection. Central table:
    /// every rule's text lives here and nowhere else.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingSenderEmail => "Missing value of sender's email in request body",
            Self::MissingSubject => "Missing value of subject in request body",
            Self::MissingMessage => {
                "Missing value of message in request body. If using a template, please provide a template id. \n      Refer to the usage of templates here https://smtpexpress.com/docs/send-api#with-templates"
            }
            Self::MissingRecipientEmail => "Missing value of recipient's email in request body",
            Self::MissingSenderName => "Missing value of sender's name in request body",
            Self::SubjectTooShort => "Subject must be at least 3 characters long",
            Self::InvalidRecipientEmail => "Invalid value of recipient's email in request body",
            Self::SenderNameTooShort => "Sender name must be at least 3 characters long",
            Self::SenderUnreachable => "Sender address is not reachable",
            Self::SenderDomainMismatch => "Custom sender domain does not match the selected secret",
        }
    }

    /// Every validation rejection is a client error.
    pub const fn status_code(&self) -> u16 {
        400
    }

    pub const fn class(&self) -> ViolationClass {
        match self {
            Self::MissingSenderEmail
            | Self::MissingSubject
            | Self::MissingMessage
            | Self::MissingRecipientEmail
            | Self::MissingSenderName => ViolationClass::MissingField,
            Self::SubjectTooShort | Self::SenderNameTooShort => ViolationClass::LengthViolation,
            Self::InvalidRecipientEmail => ViolationClass::FormatViolation,
            Self::SenderUnreachable => ViolationClass::SenderUnreachable,
            Self::SenderDomainMismatch => ViolationClass::DomainMismatch,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Wire shape of a rejected request.
///
/// ## Example JSON
/// ```json
/// { "message": "Subject must be at least 3 characters long", "statusCode": 400 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestError {
    pub message: String,
    pub status_code: u16,
}

impl From<ValidationError> for RequestError {
    fn from(error: ValidationError) -> Self {
        Self {
            message: error.message().to_string(),
            status_code: error.status_code(),
        }
    }
}

/// Failure modes of [`validate`]: either the request was rejected, or
/// the verification backend could not answer.
#[derive(Debug)]
pub enum ValidateFailure {
    Rejected(ValidationError),
    Verifier(String),
}

impl From<ValidationError> for ValidateFailure {
    fn from(error: ValidationError) -> Self {
        Self::Rejected(error)
    }
}

/// Body of a request that cleared the deterministic rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailContentRef<'a> {
    Html(&'a str),
    Template(&'a str),
}

/// Borrowed, trimmed views of the fields every accepted request must
/// carry, produced by [`precheck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedRequest<'a> {
    pub subject: &'a str,
    pub content: MailContentRef<'a>,
    pub sender_name: &'a str,
    pub sender_email: &'a str,
    pub recipient: &'a str,
}

/// Runs the deterministic rules (presence, length, recipient format)
/// in their fixed order and returns the first violation, or trimmed
/// views of the checked fields.
///
/// Never suspends and never touches service-side state, so callers can
/// use it as a dry-run linter.
pub fn precheck(request: &SendMailRequest) -> Result<CheckedRequest<'_>, ValidationError> {
    // 1. Sender email present
    let sender_email = request
        .sender_email()
        .ok_or(ValidationError::MissingSenderEmail)?;

    // 2. Subject present
    let subject = request.subject().ok_or(ValidationError::MissingSubject)?;

    // 3. Message body or template id present; an explicit body wins
    let content = match (request.html_body(), request.template_id()) {
        (Some(body), _) => MailContentRef::Html(body),
        (None, Some(id)) => MailContentRef::Template(id),
        (None, None) => return Err(ValidationError::MissingMessage),
    };

    // 4. Recipient email present
    let recipient = request
        .recipient_email()
        .ok_or(ValidationError::MissingRecipientEmail)?;

    // 5. Sender name present
    let sender_name = request
        .sender_name()
        .ok_or(ValidationError::MissingSenderName)?;

    // 6. Subject long enough
    if subject.chars().count() < MIN_SUBJECT_CHARS {
        return Err(ValidationError::SubjectTooShort);
    }

    // 7. Recipient address well-formed
    if !syntax::is_valid_email(recipient) {
        return Err(ValidationError::InvalidRecipientEmail);
    }

    // 8. Sender name long enough
    if sender_name.chars().count() < MIN_SENDER_NAME_CHARS {
        return Err(ValidationError::SenderNameTooShort);
    }

    Ok(CheckedRequest {
        subject,
        content,
        sender_name,
        sender_email,
        recipient,
    })
}

/// Validates a send-mail request end to end: the deterministic rules
/// via [`precheck`], then sender reachability and custom-domain binding
/// through the injected `verifier`. Returns a normalized
/// [`ValidRequest`] ready for hand-off to the delivery pipeline.
///
/// `project_secret` is the credential presented by the caller; it is
/// only consulted when the sender uses a custom domain.
pub async fn validate<V>(
    request: &SendMailRequest,
    verifier: &V,
    project_secret: &str,
) -> Result<ValidRequest, ValidateFailure>
where
    V: SenderVerifier + ?Sized,
{
    let checked = precheck(request)?;

    // 9. Sender address verified and connected
    let reachable = verifier
        .is_reachable_sender(checked.sender_email)
        .await
        .map_err(ValidateFailure::Verifier)?;
    if !reachable {
        return Err(ValidationError::SenderUnreachable.into());
    }

    // 10. Custom sender domains must be bound to the presented secret.
    // An address with no domain part can never match a binding.
    match sender_domain(checked.sender_email) {
        Some(domain) if is_custom_domain(&domain) => {
            let matches = verifier
                .domain_matches_secret(&domain, project_secret)
                .await
                .map_err(ValidateFailure::Verifier)?;
            if !matches {
                return Err(ValidationError::SenderDomainMismatch.into());
            }
        }
        Some(_) => {}
        None => return Err(ValidationError::SenderDomainMismatch.into()),
    }

    Ok(ValidRequest {
        subject: checked.subject.to_owned(),
        content: match checked.content {
            MailContentRef::Html(body) => MailContent::Html {
                body: body.to_owned(),
            },
            MailContentRef::Template(id) => MailContent::Template {
                id: id.to_owned(),
                variables: request.template_variables().cloned(),
            },
        },
        sender: VerifiedSender {
            name: checked.sender_name.to_owned(),
            email: checked.sender_email.to_owned(),
        },
        recipient: checked.recipient.to_owned(),
    })
}

fn sender_domain(email: &str) -> Option<String> {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_ascii_lowercase())
        .filter(|domain| !domain.is_empty())
}

/// The platform's own sending domain (and its subdomains) need no
/// custom-domain binding.
fn is_custom_domain(domain: &str) -> bool {
    let default =
        env::var("DEFAULT_SENDER_DOMAIN").unwrap_or_else(|_| "smtpexpress.com".to_string());
    let default = default.to_ascii_lowercase();

    domain != default && !domain.ends_with(&format!(".{}", default))
}
