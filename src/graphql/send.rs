use crate::handlers::validation::rules;
use crate::models::send_mail::{RecipientsField, SendMailRequest, SenderField, TemplateRef};
use async_graphql::{Context, InputObject, Object, Result, SimpleObject};

/// Send-mail request as a GraphQL input tree. Mirrors the REST payload;
/// every field is optional so callers can lint partial drafts.
#[derive(InputObject, Default)]
pub struct SendMailInput {
    pub subject: Option<String>,
    /// HTML body of the message. Either this or a template id must be
    /// supplied.
    pub message: Option<String>,
    pub template: Option<TemplateInput>,
    pub sender: Option<SenderInput>,
    pub recipients: Option<RecipientsInput>,
}

#[derive(InputObject, Default)]
pub struct TemplateInput {
    pub id: Option<String>,
    pub variables: Option<async_graphql::Json<serde_json::Value>>,
}

#[derive(InputObject, Default)]
pub struct SenderInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(InputObject, Default)]
pub struct RecipientsInput {
    pub email: Option<String>,
}

impl From<SendMailInput> for SendMailRequest {
    fn from(input: SendMailInput) -> Self {
        SendMailRequest {
            subject: input.subject,
            message: input.message,
            template: input.template.map(|t| TemplateRef {
                id: t.id,
                variables: t.variables.map(|v| v.0),
            }),
            sender: input.sender.map(|s| SenderField {
                name: s.name,
                email: s.email,
            }),
            recipients: input.recipients.map(|r| RecipientsField { email: r.email }),
        }
    }
}

/// Outcome of a dry-run over the deterministic validation rules.
#[derive(SimpleObject)]
pub struct RequestReport {
    /// Whether the request passes every deterministic rule
    pub valid: bool,
    /// First violated rule, when the request is rejected
    pub error: Option<ReportedError>,
}

/// The rejection a real send would answer with.
#[derive(SimpleObject)]
pub struct ReportedError {
    pub message: String,
    pub status_code: i32,
}

/// Query operations for linting send-mail requests
#[derive(Default)]
pub struct SendQuery;

#[Object]
impl SendQuery {
    /// Dry-runs the deterministic validation rules (presence, length,
    /// recipient format) against a candidate request and reports the
    /// first violation a real send would be rejected with.
    ///
    /// Sender reachability and custom-domain binding are checked only
    /// on the send path itself; a request that passes here can still be
    /// rejected there.
    async fn validate_request(
        &self,
        _ctx: &Context<'_>,
        request: SendMailInput,
    ) -> Result<RequestReport> {
        let request: SendMailRequest = request.into();

        Ok(match rules::precheck(&request) {
            Ok(_) => RequestReport {
                valid: true,
                error: None,
            },
            Err(violation) => RequestReport {
                valid: false,
                error: Some(ReportedError {
                    message: violation.message().to_string(),
                    status_code: violation.status_code() as i32,
                }),
            },
        })
    }
}
