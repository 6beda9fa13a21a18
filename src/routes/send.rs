use crate::dispatch::DispatchQueue;
use crate::handlers::validation::rules::{self, RequestError, ValidateFailure};
use crate::handlers::validation::sender::SenderVerifier;
use crate::models::send_mail::SendMailRequest;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// Acknowledgement returned when a request is accepted for delivery.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendReceipt {
    pub message: String,
    pub status_code: u16,
    pub data: ReceiptData,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReceiptData {
    #[serde(rename = "ref")]
    pub reference: String,
}

/// Project secret presented as a bearer credential. Requests without
/// one get the empty secret: senders on the platform domain are
/// unaffected, custom-domain senders cannot match a binding.
fn project_secret(req: &HttpRequest) -> String {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_string()
}

/// # Send Mail Endpoint
///
/// Accepts a send-mail request, validates it rule by rule, and queues
/// it for the delivery pipeline.
///
/// ## Request
/// - Method: POST
/// - Body: JSON send-mail payload (`subject`, `message` or `template`,
///   `sender`, `recipients`)
/// - Headers: `Authorization: Bearer <project secret>` selects the
///   credential checked against custom sender domains
///
/// ## Responses
/// - **200 OK**: request accepted, body carries the dispatch ref
/// - **400 Bad Request**: first violated rule, as
///   `{ "message": ..., "statusCode": 400 }` with a fixed message text
/// - **500 Internal Server Error**: sender registry or queue unavailable
///
/// ## Example Request
/// ```json
/// {
///   "subject": "test subject",
///   "message": "<p>quick send</p>",
///   "sender": { "name": "adedotxn.dev", "email": "sender@projects.smtpexpress.com" },
///   "recipients": { "email": "adedotxn.dev@gmail.com" }
/// }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/send",
    request_body = SendMailRequest,
    responses(
        (status = 200, description = "Request accepted and queued", body = SendReceipt),
        (status = 400, description = "Request rejected by a validation rule", body = RequestError),
        (status = 500, description = "Verification backend or queue unavailable")
    ),
    tag = "Send API"
)]
#[post("/send")]
pub async fn send_mail(
    http: HttpRequest,
    req: web::Json<SendMailRequest>,
    verifier: web::Data<dyn SenderVerifier>,
    queue: web::Data<DispatchQueue>,
) -> Result<impl Responder, actix_web::Error> {
    let request = req.into_inner();
    let secret = project_secret(&http);

    match rules::validate(&request, verifier.get_ref(), &secret).await {
        Ok(valid) => match queue.enqueue(&valid).await {
            Ok(reference) => Ok(HttpResponse::Ok().json(SendReceipt {
                message: "Mail queued for delivery".to_string(),
                status_code: 200,
                data: ReceiptData { reference },
            })),
            Err(e) => {
                tracing::error!("failed to queue accepted request: {}", e);
                Ok(HttpResponse::InternalServerError().json(json!({
                    "message": "Failed to queue mail for delivery",
                    "statusCode": 500
                })))
            }
        },
        Err(ValidateFailure::Rejected(violation)) => {
            tracing::warn!("send request rejected: {:?}", violation.class());
            Ok(HttpResponse::BadRequest().json(RequestError::from(violation)))
        }
        Err(ValidateFailure::Verifier(message)) => {
            tracing::error!("sender verification unavailable: {}", message);
            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Sender verification failed",
                "statusCode": 500
            })))
        }
    }
}

/// # Send Status Endpoint
///
/// Looks up the dispatch status of a previously accepted request by
/// its `ref`. Status keys expire an hour after acceptance.
#[utoipa::path(
    get,
    path = "/api/v1/send-status/{reference}",
    responses(
        (status = 200, description = "Dispatch status for the reference"),
        (status = 404, description = "Unknown or expired reference"),
        (status = 500, description = "Queue unavailable")
    ),
    tag = "Send API"
)]
#[get("/send-status/{reference}")]
pub async fn send_status(
    path: web::Path<String>,
    queue: web::Data<DispatchQueue>,
) -> Result<impl Responder, actix_web::Error> {
    let reference = path.into_inner();

    match queue.get_status(&reference).await {
        Ok(Some(entry)) => Ok(HttpResponse::Ok().json(json!({
            "ref": entry.reference,
            "status": entry.status,
            "queuedAt": entry.queued_at
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "message": "Send reference not found",
            "statusCode": 404
        }))),
        Err(e) => {
            tracing::error!("failed to read dispatch status: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Failed to retrieve send status",
                "statusCode": 500
            })))
        }
    }
}

/// Configures send routes under /api/v1
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(send_mail).service(send_status);
}
