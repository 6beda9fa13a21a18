use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa
/// procedural macros.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Send Mail: `POST /api/v1/send`
/// - Send Status: `GET /api/v1/send-status/{ref}`
///
/// # Note
/// The spec is generated at compile time from these annotations; changes
/// to the API surface should be reflected here first.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::send::send_mail,
        crate::routes::send::send_status,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::send_mail::SendMailRequest,
            crate::models::send_mail::TemplateRef,
            crate::models::send_mail::SenderField,
            crate::models::send_mail::RecipientsField,
            crate::handlers::validation::rules::RequestError,
            crate::routes::send::SendReceipt,
            crate::routes::send::ReceiptData,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Send API", description = "Send-mail request validation and dispatch"),
        (name = "GraphQL", description = "GraphQL query interface for the same capabilities")
    ),
    info(
        description = "Transactional mail send API: validates send-mail requests against an ordered rule set and queues accepted requests for delivery",
        title = "Send API",
        version = "0.4.0+sprint2",
    )
)]
pub struct ApiDoc;
