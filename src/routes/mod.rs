use actix_web::web;

/// # Health Check Endpoint
///
/// Liveness probe: `GET /api/v1/health` answers with the service status
/// and a timestamp.
pub mod health;

/// # Send API Endpoints
///
/// `POST /api/v1/send` validates a send-mail request rule by rule and
/// queues accepted requests for delivery;
/// `GET /api/v1/send-status/{ref}` looks up a queued send.
///
/// ## Responses
/// - **200 OK**: request accepted, dispatch ref returned
/// - **400 Bad Request**: first violated validation rule, as
///   `{ "message": ..., "statusCode": 400 }`
/// - **500 Internal Server Error**: sender registry or queue unavailable
pub mod send;

/// # GraphQL Endpoint
///
/// `POST /api/v1/graphql` serves the query schema (health probe and
/// request linter); `GET /api/v1/playground` serves the development UI.
pub mod graphql;

#[cfg(test)]
mod send_edge_case_tests;

/// # API Route Configuration
///
/// Mounts the versioned API under the `/api/v1` base path.
///
/// ```text
/// GET  /api/v1/health              - Service health status
/// POST /api/v1/send                - Submit a send-mail request
/// GET  /api/v1/send-status/{ref}   - Dispatch status of a queued send
/// POST /api/v1/graphql             - GraphQL query endpoint
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(send::configure_routes)
            .configure(graphql::configure_routes),
    );
}
