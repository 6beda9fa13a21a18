use actix_web::{App, HttpServer, web::Data};
use send_api::dispatch::DispatchQueue;
use send_api::graphql::schema::create_schema;
use send_api::handlers::validation::cache::{CachedVerifier, VerifyCache};
use send_api::handlers::validation::sender::{MongoSenderVerifier, SenderVerifier};
use send_api::openapi::ApiDoc;
use std::env;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Send API Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Send-mail validation endpoints under `/api/v1`
/// - GraphQL endpoint and playground
/// - Swagger UI for API documentation
/// - MongoDB-backed sender verification behind a Redis cache
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Send: `POST /api/v1/send`, `GET /api/v1/send-status/{ref}`
/// - Health: `GET /api/v1/health`
/// - GraphQL: `POST /api/v1/graphql`, playground at `/api/v1/playground`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `127.0.0.1:8080` by default
/// - `MONGODB_URI`, `DB_NAME_PRODUCTION`, `DB_VERIFIED_SENDERS_COLLECTION`,
///   `DB_CUSTOM_DOMAINS_COLLECTION` select the sender registry
/// - `REDIS_URL` selects the cache/queue instance
/// - `DEFAULT_SENDER_DOMAIN` names the platform's own sending domain
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

    let cache = VerifyCache::new(&redis_url, 3600).map_err(std::io::Error::other)?;
    let verifier: Arc<dyn SenderVerifier> =
        Arc::new(CachedVerifier::new(MongoSenderVerifier, cache));
    let queue = DispatchQueue::new(&redis_url).map_err(std::io::Error::other)?;

    // Create GraphQL schema
    let schema = create_schema();

    tracing::info!("send-api listening on 127.0.0.1:8080");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(openapi.clone()))
            .app_data(Data::new(schema.clone()))
            .app_data(Data::from(verifier.clone()))
            .app_data(Data::new(queue.clone()))
            .configure(send_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
