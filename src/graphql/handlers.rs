use actix_web::{HttpResponse, Responder, web};
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::schema::AppSchema;

/// Handles incoming GraphQL requests against the application schema.
///
/// # Arguments
/// - `schema`: The application's GraphQL schema from Actix-web state.
/// - `req`: The incoming request with query, variables, and operation name.
pub async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Serves the GraphQL Playground for interactive query testing,
/// pointed at the `/api/v1/graphql` endpoint.
///
/// # Note
/// Intended for development; disable in production deployments.
pub async fn graphql_playground() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new(
            "/api/v1/graphql",
        )))
}
