use super::health::HealthQuery;
use super::send::SendQuery;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query type joining the health probe and the request linter.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, SendQuery);

/// Complete GraphQL schema for the application. Mutations and
/// subscriptions are placeholders until the API grows them.
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Creates the GraphQL schema used by the HTTP handler.
///
/// # Example
///
/// ```rust,no_run
/// use send_api::graphql::schema::create_schema;
///
/// let schema = create_schema();
/// ```
pub fn create_schema() -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        EmptyMutation::default(),
        EmptySubscription::default(),
    )
    .finish()
}
