use crate::models::health::HealthResponse;
use async_graphql::{Context, Object, Result};

/// GraphQL view of the service health status, mirroring the REST
/// health response.
#[derive(Debug)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            timestamp: response.timestamp,
        }
    }
}

#[Object]
impl Health {
    /// Current service status ("UP" when operational)
    async fn status(&self) -> &str {
        &self.status
    }

    /// ISO 8601 timestamp of the check
    async fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Query operations for health monitoring
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Checks service health status
    async fn health(&self, _ctx: &Context<'_>) -> Result<Health> {
        Ok(Health::from(HealthResponse::up()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::{EmptyMutation, EmptySubscription, Schema};
    use chrono::{DateTime, Utc};

    #[test]
    fn test_health_from_health_response() {
        let timestamp = Utc::now().to_rfc3339();
        let health = Health::from(HealthResponse {
            status: "UP".to_string(),
            timestamp: timestamp.clone(),
        });

        assert_eq!(health.status, "UP");
        assert_eq!(health.timestamp, timestamp);
    }

    #[tokio::test]
    async fn test_health_query_resolver() {
        let schema = Schema::build(
            HealthQuery::default(),
            EmptyMutation::default(),
            EmptySubscription::default(),
        )
        .finish();

        let query = r#"
            query {
                health {
                    status
                    timestamp
                }
            }
        "#;

        let result = schema.execute(query).await;
        assert!(result.errors.is_empty());

        let data = result.data.into_json().unwrap();
        assert_eq!(data["health"]["status"], "UP");

        let timestamp = data["health"]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
