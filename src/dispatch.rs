use crate::models::send_mail::ValidRequest;
use redis::{AsyncCommands, Client};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// A validated request queued for pickup by the delivery pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedSend {
    #[serde(rename = "ref")]
    pub reference: String,
    pub request: ValidRequest,
    pub status: DispatchStatus,
    pub queued_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DispatchStatus {
    Queued,
    Dispatched,
    Failed,
}

/// Hand-off point between validation and the delivery pipeline.
///
/// Accepted requests are pushed onto a Redis list the transport drains.
/// Each send gets a UUID reference and a status key that expires after
/// an hour; the transport advances the status as it works the list.
#[derive(Clone)]
pub struct DispatchQueue {
    redis: Arc<Client>,
}

impl DispatchQueue {
    pub fn new(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;
        Ok(Self {
            redis: Arc::new(client),
        })
    }

    /// Queues an accepted request and returns its dispatch reference.
    pub async fn enqueue(&self, request: &ValidRequest) -> Result<String, redis::RedisError> {
        let reference = Uuid::new_v4().to_string();
        let entry = QueuedSend {
            reference: reference.clone(),
            request: request.clone(),
            status: DispatchStatus::Queued,
            queued_at: chrono::Utc::now().timestamp(),
        };

        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let entry_json = serde_json::to_string(&entry).unwrap();

        let _: () = conn.lpush("send_dispatch_queue", &entry_json).await?;
        let _: () = conn.set(format!("send:{}", reference), &entry_json).await?;
        let _: () = conn.expire(format!("send:{}", reference), 3600).await?; // 1 hour TTL

        Ok(reference)
    }

    pub async fn get_status(
        &self,
        reference: &str,
    ) -> Result<Option<QueuedSend>, redis::RedisError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let entry_json: Option<String> = conn.get(format!("send:{}", reference)).await?;

        Ok(entry_json.and_then(|json| serde_json::from_str(&json).ok()))
    }
}
