use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection};
use std::env;

#[cfg(test)]
use mockall::mock;

/// Answers the two questions about a sender that cannot be decided from
/// the request alone: whether the address is a verified sending
/// identity, and whether a custom domain is bound to the project secret
/// presented by the caller.
///
/// Both answers live in service-side state, so the rule engine takes
/// this capability as an injected collaborator and the deterministic
/// rules stay testable without a backing store.
#[async_trait]
pub trait SenderVerifier: Send + Sync {
    /// Returns `true` when `email` is a sending address the platform
    /// has verified and currently accepts mail from.
    async fn is_reachable_sender(&self, email: &str) -> Result<bool, String>;

    /// Returns `true` when `domain` is bound to the project secret
    /// presented by the caller.
    async fn domain_matches_secret(&self, domain: &str, secret: &str) -> Result<bool, String>;
}

/// Verifier backed by the platform's MongoDB sender registry.
///
/// Connection and collection names come from the environment:
/// `MONGODB_URI` (required), `DB_NAME_PRODUCTION`,
/// `DB_VERIFIED_SENDERS_COLLECTION`, `DB_CUSTOM_DOMAINS_COLLECTION`.
#[derive(Clone, Copy, Default)]
pub struct MongoSenderVerifier;

impl MongoSenderVerifier {
    async fn collection(&self, name: String) -> Result<Collection<Document>, String> {
        let mongo_uri =
            env::var("MONGODB_URI").map_err(|_| "MONGODB_URI environment variable not set")?;
        let database_name =
            env::var("DB_NAME_PRODUCTION").unwrap_or_else(|_| "send_api".to_string());

        let client = Client::with_uri_str(&mongo_uri)
            .await
            .map_err(|e| format!("Failed to connect to MongoDB: {}", e))?;
        Ok(client.database(&database_name).collection(&name))
    }
}

#[async_trait]
impl SenderVerifier for MongoSenderVerifier {
    async fn is_reachable_sender(&self, email: &str) -> Result<bool, String> {
        let address = email.trim().to_lowercase();

        let collection_name = env::var("DB_VERIFIED_SENDERS_COLLECTION")
            .unwrap_or_else(|_| "verified_senders".to_string());
        let collection = self.collection(collection_name).await?;

        // Only addresses the owner has completed verification for count
        let filter = doc! { "address": &address, "status": "connected" };
        match collection.find_one(filter).await {
            Ok(found) => Ok(found.is_some()),
            Err(e) => Err(format!("Sender registry query failed: {}", e)),
        }
    }

    async fn domain_matches_secret(&self, domain: &str, secret: &str) -> Result<bool, String> {
        let domain = domain.trim().to_lowercase();

        let collection_name = env::var("DB_CUSTOM_DOMAINS_COLLECTION")
            .unwrap_or_else(|_| "custom_domains".to_string());
        let collection = self.collection(collection_name).await?;

        let filter = doc! { "domain": &domain, "secret": secret };
        match collection.find_one(filter).await {
            Ok(found) => Ok(found.is_some()),
            Err(e) => Err(format!("Custom domain query failed: {}", e)),
        }
    }
}

#[cfg(test)]
mock! {
    pub Verifier {}

    #[async_trait]
    impl SenderVerifier for Verifier {
        async fn is_reachable_sender(&self, email: &str) -> Result<bool, String>;
        async fn domain_matches_secret(&self, domain: &str, secret: &str) -> Result<bool, String>;
    }
}
