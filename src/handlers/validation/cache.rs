use crate::handlers::validation::sender::SenderVerifier;
use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Redis-backed cache for verifier answers.
///
/// Reachability and domain-binding lookups hit the sender registry;
/// their answers change rarely, so both positive and negative results
/// are cached under a TTL. Keys never contain a raw project secret — a
/// short SHA-256 fingerprint stands in for the credential.
#[derive(Clone)]
pub struct VerifyCache {
    client: Arc<Client>,
    ttl: u64, // Time-to-live for cache entries in seconds
}

impl VerifyCache {
    pub fn new(redis_url: &str, ttl: u64) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;
        Ok(Self {
            client: Arc::new(client),
            ttl,
        })
    }

    // For testing when Redis is unavailable
    pub fn test_dummy() -> Self {
        Self {
            client: Arc::new(Client::open("redis://127.0.0.1:6379").unwrap()),
            ttl: 3600,
        }
    }

    pub async fn get_reachability(&self, address: &str) -> Result<Option<bool>, redis::RedisError> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(mut conn) => {
                let cache_key = format!("sender_reachable::{}", address);
                let result: Option<String> = conn.get(&cache_key).await?;
                Ok(result.map(|val| val == "reachable"))
            }
            Err(e) => {
                // In test environment, report a cache miss instead of failing
                if cfg!(test) { Ok(None) } else { Err(e) }
            }
        }
    }

    pub async fn set_reachability(
        &self,
        address: &str,
        reachable: bool,
    ) -> Result<(), redis::RedisError> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(mut conn) => {
                let cache_key = format!("sender_reachable::{}", address);
                let value = if reachable { "reachable" } else { "unreachable" };
                let _: () = conn.set(&cache_key, value).await?;
                let _: () = conn.expire(&cache_key, self.ttl as i64).await?;
                Ok(())
            }
            Err(e) => {
                if cfg!(test) { Ok(()) } else { Err(e) }
            }
        }
    }

    pub async fn get_domain_match(
        &self,
        domain: &str,
        secret: &str,
    ) -> Result<Option<bool>, redis::RedisError> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(mut conn) => {
                let cache_key = domain_match_key(domain, secret);
                let result: Option<String> = conn.get(&cache_key).await?;
                Ok(result.map(|val| val == "match"))
            }
            Err(e) => {
                if cfg!(test) { Ok(None) } else { Err(e) }
            }
        }
    }

    pub async fn set_domain_match(
        &self,
        domain: &str,
        secret: &str,
        matches: bool,
    ) -> Result<(), redis::RedisError> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(mut conn) => {
                let cache_key = domain_match_key(domain, secret);
                let value = if matches { "match" } else { "mismatch" };
                let _: () = conn.set(&cache_key, value).await?;
                let _: () = conn.expire(&cache_key, self.ttl as i64).await?;
                Ok(())
            }
            Err(e) => {
                if cfg!(test) { Ok(()) } else { Err(e) }
            }
        }
    }
}

fn domain_match_key(domain: &str, secret: &str) -> String {
    format!("domain_secret::{}::{}", secret_fingerprint(secret), domain)
}

fn secret_fingerprint(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret);
    format!("{:x}", hasher.finalize())[..16].to_string()
}

/// Decorates any [`SenderVerifier`] with read-through caching of its
/// answers. Cache write failures are ignored; the verifier's answer is
/// authoritative.
#[derive(Clone)]
pub struct CachedVerifier<V> {
    inner: V,
    cache: VerifyCache,
}

impl<V> CachedVerifier<V> {
    pub fn new(inner: V, cache: VerifyCache) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl<V: SenderVerifier> SenderVerifier for CachedVerifier<V> {
    async fn is_reachable_sender(&self, email: &str) -> Result<bool, String> {
        if let Ok(Some(cached)) = self.cache.get_reachability(email).await {
            return Ok(cached);
        }

        let reachable = self.inner.is_reachable_sender(email).await?;
        let _ = self.cache.set_reachability(email, reachable).await;
        Ok(reachable)
    }

    async fn domain_matches_secret(&self, domain: &str, secret: &str) -> Result<bool, String> {
        if let Ok(Some(cached)) = self.cache.get_domain_match(domain, secret).await {
            return Ok(cached);
        }

        let matches = self.inner.domain_matches_secret(domain, secret).await?;
        let _ = self.cache.set_domain_match(domain, secret, matches).await;
        Ok(matches)
    }
}
