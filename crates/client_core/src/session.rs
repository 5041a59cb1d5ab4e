use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use storage::Storage;

/// Key under which the bearer token survives process restarts.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Durable key-value storage for session state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>>;
    async fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Session store backed by the local sqlite database.
pub struct DurableSessionStore {
    storage: Storage,
}

impl DurableSessionStore {
    pub async fn initialize(database_url: &str) -> Result<Arc<Self>> {
        let storage = Storage::new(database_url)
            .await
            .with_context(|| format!("failed to initialize session storage at '{database_url}'"))?;
        storage.health_check().await?;
        Ok(Arc::new(Self { storage }))
    }
}

#[async_trait]
impl SessionStore for DurableSessionStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        self.storage.load_value(key).await
    }

    async fn save(&self, key: &str, value: &str) -> Result<()> {
        self.storage.save_value(key, value).await
    }
}
