use crate::domain::model::{DevUrl, Environment, Mutation};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Maps a user-facing environment name to the environment the service knows.
#[async_trait]
pub trait EnvironmentResolver: Send + Sync {
    async fn resolve(&self, name: &str) -> Result<Environment>;
}

/// The remote DevURL endpoints, one call per method and no retries.
#[async_trait]
pub trait DevUrlService: Send + Sync {
    async fn list(&self, environment_id: &str) -> Result<Vec<DevUrl>>;
    async fn create(&self, environment_id: &str, mutation: &Mutation) -> Result<()>;
    async fn update(&self, environment_id: &str, url_id: &str, mutation: &Mutation) -> Result<()>;
    async fn delete(&self, environment_id: &str, url_id: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn session_token(&self) -> &str;
    fn timeout(&self) -> Duration;
}
