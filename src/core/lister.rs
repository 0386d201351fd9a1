use crate::core::{DevUrl, DevUrlService, Environment, EnvironmentResolver};
use crate::utils::error::Result;
use std::sync::Arc;

/// Fetches the current DevURLs of one environment. Single attempt, no caching.
pub struct DevUrlLister<R: EnvironmentResolver, S: DevUrlService> {
    resolver: Arc<R>,
    service: Arc<S>,
}

impl<R: EnvironmentResolver, S: DevUrlService> DevUrlLister<R, S> {
    pub fn new(resolver: Arc<R>, service: Arc<S>) -> Self {
        Self { resolver, service }
    }

    pub async fn resolve(&self, environment: &str) -> Result<Environment> {
        let env = self.resolver.resolve(environment).await?;
        tracing::debug!("resolved environment {:?} to id {}", environment, env.id);
        Ok(env)
    }

    /// Resolves `environment` by name, then lists its DevURLs in service order.
    pub async fn list(&self, environment: &str) -> Result<Vec<DevUrl>> {
        let env = self.resolve(environment).await?;
        self.list_for(&env).await
    }

    /// Lists an already-resolved environment.
    pub async fn list_for(&self, env: &Environment) -> Result<Vec<DevUrl>> {
        let urls = self.service.list(&env.id).await?;
        tracing::debug!("found {} devurls for environment {:?}", urls.len(), env.name);
        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{Call, FakeResolver, FakeService};
    use crate::domain::model::AccessLevel;
    use crate::utils::error::DevUrlError;

    fn record(id: &str, port: u16) -> DevUrl {
        DevUrl {
            id: id.to_string(),
            url: format!("https://{}-dev.example.com", port),
            port,
            name: None,
            access: AccessLevel::Private,
        }
    }

    #[tokio::test]
    async fn test_list_preserves_service_order() {
        let resolver = Arc::new(FakeResolver::with_env("dev", "env-1"));
        let service = Arc::new(FakeService::with_records(vec![
            record("b", 9000),
            record("a", 3000),
        ]));
        let lister = DevUrlLister::new(resolver, Arc::clone(&service));

        let urls = lister.list("dev").await.unwrap();

        assert_eq!(
            urls.iter().map(|u| u.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "a"]
        );
        assert_eq!(service.calls().await, vec![Call::List("env-1".into())]);
    }

    #[tokio::test]
    async fn test_list_unknown_environment_skips_service() {
        let resolver = Arc::new(FakeResolver::with_env("dev", "env-1"));
        let service = Arc::new(FakeService::with_records(vec![record("a", 3000)]));
        let lister = DevUrlLister::new(resolver, Arc::clone(&service));

        let err = lister.list("prod").await.unwrap_err();

        assert!(matches!(err, DevUrlError::EnvironmentNotFound(ref name) if name == "prod"));
        assert!(service.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_propagates_remote_failure() {
        let resolver = Arc::new(FakeResolver::with_env("dev", "env-1"));
        let service = Arc::new(FakeService::failing_list());
        let lister = DevUrlLister::new(resolver, service);

        let err = lister.list("dev").await.unwrap_err();

        assert!(matches!(err, DevUrlError::RemoteUnavailable { .. }));
    }
}
