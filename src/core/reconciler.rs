use crate::core::lister::DevUrlLister;
use crate::core::{DevUrl, DevUrlService, EnvironmentResolver, Mutation, Outcome};
use crate::domain::model::DevUrlRequest;
use crate::utils::error::{DevUrlError, Result};
use crate::utils::validation::{validate_port, validate_request};
use std::sync::Arc;

/// First record in list order whose port matches. Ports are not unique
/// remotely, so order is the only tie-break.
pub fn find_by_port(port: u16, urls: &[DevUrl]) -> Option<&DevUrl> {
    urls.iter().find(|url| url.port == port)
}

/// Turns a port-centric intent into exactly one remote mutation.
///
/// Every call re-lists before mutating. Nothing guards the gap between the
/// list and the mutation, so two concurrent callers on one environment can
/// race.
pub struct Reconciler<R: EnvironmentResolver, S: DevUrlService> {
    lister: DevUrlLister<R, S>,
    service: Arc<S>,
}

impl<R: EnvironmentResolver, S: DevUrlService> Reconciler<R, S> {
    pub fn new(resolver: Arc<R>, service: Arc<S>) -> Self {
        Self {
            lister: DevUrlLister::new(resolver, Arc::clone(&service)),
            service,
        }
    }

    pub fn lister(&self) -> &DevUrlLister<R, S> {
        &self.lister
    }

    /// Updates the first DevURL on the requested port, or creates one if none exists.
    pub async fn create_or_update(&self, request: &DevUrlRequest) -> Result<Outcome> {
        let validated = validate_request(request)?;
        let env = self.lister.resolve(&validated.environment).await?;
        let urls = self.lister.list_for(&env).await?;

        let mutation = Mutation::new(&env.id, &validated);

        match find_by_port(validated.port, &urls) {
            Some(existing) => {
                tracing::info!("updating devurl for port {}", validated.port);
                self.service
                    .update(&env.id, &existing.id, &mutation)
                    .await?;
                Ok(Outcome::Updated {
                    id: existing.id.clone(),
                    port: validated.port,
                })
            }
            None => {
                tracing::info!("adding devurl for port {}", validated.port);
                self.service.create(&env.id, &mutation).await?;
                Ok(Outcome::Created {
                    port: validated.port,
                })
            }
        }
    }

    /// Deletes the first DevURL on `port`; `NotFound` when the port has none.
    pub async fn delete(&self, environment: &str, port: &str) -> Result<Outcome> {
        let port = validate_port(port)?;
        let env = self.lister.resolve(environment).await?;
        let urls = self.lister.list_for(&env).await?;

        let existing = find_by_port(port, &urls).ok_or_else(|| DevUrlError::NotFound {
            environment: environment.to_string(),
            port,
        })?;

        tracing::info!("deleting devurl for port {}", port);
        self.service.delete(&env.id, &existing.id).await?;

        Ok(Outcome::Deleted {
            id: existing.id.clone(),
            port,
        })
    }
}
