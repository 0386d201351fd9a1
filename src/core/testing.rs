//! In-memory collaborators for engine tests. Every service call is recorded in order.

use crate::core::{DevUrl, DevUrlService, Environment, EnvironmentResolver, Mutation};
use crate::utils::error::{DevUrlError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct FakeResolver {
    environments: HashMap<String, String>,
}

impl FakeResolver {
    pub fn with_env(name: &str, id: &str) -> Self {
        let mut environments = HashMap::new();
        environments.insert(name.to_string(), id.to_string());
        Self { environments }
    }
}

#[async_trait]
impl EnvironmentResolver for FakeResolver {
    async fn resolve(&self, name: &str) -> Result<Environment> {
        self.environments
            .get(name)
            .map(|id| Environment {
                id: id.clone(),
                name: name.to_string(),
            })
            .ok_or_else(|| DevUrlError::EnvironmentNotFound(name.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(String),
    Create(String, Mutation),
    Update(String, String, Mutation),
    Delete(String, String),
}

#[derive(Clone, Default)]
pub struct FakeService {
    records: Vec<DevUrl>,
    fail_list: bool,
    fail_mutations: bool,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeService {
    pub fn with_records(records: Vec<DevUrl>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Self::default()
        }
    }

    pub fn failing_mutations(records: Vec<DevUrl>) -> Self {
        Self {
            records,
            fail_mutations: true,
            ..Self::default()
        }
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    pub async fn mutation_count(&self) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|call| !matches!(call, Call::List(_)))
            .count()
    }

    async fn record(&self, call: Call, operation: &str) -> Result<()> {
        self.calls.lock().await.push(call);
        if self.fail_mutations {
            return Err(DevUrlError::remote(operation, "non-success status code: 500"));
        }
        Ok(())
    }
}

#[async_trait]
impl DevUrlService for FakeService {
    async fn list(&self, environment_id: &str) -> Result<Vec<DevUrl>> {
        self.calls
            .lock()
            .await
            .push(Call::List(environment_id.to_string()));
        if self.fail_list {
            return Err(DevUrlError::remote("list devurls", "non-success status code: 503"));
        }
        Ok(self.records.clone())
    }

    async fn create(&self, environment_id: &str, mutation: &Mutation) -> Result<()> {
        self.record(
            Call::Create(environment_id.to_string(), mutation.clone()),
            "insert devurl",
        )
        .await
    }

    async fn update(&self, environment_id: &str, url_id: &str, mutation: &Mutation) -> Result<()> {
        self.record(
            Call::Update(
                environment_id.to_string(),
                url_id.to_string(),
                mutation.clone(),
            ),
            "update devurl",
        )
        .await
    }

    async fn delete(&self, environment_id: &str, url_id: &str) -> Result<()> {
        self.record(
            Call::Delete(environment_id.to_string(), url_id.to_string()),
            "delete devurl",
        )
        .await
    }
}
