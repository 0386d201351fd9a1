use crate::core::{ConfigProvider, DevUrl, DevUrlService, Environment, EnvironmentResolver, Mutation};
use crate::utils::error::{DevUrlError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use url::Url;

/// reqwest-backed client for the environment and DevURL endpoints.
#[derive(Clone)]
pub struct HttpDevUrlClient {
    client: Client,
    base_url: Url,
    session_token: String,
}

impl HttpDevUrlClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base_url = Url::parse(config.base_url()).map_err(|e| {
            DevUrlError::config(format!("invalid service URL {:?}: {}", config.base_url(), e))
        })?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DevUrlError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            session_token: config.session_token().to_string(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DevUrlError::config(format!("service URL {} cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("session_token", &self.session_token);
        Ok(url)
    }

    fn devurls_endpoint(&self, environment_id: &str, url_id: Option<&str>) -> Result<Url> {
        match url_id {
            Some(id) => self.endpoint(&["api", "environments", environment_id, "devurls", id]),
            None => self.endpoint(&["api", "environments", environment_id, "devurls"]),
        }
    }

    async fn send(&self, operation: &str, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;
        tracing::debug!(
            "{} {} -> {}",
            operation,
            response.url().path(),
            response.status()
        );
        Ok(response)
    }

    /// Reads a read-only endpoint; anything but 200 counts as unavailable.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, operation: &str, url: Url) -> Result<T> {
        let response = self.send(operation, self.client.get(url)).await?;
        if response.status() != StatusCode::OK {
            return Err(status_error(operation, response).await);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(operation, e))?;
        serde_json::from_slice(&body).map_err(|e| DevUrlError::decode(operation, e))
    }

    async fn mutate(
        &self,
        operation: &str,
        method: Method,
        url: Url,
        body: Option<&Mutation>,
    ) -> Result<()> {
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.send(operation, request).await?;
        if !response.status().is_success() {
            return Err(status_error(operation, response).await);
        }
        Ok(())
    }
}

/// reqwest errors embed the request URL, and the URL carries the session token.
fn transport_error(operation: &str, error: reqwest::Error) -> DevUrlError {
    DevUrlError::remote(operation, error.without_url())
}

/// Builds a `RemoteUnavailable` from a non-success response, keeping the
/// service's own message when the body carries one.
async fn status_error(operation: &str, response: Response) -> DevUrlError {
    let status = response.status();
    let detail = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
        .and_then(|json| {
            json.pointer("/error/msg")
                .or_else(|| json.get("message"))
                .and_then(|msg| msg.as_str())
                .map(str::to_string)
        });

    let message = match detail {
        Some(detail) => format!("non-success status code: {}: {}", status.as_u16(), detail),
        None => format!("non-success status code: {}", status.as_u16()),
    };
    DevUrlError::remote(operation, message)
}

#[async_trait]
impl EnvironmentResolver for HttpDevUrlClient {
    async fn resolve(&self, name: &str) -> Result<Environment> {
        let url = self.endpoint(&["api", "environments"])?;
        let environments: Vec<Environment> = self.get_json("find environment", url).await?;

        environments
            .into_iter()
            .find(|env| env.name == name)
            .ok_or_else(|| DevUrlError::EnvironmentNotFound(name.to_string()))
    }
}

#[async_trait]
impl DevUrlService for HttpDevUrlClient {
    async fn list(&self, environment_id: &str) -> Result<Vec<DevUrl>> {
        let url = self.devurls_endpoint(environment_id, None)?;
        self.get_json("list devurls", url).await
    }

    async fn create(&self, environment_id: &str, mutation: &Mutation) -> Result<()> {
        let url = self.devurls_endpoint(environment_id, None)?;
        self.mutate("insert devurl", Method::POST, url, Some(mutation))
            .await
    }

    async fn update(&self, environment_id: &str, url_id: &str, mutation: &Mutation) -> Result<()> {
        let url = self.devurls_endpoint(environment_id, Some(url_id))?;
        self.mutate("update devurl", Method::PUT, url, Some(mutation))
            .await
    }

    async fn delete(&self, environment_id: &str, url_id: &str) -> Result<()> {
        let url = self.devurls_endpoint(environment_id, Some(url_id))?;
        self.mutate("delete devurl", Method::DELETE, url, None).await
    }
}
