use crate::app::output::{render_access_levels, render_json, render_table, OutputFormat};
use crate::core::reconciler::Reconciler;
use crate::core::{DevUrlService, EnvironmentResolver, Outcome};
use crate::domain::model::DevUrlRequest;
use crate::utils::error::Result;
use std::io::Write;
use std::sync::Arc;

/// The `urls` subcommands: run the engine, then render to `out`.
pub struct UrlCommands<R: EnvironmentResolver, S: DevUrlService> {
    reconciler: Reconciler<R, S>,
}

impl<R: EnvironmentResolver, S: DevUrlService> UrlCommands<R, S> {
    pub fn new(resolver: Arc<R>, service: Arc<S>) -> Self {
        Self {
            reconciler: Reconciler::new(resolver, service),
        }
    }

    pub async fn list(&self, environment: &str, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
        let urls = self.reconciler.lister().list(environment).await?;

        let rendered = match format {
            OutputFormat::Human if urls.is_empty() => {
                tracing::info!("no devURLs found for environment {:?}", environment);
                format!("no devURLs found for environment {:?}\n", environment)
            }
            OutputFormat::Human => render_table(&urls),
            OutputFormat::Json => render_json(&urls)?,
        };

        out.write_all(rendered.as_bytes())?;
        Ok(())
    }

    pub async fn create(&self, request: &DevUrlRequest, out: &mut dyn Write) -> Result<Outcome> {
        let outcome = self.reconciler.create_or_update(request).await?;
        match &outcome {
            Outcome::Updated { port, .. } => writeln!(out, "updated devurl for port {}", port)?,
            Outcome::Created { port } => writeln!(out, "created devurl for port {}", port)?,
            Outcome::Deleted { .. } => {}
        }
        Ok(outcome)
    }

    pub async fn remove(&self, environment: &str, port: &str, out: &mut dyn Write) -> Result<Outcome> {
        let outcome = self.reconciler.delete(environment, port).await?;
        if let Outcome::Deleted { port, .. } = &outcome {
            writeln!(out, "removed devurl for port {}", port)?;
        }
        Ok(outcome)
    }
}

pub fn access_levels(out: &mut dyn Write) -> Result<()> {
    out.write_all(render_access_levels().as_bytes())?;
    Ok(())
}
