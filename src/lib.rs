pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::HttpDevUrlClient;
pub use crate::app::{OutputFormat, UrlCommands};
pub use crate::config::ServiceSettings;
pub use crate::core::{lister::DevUrlLister, reconciler::Reconciler};
pub use crate::domain::model::{AccessLevel, DevUrl, DevUrlRequest, Outcome};
pub use crate::utils::error::{DevUrlError, Result};
