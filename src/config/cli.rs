use crate::app::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::ServiceSettings;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "devurl")]
#[command(about = "Manage DevURLs of remote development environments")]
pub struct CliConfig {
    /// Base URL of the environment manager
    #[arg(long, env = "DEVURL_URL", global = true)]
    pub url: Option<String>,

    /// Session token used to authenticate
    #[arg(long, env = "DEVURL_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// TOML config file with a [service] section
    #[arg(long, env = "DEVURL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interact with environment DevURLs
    #[command(subcommand)]
    Urls(UrlsCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum UrlsCommand {
    /// List all DevURLs for an environment
    Ls {
        environment: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
        output: OutputFormat,
    },
    /// Create a new devurl for an environment, or update the one on that port
    #[command(visible_alias = "edit")]
    Create {
        environment: String,
        port: String,
        /// Set DevURL access to [private | org | authed | public]
        #[arg(long, default_value = "private")]
        access: String,
        /// DevURL name
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Remove a dev url
    Rm { environment: String, port: String },
    /// Describe the available access levels
    AccessLevels,
}

impl CliConfig {
    pub fn settings(&self) -> Result<ServiceSettings> {
        let file = self
            .config
            .as_ref()
            .map(TomlConfig::from_file)
            .transpose()?;
        ServiceSettings::merge(self.url.clone(), self.token.clone(), self.timeout, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_with_alias() {
        let cli = CliConfig::try_parse_from([
            "devurl", "--url", "https://x.example.com", "--token", "t", "urls", "edit", "dev",
            "8080", "--access", "org", "--name", "web",
        ])
        .unwrap();

        match cli.command {
            Command::Urls(UrlsCommand::Create {
                environment,
                port,
                access,
                name,
            }) => {
                assert_eq!(environment, "dev");
                assert_eq!(port, "8080");
                assert_eq!(access, "org");
                assert_eq!(name, "web");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_create_defaults_to_private_unnamed() {
        let cli = CliConfig::try_parse_from(["devurl", "urls", "create", "dev", "3000"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Urls(UrlsCommand::Create { ref access, ref name, .. })
                if access == "private" && name.is_empty()
        ));
    }

    #[test]
    fn test_ls_output_flag() {
        let cli = CliConfig::try_parse_from(["devurl", "urls", "ls", "dev", "-o", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Urls(UrlsCommand::Ls { output: OutputFormat::Json, .. })
        ));

        assert!(CliConfig::try_parse_from(["devurl", "urls", "ls", "dev", "-o", "yaml"]).is_err());
    }

    #[test]
    fn test_rm_requires_port() {
        assert!(CliConfig::try_parse_from(["devurl", "urls", "rm", "dev"]).is_err());
    }
}
