use clap::Parser;
use devurl::app::commands::access_levels;
use devurl::config::cli::{Command, UrlsCommand};
use devurl::utils::{logger, validation::Validate};
use devurl::{CliConfig, DevUrlError, DevUrlRequest, HttpDevUrlClient, Result, UrlCommands};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_json);
    tracing::debug!("CLI config: {:?}", config.command);

    let result = tokio::select! {
        result = run(config) => result,
        _ = tokio::signal::ctrl_c() => Err(DevUrlError::Cancelled),
    };

    if let Err(e) = result {
        tracing::error!("{} (category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<()> {
    let mut stdout = std::io::stdout();

    let Command::Urls(command) = &config.command;
    if let UrlsCommand::AccessLevels = command {
        return access_levels(&mut stdout);
    }

    let settings = config.settings()?;
    settings.validate()?;
    tracing::debug!("service settings: {:?}", settings);

    let client = Arc::new(HttpDevUrlClient::new(&settings)?);
    let commands = UrlCommands::new(Arc::clone(&client), client);

    match command {
        UrlsCommand::Ls {
            environment,
            output,
        } => commands.list(environment, *output, &mut stdout).await,
        UrlsCommand::Create {
            environment,
            port,
            access,
            name,
        } => {
            let request = DevUrlRequest::new(environment, port, access, name);
            commands.create(&request, &mut stdout).await.map(|_| ())
        }
        UrlsCommand::Rm { environment, port } => {
            commands.remove(environment, port, &mut stdout).await.map(|_| ())
        }
        UrlsCommand::AccessLevels => access_levels(&mut stdout),
    }
}
