use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use oxisym::application::SymmetryUseCase;
use oxisym::domain::Message;
use oxisym::infrastructure::host::{compose_message, read_message};
use oxisym::infrastructure::{AppConfig, ByteLoader, CliArgs, ConsoleReplyPort, StorageManager};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

async fn build_message(args: &CliArgs) -> Result<Message> {
    match &args.message {
        Some(path) => Ok(read_message(path).await?),
        None => Ok(compose_message(&args.text, &args.image, &args.quote)),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(
        version = oxisym::VERSION,
        config = ?config.config,
        command = %config.plugin.command,
        "Starting Oxisym"
    );

    let message = build_message(&args).await?;
    let use_case = SymmetryUseCase::new(config.to_command_settings(), Arc::new(ByteLoader::new()));
    let reply = ConsoleReplyPort::new(&args.output);

    match use_case.execute(&message, &reply).await {
        Ok(response) => {
            info!(mode = %response.mode, output = %reply.output().display(), "Done");
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
