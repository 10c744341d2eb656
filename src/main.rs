use chat_card_notify::config::{self, Config};
use chat_card_notify::delivery::{post_message, render_message};
use chat_card_notify::error::Result;
use chat_card_notify::logging::setup_logging;
use chat_card_notify::new_message;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(name = "chat_card_notify")]
#[command(author, version, about = "Send a build status card to a Google Chat webhook", long_about = None)]
struct Cli {
    /// Read the inputs from a TOML file instead of the environment
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the payload instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Also write logs to daily files in this directory
    #[arg(long, env = "LOG_DIR")]
    log_dir: Option<PathBuf>,
}

/// Load the inputs from the given file, or from the environment
fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => config::load_config(path)?,
        None => Config::from_env()?,
    };
    config.validate()?;
    Ok(config)
}

async fn run(cli: &Cli, config: &Config) -> Result<()> {
    let build_succeeded = config::build_succeeded_from_env();
    debug!("Build succeeded: {}", build_succeeded);

    let message = new_message(config, build_succeeded)?;

    if cli.dry_run {
        println!("{}", render_message(&message)?);
        return Ok(());
    }

    let client = reqwest::Client::new();
    post_message(&client, &config.webhook_url, &message).await?;

    info!("Google Chat message successfully sent!");
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let guard = match setup_logging(config.is_debug_mode, cli.log_dir.clone()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    info!("Configs: {:?}", config);

    if let Err(e) = run(&cli, &config).await {
        error!("Error: {}", e);
        drop(guard);
        std::process::exit(1);
    }
}
