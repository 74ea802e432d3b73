/*
[INPUT]:  CLI arguments, YAML configuration file, CAR_API_* environment
[OUTPUT]: One API call with its raw JSON response on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or output format
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use car_api_cli::{CliConfig, Command, CommandOutput, run};

#[derive(Parser, Debug)]
#[command(name = "car-api", version, about = "Command-line client for the car analytics API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = CliConfig::resolve(args.config_path.as_deref()).context("load config")?;
    let client = config.build_client().context("validate config")?;
    info!(base_url = %config.base_url, authenticated = config.token.is_some(), "configuration loaded");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let command = args
        .command
        .ok_or_else(|| anyhow!("no command given; see --help"))?;

    match run(&client, &command).await? {
        CommandOutput::Json(value) => {
            let rendered = serde_json::to_string_pretty(&value).context("render response")?;
            println!("{rendered}");
        }
        CommandOutput::Exported { path, bytes } => {
            println!("{} ({bytes} bytes)", path.display());
        }
    }
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
