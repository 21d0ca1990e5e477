use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::{error, info};

use clipstack_lib::bootstrap::{self, tracing::init_tracing_subscriber};
use clipstack_lib::{probe, shell};
use cs_platform::{DirsAppDirs, LocalClipboard, LocalFileReader};

#[derive(Parser)]
#[command(name = "clipstack")]
#[command(about = "Clipboard history with nine paste slots", long_about = None)]
struct Cli {
    /// Config file (defaults to <config dir>/clipstack/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the clipboard and serve paste commands from stdin (default)
    Run,
    /// Print what the clipboard currently exposes and exit
    Probe,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_dirs = DirsAppDirs::new().resolve()?;
    let config = bootstrap::resolve_config(cli.config, &app_dirs.config_file())?;

    let log_dir = if config.log_dir.as_os_str().is_empty() {
        app_dirs.log_dir()
    } else {
        config.log_dir.clone()
    };
    init_tracing_subscriber(config.log_to_file.then_some(log_dir.as_path()))
        .context("Failed to initialize tracing")?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(&config).await,
        Commands::Probe => {
            let clipboard = LocalClipboard::new()?;
            print!("{}", probe::probe_report(&clipboard, &LocalFileReader::new())?);
            Ok(())
        }
    }
}

async fn run(config: &cs_core::AppConfig) -> anyhow::Result<()> {
    let context = bootstrap::wire_dependencies(config)?;
    context.start_clipboard_watcher().execute().await?;

    let stdin = BufReader::new(tokio::io::stdin());
    let result = shell::run_shell(&context, stdin, std::io::stdout()).await;
    if let Err(err) = &result {
        error!(error = %format!("{err:#}"), "Shell stopped");
    }

    if let Err(err) = context.watcher.stop_watcher().await {
        error!(error = %err, "Failed to stop clipboard watcher");
    }
    context.store.finish_pending_restore().await;
    info!("ClipStack exiting");
    result
}
