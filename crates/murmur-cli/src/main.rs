//! Murmur - tap-to-ask chat dialog in the terminal
//!
//! Click the button in the bottom-right corner (or press Enter), type a
//! question, and read the reply in a scrollable overlay.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use murmur_core::constants;
use murmur_core::AppConfig;

mod tui;

/// Murmur - chat dialog overlay
#[derive(Parser)]
#[command(name = "murmur")]
#[command(about = "Ask a question, get a short reply", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the system prompt sent with every question
    #[arg(long)]
    system_prompt: Option<String>,

    /// Override the completion model
    #[arg(short, long)]
    model: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dialog (default)
    Run,

    /// Print the effective configuration as TOML
    Config,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file in the data dir; stdout belongs to the TUI
fn init_logging() {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(constants::config::CONFIG_DIR_NAME);
    std::fs::create_dir_all(&log_dir).ok();

    let Ok(log_file) = std::fs::File::create(log_dir.join("murmur.log")) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(prompt) = &cli.system_prompt {
        config.dialog.system_prompt = prompt.clone();
    }
    if let Some(model) = &cli.model {
        config.completion.model = model.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
        }
        Some(Commands::Run) | None => {
            tracing::info!(model = %config.completion.model, "Starting Murmur");
            let mut app = tui::App::new(config, tokio::runtime::Handle::current())?;
            app.run().await?;
        }
    }

    Ok(())
}
