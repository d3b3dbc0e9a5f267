use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{error, info};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use comprar::app::ListSession;
use comprar::domain::{Item, ItemStatus};
use comprar::kv::KeyValueStore;
use comprar::storage::{ItemsStorage, StatusCounts};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging(config: &Config, verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("comprar")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("comprar.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // --verbose forces debug; otherwise RUST_LOG wins over the configured level
    let mut builder = env_logger::Builder::new();
    if let Some(level) = &config.log_level {
        builder.parse_filters(level);
    }
    builder.parse_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application<S: KeyValueStore>(cli: &Cli, session: &mut ListSession<S>) -> comprar::Result<()> {
    info!("Starting application");

    match &cli.command {
        None => handle_list_command(session, ItemStatus::Pending).await,
        Some(Commands::List { status }) => handle_list_command(session, *status).await,
        Some(Commands::Add { description }) => handle_add_command(session, &description.join(" ")).await,
        Some(Commands::Remove { id, status }) => handle_remove_command(session, id, *status).await,
        Some(Commands::Toggle { id, status }) => handle_toggle_command(session, id, *status).await,
        Some(Commands::Clear { yes }) => handle_clear_command(session, *yes).await,
    }
}

fn render_item(item: &Item) -> String {
    let marker = match item.status {
        ItemStatus::Pending => item.status.marker().normal(),
        ItemStatus::Done => item.status.marker().blue(),
    };
    let description = if item.is_done() {
        item.description.strikethrough()
    } else {
        item.description.normal()
    };
    format!("{} {}  {}", marker, description, item.id.dimmed())
}

fn render_summary(counts: &StatusCounts) -> String {
    format!("{} pending │ {} done", counts.pending, counts.done)
}

/// The filtered list followed by the pending/done summary line.
fn render_items(filter: ItemStatus, items: &[Item], counts: &StatusCounts) -> String {
    let mut lines = vec![format!("{} items", filter).cyan().bold().to_string()];
    if items.is_empty() {
        lines.push("No items here.".dimmed().to_string());
    } else {
        lines.extend(items.iter().map(render_item));
    }
    lines.push(render_summary(counts).dimmed().to_string());
    lines.join("\n")
}

async fn print_items<S: KeyValueStore>(session: &ListSession<S>) -> comprar::Result<()> {
    let counts = session.counts().await?;
    println!("{}", render_items(session.filter(), session.items(), &counts));
    Ok(())
}

async fn handle_list_command<S: KeyValueStore>(
    session: &mut ListSession<S>,
    status: ItemStatus,
) -> comprar::Result<()> {
    info!("Listing {} items", status);
    session.set_filter(status).await?;
    print_items(session).await
}

async fn handle_add_command<S: KeyValueStore>(
    session: &mut ListSession<S>,
    description: &str,
) -> comprar::Result<()> {
    let item = session.add(description).await?;
    println!("{} {}", "Added".green(), item.description);
    print_items(session).await
}

async fn handle_remove_command<S: KeyValueStore>(
    session: &mut ListSession<S>,
    id: &str,
    status: ItemStatus,
) -> comprar::Result<()> {
    session.set_filter(status).await?;
    session.remove(id).await?;
    print_items(session).await
}

async fn handle_toggle_command<S: KeyValueStore>(
    session: &mut ListSession<S>,
    id: &str,
    status: ItemStatus,
) -> comprar::Result<()> {
    session.set_filter(status).await?;
    session.toggle_status(id).await?;
    print_items(session).await
}

async fn handle_clear_command<S: KeyValueStore>(session: &mut ListSession<S>, yes: bool) -> comprar::Result<()> {
    if !yes && !confirm("Remove all items? [y/N] ") {
        println!("{}", "Nothing removed.".yellow());
        return Ok(());
    }
    session.clear().await?;
    println!("{}", "All items removed.".green());
    Ok(())
}

/// Ask a yes/no question on stdin; anything but y/yes is a no.
fn confirm(prompt: &str) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging
    setup_logging(&config, cli.is_verbose()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    let store = config.storage.open().await.context("Failed to open storage")?;
    let mut session = ListSession::new(ItemsStorage::new(store));

    // Run the main application logic; the notice is the whole user-facing report
    if let Err(e) = run_application(&cli, &mut session).await {
        error!("Command failed: {}", e);
        eprintln!("{} {}", "Error:".red(), e.notice().red());
        std::process::exit(1);
    }

    Ok(())
}
