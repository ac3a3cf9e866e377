//! Gazette CLI - static site generator for JSON article datasets.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use commands::{build::BuildArgs, init::InitArgs, serve::ServeArgs};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "gazette", version)]
#[command(about = "Static site generator for JSON article datasets")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to gazette.toml config file
    #[arg(short, long, global = true, default_value = "gazette.toml")]
    config: PathBuf,

    /// Log at debug level (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Scaffold a new site in the current directory
    Init(InitArgs),

    /// Build the static site
    Build(BuildArgs),

    /// Preview a built site
    Serve(ServeArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Init(args) => commands::init::run(&cli.config, args),
        Command::Build(args) => commands::build::run(&cli.config, args),
        Command::Serve(args) => commands::serve::run(args).await,
    }
}
