//! authsync CLI
//!
//! Declares an application's authorization surface (permissions, roles,
//! users) as a YAML manifest and reconciles it with the auth service.

mod cli;
mod commands;
mod config;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Init) => commands::run_init(&cli.manifest),
        Some(Commands::Validate) => commands::run_validate(&cli.manifest),
        Some(Commands::Sync { url, token, secret }) => {
            let config = Config::resolve(url, token, secret)?;
            commands::run_sync(&cli.manifest, &config)
        }
        None => {
            println!(
                "{} Declarative authorization manifests",
                "authsync".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "authsync --help".cyan());
            Ok(())
        }
    }
}
