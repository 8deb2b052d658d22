//! Sync command: reconcile the manifest with the auth service.

use std::path::Path;

use colored::Colorize;

use authsync_client::{SyncClient, SyncReport, Tally};
use authsync_core::AuthManifest;

use crate::config::Config;
use crate::error::Result;

pub fn run_sync(path: &Path, config: &Config) -> Result<()> {
    let manifest = AuthManifest::load(path)?;

    println!(
        "{} Synchronizing application {}",
        "=>".blue().bold(),
        manifest.application.code.cyan()
    );
    println!("   Auth service: {}", config.base_url.dimmed());
    println!();

    let client = SyncClient::new(&config.base_url, config.credentials.clone())?;
    let response = client.sync(&manifest)?;
    let report = SyncReport::from_response(&response);

    println!(
        "Application: {} ({})",
        response.application.code.cyan(),
        action_label(report.application)
    );
    print_category("Permissions", report.permissions);
    print_category("Roles", report.roles);
    if !response.users.is_empty() {
        print_category("Users", report.users);
    }

    println!();
    println!("{} Sync complete.", "OK".green().bold());

    Ok(())
}

fn print_category(label: &str, tally: Tally) {
    println!(
        "{:<12} {} ({} created, {} updated)",
        format!("{label}:"),
        tally.total(),
        tally.created.to_string().green(),
        tally.updated.to_string().yellow()
    );
}

/// Label for the single application entry.
fn action_label(tally: Tally) -> String {
    if tally.created > 0 {
        "created".green().to_string()
    } else if tally.updated > 0 {
        "updated".yellow().to_string()
    } else {
        "unchanged".dimmed().to_string()
    }
}
