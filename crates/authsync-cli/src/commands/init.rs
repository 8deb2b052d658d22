//! Init command: author a manifest interactively.
//!
//! Builds a fresh manifest, or extends an existing one in place. Either
//! way the master-role invariant is re-enforced and the whole document
//! is validated before it is written.

use std::path::Path;

use colored::Colorize;

use authsync_core::AuthManifest;

use crate::error::{CliError, Result};
use crate::interactive;

/// What to do when a manifest already exists at the target path.
const EXISTING_CHOICES: &[&str] = &[
    "add - Add new entries to the existing manifest",
    "overwrite - Start a new manifest (existing entries are lost)",
    "cancel - Do nothing",
];

pub fn run_init(path: &Path) -> Result<()> {
    let existing = load_existing(path)?;

    let mut manifest = match existing {
        Some(manifest) => {
            print_summary(&manifest);
            match dialoguer::Select::new()
                .with_prompt("Manifest already exists. What do you want to do?")
                .items(EXISTING_CHOICES)
                .default(0)
                .interact()?
            {
                0 => manifest,
                1 => {
                    let sure = interactive::confirm(
                        "This discards every existing entry. Continue?",
                        false,
                    )?;
                    if !sure {
                        return Err(CliError::user("Init cancelled."));
                    }
                    fresh_manifest()?
                }
                _ => return Err(CliError::user("Init cancelled.")),
            }
        }
        None => fresh_manifest()?,
    };

    if interactive::confirm("Add permissions?", true)? {
        let added = interactive::prompt_permissions(&manifest.application.code)?;
        manifest.permissions.extend(added);
    }

    if interactive::confirm("Add roles?", true)? {
        let added = interactive::prompt_roles(&manifest.permissions)?;
        manifest.roles.extend(added);
    }

    if interactive::confirm("Add users?", true)? {
        let added = interactive::prompt_users(&manifest.roles)?;
        manifest.users.extend(added);
    }

    manifest.ensure_master_role();
    manifest.save(path)?;

    println!();
    println!(
        "{} Manifest written to {}",
        "OK".green().bold(),
        path.display().to_string().cyan()
    );
    print_summary(&manifest);
    println!(
        "Run {} to reconcile it with the auth service.",
        "authsync sync".cyan()
    );

    Ok(())
}

/// Load the manifest at `path` if one exists.
///
/// An unreadable manifest is not fatal here: the user may choose to
/// overwrite it.
fn load_existing(path: &Path) -> Result<Option<AuthManifest>> {
    if !path.exists() {
        return Ok(None);
    }

    match AuthManifest::load(path) {
        Ok(manifest) => Ok(Some(manifest)),
        Err(err) => {
            println!(
                "{} Existing manifest could not be loaded: {}",
                "!".yellow().bold(),
                err
            );
            let overwrite = interactive::confirm("Overwrite it?", false)?;
            if overwrite {
                Ok(None)
            } else {
                Err(CliError::user("Init cancelled."))
            }
        }
    }
}

fn fresh_manifest() -> Result<AuthManifest> {
    Ok(AuthManifest {
        application: interactive::prompt_application()?,
        ..AuthManifest::default()
    })
}

fn print_summary(manifest: &AuthManifest) {
    println!();
    println!(
        "  {}: {} ({})",
        "Application".dimmed(),
        manifest.application.name.cyan(),
        manifest.application.code
    );
    println!("  {}: {}", "Permissions".dimmed(), manifest.permissions.len());
    println!("  {}: {}", "Roles".dimmed(), manifest.roles.len());
    println!("  {}: {}", "Users".dimmed(), manifest.users.len());
    println!();
}
