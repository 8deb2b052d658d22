//! Validate command: load the manifest and report whether it satisfies
//! every invariant. Cheap enough for CI.

use std::path::Path;

use colored::Colorize;

use authsync_core::AuthManifest;

use crate::error::Result;

pub fn run_validate(path: &Path) -> Result<()> {
    // Loading already runs the full validation pass.
    let manifest = AuthManifest::load(path)?;

    println!(
        "{} Manifest is valid: {} ({} permissions, {} roles, {} users)",
        "OK".green().bold(),
        manifest.application.code.cyan(),
        manifest.permissions.len(),
        manifest.roles.len(),
        manifest.users.len()
    );

    Ok(())
}
