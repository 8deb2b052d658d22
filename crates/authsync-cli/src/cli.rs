//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// authsync - Declare and synchronize an application's authorization surface
#[derive(Parser, Debug)]
#[command(name = "authsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path of the manifest YAML file
    #[arg(short, long, global = true, default_value = "./auth-manifest.yaml")]
    pub manifest: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a manifest interactively, or add to an existing one
    Init,

    /// Load and validate the manifest without contacting the service
    Validate,

    /// Synchronize the manifest with the auth service
    ///
    /// Authentication uses the shared secret (bootstrap mode) when
    /// configured, otherwise the bearer token. At least one of the two
    /// is required.
    Sync {
        /// Base URL of the auth service
        #[arg(long, env = "SAGEP_AUTH_URL")]
        url: Option<String>,

        /// Bearer token (normal mode)
        #[arg(long, env = "SAGEP_AUTH_TOKEN")]
        token: Option<String>,

        /// Shared secret for request signing (bootstrap mode)
        #[arg(long, env = "SAGEP_AUTH_SECRET")]
        secret: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["authsync"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
        assert_eq!(cli.manifest, PathBuf::from("./auth-manifest.yaml"));
    }

    #[test]
    fn parse_init_command() {
        let cli = Cli::parse_from(["authsync", "init"]);
        assert!(matches!(cli.command, Some(Commands::Init)));
    }

    #[test]
    fn parse_validate_command() {
        let cli = Cli::parse_from(["authsync", "validate"]);
        assert!(matches!(cli.command, Some(Commands::Validate)));
    }

    #[test]
    fn parse_manifest_flag() {
        let cli = Cli::parse_from(["authsync", "-m", "./other.yaml", "sync"]);
        assert_eq!(cli.manifest, PathBuf::from("./other.yaml"));

        let cli = Cli::parse_from(["authsync", "sync", "--manifest", "./other.yaml"]);
        assert_eq!(cli.manifest, PathBuf::from("./other.yaml"));
    }

    #[test]
    fn parse_sync_command_defaults() {
        let cli = Cli::parse_from(["authsync", "sync"]);
        assert!(matches!(cli.command, Some(Commands::Sync { .. })));
    }

    #[test]
    fn parse_sync_command_with_credentials() {
        let cli = Cli::parse_from([
            "authsync",
            "sync",
            "--url",
            "https://auth.example.com",
            "--secret",
            "boot-secret",
        ]);
        match cli.command {
            // `token` is left alone: the env fallback may fill it in
            // depending on the test environment.
            Some(Commands::Sync { url, secret, .. }) => {
                assert_eq!(url.as_deref(), Some("https://auth.example.com"));
                assert_eq!(secret.as_deref(), Some("boot-secret"));
            }
            _ => panic!("Expected Sync command"),
        }
    }

    #[test]
    fn verbose_flag_works_with_commands() {
        let cli = Cli::parse_from(["authsync", "-v", "validate"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Validate)));

        let cli = Cli::parse_from(["authsync", "validate", "--verbose"]);
        assert!(cli.verbose);
    }
}
