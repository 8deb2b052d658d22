//! Sync configuration: service URL and credentials.
//!
//! Values come from flags with environment fallback (clap's `env`
//! attribute): `SAGEP_AUTH_URL`, `SAGEP_AUTH_TOKEN`,
//! `SAGEP_AUTH_SECRET`. The credential check happens here, before any
//! client is built, so misconfiguration never reaches the network.

use authsync_client::Credentials;

use crate::error::{CliError, Result};

/// Resolved sync configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub credentials: Credentials,
}

impl Config {
    /// Build a configuration from already-merged flag/env values.
    ///
    /// Requires a URL and at least one of token/secret. Empty strings
    /// count as absent, so `SAGEP_AUTH_TOKEN=""` does not satisfy the
    /// credential requirement.
    pub fn resolve(
        url: Option<String>,
        token: Option<String>,
        secret: Option<String>,
    ) -> Result<Self> {
        let base_url = match non_empty(url) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                return Err(CliError::user(
                    "The auth service URL is required. Set it via --url or SAGEP_AUTH_URL.",
                ));
            }
        };

        let token = non_empty(token);
        let secret = non_empty(secret);
        if token.is_none() && secret.is_none() {
            return Err(CliError::user(
                "A credential is required. Set --token/SAGEP_AUTH_TOKEN (normal mode) or --secret/SAGEP_AUTH_SECRET (bootstrap mode).",
            ));
        }

        Ok(Self {
            base_url,
            credentials: Credentials { token, secret },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let v = v.trim().to_string();
        if v.is_empty() { None } else { Some(v) }
    })
}
