//! The sync client: one authenticated POST of the manifest to the auth
//! service.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use authsync_core::AuthManifest;

use crate::error::{Error, Result};
use crate::response::SyncResponse;

/// Relative endpoint performing create-or-update reconciliation.
pub const SYNC_ENDPOINT: &str = "/v1/applications/sync";

/// Header carrying the hex-encoded bootstrap signature.
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Header carrying the Unix-seconds timestamp the signature covers.
pub const TIMESTAMP_HEADER: &str = "X-Timestamp";

/// Every sync is a single attempt bounded by this timeout; there are
/// no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

type HmacSha256 = Hmac<Sha256>;

/// Credentials for the auth service.
///
/// Exactly one mode is used per request. The bootstrap secret takes
/// precedence over the token when both are configured: the secret
/// exists to authenticate the very first sync, after which deployments
/// rotate to bearer tokens.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Bearer token (normal mode).
    pub token: Option<String>,
    /// Shared secret for HMAC signing (bootstrap mode).
    pub secret: Option<String>,
}

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            secret: None,
        }
    }

    pub fn bootstrap(secret: impl Into<String>) -> Self {
        Self {
            token: None,
            secret: Some(secret.into()),
        }
    }

    fn is_configured(&self) -> bool {
        self.token.is_some() || self.secret.is_some()
    }
}

/// Blocking HTTP client for the auth service sync endpoint.
#[derive(Debug)]
pub struct SyncClient {
    base_url: String,
    credentials: Credentials,
    http: reqwest::blocking::Client,
}

impl SyncClient {
    /// Create a client for the given base URL.
    ///
    /// Fails with [`Error::MissingCredentials`] when neither credential
    /// is configured, so misconfiguration surfaces before any network
    /// I/O.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        if !credentials.is_configured() {
            return Err(Error::MissingCredentials);
        }

        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url,
            credentials,
            http,
        })
    }

    /// Send the manifest and decode the reconciliation response.
    ///
    /// Single attempt: a non-2xx status or a timeout is surfaced to the
    /// caller with the status code and raw body when available.
    pub fn sync(&self, manifest: &AuthManifest) -> Result<SyncResponse> {
        let payload = serde_json::to_vec(manifest)?;
        let url = format!("{}{SYNC_ENDPOINT}", self.base_url);

        let mut request = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload.clone());
        for (name, value) in self.auth_headers(&payload)? {
            request = request.header(name, value);
        }

        debug!(url = %url, bytes = payload.len(), "sending sync request");
        let response = request.send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Build the authentication headers for a payload.
    ///
    /// Bootstrap mode signs `payload ‖ timestamp` with the shared
    /// secret and attaches the signature and timestamp as two headers;
    /// normal mode attaches a single bearer authorization header.
    fn auth_headers(&self, payload: &[u8]) -> Result<Vec<(&'static str, String)>> {
        if let Some(secret) = &self.credentials.secret {
            let timestamp = unix_now();
            let signature = sign_payload(payload, timestamp, secret);
            Ok(vec![
                (SIGNATURE_HEADER, signature),
                (TIMESTAMP_HEADER, timestamp.to_string()),
            ])
        } else if let Some(token) = &self.credentials.token {
            Ok(vec![("Authorization", format!("Bearer {token}"))])
        } else {
            Err(Error::MissingCredentials)
        }
    }
}

/// HMAC-SHA256 over `payload ‖ timestamp-base10`, hex-encoded.
pub fn sign_payload(payload: &[u8], timestamp: u64, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload);
    mac.update(timestamp.to_string().as_bytes());
    format!("{:x}", mac.finalize().into_bytes())
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before the Unix epoch")
        .as_secs()
}
