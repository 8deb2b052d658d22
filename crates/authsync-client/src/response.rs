//! Reconciliation response decoding.

use serde::{Deserialize, Serialize};

/// Outcome reported by the service for one reconciled entity.
///
/// `Other` absorbs action values outside the protocol's
/// created/updated pair; the reporter excludes them from both counters
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    Created,
    Updated,
    #[serde(other)]
    Other,
}

/// Reconciliation result for a single application, permission, or user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOutcome {
    pub code: String,
    pub action: SyncAction,
    /// Opaque remote identifier assigned by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Reconciliation result for a role, with its nested permission links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSyncOutcome {
    pub code: String,
    pub action: SyncAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub permissions: Vec<SyncOutcome>,
}

/// Response body of `POST /v1/applications/sync`: the manifest shape,
/// annotated per entity with the action the service took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResponse {
    pub application: SyncOutcome,
    #[serde(default)]
    pub permissions: Vec<SyncOutcome>,
    #[serde(default)]
    pub roles: Vec<RoleSyncOutcome>,
    #[serde(default)]
    pub users: Vec<SyncOutcome>,
}
