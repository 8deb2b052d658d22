//! Reconciliation reporting: per-category created/updated tallies.

use crate::response::{SyncAction, SyncOutcome, SyncResponse};

/// Created/updated counts for one entity category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub created: usize,
    pub updated: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.created + self.updated
    }

    fn count(outcomes: &[SyncOutcome]) -> Self {
        let mut tally = Tally::default();
        for outcome in outcomes {
            match outcome.action {
                SyncAction::Created => tally.created += 1,
                SyncAction::Updated => tally.updated += 1,
                // Anything else is excluded from both counters.
                SyncAction::Other => {}
            }
        }
        tally
    }
}

/// Aggregated view of a sync response. Pure aggregation, no I/O.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub application: Tally,
    pub permissions: Tally,
    pub roles: Tally,
    pub users: Tally,
}

impl SyncReport {
    /// Tally the response by linear scan.
    pub fn from_response(response: &SyncResponse) -> Self {
        let mut application = Tally::default();
        match response.application.action {
            SyncAction::Created => application.created += 1,
            SyncAction::Updated => application.updated += 1,
            SyncAction::Other => {}
        }

        let mut roles = Tally::default();
        for role in &response.roles {
            match role.action {
                SyncAction::Created => roles.created += 1,
                SyncAction::Updated => roles.updated += 1,
                SyncAction::Other => {}
            }
        }

        Self {
            application,
            permissions: Tally::count(&response.permissions),
            roles,
            users: Tally::count(&response.users),
        }
    }
}
