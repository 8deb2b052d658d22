//! HTTP sync client and reconciliation reporting for authsync.
//!
//! One blocking POST of the serialized manifest to the auth service,
//! authenticated either with a bootstrap HMAC signature or a bearer
//! token, plus pure aggregation of the reconciliation response.

pub mod client;
pub mod error;
pub mod report;
pub mod response;

pub use client::{Credentials, SyncClient, sign_payload};
pub use error::{Error, Result};
pub use report::{SyncReport, Tally};
pub use response::{RoleSyncOutcome, SyncAction, SyncOutcome, SyncResponse};
