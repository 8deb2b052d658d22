//! Manifest model, validation, and permission inference for authsync.
//!
//! This crate is pure domain logic: no terminal, no network. It turns
//! loosely-specified human input into canonical CASL `{code, subject,
//! action}` triples and enforces the invariants a manifest must satisfy
//! before it can be synchronized.

pub mod action;
pub mod codes;
pub mod error;
pub mod infer;
pub mod manifest;

pub use action::Action;
pub use error::{Error, Result};
pub use infer::{InferredPermission, SubjectCasing};
pub use manifest::{Application, AuthManifest, Permission, Role, User};
