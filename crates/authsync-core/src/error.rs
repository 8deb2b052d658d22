//! Error types for authsync-core

use std::path::PathBuf;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, validating, or saving a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Manifest file could not be read
    #[error("Failed to read manifest at {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Manifest file could not be written
    #[error("Failed to write manifest at {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A required field is empty
    #[error("{field} must not be empty")]
    EmptyField { field: String },

    /// The master role must not carry explicit permissions
    #[error(
        "roles[{index}] ('{code}') is the master role and must have an empty permission list; the service grants it full access implicitly"
    )]
    MasterRoleWithPermissions { index: usize, code: String },

    /// A non-master role has no permissions
    #[error("roles[{index}].permissions must not be empty")]
    RoleWithoutPermissions { index: usize },

    /// YAML serialization/deserialization error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create an empty-field validation error with the given field path
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }
}
