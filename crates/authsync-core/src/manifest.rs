//! The authorization manifest: the complete declarative description of
//! one application's permissions, roles, and users.
//!
//! The manifest lives as a YAML document on disk and is sent to the
//! auth service as JSON; both use the same field names. Loading always
//! re-validates, saving validates first, and the whole document is
//! persisted at once — there is no partial write.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::Action;
use crate::error::{Error, Result};

/// Role code the auth service grants implicit full access
/// (`{action: manage, subject: all}`).
pub const MASTER_ROLE_CODE: &str = "master";

/// Application identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Unique slug, lowercase and hyphenated (e.g. "sagep-biopass").
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single CASL permission.
///
/// `subject` and `action` are required for the downstream CASL
/// evaluator to function, independent of how `code` is spelled.
/// Wildcards are a role-level feature; every permission record itself
/// carries a concrete subject/action pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Unique key (e.g. "biopass.devices.read").
    pub code: String,
    /// CASL resource identifier (e.g. "devices", "Menu:Dashboard").
    pub subject: String,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Opaque JSON fragment with CASL conditions
    /// (e.g. `{"userId": "${user.id}"}`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

/// A role: a named, ordered list of permission codes or wildcard
/// patterns (e.g. "biopass.*").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub system: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Must stay empty for the master role; the service grants it full
    /// access implicitly and an explicit list would be contradictory.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Role {
    /// Whether this is the master role (case-insensitive on code).
    pub fn is_master(&self) -> bool {
        self.code.eq_ignore_ascii_case(MASTER_ROLE_CODE)
    }

    /// The synthesized master role used when a user references
    /// "master" but the manifest does not define it.
    pub fn master() -> Self {
        Self {
            code: MASTER_ROLE_CODE.to_string(),
            name: "Master".to_string(),
            system: true,
            description: None,
            permissions: Vec::new(),
        }
    }
}

/// A user seeded into the auth service.
///
/// The password is plaintext at rest in the manifest; it is protected
/// in transit only. Manifest files carrying users should be treated as
/// secrets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password: String,
    pub name: String,
    /// Tenant scope; `None` makes the user global.
    #[serde(default, rename = "tenantID", skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub active: bool,
    /// Role codes assigned to this user.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// Whether any assigned role references master (case-insensitive).
    pub fn references_master(&self) -> bool {
        self.roles
            .iter()
            .any(|r| r.eq_ignore_ascii_case(MASTER_ROLE_CODE))
    }
}

/// The aggregate root: one application's complete authorization surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthManifest {
    pub application: Application,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,
}

impl AuthManifest {
    /// Load a manifest from a YAML file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest: AuthManifest = serde_yaml::from_str(&data)?;
        manifest.validate()?;

        debug!(
            application = %manifest.application.code,
            permissions = manifest.permissions.len(),
            roles = manifest.roles.len(),
            users = manifest.users.len(),
            "manifest loaded"
        );

        Ok(manifest)
    }

    /// Validate and write the whole manifest to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.validate()?;

        let data = serde_yaml::to_string(self)?;
        fs::write(path, data).map_err(|source| Error::ManifestWrite {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "manifest saved");
        Ok(())
    }

    /// Enforce the master-role invariant in one place.
    ///
    /// Synthesizes the master role when a user references it but no
    /// role defines it, and clears the permission list of any existing
    /// master role. Called at every mutation boundary, before
    /// validation; the validator itself never mutates.
    pub fn ensure_master_role(&mut self) {
        for role in &mut self.roles {
            if role.is_master() && !role.permissions.is_empty() {
                debug!(code = %role.code, "clearing explicit permissions on master role");
                role.permissions.clear();
            }
        }

        let referenced = self.users.iter().any(User::references_master);
        let defined = self.roles.iter().any(Role::is_master);
        if referenced && !defined {
            debug!("synthesizing master role referenced by users");
            self.roles.push(Role::master());
        }
    }

    /// Validate the manifest. Fails fast on the first violation, in a
    /// fixed order: application identity, permissions, roles.
    pub fn validate(&self) -> Result<()> {
        if self.application.code.is_empty() {
            return Err(Error::empty_field("application.code"));
        }
        if self.application.name.is_empty() {
            return Err(Error::empty_field("application.name"));
        }

        for (i, perm) in self.permissions.iter().enumerate() {
            if perm.code.is_empty() {
                return Err(Error::empty_field(format!("permissions[{i}].code")));
            }
            if perm.subject.is_empty() {
                return Err(Error::empty_field(format!("permissions[{i}].subject")));
            }
            // Action membership is guaranteed by the enum type for
            // programmatic construction; deserialization rejects
            // out-of-vocabulary values at parse time.
        }

        for (i, role) in self.roles.iter().enumerate() {
            if role.code.is_empty() {
                return Err(Error::empty_field(format!("roles[{i}].code")));
            }
            if role.name.is_empty() {
                return Err(Error::empty_field(format!("roles[{i}].name")));
            }
            if role.is_master() {
                if !role.permissions.is_empty() {
                    return Err(Error::MasterRoleWithPermissions {
                        index: i,
                        code: role.code.clone(),
                    });
                }
            } else if role.permissions.is_empty() {
                return Err(Error::RoleWithoutPermissions { index: i });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn minimal_manifest() -> AuthManifest {
        AuthManifest {
            application: Application {
                code: "sagep-biopass".to_string(),
                name: "SAGEP Biopass".to_string(),
                description: None,
            },
            permissions: vec![Permission {
                code: "biopass.devices.read".to_string(),
                subject: "devices".to_string(),
                action: Action::Read,
                description: None,
                conditions: None,
            }],
            roles: vec![Role {
                code: "viewer".to_string(),
                name: "Viewer".to_string(),
                system: false,
                description: None,
                permissions: vec!["biopass.devices.read".to_string()],
            }],
            users: Vec::new(),
        }
    }

    #[test]
    fn valid_manifest_passes() {
        assert!(minimal_manifest().validate().is_ok());
    }

    #[test]
    fn empty_application_code_fails_first() {
        let mut m = minimal_manifest();
        m.application.code.clear();
        m.application.name.clear();
        let err = m.validate().unwrap_err();
        assert!(err.to_string().contains("application.code"));
    }

    #[test]
    fn permission_with_empty_subject_fails() {
        let mut m = minimal_manifest();
        m.permissions[0].subject.clear();
        let err = m.validate().unwrap_err();
        assert!(err.to_string().contains("permissions[0].subject"));
    }

    #[test]
    fn master_role_with_permissions_fails_any_casing() {
        for code in ["master", "Master", "MASTER"] {
            let mut m = minimal_manifest();
            m.roles.push(Role {
                code: code.to_string(),
                name: "Master".to_string(),
                system: true,
                description: None,
                permissions: vec!["biopass.devices.read".to_string()],
            });
            let err = m.validate().unwrap_err();
            assert!(
                matches!(err, Error::MasterRoleWithPermissions { index: 1, .. }),
                "expected master violation for code {code}, got {err}"
            );
        }
    }

    #[test]
    fn master_role_with_empty_permissions_passes() {
        let mut m = minimal_manifest();
        m.roles.push(Role::master());
        assert!(m.validate().is_ok());
    }

    #[test]
    fn non_master_role_without_permissions_fails() {
        let mut m = minimal_manifest();
        m.roles[0].permissions.clear();
        let err = m.validate().unwrap_err();
        assert!(matches!(err, Error::RoleWithoutPermissions { index: 0 }));
    }

    #[test]
    fn ensure_master_role_synthesizes_when_referenced() {
        let mut m = minimal_manifest();
        m.users.push(User {
            email: "root@example.com".to_string(),
            password: "s3cret".to_string(),
            name: "Root".to_string(),
            tenant_id: None,
            active: true,
            roles: vec!["Master".to_string()],
        });
        assert!(!m.roles.iter().any(Role::is_master));

        m.ensure_master_role();

        let master = m.roles.iter().find(|r| r.is_master()).unwrap();
        assert_eq!(master.code, "master");
        assert_eq!(master.name, "Master");
        assert!(master.system);
        assert!(master.permissions.is_empty());
        assert!(m.validate().is_ok());
    }

    #[test]
    fn ensure_master_role_clears_explicit_permissions() {
        let mut m = minimal_manifest();
        m.roles.push(Role {
            code: "master".to_string(),
            name: "Master".to_string(),
            system: true,
            description: None,
            permissions: vec!["biopass.devices.read".to_string()],
        });

        m.ensure_master_role();

        let master = m.roles.iter().find(|r| r.is_master()).unwrap();
        assert!(master.permissions.is_empty());
        // No duplicate synthesized on top of the repaired role.
        assert_eq!(m.roles.iter().filter(|r| r.is_master()).count(), 1);
    }

    #[test]
    fn ensure_master_role_is_idempotent() {
        let mut m = minimal_manifest();
        m.users.push(User {
            email: "root@example.com".to_string(),
            password: "s3cret".to_string(),
            name: "Root".to_string(),
            tenant_id: None,
            active: true,
            roles: vec!["master".to_string()],
        });
        m.ensure_master_role();
        let roles_after_first = m.roles.clone();
        m.ensure_master_role();
        assert_eq!(m.roles, roles_after_first);
    }

    #[test]
    fn yaml_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth-manifest.yaml");

        let mut m = minimal_manifest();
        m.application.description = Some("Biometric access".to_string());
        m.users.push(User {
            email: "ops@example.com".to_string(),
            password: "hunter2".to_string(),
            name: "Ops".to_string(),
            tenant_id: Some("unit-7".to_string()),
            active: true,
            roles: vec!["viewer".to_string()],
        });

        m.save(&path).unwrap();
        let loaded = AuthManifest::load(&path).unwrap();
        assert_eq!(loaded, m);
    }

    #[test]
    fn load_rejects_invalid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth-manifest.yaml");
        std::fs::write(
            &path,
            "application:\n  code: sagep-x\n  name: X\nroles:\n  - code: empty\n    name: Empty\n    permissions: []\n",
        )
        .unwrap();

        let err = AuthManifest::load(&path).unwrap_err();
        assert!(matches!(err, Error::RoleWithoutPermissions { index: 0 }));
    }

    #[test]
    fn load_rejects_out_of_vocabulary_action() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth-manifest.yaml");
        std::fs::write(
            &path,
            "application:\n  code: sagep-x\n  name: X\npermissions:\n  - code: x.devices.write\n    subject: devices\n    action: write\n",
        )
        .unwrap();

        let err = AuthManifest::load(&path).unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn wire_json_uses_service_field_names() {
        let mut m = minimal_manifest();
        m.users.push(User {
            email: "ops@example.com".to_string(),
            password: "hunter2".to_string(),
            name: "Ops".to_string(),
            tenant_id: Some("unit-7".to_string()),
            active: true,
            roles: vec!["viewer".to_string()],
        });

        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["application"]["code"], "sagep-biopass");
        assert_eq!(value["permissions"][0]["action"], "read");
        assert_eq!(value["users"][0]["tenantID"], "unit-7");
        assert!(value["permissions"][0].get("description").is_none());
    }
}
