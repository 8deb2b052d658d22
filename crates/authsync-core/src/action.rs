//! The fixed CASL action vocabulary.
//!
//! Every part of the system that needs to test "is this a valid action"
//! goes through this enum: the inference paths, the validator, and the
//! CLI prompt options. The list exists exactly once.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A CASL action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    Manage,
    View,
}

impl Action {
    /// All actions, in display order.
    pub const ALL: [Action; 6] = [
        Action::Read,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Manage,
        Action::View,
    ];

    /// Parse an action name. Returns `None` for anything outside the
    /// vocabulary. Matching is exact; callers lowercase first.
    pub fn parse(s: &str) -> Option<Action> {
        match s {
            "read" => Some(Action::Read),
            "create" => Some(Action::Create),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            "manage" => Some(Action::Manage),
            "view" => Some(Action::View),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Manage => "manage",
            Action::View => "view",
        }
    }

    /// One-line description, shown in interactive prompts.
    pub fn description(&self) -> &'static str {
        match self {
            Action::Read => "Query records (list or view individually)",
            Action::Create => "Create new records",
            Action::Update => "Update existing records",
            Action::Delete => "Remove records",
            Action::Manage => "Full control (read, create, update, delete)",
            Action::View => "View interface screens (mainly menus)",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
