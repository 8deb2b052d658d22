//! Permission inference.
//!
//! Converts the three human input shapes — a menu name, an
//! entity/action pair, and a free-form dotted code — into canonical
//! `{code, subject, action}` triples. Every entry point is total and
//! side-effect free; a failed inference is `None` and the caller falls
//! back to asking for explicit values.

use crate::action::Action;
use crate::codes::{capitalize_first, short_code};

/// Code prefix marking menu permissions.
const MENU_PREFIX: &str = "Menu:";

/// A fully inferred permission triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredPermission {
    pub code: String,
    pub subject: String,
    pub action: Action,
}

/// Casing applied to the resource name extracted by the multi-segment
/// code heuristic (see [`infer_subject_action`]).
///
/// Known deployments of this heuristic disagree: some capitalize the
/// resource name, some keep it lowercase to match the literal entity
/// string the frontend sends. The policy is a parameter so the caller
/// states which consumer it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubjectCasing {
    /// Keep the resource name lowercase (current frontend contract).
    #[default]
    Lowercase,
    /// Capitalize the first letter of the resource name.
    Capitalized,
}

/// Infer a menu permission from a menu name.
///
/// `"dashboard"` → `{code: "Menu:Dashboard", subject: "Menu:Dashboard",
/// action: view}`. The subject equals the code so the frontend can
/// match on the full menu identifier.
pub fn infer_menu_permission(menu_name: &str) -> Option<InferredPermission> {
    let menu_name = menu_name.trim();
    if menu_name.is_empty() {
        return None;
    }

    let code = format!("{MENU_PREFIX}{}", capitalize_first(menu_name));
    Some(InferredPermission {
        subject: code.clone(),
        code,
        action: Action::View,
    })
}

/// Infer a resource permission from an entity, an action name, and the
/// application code.
///
/// `("devices", "read", "sagep-biopass")` → `{code:
/// "biopass.devices.read", subject: "devices", action: read}`.
///
/// The subject stays exactly as given (lowercased, unpluralized):
/// the frontend authorization check matches on the literal entity
/// string it sends.
pub fn infer_resource_permission(
    entity: &str,
    action: &str,
    app_code: &str,
) -> Option<InferredPermission> {
    let entity = entity.trim().to_lowercase();
    let action = action.trim().to_lowercase();
    let app_code = app_code.trim().to_lowercase();

    if entity.is_empty() || action.is_empty() || app_code.is_empty() {
        return None;
    }

    let action = Action::parse(&action)?;
    let code = format!("{}.{entity}.{}", short_code(&app_code), action);

    Some(InferredPermission {
        code,
        subject: entity,
        action,
    })
}

/// Infer subject and action from a free-form permission code.
///
/// Compatibility path for manifests that only carry a code string.
/// Patterns, first match wins:
///
/// 1. `Menu:{Name}` → subject is the whole code, action `view`.
/// 2. `{Subject}.{action}` (exactly one dot) → capitalized subject.
/// 3. `{app}.{resource}.{action}` (any number of dots) → the segment
///    before the trailing action is the resource name, cased per
///    `casing`.
///
/// Multiple dots never make a code ambiguous: only the last segment is
/// tested against the action vocabulary.
pub fn infer_subject_action(code: &str, casing: SubjectCasing) -> Option<(String, Action)> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }

    if code.starts_with(MENU_PREFIX) {
        return Some((code.to_string(), Action::View));
    }

    if let Some((subject, action)) = code.split_once('.') {
        if !subject.is_empty() && !action.contains('.') {
            if let Some(action) = Action::parse(action) {
                return Some((capitalize_first(subject), action));
            }
        }
    }

    if let Some((prefix, last)) = code.rsplit_once('.') {
        if prefix.is_empty() {
            return None;
        }
        if let Some(action) = Action::parse(last) {
            let resource = match prefix.rsplit_once('.') {
                Some((_, resource)) => resource,
                None => prefix,
            };
            let subject = match casing {
                SubjectCasing::Lowercase => resource.to_string(),
                SubjectCasing::Capitalized => capitalize_first(resource),
            };
            return Some((subject, action));
        }
    }

    None
}
