//! Interactive prompts for manifest authoring.
//!
//! Uses dialoguer for terminal-based input. Each flow returns plain,
//! fully-normalized domain values; the inference engine never sees the
//! prompting machinery, only the strings collected here.

use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Password, Select};

use authsync_core::codes::{slugify, titleize};
use authsync_core::infer::{
    InferredPermission, SubjectCasing, infer_menu_permission, infer_resource_permission,
    infer_subject_action,
};
use authsync_core::{Action, Application, Permission, Role, User};

use crate::error::Result;

/// Input shapes a permission can be declared with.
const PERMISSION_KINDS: &[&str] = &["Menu", "Resource (entity)", "Raw code"];

/// Prompt for the application identity.
///
/// The slug and display name are derived from a single free-form name;
/// the user confirms or edits both.
pub fn prompt_application() -> Result<Application> {
    let name: String = Input::new()
        .with_prompt("Application name")
        .interact_text()?;

    let mut code = slugify(&name);
    let mut display_name = titleize(&name);

    println!("  {}: {}", "Code".dimmed(), code.cyan());
    println!("  {}: {}", "Name".dimmed(), display_name.cyan());
    let accept = Confirm::new()
        .with_prompt("Use this application identity?")
        .default(true)
        .interact()?;

    if !accept {
        code = Input::<String>::new()
            .with_prompt("Application code")
            .default(code)
            .interact_text()?
            .trim()
            .to_lowercase();
        display_name = Input::<String>::new()
            .with_prompt("Application name")
            .default(display_name)
            .interact_text()?
            .trim()
            .to_string();
    }

    let description: String = Input::new()
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()?;

    Ok(Application {
        code,
        name: display_name,
        description: optional(description),
    })
}

/// Prompt for permissions, one at a time, until the user stops.
pub fn prompt_permissions(app_code: &str) -> Result<Vec<Permission>> {
    let mut permissions = Vec::new();

    loop {
        let kind = Select::new()
            .with_prompt("Permission type")
            .items(PERMISSION_KINDS)
            .default(0)
            .interact()?;

        let inferred = match kind {
            0 => prompt_menu_permission()?,
            1 => prompt_resource_permission(app_code)?,
            _ => prompt_raw_code_permission()?,
        };

        println!();
        println!("  {}: {}", "Code".dimmed(), inferred.code.cyan());
        println!("  {}: {}", "Subject".dimmed(), inferred.subject.cyan());
        println!("  {}: {}", "Action".dimmed(), inferred.action.to_string().cyan());

        let keep = Confirm::new()
            .with_prompt("Keep this permission?")
            .default(true)
            .interact()?;
        if !keep {
            continue;
        }

        let description: String = Input::new()
            .with_prompt("Description (optional)")
            .allow_empty(true)
            .interact_text()?;
        let conditions: String = Input::new()
            .with_prompt(r#"Conditions (optional JSON, e.g. {"userId": "${user.id}"})"#)
            .allow_empty(true)
            .interact_text()?;

        permissions.push(Permission {
            code: inferred.code,
            subject: inferred.subject,
            action: inferred.action,
            description: optional(description),
            conditions: optional(conditions),
        });

        let more = Confirm::new()
            .with_prompt("Add another permission?")
            .default(true)
            .interact()?;
        if !more {
            break;
        }
    }

    Ok(permissions)
}

fn prompt_menu_permission() -> Result<InferredPermission> {
    loop {
        let menu_name: String = Input::new()
            .with_prompt("Menu name (e.g. Dashboard, Reports)")
            .interact_text()?;
        if let Some(inferred) = infer_menu_permission(&menu_name) {
            return Ok(inferred);
        }
        println!("{} Menu name must not be empty.", "!".yellow());
    }
}

fn prompt_resource_permission(app_code: &str) -> Result<InferredPermission> {
    loop {
        let entity: String = Input::new()
            .with_prompt("Entity name (lowercase plural, e.g. devices, users)")
            .interact_text()?;
        let action = prompt_action("Allowed operation")?;
        if let Some(inferred) = infer_resource_permission(&entity, action.as_str(), app_code) {
            return Ok(inferred);
        }
        println!("{} Entity name must not be empty.", "!".yellow());
    }
}

/// Raw-code entry: infer subject/action from the dotted code, falling
/// back to explicit prompts when the heuristic fails.
fn prompt_raw_code_permission() -> Result<InferredPermission> {
    let code: String = Input::new()
        .with_prompt("Permission code (e.g. biopass.devices.read)")
        .interact_text()?;
    let code = code.trim().to_string();

    if let Some((subject, action)) = infer_subject_action(&code, SubjectCasing::Lowercase) {
        return Ok(InferredPermission {
            code,
            subject,
            action,
        });
    }

    println!(
        "{} Could not infer subject and action from '{}'; enter them explicitly.",
        "!".yellow(),
        code
    );
    let subject: String = Input::new()
        .with_prompt("Subject (CASL resource identifier)")
        .interact_text()?;
    let action = prompt_action("Action")?;

    Ok(InferredPermission {
        code,
        subject: subject.trim().to_string(),
        action,
    })
}

/// Prompt for roles, one at a time, until the user stops.
pub fn prompt_roles(available: &[Permission]) -> Result<Vec<Role>> {
    let mut roles = Vec::new();

    loop {
        let code: String = Input::new()
            .with_prompt("Role code (e.g. biopass.admin, master)")
            .interact_text()?;
        let code = code.trim().to_string();
        let name: String = Input::new()
            .with_prompt("Role name")
            .interact_text()?;
        let description: String = Input::new()
            .with_prompt("Description (optional)")
            .allow_empty(true)
            .interact_text()?;
        let system = Confirm::new()
            .with_prompt("Is this a protected system role?")
            .default(true)
            .interact()?;

        let role = Role {
            code,
            name: name.trim().to_string(),
            system,
            description: optional(description),
            permissions: Vec::new(),
        };

        let permissions = if role.is_master() {
            println!(
                "  {} The master role needs no permission list; the service grants it {} automatically.",
                "i".blue(),
                "{action: manage, subject: all}".dimmed()
            );
            Vec::new()
        } else if available.is_empty() {
            let raw: String = Input::new()
                .with_prompt("Permission codes (comma-separated, wildcards like biopass.* allowed)")
                .allow_empty(true)
                .interact_text()?;
            split_permission_list(&raw)
        } else {
            let options: Vec<&str> = available.iter().map(|p| p.code.as_str()).collect();
            let selected = MultiSelect::new()
                .with_prompt("Select permissions (space to toggle, enter to confirm)")
                .items(&options)
                .interact()?;
            selected.iter().map(|&i| options[i].to_string()).collect()
        };

        roles.push(Role {
            permissions,
            ..role
        });

        let more = Confirm::new()
            .with_prompt("Add another role?")
            .default(true)
            .interact()?;
        if !more {
            break;
        }
    }

    Ok(roles)
}

/// Prompt for users, one at a time, until the user stops.
pub fn prompt_users(roles: &[Role]) -> Result<Vec<User>> {
    let mut users = Vec::new();

    loop {
        let is_master = Confirm::new()
            .with_prompt("Is this a master user (full access)?")
            .default(users.is_empty())
            .interact()?;

        let email: String = Input::new().with_prompt("Email").interact_text()?;
        let password = Password::new().with_prompt("Password").interact()?;
        let name: String = Input::new().with_prompt("Full name").interact_text()?;
        let tenant: String = Input::new()
            .with_prompt("Tenant (optional, empty for a global user)")
            .allow_empty(true)
            .interact_text()?;

        let assigned = if is_master {
            vec!["master".to_string()]
        } else if roles.is_empty() {
            Vec::new()
        } else {
            let options: Vec<&str> = roles.iter().map(|r| r.code.as_str()).collect();
            let selected = MultiSelect::new()
                .with_prompt("Select roles for this user")
                .items(&options)
                .interact()?;
            selected.iter().map(|&i| options[i].to_string()).collect()
        };

        users.push(User {
            email: email.trim().to_string(),
            password,
            name: name.trim().to_string(),
            tenant_id: optional(tenant),
            active: true,
            roles: assigned,
        });

        let more = Confirm::new()
            .with_prompt("Add another user?")
            .default(false)
            .interact()?;
        if !more {
            break;
        }
    }

    Ok(users)
}

/// Ask a yes/no question.
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn prompt_action(prompt: &str) -> Result<Action> {
    let items: Vec<String> = Action::ALL
        .iter()
        .map(|a| format!("{a} - {}", a.description()))
        .collect();
    let idx = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Action::ALL[idx])
}

/// Split a comma-separated permission list, dropping empty entries.
fn split_permission_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_permission_list_trims_and_drops_empties() {
        assert_eq!(
            split_permission_list(" biopass.* , biopass.devices.read ,,"),
            vec!["biopass.*", "biopass.devices.read"]
        );
        assert!(split_permission_list("   ").is_empty());
    }

    #[test]
    fn optional_maps_blank_to_none() {
        assert_eq!(optional("  ".to_string()), None);
        assert_eq!(optional(" x ".to_string()), Some("x".to_string()));
    }

    #[test]
    fn every_action_has_a_prompt_description() {
        for action in Action::ALL {
            assert!(!action.description().is_empty(), "{action} lacks a description");
        }
    }
}
