//! Application code and name normalization.
//!
//! All applications registered with the auth service share the `sagep`
//! organizational namespace: slugs are prefixed `sagep-`, display names
//! `SAGEP `. Every function here is total on trimmed input and returns
//! an empty string for empty input, which callers treat as
//! "could not infer".

/// Organization prefix applied to application slugs.
pub const ORG_SLUG_PREFIX: &str = "sagep-";

/// Organization label applied to application display names.
pub const ORG_NAME_PREFIX: &str = "SAGEP ";

/// Build an application slug from a free-form name.
///
/// Lowercases, replaces spaces with hyphens, and prefixes the org
/// namespace unless already present. Idempotent: `slugify(slugify(x))
/// == slugify(x)`.
pub fn slugify(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return String::new();
    }

    let slug = name.to_lowercase().replace(' ', "-");
    if slug.starts_with(ORG_SLUG_PREFIX) {
        slug
    } else {
        format!("{ORG_SLUG_PREFIX}{slug}")
    }
}

/// Build an application display name from a free-form name.
///
/// Capitalizes only the first character and prefixes the org label
/// unless the name already starts with it (case-insensitive).
pub fn titleize(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return String::new();
    }

    let normalized = capitalize_first(name);
    if normalized
        .to_uppercase()
        .starts_with(ORG_NAME_PREFIX.trim_end())
    {
        normalized
    } else {
        format!("{ORG_NAME_PREFIX}{normalized}")
    }
}

/// Extract the short application code used in permission codes.
///
/// `"sagep-biopass"` → `"biopass"`; a code without hyphens is returned
/// unchanged.
pub fn short_code(app_code: &str) -> &str {
    match app_code.rsplit_once('-') {
        Some((_, tail)) => tail,
        None => app_code,
    }
}

/// Capitalize the first character and lowercase the rest.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
