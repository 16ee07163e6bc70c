//! Profile loading and validation.

use std::path::Path;
use std::sync::LazyLock;

use folio_common::ConfigError;
use regex::Regex;
use tracing::info;

use crate::records::Profile;

/// The profile compiled into the binary.
pub const BUILTIN_PROFILE: &str = include_str!("../assets/profile.toml");

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://[^\s<>]+$").unwrap());

pub(crate) fn parse(content: &str) -> Result<Profile, ConfigError> {
    let profile: Profile = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse profile: {e}")))?;
    validate(&profile)?;
    Ok(profile)
}

/// Load and validate a profile TOML file.
pub fn load_from_path(path: &Path) -> Result<Profile, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    let profile = parse(&content)?;
    info!(
        path = %path.display(),
        experience = profile.experience.len(),
        projects = profile.projects.len(),
        "loaded profile"
    );
    Ok(profile)
}

/// Check a profile for missing or malformed fields, collecting all errors.
pub fn validate(profile: &Profile) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if profile.name.trim().is_empty() {
        errors.push("name must not be empty".into());
    }
    if profile.title.trim().is_empty() {
        errors.push("title must not be empty".into());
    }
    if profile.about.trim().is_empty()
        && profile.experience.is_empty()
        && profile.projects.is_empty()
        && profile.skills.is_empty()
    {
        errors.push("profile has no about text, experience, projects, or skills".into());
    }

    let email = profile.contact.email.trim();
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        errors.push(format!("contact.email '{email}' is not a valid address"));
    }
    for (label, url) in profile.contact.links() {
        if !URL_RE.is_match(url) {
            errors.push(format!("contact link {label} '{url}' must be an http(s) URL"));
        }
    }

    for (i, entry) in profile.experience.iter().enumerate() {
        if entry.role.trim().is_empty() || entry.company.trim().is_empty() {
            errors.push(format!("experience[{i}] needs both role and company"));
        }
    }
    for (i, project) in profile.projects.iter().enumerate() {
        if project.name.trim().is_empty() {
            errors.push(format!("projects[{i}].name must not be empty"));
        }
        if let Some(ref link) = project.link {
            if !URL_RE.is_match(link) {
                errors.push(format!("projects[{i}].link '{link}' must be an http(s) URL"));
            }
        }
    }
    for (i, group) in profile.skills.iter().enumerate() {
        if group.items.is_empty() {
            errors.push(format!("skills[{i}] ({}) has no items", group.category));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
