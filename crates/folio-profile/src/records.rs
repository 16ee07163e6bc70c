//! Profile record types.

use serde::{Deserialize, Serialize};

/// Everything the site knows about its owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ContactInfo {
    /// Labelled outbound links, in display order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", self.github.as_deref()),
            ("LinkedIn", self.linkedin.as_deref()),
            ("Website", self.website.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectEntry {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

impl Profile {
    /// Parse and validate the profile bundled with the binary.
    pub fn builtin() -> Result<Self, folio_common::ConfigError> {
        crate::load::parse(crate::load::BUILTIN_PROFILE)
    }

    /// First name, used for the assistant's persona line.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Every skill across all groups, in declaration order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .flat_map(|group| group.items.iter().map(String::as_str))
    }
}
