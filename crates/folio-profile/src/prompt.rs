//! System instruction assembly.
//!
//! Turns the structured records into the prose prompt that fixes the
//! assistant's persona and knowledge scope. Built once at startup.

use std::fmt::Write;

use crate::records::Profile;

/// Format the profile into the assistant's system instruction.
pub fn system_instruction(profile: &Profile) -> String {
    let mut out = String::new();
    let first = profile.first_name();

    let _ = writeln!(
        out,
        "You are the assistant on {}'s portfolio website. {} is a {}{}.",
        profile.name,
        first,
        profile.title,
        if profile.location.is_empty() {
            String::new()
        } else {
            format!(" based in {}", profile.location)
        }
    );
    out.push_str(
        "Answer visitors' questions about their background, experience, projects, \
         and skills using only the information below. Keep replies short and friendly. \
         If something is not covered here, say you don't know and suggest getting in touch \
         directly. Politely decline requests unrelated to the portfolio.\n",
    );

    if !profile.about.trim().is_empty() {
        let _ = write!(out, "\nAbout {first}:\n{}\n", profile.about.trim());
    }

    if !profile.experience.is_empty() {
        out.push_str("\nExperience:\n");
        for entry in &profile.experience {
            let _ = write!(
                out,
                "- {} at {} ({})",
                entry.role, entry.company, entry.period
            );
            if let Some(ref location) = entry.location {
                let _ = write!(out, ", {location}");
            }
            out.push_str(".\n");
            for highlight in &entry.highlights {
                let _ = writeln!(out, "  * {highlight}");
            }
        }
    }

    if !profile.projects.is_empty() {
        out.push_str("\nProjects:\n");
        for project in &profile.projects {
            let _ = write!(out, "- {}: {}", project.name, project.summary);
            if !project.stack.is_empty() {
                let _ = write!(out, " Built with {}.", project.stack.join(", "));
            }
            if let Some(ref link) = project.link {
                let _ = write!(out, " ({link})");
            }
            out.push('\n');
        }
    }

    if !profile.skills.is_empty() {
        out.push_str("\nSkills:\n");
        for group in &profile.skills {
            let _ = writeln!(out, "- {}: {}", group.category, group.items.join(", "));
        }
    }

    let contact = &profile.contact;
    if !contact.email.is_empty() || !contact.links().is_empty() {
        out.push_str("\nContact:\n");
        if !contact.email.is_empty() {
            let _ = writeln!(out, "- Email: {}", contact.email);
        }
        for (label, url) in contact.links() {
            let _ = writeln!(out, "- {label}: {url}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ExperienceEntry, ProjectEntry, SkillGroup};

    fn sample() -> Profile {
        Profile {
            name: "Ada Quinn".into(),
            title: "Data Engineer".into(),
            tagline: String::new(),
            location: "Tacoma, WA".into(),
            about: "I like pipelines.".into(),
            contact: Default::default(),
            experience: vec![ExperienceEntry {
                role: "Engineer".into(),
                company: "Acme".into(),
                period: "2020 - 2023".into(),
                location: None,
                highlights: vec!["Shipped the ETL rewrite.".into()],
            }],
            projects: vec![ProjectEntry {
                name: "Sieve".into(),
                summary: "A log filter.".into(),
                stack: vec!["Rust".into(), "Tokio".into()],
                link: None,
            }],
            skills: vec![SkillGroup {
                category: "Languages".into(),
                items: vec!["Rust".into(), "SQL".into()],
            }],
        }
    }

    #[test]
    fn persona_line_names_owner() {
        let prompt = system_instruction(&sample());
        let first_line = prompt.lines().next().unwrap();
        assert_eq!(
            first_line,
            "You are the assistant on Ada Quinn's portfolio website. Ada is a Data Engineer based in Tacoma, WA."
        );
    }

    #[test]
    fn includes_every_record_kind() {
        let prompt = system_instruction(&sample());
        assert!(prompt.contains("About Ada:\nI like pipelines."));
        assert!(prompt.contains("- Engineer at Acme (2020 - 2023).\n  * Shipped the ETL rewrite."));
        assert!(prompt.contains("- Sieve: A log filter. Built with Rust, Tokio."));
        assert!(prompt.contains("- Languages: Rust, SQL"));
    }

    #[test]
    fn omits_empty_sections() {
        let mut profile = sample();
        profile.projects.clear();
        profile.location.clear();
        let prompt = system_instruction(&profile);
        assert!(!prompt.contains("Projects:"));
        assert!(!prompt.contains("Contact:"));
        assert!(prompt.lines().next().unwrap().ends_with("is a Data Engineer."));
    }

    #[test]
    fn contact_section_lists_links() {
        let mut profile = sample();
        profile.contact.email = "ada@example.com".into();
        profile.contact.github = Some("https://github.com/ada".into());
        let prompt = system_instruction(&profile);
        assert!(prompt
            .contains("Contact:\n- Email: ada@example.com\n- GitHub: https://github.com/ada\n"));
    }

    #[test]
    fn builtin_prompt_is_stable() {
        let profile = Profile::builtin().unwrap();
        assert_eq!(system_instruction(&profile), system_instruction(&profile));
        assert!(system_instruction(&profile).contains("Bellevue Traffic Simulation"));
    }
}
