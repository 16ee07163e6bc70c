//! Portfolio page sections.

use std::fmt::Write;

use folio_profile::Profile;

use super::escape::escape_html;

pub(super) fn nav(profile: &Profile) -> String {
    let mut html = String::from("<header class=\"site-nav\">\n");
    let _ = writeln!(
        html,
        "<a class=\"brand\" href=\"#hero\">{}</a>",
        escape_html(&profile.name)
    );
    html.push_str("<nav>");
    for (id, label) in [
        ("about", "About"),
        ("experience", "Experience"),
        ("projects", "Projects"),
        ("skills", "Skills"),
        ("contact", "Contact"),
    ] {
        let _ = write!(html, "<a href=\"#{id}\">{label}</a>");
    }
    html.push_str("</nav>\n</header>\n");
    html
}

pub(super) fn hero(profile: &Profile) -> String {
    let mut html = String::from("<section id=\"hero\" class=\"hero\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&profile.name));
    let _ = writeln!(html, "<p class=\"title\">{}</p>", escape_html(&profile.title));
    if !profile.tagline.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"tagline\">{}</p>",
            escape_html(&profile.tagline)
        );
    }
    if !profile.location.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"location\">{}</p>",
            escape_html(&profile.location)
        );
    }
    html.push_str("<a class=\"cta\" href=\"#contact\">Get in touch</a>\n");
    html.push_str("</section>\n");
    html
}

pub(super) fn about(profile: &Profile) -> String {
    let mut html = String::from("<section id=\"about\">\n<h2>About</h2>\n");
    for paragraph in profile
        .about
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        let _ = writeln!(html, "<p>{}</p>", escape_html(paragraph));
    }
    html.push_str("</section>\n");
    html
}

pub(super) fn experience(profile: &Profile) -> String {
    let mut html = String::from("<section id=\"experience\">\n<h2>Experience</h2>\n");
    for entry in &profile.experience {
        html.push_str("<article class=\"job\">\n");
        let _ = writeln!(
            html,
            "<h3>{} <span class=\"at\">@ {}</span></h3>",
            escape_html(&entry.role),
            escape_html(&entry.company)
        );
        let mut meta = escape_html(&entry.period);
        if let Some(ref location) = entry.location {
            let _ = write!(meta, " &middot; {}", escape_html(location));
        }
        let _ = writeln!(html, "<p class=\"meta\">{meta}</p>");
        if !entry.highlights.is_empty() {
            html.push_str("<ul>\n");
            for highlight in &entry.highlights {
                let _ = writeln!(html, "<li>{}</li>", escape_html(highlight));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</article>\n");
    }
    html.push_str("</section>\n");
    html
}

pub(super) fn projects(profile: &Profile) -> String {
    let mut html =
        String::from("<section id=\"projects\">\n<h2>Projects</h2>\n<div class=\"grid\">\n");
    for project in &profile.projects {
        html.push_str("<article class=\"card\">\n");
        match project.link {
            Some(ref link) => {
                let _ = writeln!(
                    html,
                    "<h3><a href=\"{}\" rel=\"noopener\">{}</a></h3>",
                    escape_html(link),
                    escape_html(&project.name)
                );
            }
            None => {
                let _ = writeln!(html, "<h3>{}</h3>", escape_html(&project.name));
            }
        }
        let _ = writeln!(html, "<p>{}</p>", escape_html(&project.summary));
        if !project.stack.is_empty() {
            html.push_str("<ul class=\"tags\">");
            for tech in &project.stack {
                let _ = write!(html, "<li>{}</li>", escape_html(tech));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</article>\n");
    }
    html.push_str("</div>\n</section>\n");
    html
}

pub(super) fn skills(profile: &Profile) -> String {
    let mut html = String::from("<section id=\"skills\">\n<h2>Skills</h2>\n");
    for group in &profile.skills {
        let _ = writeln!(html, "<h3>{}</h3>", escape_html(&group.category));
        html.push_str("<ul class=\"tags\">");
        for item in &group.items {
            let _ = write!(html, "<li>{}</li>", escape_html(item));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");
    html
}

pub(super) fn contact(profile: &Profile) -> String {
    let contact = &profile.contact;
    let mut html = String::from("<section id=\"contact\">\n<h2>Contact</h2>\n");
    if !contact.email.is_empty() {
        let email = escape_html(&contact.email);
        let _ = writeln!(html, "<p><a href=\"mailto:{email}\">{email}</a></p>");
    }
    let links = contact.links();
    if !links.is_empty() {
        html.push_str("<ul class=\"links\">\n");
        for (label, url) in links {
            let _ = writeln!(
                html,
                "<li><a href=\"{}\" rel=\"noopener\">{label}</a></li>",
                escape_html(url)
            );
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");
    html
}
