//! Server-side rendering of the portfolio page.
//!
//! The page is rendered once at startup from the `Profile`. Every
//! profile string passes through [`escape::escape_html`] before it is
//! written into markup.

mod chat_widget;
pub mod escape;
mod sections;

use std::fmt::Write;

use folio_profile::Profile;

pub use escape::escape_html;

/// Render the complete page. The chat widget is omitted when `chat_enabled` is false.
pub fn page(profile: &Profile, chat_enabled: bool) -> String {
    let mut html = String::with_capacity(16 * 1024);
    let name = escape_html(&profile.name);
    let title = escape_html(&profile.title);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{name} | {title}</title>");
    if !profile.tagline.is_empty() {
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            escape_html(&profile.tagline)
        );
    }
    html.push_str("<link rel=\"stylesheet\" href=\"/assets/site.css\">\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&sections::nav(profile));
    html.push_str("<main>\n");
    html.push_str(&sections::hero(profile));
    html.push_str(&sections::about(profile));
    html.push_str(&sections::experience(profile));
    html.push_str(&sections::projects(profile));
    html.push_str(&sections::skills(profile));
    html.push_str(&sections::contact(profile));
    html.push_str("</main>\n");

    let _ = writeln!(html, "<footer><p>&copy; {name}</p></footer>");

    if chat_enabled {
        html.push_str(&chat_widget::widget(profile));
        html.push_str("<script src=\"/assets/chat.js\" defer></script>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_every_section() {
        let profile = Profile::builtin().unwrap();
        let html = page(&profile, true);
        for id in ["hero", "about", "experience", "projects", "skills", "contact"] {
            assert!(
                html.contains(&format!("id=\"{id}\"")),
                "missing section {id}"
            );
        }
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn chat_widget_only_when_enabled() {
        let profile = Profile::builtin().unwrap();
        assert!(page(&profile, true).contains("id=\"chat-widget\""));
        assert!(page(&profile, true).contains("/assets/chat.js"));
        let without = page(&profile, false);
        assert!(!without.contains("id=\"chat-widget\""));
        assert!(!without.contains("/assets/chat.js"));
    }

    #[test]
    fn profile_text_is_escaped() {
        let mut profile = Profile::builtin().unwrap();
        profile.name = "<script>alert(1)</script>".into();
        profile.about = "Tom & Jerry".into();
        let html = page(&profile, false);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
    }
}
