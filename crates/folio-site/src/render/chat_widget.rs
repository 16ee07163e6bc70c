//! Chat widget markup. Behaviour lives in `assets/chat.js`.

use std::fmt::Write;

use folio_profile::Profile;

use super::escape::escape_html;

pub(super) fn widget(profile: &Profile) -> String {
    let first = escape_html(profile.first_name());
    let mut html = String::new();
    html.push_str("<aside id=\"chat-widget\" class=\"chat\" aria-label=\"Chat\">\n");
    html.push_str(
        "<button id=\"chat-toggle\" class=\"chat-toggle\" type=\"button\" aria-expanded=\"false\">Ask me anything</button>\n",
    );
    html.push_str("<div id=\"chat-panel\" class=\"chat-panel\" hidden>\n");
    let _ = writeln!(html, "<header>Ask about {first}</header>");
    let _ = writeln!(
        html,
        "<ol id=\"chat-log\" class=\"chat-log\" aria-live=\"polite\">\
         <li class=\"msg assistant\">Hi! I can answer questions about {first}'s experience, projects, and skills.</li></ol>"
    );
    html.push_str("<p id=\"chat-loading\" class=\"chat-loading\" hidden>Thinking&hellip;</p>\n");
    html.push_str("<form id=\"chat-form\" class=\"chat-form\" autocomplete=\"off\">\n");
    html.push_str(
        "<input id=\"chat-input\" name=\"message\" type=\"text\" placeholder=\"Type a question\" required>\n",
    );
    html.push_str("<button id=\"chat-send\" type=\"submit\">Send</button>\n");
    html.push_str("</form>\n</div>\n</aside>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_has_log_loading_indicator_and_form() {
        let html = widget(&Profile::builtin().unwrap());
        assert!(html.contains("id=\"chat-log\""));
        assert!(html.contains("id=\"chat-loading\""));
        assert!(html.contains("id=\"chat-form\""));
        assert!(html.contains("id=\"chat-input\""));
        assert!(html.contains("Ask about Jordan"));
    }
}
