//! Shared application state.

use std::sync::Arc;

use folio_profile::Profile;

use crate::conversations::ConversationStore;
use crate::render;

/// Application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<Profile>,
    /// The rendered page, built once at startup.
    pub page: Arc<str>,
    /// Chat backend; `None` when the assistant is disabled.
    pub chat: Option<ChatService>,
    pub max_body_bytes: usize,
}

/// Everything the chat endpoints need.
#[derive(Clone)]
pub struct ChatService {
    pub conversations: ConversationStore,
    pub max_message_chars: usize,
}

impl AppState {
    pub fn new(profile: Profile, chat: Option<ChatService>) -> Self {
        let page = render::page(&profile, chat.is_some());
        Self {
            profile: Arc::new(profile),
            page: page.into(),
            chat,
            max_body_bytes: 16 * 1024,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
