//! Session struct and history management.

use crate::token_tracker::TokenTracker;
use crate::{Message, Role};

/// A conversation session with message history and usage accounting.
#[derive(Default)]
pub struct Session {
    /// Completed user and assistant turns.
    pub(super) messages: Vec<Message>,
    /// Prepended to every API call.
    pub(super) system_prompt: Option<String>,
    pub(super) tracker: TokenTracker,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub(crate) fn build_messages(&self) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.messages.len() + 1);
        if let Some(ref system) = self.system_prompt {
            msgs.push(Message {
                role: Role::System,
                content: system.clone(),
            });
        }
        msgs.extend(self.messages.iter().cloned());
        msgs
    }

    /// Get the full conversation history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}
