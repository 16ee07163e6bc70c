//! The chat relay: an explicit conversation context owned by its caller.
//!
//! A `ChatRelay` caches at most one `Conversation` in its slot. The slot
//! is filled lazily from an `Initializer`, reused across successful
//! calls, and emptied whenever a call fails so the next call starts over
//! with a fresh conversation. Callers never see transport errors: a
//! failed turn resolves to the fallback reply.

mod initializer;


use std::sync::Arc;

use tracing::{debug, warn};

use crate::Message;

pub use initializer::{Conversation, Initializer};

/// Reply returned when the upstream call fails.
pub const DEFAULT_FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";

/// Per-caller conversation context.
pub struct ChatRelay {
    initializer: Arc<Initializer>,
    slot: Option<Conversation>,
    fallback: String,
}

impl ChatRelay {
    pub fn new(initializer: Arc<Initializer>) -> Self {
        Self {
            initializer,
            slot: None,
            fallback: DEFAULT_FALLBACK_REPLY.to_string(),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Forward `text` to the cached conversation and return the reply.
    ///
    /// Opens a conversation if none is cached. The conversation is moved
    /// out of the slot for the duration of the call and only put back on
    /// success, so an error or a cancelled call leaves the slot empty.
    pub async fn get_response(&mut self, text: &str) -> String {
        let mut conversation = match self.slot.take() {
            Some(conversation) => conversation,
            None => self.initializer.open(),
        };

        match conversation.send(text).await {
            Ok(reply) => {
                debug!(
                    turns = conversation.history().len(),
                    calls = conversation.usage().call_count(),
                    tokens = conversation.usage().total_tokens(),
                    "Chat relay call succeeded"
                );
                self.slot = Some(conversation);
                reply
            }
            Err(e) => {
                warn!(
                    error = %e,
                    turns = conversation.history().len(),
                    "Chat relay call failed, discarding conversation"
                );
                self.fallback.clone()
            }
        }
    }

    /// Drop the cached conversation, if any.
    pub fn reset(&mut self) {
        if self.slot.take().is_some() {
            debug!("Chat relay reset");
        }
    }

    /// Whether a conversation is currently cached.
    pub fn is_active(&self) -> bool {
        self.slot.is_some()
    }

    /// Completed turns of the cached conversation.
    pub fn turns(&self) -> &[Message] {
        self.slot.as_ref().map(Conversation::history).unwrap_or(&[])
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
