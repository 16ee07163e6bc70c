//! Conversation factory.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::gemini::{GeminiClient, GeminiConfig};
use crate::session::Session;
use crate::token_tracker::TokenTracker;
use crate::{AiClient, AiError, Message};

/// Opens conversations bound to a fixed client, model, and system instruction.
///
/// Built once during setup. Construction is where configuration problems
/// surface; opening a conversation afterwards cannot fail and makes no
/// network call.
pub struct Initializer {
    client: Arc<dyn AiClient>,
    model: String,
    system_instruction: Arc<str>,
    initializations: AtomicU64,
}

impl Initializer {
    pub fn new(
        client: Arc<dyn AiClient>,
        model: impl Into<String>,
        system_instruction: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            system_instruction: system_instruction.into(),
            initializations: AtomicU64::new(0),
        }
    }

    /// Build an initializer backed by a Gemini client.
    pub fn from_gemini(
        config: GeminiConfig,
        system_instruction: impl Into<Arc<str>>,
    ) -> Result<Self, AiError> {
        let model = config.model.clone();
        let client = GeminiClient::new(config)?;
        Ok(Self::new(Arc::new(client), model, system_instruction))
    }

    /// Build a Gemini-backed initializer with the key taken from the environment.
    pub fn from_env(system_instruction: impl Into<Arc<str>>) -> Result<Self, AiError> {
        Self::from_gemini(GeminiConfig::from_env()?, system_instruction)
    }

    /// Open a fresh conversation.
    pub fn open(&self) -> Conversation {
        let n = self.initializations.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(model = %self.model, initializations = n, "Opening conversation");
        Conversation {
            client: Arc::clone(&self.client),
            session: Session::new().with_system_prompt(&*self.system_instruction),
        }
    }

    /// How many conversations have been opened so far.
    pub fn initializations(&self) -> u64 {
        self.initializations.load(Ordering::Relaxed)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }
}

/// An open exchange with the upstream service.
pub struct Conversation {
    client: Arc<dyn AiClient>,
    session: Session,
}

impl Conversation {
    pub async fn send(&mut self, text: &str) -> Result<String, AiError> {
        self.session.chat(self.client.as_ref(), text).await
    }

    pub fn history(&self) -> &[Message] {
        self.session.messages()
    }

    pub fn usage(&self) -> &TokenTracker {
        self.session.tracker()
    }
}
