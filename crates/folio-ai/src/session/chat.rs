//! Async chat method for Session.

use crate::{AiClient, AiError, Message};

use super::manager::Session;

impl Session {
    /// Add a user message and get the assistant's response.
    ///
    /// On error the user message is rolled back so the history only ever
    /// contains completed turns.
    pub async fn chat(
        &mut self,
        client: &dyn AiClient,
        user_message: impl Into<String>,
    ) -> Result<String, AiError> {
        self.messages.push(Message::user(user_message));

        let messages = self.build_messages();
        let response = match client.send_message(&messages).await {
            Ok(response) => response,
            Err(e) => {
                self.messages.pop();
                return Err(e);
            }
        };

        self.tracker.record(&response.usage);
        self.messages.push(Message::assistant(response.content.clone()));

        Ok(response.content)
    }
}
