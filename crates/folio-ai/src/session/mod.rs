//! Conversation session management.
//!
//! A `Session` holds the conversation history and the system prompt
//! that is prepended to every API call.

mod chat;
mod manager;

pub use manager::Session;
