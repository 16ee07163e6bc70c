//! Portfolio web server.
//!
//! Serves the rendered portfolio page, its static assets, and the JSON
//! chat API backed by one `ChatRelay` per visitor.

pub mod conversations;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use conversations::ConversationStore;
pub use error::SiteError;
pub use routes::build_router;
pub use state::{AppState, ChatService};
