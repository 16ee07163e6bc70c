pub mod errors;
pub mod id;

pub use errors::{ConfigError, FolioError};
pub use id::{new_id, ConversationId};

pub type Result<T> = std::result::Result<T, FolioError>;
