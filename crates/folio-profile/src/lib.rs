//! Biographical records for the portfolio owner.
//!
//! The records are loaded once at startup, validated, and then used for
//! two things: rendering the page sections and assembling the system
//! instruction that scopes the chat assistant.

mod load;
mod prompt;
mod records;

pub use load::{load_from_path, validate, BUILTIN_PROFILE};
pub use prompt::system_instruction;
pub use records::{ContactInfo, ExperienceEntry, Profile, ProjectEntry, SkillGroup};
