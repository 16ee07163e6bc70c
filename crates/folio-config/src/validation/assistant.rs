//! Validation for the `[assistant]` section.

use crate::schema::FolioConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &FolioConfig) {
    let assistant = &config.assistant;
    validate_non_empty(errors, "assistant.model", &assistant.model);
    validate_range(errors, "assistant.max_tokens", assistant.max_tokens, 64, 8192);
    validate_range_f64(
        errors,
        "assistant.temperature",
        assistant.temperature,
        0.0,
        2.0,
    );
    validate_range(
        errors,
        "assistant.max_message_chars",
        assistant.max_message_chars,
        1,
        10_000,
    );
    if let Some(ref fallback) = assistant.fallback_reply {
        validate_non_empty(errors, "assistant.fallback_reply", fallback);
    }
}
