//! Token usage accounting for one conversation.

use crate::TokenUsage;

/// Running token totals and call count for a conversation.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    calls: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the usage reported for one completed call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.calls += 1;
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.calls
    }
}
