//! Conversation store: maps visitor conversation ids to their chat relays.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use folio_ai::{ChatRelay, Initializer};
use folio_common::ConversationId;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

/// A relay shared between requests of the same conversation.
pub type SharedRelay = Arc<Mutex<ChatRelay>>;

struct Entry {
    relay: SharedRelay,
    last_active: Instant,
}

/// Thread-safe store of per-visitor chat relays.
///
/// Every relay in the store opens conversations through the same
/// `Initializer`. Requests for the same conversation serialize on the
/// relay's mutex.
#[derive(Clone)]
pub struct ConversationStore {
    entries: Arc<RwLock<HashMap<ConversationId, Entry>>>,
    initializer: Arc<Initializer>,
    fallback: Option<Arc<str>>,
    max_entries: usize,
}

impl ConversationStore {
    pub fn new(initializer: Arc<Initializer>, max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            initializer,
            fallback: None,
            max_entries: max_entries.max(1),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<Arc<str>>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Look up the relay for `requested`, or create a new conversation.
    ///
    /// Unknown, expired, or malformed ids get a fresh conversation under a
    /// newly generated id; clients never choose their own ids.
    pub async fn checkout(&self, requested: Option<&str>) -> (ConversationId, SharedRelay) {
        let mut map = self.entries.write().await;
        let now = Instant::now();

        if let Some(id) = requested.and_then(ConversationId::parse) {
            if let Some(entry) = map.get_mut(&id) {
                entry.last_active = now;
                return (id, Arc::clone(&entry.relay));
            }
            tracing::debug!(conversation_id = %id, "Unknown conversation id, starting fresh");
        }

        if map.len() >= self.max_entries {
            if let Some(oldest) = map
                .iter()
                .min_by_key(|(_, entry)| entry.last_active)
                .map(|(id, _)| id.clone())
            {
                map.remove(&oldest);
                tracing::info!(
                    conversation_id = %oldest,
                    "Evicted least recently active conversation"
                );
            }
        }

        let mut relay = ChatRelay::new(Arc::clone(&self.initializer));
        if let Some(ref fallback) = self.fallback {
            relay = relay.with_fallback(&**fallback);
        }
        let relay = Arc::new(Mutex::new(relay));
        let id = ConversationId::new();
        map.insert(
            id.clone(),
            Entry {
                relay: Arc::clone(&relay),
                last_active: now,
            },
        );
        tracing::debug!(conversation_id = %id, active = map.len(), "Conversation created");
        (id, relay)
    }

    /// Drop a conversation. Returns true if it existed.
    pub async fn remove(&self, id: &ConversationId) -> bool {
        self.entries.write().await.remove(id).is_some()
    }

    /// Remove conversations idle for longer than `max_idle`. Returns how many were removed.
    pub async fn reap_stale(&self, max_idle: Duration) -> usize {
        let mut map = self.entries.write().await;
        let now = Instant::now();
        let before = map.len();
        map.retain(|id, entry| {
            let stale = now.duration_since(entry.last_active) > max_idle;
            if stale {
                tracing::info!(conversation_id = %id, "Reaping idle conversation");
            }
            !stale
        });
        before - map.len()
    }

    /// Mark a conversation as active now. Returns false if it is gone.
    pub async fn touch(&self, id: &ConversationId) -> bool {
        match self.entries.write().await.get_mut(id) {
            Some(entry) => {
                entry.last_active = Instant::now();
                true
            }
            None => false,
        }
    }

    /// Number of cached conversations.
    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn initializer(&self) -> &Arc<Initializer> {
        &self.initializer
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use folio_ai::{AiClient, AiError, AiResponse, Message, TokenUsage};

    use super::*;

    struct FixedClient;

    #[async_trait]
    impl AiClient for FixedClient {
        async fn send_message(&self, _messages: &[Message]) -> Result<AiResponse, AiError> {
            Ok(AiResponse {
                content: "fixed".into(),
                usage: TokenUsage::default(),
            })
        }
    }

    async fn contains(store: &ConversationStore, id: &ConversationId) -> bool {
        store.entries.read().await.contains_key(id)
    }

    fn store(max: usize) -> ConversationStore {
        let initializer = Arc::new(Initializer::new(Arc::new(FixedClient), "m", "persona"));
        ConversationStore::new(initializer, max)
    }

    #[tokio::test]
    async fn checkout_without_id_creates_conversation() {
        let store = store(10);
        let (id, _) = store.checkout(None).await;
        assert!(contains(&store, &id).await);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn checkout_with_known_id_returns_same_relay() {
        let store = store(10);
        let (id, relay) = store.checkout(None).await;
        relay.lock().await.get_response("hi").await;

        let (again, relay_again) = store.checkout(Some(id.as_str())).await;
        assert_eq!(again, id);
        assert!(Arc::ptr_eq(&relay, &relay_again));
        assert!(relay_again.lock().await.is_active());
    }

    #[tokio::test]
    async fn unknown_or_malformed_ids_get_fresh_ids() {
        let store = store(10);
        let stranger = ConversationId::new();
        let (id, _) = store.checkout(Some(stranger.as_str())).await;
        assert_ne!(id, stranger);

        let (id2, _) = store.checkout(Some("not-a-uuid")).await;
        assert_ne!(id2, id);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn remove_drops_conversation() {
        let store = store(10);
        let (id, _) = store.checkout(None).await;
        assert!(store.remove(&id).await);
        assert!(!store.remove(&id).await);
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn full_store_evicts_least_recently_active() {
        let store = store(2);
        let (first, _) = store.checkout(None).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        let (second, _) = store.checkout(None).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        // Touch the first so the second becomes the oldest.
        store.checkout(Some(first.as_str())).await;
        tokio::time::advance(Duration::from_secs(1)).await;

        let (third, _) = store.checkout(None).await;
        assert_eq!(store.count().await, 2);
        assert!(contains(&store, &first).await);
        assert!(!contains(&store, &second).await);
        assert!(contains(&store, &third).await);
    }

    #[tokio::test(start_paused = true)]
    async fn reap_stale_removes_idle_only() {
        let store = store(10);
        let (old, _) = store.checkout(None).await;
        tokio::time::advance(Duration::from_secs(120)).await;
        let (fresh, _) = store.checkout(None).await;

        let removed = store.reap_stale(Duration::from_secs(60)).await;
        assert_eq!(removed, 1);
        assert!(!contains(&store, &old).await);
        assert!(contains(&store, &fresh).await);
    }

    #[tokio::test(start_paused = true)]
    async fn touch_keeps_long_turns_from_being_reaped() {
        let store = store(10);
        let (id, _) = store.checkout(None).await;

        // A turn that outlives the idle limit refreshes on completion.
        tokio::time::advance(Duration::from_secs(90)).await;
        assert!(store.touch(&id).await);
        tokio::time::advance(Duration::from_secs(30)).await;

        assert_eq!(store.reap_stale(Duration::from_secs(60)).await, 0);
        assert!(contains(&store, &id).await);
    }

    #[tokio::test]
    async fn touch_reports_missing_conversations() {
        let store = store(10);
        let (id, _) = store.checkout(None).await;
        store.remove(&id).await;
        assert!(!store.touch(&id).await);
    }

    #[tokio::test]
    async fn configured_fallback_reaches_new_relays() {
        let store = store(10).with_fallback("Try again later.");
        let (_, relay) = store.checkout(None).await;
        assert_eq!(relay.lock().await.fallback(), "Try again later.");
    }
}
