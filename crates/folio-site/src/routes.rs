//! HTTP routes.

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{delete, get, post},
    Json, Router,
};
use folio_common::ConversationId;
use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::state::AppState;

const SITE_CSS: &str = include_str!("../assets/site.css");
const CHAT_JS: &str = include_str!("../assets/chat.js");

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    Router::new()
        // Page and assets
        .route("/", get(index))
        .route("/assets/site.css", get(site_css))
        .route("/assets/chat.js", get(chat_js))
        // Health check
        .route("/health", get(health_check))
        // Data
        .route("/api/profile", get(profile))
        // Chat
        .route("/api/chat", post(chat))
        .route("/api/chat/:id", delete(end_chat))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

// ============ Page ============

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

async fn site_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

async fn chat_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        CHAT_JS,
    )
}

// ============ Health Check ============

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let assistant = match state.chat {
        Some(ref chat) => {
            let initializer = chat.conversations.initializer();
            serde_json::json!({
                "enabled": true,
                "model": initializer.model(),
                "conversations": chat.conversations.count().await,
                "initializations": initializer.initializations(),
            })
        }
        None => serde_json::json!({ "enabled": false }),
    };

    Json(serde_json::json!({
        "status": "healthy",
        "service": "folio",
        "version": env!("CARGO_PKG_VERSION"),
        "assistant": assistant,
    }))
}

// ============ Data ============

async fn profile(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.profile.as_ref().clone())
}

// ============ Chat ============

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub conversation_id: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub conversation_id: String,
    pub reply: String,
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, SiteError> {
    let chat = state.chat.as_ref().ok_or(SiteError::AssistantDisabled)?;

    let message = request.message.trim();
    if message.is_empty() {
        return Err(SiteError::EmptyMessage);
    }
    if message.chars().count() > chat.max_message_chars {
        return Err(SiteError::MessageTooLong {
            limit: chat.max_message_chars,
        });
    }

    let (id, relay) = chat
        .conversations
        .checkout(request.conversation_id.as_deref())
        .await;

    let reply = relay.lock().await.get_response(message).await;
    if !chat.conversations.touch(&id).await {
        tracing::debug!(conversation_id = %id, "Conversation ended during the turn");
    }
    tracing::debug!(conversation_id = %id, chars = message.len(), "Chat turn completed");

    Ok(Json(ChatResponse {
        conversation_id: id.to_string(),
        reply,
    }))
}

async fn end_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, SiteError> {
    let chat = state.chat.as_ref().ok_or(SiteError::AssistantDisabled)?;
    let parsed = ConversationId::parse(&id)
        .ok_or_else(|| SiteError::ConversationNotFound(id.clone()))?;

    if chat.conversations.remove(&parsed).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(SiteError::ConversationNotFound(id))
    }
}
