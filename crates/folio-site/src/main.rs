mod cli;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use folio_ai::{GeminiConfig, Initializer};
use folio_common::FolioError;
use folio_config::schema::LogLevel;
use folio_config::FolioConfig;
use folio_profile::Profile;
use folio_site::{build_router, AppState, ChatService, ConversationStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Existing variables win. Must run before any other thread exists.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/folio-site/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

/// Pick the log filter: `--log-level`, then `RUST_LOG`, then the config file.
fn log_directive(cli: Option<&str>, rust_log: Option<&str>, configured: LogLevel) -> String {
    cli.or(rust_log.filter(|value| !value.trim().is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| configured.as_directive().to_string())
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::INFO.into()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_profile(path: Option<&Path>) -> folio_common::Result<Profile> {
    let loaded = match path {
        Some(path) => folio_profile::load_from_path(path),
        None => Profile::builtin(),
    };
    loaded.map_err(|e| FolioError::Profile(e.to_string()))
}

fn build_chat(
    config: &FolioConfig,
    system_instruction: String,
) -> folio_common::Result<ChatService> {
    let assistant = &config.assistant;
    let gemini = GeminiConfig::from_env()
        .map_err(|e| FolioError::Assistant(e.to_string()))?
        .with_model(assistant.model.clone())
        .with_max_tokens(assistant.max_tokens)
        .with_temperature(assistant.temperature);

    let initializer = Initializer::from_gemini(gemini, system_instruction)
        .map_err(|e| FolioError::Assistant(e.to_string()))?;
    tracing::info!(model = %initializer.model(), "Chat assistant ready");

    let mut conversations =
        ConversationStore::new(Arc::new(initializer), config.server.max_conversations as usize);
    if let Some(ref fallback) = assistant.fallback_reply {
        conversations = conversations.with_fallback(fallback.as_str());
    }

    Ok(ChatService {
        conversations,
        max_message_chars: assistant.max_message_chars as usize,
    })
}

fn spawn_reaper(store: ConversationStore, ttl: Duration, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = store.reap_stale(ttl).await;
            let count = store.count().await;
            tracing::debug!(removed, conversations = count, "Reaper tick");
        }
    });
}

async fn bind(addr: &str) -> folio_common::Result<tokio::net::TcpListener> {
    Ok(tokio::net::TcpListener::bind(addr).await?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn serve(
    args: cli::Args,
    config: FolioConfig,
    profile: Profile,
    system_instruction: String,
) -> anyhow::Result<()> {
    let chat = if config.assistant.enabled {
        Some(build_chat(&config, system_instruction).context("chat assistant setup failed")?)
    } else {
        tracing::info!("Chat assistant disabled by config");
        None
    };

    if let Some(ref chat) = chat {
        spawn_reaper(
            chat.conversations.clone(),
            Duration::from_secs(config.server.conversation_ttl_secs.into()),
            Duration::from_secs(config.server.reap_interval_secs.into()),
        );
    }

    let state = AppState::new(profile, chat)
        .with_max_body_bytes(config.server.max_body_bytes as usize);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.map(u32::from).unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");

    let listener = bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();

    // An explicit config must load; the default path falls back to defaults.
    let (config, config_error) = match folio_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) if args.config.is_some() => {
            return Err(FolioError::from(e)).context("failed to load config");
        }
        Err(e) => (FolioConfig::default(), Some(e)),
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    init_logging(&log_directive(
        args.log_level.as_deref(),
        rust_log.as_deref(),
        config.logging.level,
    ));

    tracing::info!("Folio v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::debug!("Effective config: {}", folio_config::config_to_json(&config));

    let profile_path = args
        .profile
        .clone()
        .or_else(|| config.profile.path.as_ref().map(Into::into));
    let profile = load_profile(profile_path.as_deref())?;
    tracing::info!(
        name = %profile.name,
        experience = profile.experience.len(),
        projects = profile.projects.len(),
        "Profile loaded"
    );

    let system_instruction = folio_profile::system_instruction(&profile);
    if args.print_prompt {
        println!("{system_instruction}");
        return Ok(());
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?
        .block_on(serve(args, config, profile, system_instruction))
}
