//! Application state wiring all services together.
//!
//! `AppState` holds the concrete service instance used by both CLI commands
//! and REST API handlers. The service is generic over repository/provider
//! traits, but AppState pins it to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use deskbot_core::support::responder::FaqResponder;
use deskbot_core::support::service::SupportService;
use deskbot_infra::config;
use deskbot_infra::faq::load_faq_book;
use deskbot_infra::llm::openai_compat::OpenAiCompatibleProvider;
use deskbot_infra::sqlite::conversation::SqliteConversationRepository;
use deskbot_infra::sqlite::pool::DatabasePool;

/// Concrete type alias for the service generics pinned to infra
/// implementations.
pub type ConcreteSupportService =
    SupportService<SqliteConversationRepository, OpenAiCompatibleProvider>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub support: Arc<ConcreteSupportService>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: connect to the DB, load the FAQ
    /// book, build the provider, wire the service.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = config::resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let app_config = config::load_config(&data_dir).await;

        let db_url = config::database_url(&data_dir, &app_config);
        let db_pool = DatabasePool::new(&db_url).await?;

        let faq_book = load_faq_book(&config::faq_path(&data_dir, &app_config)).await?;

        let api_key = config::api_key_from_env().ok_or_else(|| {
            anyhow::anyhow!("GROQ_API_KEY is not set; export it before starting deskbot")
        })?;
        let provider = OpenAiCompatibleProvider::groq(api_key, &app_config.model);

        let responder = FaqResponder::new(provider, faq_book, &app_config);
        let repository = SqliteConversationRepository::new(db_pool);
        let support = SupportService::new(repository, responder);

        Ok(Self {
            support: Arc::new(support),
            data_dir,
        })
    }
}
