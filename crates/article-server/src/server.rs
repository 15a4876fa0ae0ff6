use std::sync::Arc;

use tokio::net::TcpListener;

use article_store::{ArticleStore, InMemoryArticleStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::hooks::{ArticleHook, NoOpHook, TitleLogHook};
use crate::router::{build_router, AppState};

/// The article HTTP server.
pub struct ArticleServer {
    config: ServerConfig,
    state: AppState,
}

impl ArticleServer {
    /// A server over a fresh, empty in-memory store.
    pub fn new(config: ServerConfig) -> Self {
        let store: Arc<dyn ArticleStore> = Arc::new(InMemoryArticleStore::new());
        Self::with_store(config, store)
    }

    /// A server over the given store. The create hook follows the config.
    pub fn with_store(config: ServerConfig, store: Arc<dyn ArticleStore>) -> Self {
        let hook: Arc<dyn ArticleHook> = if config.log_titles_on_create {
            Arc::new(TitleLogHook)
        } else {
            Arc::new(NoOpHook)
        };
        Self {
            config,
            state: AppState::new(store, hook),
        }
    }

    /// Replace the create hook.
    pub fn with_hook(mut self, hook: Arc<dyn ArticleHook>) -> Self {
        self.state.hook = hook;
        self
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> Arc<dyn ArticleStore> {
        Arc::clone(&self.state.store)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Bind the configured address and serve until the process stops.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> ServerResult<()> {
        let app = build_router(self.state);
        tracing::info!("article server listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
