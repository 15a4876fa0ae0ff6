use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use article_store::{ArticleStore, InMemoryArticleStore};

use crate::handler;
use crate::hooks::{ArticleHook, TitleLogHook};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
    pub hook: Arc<dyn ArticleHook>,
}

impl AppState {
    pub fn new(store: Arc<dyn ArticleStore>, hook: Arc<dyn ArticleHook>) -> Self {
        Self { store, hook }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryArticleStore::new()), Arc::new(TitleLogHook))
    }
}

/// Build the axum router with all article endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route(
            "/articles",
            get(handler::list_handler).post(handler::create_handler),
        )
        .route(
            "/articles/:id",
            get(handler::show_handler)
                .put(handler::update_handler)
                .delete(handler::delete_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
