//! HTTP server for the article service.
//!
//! Exposes the article store over a small REST surface: create, list, show,
//! full-replace update and soft delete. Stored state lives in an
//! [`ArticleStore`](article_store::ArticleStore) injected through the router
//! state.

pub mod bind;
pub mod config;
pub mod error;
pub mod handler;
pub mod hooks;
pub mod router;
pub mod server;

pub use bind::{ArticleBody, BindRejection};
pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ApiError, ApiResult, ServerError, ServerResult};
pub use hooks::{ArticleHook, NoOpHook, TitleLogHook};
pub use router::{build_router, AppState};
pub use server::ArticleServer;
