use std::num::IntErrorKind;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use article_store::{Article, ArticleId};

use crate::bind::{ArticleBody, BindRejection};
use crate::error::{ApiError, ApiResult};
use crate::router::AppState;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Path ids that are not decimal integers are a server error, not a 4xx.
///
/// A decimal id too large for the id type cannot name a stored article, so it
/// is NotFound.
fn parse_id(raw: &str) -> ApiResult<ArticleId> {
    raw.parse::<ArticleId>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => ApiError::NotFound,
        _ => ApiError::Internal(format!("invalid article id {raw:?}: {e}")),
    })
}

/// `POST /articles`
pub async fn create_handler(
    State(state): State<AppState>,
    ArticleBody(article): ArticleBody,
) -> ApiResult<StatusCode> {
    let (id, titles) = state.store.create_with_titles(article)?;
    if let Err(e) = state.hook.article_created(id, &titles).await {
        tracing::warn!(%id, "create hook failed: {e}");
    }

    Ok(StatusCode::CREATED)
}

/// `GET /articles`
pub async fn list_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Article>>> {
    Ok(Json(state.store.list()?))
}

/// `GET /articles/:id`
pub async fn show_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Article>> {
    let id = parse_id(&raw_id)?;
    Ok(Json(state.store.get(id)?))
}

/// `PUT /articles/:id`
///
/// The id is checked before the body, so an unknown id answers 404 even when
/// the body is malformed.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<ArticleBody, BindRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state.store.get(id)?;

    let ArticleBody(article) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;
    state.store.update(id, article)?;

    Ok(StatusCode::OK)
}

/// `DELETE /articles/:id`
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state.store.soft_delete(id)?;
    Ok(StatusCode::GONE)
}
