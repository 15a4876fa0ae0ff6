//! Request body binding for article payloads.
//!
//! Bodies are accepted as JSON or as a urlencoded form, picked by
//! `Content-Type`. An empty body binds to an article of empty strings.

use axum::async_trait;
use axum::body::HttpBody;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use thiserror::Error;

use article_store::Article;

/// An article bound from the request body.
#[derive(Debug)]
pub struct ArticleBody(pub Article);

#[derive(Debug, Error)]
pub enum BindRejection {
    #[error("{}", .0.body_text())]
    Json(JsonRejection),

    #[error("{}", .0.body_text())]
    Form(FormRejection),

    #[error("unsupported media type")]
    UnsupportedMediaType,
}

impl IntoResponse for BindRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Json(r) => r.into_response(),
            Self::Form(r) => r.into_response(),
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
}

fn body_kind(headers: &HeaderMap) -> Option<BodyKind> {
    let content_type = headers.get(header::CONTENT_TYPE)?.to_str().ok()?;
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        Some(BodyKind::Json)
    } else if mime == "application/x-www-form-urlencoded" {
        Some(BodyKind::Form)
    } else {
        None
    }
}

fn is_empty_body(req: &Request) -> bool {
    let declared_empty = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0");
    declared_empty || req.body().size_hint().exact() == Some(0)
}

#[async_trait]
impl<S> FromRequest<S> for ArticleBody
where
    S: Send + Sync,
{
    type Rejection = BindRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_empty_body(&req) {
            return Ok(Self(Article::default()));
        }

        match body_kind(req.headers()) {
            Some(BodyKind::Json) => Json::<Article>::from_request(req, state)
                .await
                .map(|Json(article)| Self(article))
                .map_err(BindRejection::Json),
            Some(BodyKind::Form) => Form::<Article>::from_request(req, state)
                .await
                .map(|Form(article)| Self(article))
                .map_err(BindRejection::Form),
            None => Err(BindRejection::UnsupportedMediaType),
        }
    }
}
