use async_trait::async_trait;

use article_store::ArticleId;
use crate::error::ServerResult;

/// Called by the create handler once an article is stored.
///
/// `titles` holds the title of every stored article, deleted ones included,
/// in creation order.
#[async_trait]
pub trait ArticleHook: Send + Sync {
    async fn article_created(&self, id: ArticleId, titles: &[String]) -> ServerResult<()>;
}

pub struct NoOpHook;

#[async_trait]
impl ArticleHook for NoOpHook {
    async fn article_created(&self, _id: ArticleId, _titles: &[String]) -> ServerResult<()> {
        Ok(())
    }
}

/// Logs a numbered listing of all titles and the running total.
pub struct TitleLogHook;

#[async_trait]
impl ArticleHook for TitleLogHook {
    async fn article_created(&self, id: ArticleId, titles: &[String]) -> ServerResult<()> {
        for line in title_listing(titles) {
            tracing::info!(created = %id, "{line}");
        }
        Ok(())
    }
}

/// One line per title, numbered from 1, followed by the total.
pub fn title_listing(titles: &[String]) -> Vec<String> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| format!("{}. {title}", i + 1))
        .chain(std::iter::once(format!("Total article: {}", titles.len())))
        .collect()
}
