//! The [`ArticleStore`] trait defining the article storage interface.

use crate::error::Result;
use crate::types::{Article, ArticleId};

/// Storage backend for articles.
///
/// Implementations must be thread-safe (`Send + Sync`) and make each
/// operation atomic with respect to the others. Identifiers are never reused,
/// and deleted articles are never physically removed.
pub trait ArticleStore: Send + Sync {
    /// Append a new live article and return its identifier.
    ///
    /// The `deleted` flag of the input is ignored.
    fn create(&self, article: Article) -> Result<ArticleId>;

    /// Like [`create`](Self::create), also returning the titles of every
    /// article as they stand right after the append, taken atomically with it.
    fn create_with_titles(&self, article: Article) -> Result<(ArticleId, Vec<String>)>;

    /// Read a live article.
    ///
    /// Fails with `NotFound` if `id` was never assigned or the article is
    /// deleted.
    fn get(&self, id: ArticleId) -> Result<Article>;

    /// Replace all text fields of a live article.
    ///
    /// Fails with `NotFound` under the same conditions as [`get`](Self::get).
    fn update(&self, id: ArticleId, article: Article) -> Result<()>;

    /// Mark an article as deleted.
    ///
    /// Fails with `NotFound` only if `id` was never assigned. Deleting an
    /// already deleted article succeeds.
    fn soft_delete(&self, id: ArticleId) -> Result<()>;

    /// All live articles in creation order.
    fn list(&self) -> Result<Vec<Article>>;

    /// Titles of every article ever created, deleted ones included, in
    /// creation order.
    fn titles(&self) -> Result<Vec<String>>;

    /// Number of articles ever created, deleted ones included.
    fn len(&self) -> Result<usize>;

    /// Returns `true` if nothing was ever created.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
