//! In-memory article store.
//!
//! [`InMemoryArticleStore`] keeps every article in a `BTreeMap` keyed by
//! [`ArticleId`], protected by a `RwLock`. Identifiers come from a counter, so
//! map order is creation order. Data is lost when the store is dropped.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, StoreError};
use crate::traits::ArticleStore;
use crate::types::{Article, ArticleId};

#[derive(Debug)]
struct Inner {
    records: BTreeMap<ArticleId, Article>,
    next_id: ArticleId,
}

impl Inner {
    fn append(&mut self, mut article: Article) -> ArticleId {
        article.deleted = false;
        let id = self.next_id;
        self.next_id = id.next();
        self.records.insert(id, article);

        tracing::debug!(%id, "article created");
        id
    }

    fn titles(&self) -> Vec<String> {
        self.records
            .values()
            .map(|article| article.title.clone())
            .collect()
    }
}

/// An in-memory implementation of [`ArticleStore`].
#[derive(Debug)]
pub struct InMemoryArticleStore {
    inner: RwLock<Inner>,
}

impl InMemoryArticleStore {
    /// Create a new empty article store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                next_id: ArticleId::FIRST,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl Default for InMemoryArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleStore for InMemoryArticleStore {
    fn create(&self, article: Article) -> Result<ArticleId> {
        let mut inner = self.write()?;
        Ok(inner.append(article))
    }

    fn create_with_titles(&self, article: Article) -> Result<(ArticleId, Vec<String>)> {
        let mut inner = self.write()?;
        let id = inner.append(article);
        Ok((id, inner.titles()))
    }

    fn get(&self, id: ArticleId) -> Result<Article> {
        let inner = self.read()?;
        match inner.records.get(&id) {
            Some(article) if !article.deleted => Ok(article.clone()),
            _ => Err(StoreError::NotFound { id }),
        }
    }

    fn update(&self, id: ArticleId, article: Article) -> Result<()> {
        let mut inner = self.write()?;
        match inner.records.get_mut(&id) {
            Some(stored) if !stored.deleted => {
                stored.replace_fields(article);
                tracing::debug!(%id, "article updated");
                Ok(())
            }
            _ => Err(StoreError::NotFound { id }),
        }
    }

    fn soft_delete(&self, id: ArticleId) -> Result<()> {
        let mut inner = self.write()?;
        let stored = inner
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        stored.deleted = true;

        tracing::debug!(%id, "article deleted");
        Ok(())
    }

    fn list(&self) -> Result<Vec<Article>> {
        let inner = self.read()?;
        Ok(inner
            .records
            .values()
            .filter(|article| !article.deleted)
            .cloned()
            .collect())
    }

    fn titles(&self) -> Result<Vec<String>> {
        Ok(self.read()?.titles())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read()?.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn article(tag: &str) -> Article {
        Article::new(
            format!("{tag} title"),
            format!("{tag} description"),
            format!("{tag} content"),
        )
    }

    fn id(raw: u64) -> ArticleId {
        ArticleId::new(raw)
    }

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryArticleStore::new();
        assert!(store.is_empty().unwrap());
        assert!(store.list().unwrap().is_empty());
        assert!(store.titles().unwrap().is_empty());
    }

    #[test]
    fn create_assigns_dense_ids_from_zero() {
        let store = InMemoryArticleStore::new();
        assert_eq!(store.create(article("a")).unwrap(), id(0));
        assert_eq!(store.create(article("b")).unwrap(), id(1));
        assert_eq!(store.create(article("c")).unwrap(), id(2));
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn create_accepts_empty_fields() {
        let store = InMemoryArticleStore::new();
        let created = store.create(Article::default()).unwrap();
        assert_eq!(store.get(created).unwrap(), Article::default());
    }

    #[test]
    fn create_ignores_incoming_deleted_flag() {
        let store = InMemoryArticleStore::new();
        let mut input = article("a");
        input.deleted = true;
        let created = store.create(input).unwrap();
        assert!(store.get(created).is_ok());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn get_returns_created_fields() {
        let store = InMemoryArticleStore::new();
        let created = store.create(article("a")).unwrap();
        assert_eq!(store.get(created).unwrap(), article("a"));
    }

    #[test]
    fn get_one_past_the_end_is_not_found() {
        let store = InMemoryArticleStore::new();
        store.create(article("a")).unwrap();
        store.create(article("b")).unwrap();

        let len = store.len().unwrap() as u64;
        assert!(store.get(id(len - 1)).is_ok());
        let err = store.get(id(len)).unwrap_err();
        assert!(
            matches!(err, StoreError::NotFound { id: missing } if missing == id(len)),
            "expected NotFound, got: {err}"
        );
    }

    #[test]
    fn get_on_empty_store_is_not_found() {
        let store = InMemoryArticleStore::new();
        assert!(matches!(
            store.get(id(0)),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn update_overwrites_every_field() {
        let store = InMemoryArticleStore::new();
        let created = store.create(article("a")).unwrap();

        let replacement = Article::new("new title", "", "");
        store.update(created, replacement.clone()).unwrap();
        assert_eq!(store.get(created).unwrap(), replacement);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = InMemoryArticleStore::new();
        assert!(matches!(
            store.update(id(3), article("x")),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn soft_delete_hides_article() {
        let store = InMemoryArticleStore::new();
        let a = store.create(article("a")).unwrap();
        let b = store.create(article("b")).unwrap();

        store.soft_delete(a).unwrap();

        assert!(matches!(store.get(a), Err(StoreError::NotFound { .. })));
        assert!(matches!(
            store.update(a, article("x")),
            Err(StoreError::NotFound { .. })
        ));
        assert_eq!(store.list().unwrap(), vec![article("b")]);
        assert_eq!(store.get(b).unwrap(), article("b"));
    }

    #[test]
    fn soft_delete_is_idempotent() {
        let store = InMemoryArticleStore::new();
        let a = store.create(article("a")).unwrap();

        store.soft_delete(a).unwrap();
        store.soft_delete(a).unwrap();

        assert!(store.get(a).is_err());
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn soft_delete_unknown_id_is_not_found() {
        let store = InMemoryArticleStore::new();
        store.create(article("a")).unwrap();
        assert!(matches!(
            store.soft_delete(id(1)),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn deleted_slot_is_not_reused() {
        let store = InMemoryArticleStore::new();
        let a = store.create(article("a")).unwrap();
        store.soft_delete(a).unwrap();
        assert_eq!(store.create(article("b")).unwrap(), id(1));
    }

    #[test]
    fn titles_include_deleted_articles() {
        let store = InMemoryArticleStore::new();
        let a = store.create(article("a")).unwrap();
        store.create(article("b")).unwrap();
        store.soft_delete(a).unwrap();
        assert_eq!(store.titles().unwrap(), vec!["a title", "b title"]);
    }

    #[test]
    fn create_with_titles_snapshots_after_append() {
        let store = InMemoryArticleStore::new();
        let a = store.create(article("a")).unwrap();
        store.soft_delete(a).unwrap();

        let (created, titles) = store.create_with_titles(article("b")).unwrap();
        assert_eq!(created, id(1));
        assert_eq!(titles, vec!["a title", "b title"]);
        assert_eq!(store.get(created).unwrap(), article("b"));

        store.create(article("c")).unwrap();
        assert_eq!(titles.len(), 2);
    }

    #[test]
    fn create_with_titles_is_atomic_across_threads() {
        let store = std::sync::Arc::new(InMemoryArticleStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|i| {
                            let tag = format!("{t}-{i}");
                            let (created, titles) =
                                store.create_with_titles(article(&tag)).unwrap();
                            (created, titles, tag)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for (created, titles, tag) in handle.join().unwrap() {
                assert_eq!(titles.len() as u64, created.get() + 1);
                assert_eq!(titles.last().unwrap(), &format!("{tag} title"));
            }
        }
        assert_eq!(store.len().unwrap(), 200);
    }

    #[test]
    fn walkthrough_scenario() {
        let store = InMemoryArticleStore::new();

        store.create(article("A")).unwrap();
        assert_eq!(store.list().unwrap(), vec![article("A")]);

        store.create(article("B")).unwrap();
        assert_eq!(store.list().unwrap(), vec![article("A"), article("B")]);

        store.soft_delete(id(0)).unwrap();
        assert!(matches!(store.get(id(0)), Err(StoreError::NotFound { .. })));
        assert_eq!(store.list().unwrap(), vec![article("B")]);

        store.update(id(1), article("C")).unwrap();
        assert_eq!(store.get(id(1)).unwrap(), article("C"));
    }

    fn arb_article() -> impl Strategy<Value = Article> {
        ("[a-zA-Z0-9 ]{0,16}", "[a-zA-Z0-9 ]{0,16}", "[a-zA-Z0-9 ]{0,32}")
            .prop_map(|(t, d, c)| Article::new(t, d, c))
    }

    proptest! {
        #[test]
        fn list_after_creates_preserves_order(articles in prop::collection::vec(arb_article(), 0..24)) {
            let store = InMemoryArticleStore::new();
            for a in &articles {
                store.create(a.clone()).unwrap();
            }
            prop_assert_eq!(store.list().unwrap(), articles);
        }

        #[test]
        fn get_returns_fields_for_every_valid_id(articles in prop::collection::vec(arb_article(), 1..24)) {
            let store = InMemoryArticleStore::new();
            for a in &articles {
                store.create(a.clone()).unwrap();
            }
            for (i, a) in articles.iter().enumerate() {
                prop_assert_eq!(&store.get(id(i as u64)).unwrap(), a);
            }
            prop_assert!(store.get(id(articles.len() as u64)).is_err());
        }

        #[test]
        fn update_then_get_returns_update(
            original in arb_article(),
            replacement in arb_article(),
        ) {
            let store = InMemoryArticleStore::new();
            let created = store.create(original).unwrap();
            store.update(created, replacement.clone()).unwrap();
            prop_assert_eq!(store.get(created).unwrap(), replacement);
        }

        #[test]
        fn list_excludes_exactly_the_deleted(
            articles in prop::collection::vec(arb_article(), 1..24),
            mask in prop::collection::vec(any::<bool>(), 24),
        ) {
            let store = InMemoryArticleStore::new();
            for a in &articles {
                store.create(a.clone()).unwrap();
            }
            let mut expected = Vec::new();
            for (i, a) in articles.iter().enumerate() {
                if mask[i] {
                    store.soft_delete(id(i as u64)).unwrap();
                } else {
                    expected.push(a.clone());
                }
            }
            prop_assert_eq!(store.list().unwrap(), expected);
            prop_assert_eq!(store.len().unwrap(), articles.len());
        }
    }
}
