use crate::domain::article::{
    Article, ArticleDraft, ArticleId, ArticleRepository, ArticleSearch,
    repository::not_found_message,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local article store.
///
/// Ids are `count + 1`, assigned under the same write lock that appends, so
/// concurrent inserts never collide.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // The store is append-only, so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Article>> {
        self.articles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Article>> {
        self.articles.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn add(&self, draft: ArticleDraft) -> DomainResult<Article> {
        let mut articles = self.write();
        let id = ArticleId(articles.len() as i64 + 1);
        let article = Article::from_draft(id, draft);
        articles.push(article.clone());
        Ok(article)
    }

    async fn get(&self, id: ArticleId) -> DomainResult<Article> {
        self.read()
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(not_found_message(id)))
    }

    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.read().clone())
    }

    async fn search(&self, search: &ArticleSearch) -> DomainResult<Vec<Article>> {
        Ok(self
            .read()
            .iter()
            .filter(|article| search.matches(article))
            .cloned()
            .collect())
    }
}
