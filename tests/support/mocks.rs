// tests/support/mocks.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use catalog_core::domain::article::{
    Article, ArticleDraft, ArticleId, ArticleRepository, ArticleSearch,
};
use catalog_core::domain::errors::{DomainError, DomainResult};

/// Repository whose every call fails with a storage error.
pub struct FailingArticleRepo {
    pub message: String,
}

impl FailingArticleRepo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn fail<T>(&self) -> DomainResult<T> {
        Err(DomainError::Persistence(self.message.clone()))
    }
}

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn add(&self, _draft: ArticleDraft) -> DomainResult<Article> {
        self.fail()
    }

    async fn get(&self, _id: ArticleId) -> DomainResult<Article> {
        self.fail()
    }

    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        self.fail()
    }

    async fn search(&self, _search: &ArticleSearch) -> DomainResult<Vec<Article>> {
        self.fail()
    }
}

/// Counts `add` calls and otherwise behaves like an empty store.
#[derive(Default)]
pub struct CountingArticleRepo {
    adds: AtomicUsize,
}

impl CountingArticleRepo {
    pub fn adds(&self) -> usize {
        self.adds.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleRepository for CountingArticleRepo {
    async fn add(&self, draft: ArticleDraft) -> DomainResult<Article> {
        let n = self.adds.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Article::from_draft(ArticleId(n as i64), draft))
    }

    async fn get(&self, id: ArticleId) -> DomainResult<Article> {
        Err(DomainError::NotFound(format!("Article with id {id} not found.")))
    }

    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        Ok(vec![])
    }

    async fn search(&self, _search: &ArticleSearch) -> DomainResult<Vec<Article>> {
        Ok(vec![])
    }
}
