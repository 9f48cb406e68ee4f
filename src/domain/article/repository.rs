use crate::domain::article::entity::{Article, ArticleDraft};
use crate::domain::article::value_objects::{ArticleId, ArticleSearch};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage contract shared by every article backend.
///
/// Implementations own their collection; callers only receive clones.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Stores the draft under a freshly assigned id.
    async fn add(&self, draft: ArticleDraft) -> DomainResult<Article>;

    /// Fails with `DomainError::NotFound` when no article has `id`.
    async fn get(&self, id: ArticleId) -> DomainResult<Article>;

    /// Every stored article, in storage order.
    async fn get_all(&self) -> DomainResult<Vec<Article>>;

    async fn search(&self, search: &ArticleSearch) -> DomainResult<Vec<Article>>;
}

pub fn not_found_message(id: ArticleId) -> String {
    format!("Article with id {id} not found.")
}
