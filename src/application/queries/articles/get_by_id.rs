use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId(query.id);
        let article = self.repo.get(id).await.map_err(|err| {
            tracing::debug!(article_id = %id, error = %err, "failed to get article");
            ApplicationError::with_context(err, format!("Failed to get article with id {id}"))
        })?;
        Ok(article.into())
    }
}
