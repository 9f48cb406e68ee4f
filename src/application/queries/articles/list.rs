use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

impl ArticleQueryService {
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.repo.get_all().await.map_err(|err| {
            tracing::debug!(error = %err, "failed to get articles");
            ApplicationError::with_context(err, "Failed to get articles")
        })?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
