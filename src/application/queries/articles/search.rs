use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSearch,
};

#[derive(Debug, Clone, Default)]
pub struct SearchArticlesQuery {
    pub name_or_description: Option<String>,
    pub category: Option<String>,
}

impl SearchArticlesQuery {
    /// `true` when at least one filter is non-blank.
    pub fn has_filters(&self) -> bool {
        !self.to_search().is_unfiltered()
    }

    fn to_search(&self) -> ArticleSearch {
        ArticleSearch::new(self.name_or_description.clone(), self.category.clone())
    }
}

impl ArticleQueryService {
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let search = query.to_search();

        let records = self.repo.search(&search).await.map_err(|err| {
            tracing::debug!(error = %err, "failed to search articles");
            ApplicationError::with_context(err, "Failed to search articles")
        })?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
