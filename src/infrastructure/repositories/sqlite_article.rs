use super::error::bounded;
use crate::domain::article::{
    Article, ArticleDraft, ArticleId, ArticleRepository, ArticleSearch, fold_case,
    repository::not_found_message,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::{str::FromStr, sync::Arc, time::Duration};

const SELECT_ARTICLES: &str =
    "SELECT article_id, name, description, category, price, currency FROM articles";

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
    command_timeout: Duration,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>, command_timeout: Duration) -> Self {
        Self {
            pool,
            command_timeout,
        }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i64,
    name: String,
    description: String,
    category: Option<String>,
    price: String,
    currency: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&row.price).map_err(|err| {
            DomainError::Persistence(format!(
                "article {} has an unreadable price {:?}: {err}",
                row.article_id, row.price
            ))
        })?;

        Ok(Article {
            id: ArticleId(row.article_id),
            name: row.name,
            description: row.description,
            category: row.category,
            price,
            currency: row.currency,
        })
    }
}

fn into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

/// Escapes `LIKE` wildcards so the needle is matched literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Filters on the `*_folded` columns, which hold `fold_case` of the originals.
fn push_search_conditions(builder: &mut QueryBuilder<'_, Sqlite>, search: &ArticleSearch) {
    let mut has_where = false;

    if let Some(needle) = search.name_or_description() {
        let pattern = format!("%{}%", escape_like(&fold_case(needle)));
        builder.push(" WHERE (name_folded LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" ESCAPE '\\' OR description_folded LIKE ");
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\')");
        has_where = true;
    }

    if let Some(category) = search.category() {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("category_folded = ");
        builder.push_bind(fold_case(category));
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn add(&self, draft: ArticleDraft) -> DomainResult<Article> {
        let ArticleDraft {
            name,
            description,
            category,
            price,
            currency,
        } = draft;

        let name_folded = fold_case(&name);
        let description_folded = fold_case(&description);
        let category_folded = category.as_deref().map(fold_case);

        let insert = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (name, description, category, price, currency, name_folded, description_folded, category_folded) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING article_id, name, description, category, price, currency",
        )
        .bind(name)
        .bind(description)
        .bind(category)
        .bind(price.to_string())
        .bind(currency)
        .bind(name_folded)
        .bind(description_folded)
        .bind(category_folded)
        .fetch_one(&*self.pool);

        let row = bounded(self.command_timeout, insert).await?;
        Article::try_from(row)
    }

    async fn get(&self, id: ArticleId) -> DomainResult<Article> {
        let sql = format!("{SELECT_ARTICLES} WHERE article_id = ?");
        let select = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool);

        bounded(self.command_timeout, select)
            .await?
            .map(Article::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound(not_found_message(id)))
    }

    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        let sql = format!("{SELECT_ARTICLES} ORDER BY article_id");
        let select = sqlx::query_as::<_, ArticleRow>(&sql).fetch_all(&*self.pool);

        into_articles(bounded(self.command_timeout, select).await?)
    }

    async fn search(&self, search: &ArticleSearch) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ARTICLES);
        push_search_conditions(&mut builder, search);
        builder.push(" ORDER BY article_id");

        let select = builder.build_query_as::<ArticleRow>().fetch_all(&*self.pool);
        into_articles(bounded(self.command_timeout, select).await?)
    }
}
