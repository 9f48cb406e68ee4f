use crate::domain::article::Article;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub article_id: i64,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 17.89)]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            name: article.name,
            description: article.description,
            category: article.category,
            price: article.price,
            currency: article.currency,
        }
    }
}
