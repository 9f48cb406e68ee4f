use crate::domain::article::value_objects::ArticleId;
use rust_decimal::Decimal;

/// Unvalidated payload for a new article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub price: Decimal,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub price: Decimal,
    pub currency: Option<String>,
}

impl Article {
    pub fn from_draft(id: ArticleId, draft: ArticleDraft) -> Self {
        let ArticleDraft {
            name,
            description,
            category,
            price,
            currency,
        } = draft;

        Self {
            id,
            name,
            description,
            category,
            price,
            currency,
        }
    }
}
