use crate::domain::article::entity::Article;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl From<i64> for ArticleId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional filters for article search. Blank filters count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSearch {
    name_or_description: Option<String>,
    category: Option<String>,
}

impl ArticleSearch {
    pub fn new(name_or_description: Option<String>, category: Option<String>) -> Self {
        Self {
            name_or_description: non_blank(name_or_description),
            category: non_blank(category),
        }
    }

    pub fn name_or_description(&self) -> Option<&str> {
        self.name_or_description.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.name_or_description.is_none() && self.category.is_none()
    }

    /// Substring match on name or description, exact match on category.
    /// Both comparisons ignore case; both filters must hold when given.
    pub fn matches(&self, article: &Article) -> bool {
        let text_ok = self.name_or_description().is_none_or(|needle| {
            let needle = fold_case(needle);
            fold_case(&article.name).contains(&needle)
                || fold_case(&article.description).contains(&needle)
        });

        let category_ok = self.category().is_none_or(|wanted| {
            article
                .category
                .as_deref()
                .is_some_and(|category| fold_case(category) == fold_case(wanted))
        });

        text_ok && category_ok
    }
}

/// Case folding shared by every search backend (Unicode lowercase).
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
