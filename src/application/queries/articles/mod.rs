mod get_by_id;
mod list;
mod search;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use search::SearchArticlesQuery;
pub use service::ArticleQueryService;
