pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleDraft};
pub use repository::ArticleRepository;
pub use specifications::{DraftViolation, ValidArticleDraftSpec};
pub use value_objects::{ArticleId, ArticleSearch, fold_case};
