// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory_article;
mod sqlite_article;

pub use error::map_sqlx;
pub use in_memory_article::InMemoryArticleRepository;
pub use sqlite_article::SqliteArticleRepository;
