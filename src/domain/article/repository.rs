use crate::domain::article::entity::{Article, NewArticle, NewTranslation};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Insert the article together with its first translation, atomically.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Append a translation and return the article with all translations.
    /// Implementations must fail with `DomainError::DuplicateTranslation`
    /// when the language is already present, without a partial write.
    async fn add_translation(
        &self,
        article_id: ArticleId,
        translation: NewTranslation,
        now: DateTime<Utc>,
    ) -> DomainResult<Article>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list(&self, limit: u32) -> DomainResult<Vec<Article>>;
}
