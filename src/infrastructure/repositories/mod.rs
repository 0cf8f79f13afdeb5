// src/infrastructure/repositories/mod.rs
mod postgres_article;

pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};

use crate::domain::errors::DomainError;

const CNT_TRANSLATION_LANGUAGE: &str = "article_translations_article_id_language_id_key";
const CNT_TRANSLATION_ARTICLE: &str = "article_translations_article_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_TRANSLATION_LANGUAGE => DomainError::DuplicateTranslation(
                        "article already translated in this language".into(),
                    ),
                    CNT_TRANSLATION_ARTICLE => DomainError::NotFound("article not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                if code.as_ref() == "23503" {
                    return DomainError::NotFound("referenced record not found".into());
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
