// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTranslation,
    ArticleWriteRepository, CategoryId, Headline, LanguageId, NewArticle, NewTranslation, StateId,
    TemplateId, TranslationId,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    category_id: i64,
    template_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct TranslationRow {
    id: i64,
    article_id: i64,
    headline: String,
    description: Option<String>,
    body: String,
    state_id: i64,
    language_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<TranslationRow> for ArticleTranslation {
    type Error = DomainError;

    fn try_from(row: TranslationRow) -> Result<Self, Self::Error> {
        Ok(ArticleTranslation {
            id: TranslationId::new(row.id)?,
            headline: Headline::new(row.headline)?,
            description: row.description,
            body: ArticleBody::new(row.body)?,
            state_id: StateId::new(row.state_id)?,
            language_id: LanguageId::new(row.language_id)?,
            created_at: row.created_at,
        })
    }
}

fn assemble(row: ArticleRow, translation_rows: Vec<TranslationRow>) -> DomainResult<Article> {
    let translations = translation_rows
        .into_iter()
        .map(ArticleTranslation::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Article {
        id: ArticleId::new(row.id)?,
        category_id: CategoryId::new(row.category_id)?,
        template_id: TemplateId::new(row.template_id)?,
        translations,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

const TRANSLATION_COLUMNS: &str =
    "id, article_id, headline, description, body, state_id, language_id, created_at";

async fn insert_translation(
    tx: &mut Transaction<'_, Postgres>,
    article_id: i64,
    translation: NewTranslation,
    now: DateTime<Utc>,
) -> DomainResult<TranslationRow> {
    sqlx::query_as::<_, TranslationRow>(&format!(
        "INSERT INTO article_translations \
         (article_id, headline, description, body, state_id, language_id, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING {TRANSLATION_COLUMNS}"
    ))
    .bind(article_id)
    .bind(translation.headline.as_str())
    .bind(translation.description.as_deref())
    .bind(translation.body.as_str())
    .bind(i64::from(translation.state_id))
    .bind(i64::from(translation.language_id))
    .bind(now)
    .fetch_one(&mut **tx)
    .await
    .map_err(map_sqlx)
}

async fn fetch_translations(
    tx: &mut Transaction<'_, Postgres>,
    article_id: i64,
) -> DomainResult<Vec<TranslationRow>> {
    sqlx::query_as::<_, TranslationRow>(&format!(
        "SELECT {TRANSLATION_COLUMNS} FROM article_translations \
         WHERE article_id = $1 ORDER BY id"
    ))
    .bind(article_id)
    .fetch_all(&mut **tx)
    .await
    .map_err(map_sqlx)
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            category_id,
            template_id,
            translation,
            created_at,
            updated_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let article_row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (category_id, template_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, category_id, template_id, created_at, updated_at",
        )
        .bind(i64::from(category_id))
        .bind(i64::from(template_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let translation_row =
            insert_translation(&mut tx, article_row.id, translation, created_at).await?;

        tx.commit().await.map_err(map_sqlx)?;

        assemble(article_row, vec![translation_row])
    }

    async fn add_translation(
        &self,
        article_id: ArticleId,
        translation: NewTranslation,
        now: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let article_row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET updated_at = $2 WHERE id = $1 \
             RETURNING id, category_id, template_id, created_at, updated_at",
        )
        .bind(i64::from(article_id))
        .bind(now)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        // The unique constraint on (article_id, language_id) rejects a
        // concurrent duplicate here and rolls the updated_at bump back.
        insert_translation(&mut tx, article_row.id, translation, now).await?;

        let translation_rows = fetch_translations(&mut tx, article_row.id).await?;

        tx.commit().await.map_err(map_sqlx)?;

        assemble(article_row, translation_rows)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, category_id, template_id, created_at, updated_at \
             FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(article_row) = row else {
            return Ok(None);
        };

        let translation_rows = sqlx::query_as::<_, TranslationRow>(&format!(
            "SELECT {TRANSLATION_COLUMNS} FROM article_translations \
             WHERE article_id = $1 ORDER BY id"
        ))
        .bind(article_row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        assemble(article_row, translation_rows).map(Some)
    }

    async fn list(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let limit = limit.clamp(1, 100);

        let article_rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, category_id, template_id, created_at, updated_at \
             FROM articles ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if article_rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = article_rows.iter().map(|row| row.id).collect();
        let translation_rows = sqlx::query_as::<_, TranslationRow>(&format!(
            "SELECT {TRANSLATION_COLUMNS} FROM article_translations \
             WHERE article_id = ANY($1) ORDER BY article_id, id"
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_article: HashMap<i64, Vec<TranslationRow>> = HashMap::new();
        for row in translation_rows {
            by_article.entry(row.article_id).or_default().push(row);
        }

        article_rows
            .into_iter()
            .map(|row| {
                let translations = by_article.remove(&row.id).unwrap_or_default();
                assemble(row, translations)
            })
            .collect()
    }
}
