use crate::domain::article::{Article, ArticleTranslation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub category_id: i64,
    pub template_id: i64,
    pub translations: Vec<TranslationDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            category_id: article.category_id.into(),
            template_id: article.template_id.into(),
            translations: article
                .translations
                .into_iter()
                .map(TranslationDto::from)
                .collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationDto {
    pub id: i64,
    pub headline: String,
    pub description: Option<String>,
    pub body: String,
    pub state_id: i64,
    pub language_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ArticleTranslation> for TranslationDto {
    fn from(translation: ArticleTranslation) -> Self {
        Self {
            id: translation.id.into(),
            headline: translation.headline.into(),
            description: translation.description,
            body: translation.body.into(),
            state_id: translation.state_id.into(),
            language_id: translation.language_id.into(),
            created_at: translation.created_at,
        }
    }
}
