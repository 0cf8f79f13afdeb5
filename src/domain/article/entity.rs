// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, CategoryId, Headline, LanguageId, StateId, TemplateId, TranslationId,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub category_id: CategoryId,
    pub template_id: TemplateId,
    pub translations: Vec<ArticleTranslation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn has_language(&self, language_id: LanguageId) -> bool {
        self.translations
            .iter()
            .any(|translation| translation.language_id == language_id)
    }

    pub fn translation_for(&self, language_id: LanguageId) -> Option<&ArticleTranslation> {
        self.translations
            .iter()
            .find(|translation| translation.language_id == language_id)
    }

    /// Append a translation, upholding the one-per-language invariant.
    pub fn add_translation(
        &mut self,
        translation: ArticleTranslation,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if self.has_language(translation.language_id) {
            return Err(DomainError::DuplicateTranslation(format!(
                "article {} already has a translation for language {}",
                self.id, translation.language_id
            )));
        }
        self.translations.push(translation);
        self.updated_at = now;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ArticleTranslation {
    pub id: TranslationId,
    pub headline: Headline,
    pub description: Option<String>,
    pub body: ArticleBody,
    pub state_id: StateId,
    pub language_id: LanguageId,
    pub created_at: DateTime<Utc>,
}

/// An article is always born with its first translation.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub category_id: CategoryId,
    pub template_id: TemplateId,
    pub translation: NewTranslation,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTranslation {
    pub headline: Headline,
    pub description: Option<String>,
    pub body: ArticleBody,
    pub state_id: StateId,
    pub language_id: LanguageId,
}
