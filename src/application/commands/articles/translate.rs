// src/application/commands/articles/translate.rs
use super::{ArticleCommandService, TranslationInput};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, errors::DomainError},
};

pub struct TranslateArticleCommand {
    pub article_id: i64,
    pub translation: TranslationInput,
}

impl ArticleCommandService {
    /// Append a translation in a language the article does not have yet.
    ///
    /// The membership check here gives a deterministic error before any
    /// write; the `(article_id, language_id)` uniqueness constraint in the
    /// store settles the race between concurrent translators.
    pub async fn translate_article(
        &self,
        actor: &AuthenticatedUser,
        command: TranslateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.article_id)?;
        let translation = command.translation.into_new_translation()?;

        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if article.has_language(translation.language_id) {
            return Err(DomainError::DuplicateTranslation(format!(
                "article {} already has a translation for language {}",
                id, translation.language_id
            ))
            .into());
        }

        let now = self.clock.now();
        let language_id = i64::from(translation.language_id);
        let updated = self.write_repo.add_translation(id, translation, now).await?;
        tracing::info!(
            article_id = i64::from(id),
            language_id,
            user = %actor.username,
            "article translated"
        );
        Ok(updated.into())
    }
}
