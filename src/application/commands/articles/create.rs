// src/application/commands/articles/create.rs
use super::{ArticleCommandService, TranslationInput};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{CategoryId, NewArticle, TemplateId, fields},
};
use serde_json::Value;

pub struct CreateArticleCommand {
    pub category_id: Option<Value>,
    pub template_id: Option<Value>,
    pub translation: TranslationInput,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let category_id = CategoryId::new(fields::required_number(
            "category_id",
            command.category_id.as_ref(),
        )?)?;
        let template_id = TemplateId::new(fields::required_number(
            "template_id",
            command.template_id.as_ref(),
        )?)?;
        let translation = command.translation.into_new_translation()?;
        let now = self.clock.now();

        let new_article = NewArticle {
            category_id,
            template_id,
            translation,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = i64::from(created.id),
            user = %actor.username,
            "article created"
        );
        Ok(created.into())
    }
}
