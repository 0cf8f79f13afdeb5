// src/application/commands/articles/input.rs
use crate::{
    application::error::ApplicationResult,
    domain::article::{ArticleBody, Headline, LanguageId, NewTranslation, StateId, fields},
};
use serde_json::Value;

/// Raw translation payload as it arrives on the wire. Fields are untyped
/// until the rules in `fields` have pinned them down; both create and
/// translate share this shape.
#[derive(Debug, Clone, Default)]
pub struct TranslationInput {
    pub headline: Option<Value>,
    pub description: Option<Value>,
    pub body: Option<Value>,
    pub state_id: Option<Value>,
    pub language_id: Option<Value>,
}

impl TranslationInput {
    pub fn into_new_translation(self) -> ApplicationResult<NewTranslation> {
        let headline = Headline::new(fields::required_text("headline", self.headline.as_ref())?)?;
        let description = fields::optional_text("description", self.description.as_ref())?;
        let body = ArticleBody::new(fields::required_text("body", self.body.as_ref())?)?;
        let state_id = StateId::new(fields::required_number("state_id", self.state_id.as_ref())?)?;
        let language_id = LanguageId::new(fields::required_number(
            "language_id",
            self.language_id.as_ref(),
        )?)?;

        Ok(NewTranslation {
            headline,
            description,
            body,
            state_id,
            language_id,
        })
    }
}
