pub mod entity;
pub mod fields;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleTranslation, NewArticle, NewTranslation};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleBody, ArticleId, CategoryId, Headline, LanguageId, StateId, TemplateId, TranslationId,
};
